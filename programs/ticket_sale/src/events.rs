//! Events emitted after each committed registry mutation, for off-chain indexing.

use anchor_lang::prelude::*;

#[event]
pub struct RegistryCreated {
    pub registry: Pubkey,
    pub administrator: Pubkey,
    pub total_tickets: u32,
    pub ticket_price: u64,
}

/// Emitted on a first sale; proceeds went to the administrator.
#[event]
pub struct TicketPurchased {
    pub registry: Pubkey,
    pub buyer: Pubkey,
    pub ticket_id: u32,
    pub price: u64,
}

#[event]
pub struct SwapOffered {
    pub registry: Pubkey,
    pub holder: Pubkey,
    pub ticket_id: u32,
}

/// Emitted when an open offer is taken. `offerer` now holds `returned_ticket`.
#[event]
pub struct TicketsSwapped {
    pub registry: Pubkey,
    pub offerer: Pubkey,
    pub accepter: Pubkey,
    pub offered_ticket: u32,
    pub returned_ticket: u32,
}

#[event]
pub struct ResaleListed {
    pub registry: Pubkey,
    pub seller: Pubkey,
    pub ticket_id: u32,
    pub price: u64,
}

/// Emitted when a listing is bought; proceeds went to the seller.
#[event]
pub struct ResaleCompleted {
    pub registry: Pubkey,
    pub seller: Pubkey,
    pub buyer: Pubkey,
    pub ticket_id: u32,
    pub price: u64,
}
