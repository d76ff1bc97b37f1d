#![allow(unexpected_cfgs)]
// See https://solana.stackexchange.com/questions/17777/unexpected-cfg-condition-value-solana)

pub mod constants;
pub mod error;
pub mod events;
pub mod handlers;
pub mod state;

use anchor_lang::prelude::*;
use handlers::*;

declare_id!("59Aif93u15PsRtUYPqeS8ZPRfpgfN8nHXnQJu2AaD8JP");

#[program]
pub mod ticket_sale {
    use super::*;

    /// Create a registry of `total_tickets` tickets sold at `ticket_price` lamports.
    pub fn create_registry(
        context: Context<CreateRegistryAccountConstraints>,
        total_tickets: u32,
        ticket_price: u64,
    ) -> Result<()> {
        handlers::sale_registry::create_registry(context, total_tickets, ticket_price)
    }

    /// Buy an unsold ticket; `payment` must equal the ticket price.
    pub fn buy_ticket(
        context: Context<BuyTicketAccountConstraints>,
        ticket_id: u32,
        payment: u64,
    ) -> Result<()> {
        handlers::sale_ticket::buy_ticket(context, ticket_id, payment)
    }

    /// Offer the caller's ticket to any other holder for a swap.
    pub fn offer_swap(
        context: Context<OfferSwapAccountConstraints>,
        ticket_id: u32,
    ) -> Result<()> {
        handlers::sale_swap::offer_swap(context, ticket_id)
    }

    /// Trade the caller's ticket for an offered one.
    pub fn accept_swap(
        context: Context<AcceptSwapAccountConstraints>,
        ticket_id: u32,
    ) -> Result<()> {
        handlers::sale_swap::accept_swap(context, ticket_id)
    }

    /// List the caller's ticket for resale at `price` lamports.
    pub fn resale_ticket(
        context: Context<ResaleTicketAccountConstraints>,
        price: u64,
    ) -> Result<()> {
        handlers::sale_resale::resale_ticket(context, price)
    }

    /// Buy a listed ticket; `payment` must equal the listed price.
    pub fn accept_resale(
        context: Context<AcceptResaleAccountConstraints>,
        ticket_id: u32,
        payment: u64,
    ) -> Result<()> {
        handlers::sale_resale::accept_resale(context, ticket_id, payment)
    }

    pub fn get_ticket_of(
        context: Context<ReadRegistryAccountConstraints>,
        account: Pubkey,
    ) -> Result<Option<u32>> {
        handlers::sale_query::get_ticket_of(context, account)
    }

    /// Listed ticket ids in listing order.
    pub fn check_resale(context: Context<ReadRegistryAccountConstraints>) -> Result<Vec<u32>> {
        handlers::sale_query::check_resale(context)
    }

    pub fn swap_offers(
        context: Context<ReadRegistryAccountConstraints>,
        ticket_id: u32,
    ) -> Result<Option<u32>> {
        handlers::sale_query::swap_offers(context, ticket_id)
    }

    pub fn owner(context: Context<ReadRegistryAccountConstraints>) -> Result<Pubkey> {
        handlers::sale_query::registry_owner(context)
    }
}
