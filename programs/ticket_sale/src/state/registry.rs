//! Ticket sale registry account and its ownership state machine.
//!
//! Every mutating operation checks all of its preconditions before touching
//! any field and only then applies the whole transition, so a rejected call
//! leaves the account exactly as it was. Lamport settlement is left to the
//! instruction handler through the returned [`Payment`].

use anchor_lang::prelude::*;

use crate::constants::MAX_TICKETS;
use crate::error::ErrorCode;

/// Per-ticket state, stored at index `ticket_id - 1`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketSlot {
    /// Current holder, `None` while unsold
    pub owner: Option<Pubkey>,
    /// Holder has an open swap offer on this ticket
    pub swap_open: bool,
    /// Asking price in lamports while listed for resale
    pub resale_price: Option<u64>,
}

impl TicketSlot {
    pub const INIT_SPACE: usize = (1 + 32) + 1 + (1 + 8);
}

/// Reverse index entry: `holder` owns `ticket_id`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Holding {
    pub holder: Pubkey,
    pub ticket_id: u32,
}

impl Holding {
    pub const INIT_SPACE: usize = 32 + 4;
}

/// Lamports the caller must move to `recipient` for the transition to stand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payment {
    pub recipient: Pubkey,
    pub amount: u64,
}

/// Result of a completed swap, seen from the accepting side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapOutcome {
    /// Holder of the offered ticket, now holding `returned_ticket`
    pub offerer: Pubkey,
    pub returned_ticket: u32,
}

#[account]
#[derive(Debug)]
pub struct Registry {
    /// The account that created the registry and receives first-sale proceeds
    pub administrator: Pubkey,
    /// Fixed supply; ticket ids run from 1 to `total_tickets`
    pub total_tickets: u32,
    /// First-sale price in lamports
    pub ticket_price: u64,
    /// Number of first sales so far
    pub tickets_sold: u32,
    /// PDA bump
    pub bump: u8,
    /// Forward ownership map with swap and resale state
    pub tickets: Vec<TicketSlot>,
    /// Reverse ownership index, kept sorted by holder
    pub holders: Vec<Holding>,
    /// Listed ticket ids in the order they were listed
    pub resale_queue: Vec<u32>,
}

impl Registry {
    /// Account space (without discriminator) for a registry of `total_tickets`.
    /// Capped at `MAX_TICKETS`; larger supplies are rejected by [`Registry::new`].
    pub fn space(total_tickets: u32) -> usize {
        let tickets = total_tickets.min(MAX_TICKETS) as usize;
        let config = 32 + 4 + 8 + 4 + 1;
        let slots = 4 + tickets * TicketSlot::INIT_SPACE;
        let holders = 4 + tickets * Holding::INIT_SPACE;
        let resale_queue = 4 + tickets * 4;
        config + slots + holders + resale_queue
    }

    pub fn new(
        administrator: Pubkey,
        total_tickets: u32,
        ticket_price: u64,
        bump: u8,
    ) -> Result<Self> {
        require!(
            total_tickets > 0 && total_tickets <= MAX_TICKETS && ticket_price > 0,
            ErrorCode::InvalidConfiguration
        );

        Ok(Self {
            administrator,
            total_tickets,
            ticket_price,
            tickets_sold: 0,
            bump,
            tickets: vec![TicketSlot::default(); total_tickets as usize],
            holders: Vec::new(),
            resale_queue: Vec::new(),
        })
    }

    /// The ticket `account` currently holds.
    pub fn ticket_of(&self, account: &Pubkey) -> Option<u32> {
        self.holding_index(account)
            .ok()
            .map(|index| self.holders[index].ticket_id)
    }

    pub fn owner_of(&self, ticket_id: u32) -> Option<Pubkey> {
        self.slot(ticket_id).and_then(|slot| slot.owner)
    }

    /// The ticket sought in exchange for `ticket_id`. An open offer seeks any
    /// other holder's ticket and reports its own id.
    pub fn swap_offer(&self, ticket_id: u32) -> Option<u32> {
        self.slot(ticket_id)
            .filter(|slot| slot.swap_open)
            .map(|_| ticket_id)
    }

    pub fn resale_price(&self, ticket_id: u32) -> Option<u64> {
        self.slot(ticket_id).and_then(|slot| slot.resale_price)
    }

    pub fn listed_tickets(&self) -> Vec<u32> {
        self.resale_queue.clone()
    }

    /// First sale of an unsold ticket at the fixed price. `proceeds_to` is the
    /// account the caller will pay and must be the administrator.
    pub fn buy(
        &mut self,
        ticket_id: u32,
        buyer: Pubkey,
        proceeds_to: Pubkey,
        payment: u64,
    ) -> Result<Payment> {
        let slot = self
            .slot(ticket_id)
            .ok_or_else(|| error!(ErrorCode::InvalidTicket))?;
        require!(slot.owner.is_none(), ErrorCode::AlreadySold);
        require!(
            self.ticket_of(&buyer).is_none(),
            ErrorCode::AlreadyOwnsTicket
        );
        require!(payment == self.ticket_price, ErrorCode::IncorrectPayment);
        require_keys_eq!(
            proceeds_to,
            self.administrator,
            ErrorCode::AdministratorMismatch
        );

        self.assign(ticket_id, buyer);
        self.tickets_sold += 1;

        Ok(Payment {
            recipient: self.administrator,
            amount: payment,
        })
    }

    /// Opens a swap offer on the holder's ticket, withdrawing any resale listing.
    pub fn offer_swap(&mut self, ticket_id: u32, holder: Pubkey) -> Result<()> {
        require!(
            self.owner_of(ticket_id) == Some(holder),
            ErrorCode::NotOwner
        );

        self.clear_market(ticket_id);
        self.tickets[Self::index(ticket_id)].swap_open = true;
        Ok(())
    }

    /// Trades the accepter's ticket for the offered one.
    pub fn accept_swap(&mut self, ticket_id: u32, accepter: Pubkey) -> Result<SwapOutcome> {
        let offerer = match self.slot(ticket_id) {
            Some(TicketSlot {
                owner: Some(owner),
                swap_open: true,
                ..
            }) => *owner,
            _ => return err!(ErrorCode::NoOfferExists),
        };
        let returned_ticket = self
            .ticket_of(&accepter)
            .ok_or_else(|| error!(ErrorCode::NotATicketHolder))?;
        require!(returned_ticket != ticket_id, ErrorCode::SelfSwap);

        // Both tickets change hands, so neither may keep a stale offer or listing.
        self.clear_market(ticket_id);
        self.clear_market(returned_ticket);
        self.assign(ticket_id, accepter);
        self.assign(returned_ticket, offerer);

        Ok(SwapOutcome {
            offerer,
            returned_ticket,
        })
    }

    /// Lists the seller's ticket at `price`, replacing any earlier listing
    /// (which keeps its queue position) and withdrawing any swap offer.
    pub fn list_for_resale(&mut self, seller: Pubkey, price: u64) -> Result<u32> {
        let ticket_id = self
            .ticket_of(&seller)
            .ok_or_else(|| error!(ErrorCode::NotATicketHolder))?;
        require!(price > 0, ErrorCode::InvalidPrice);

        let slot = &mut self.tickets[Self::index(ticket_id)];
        slot.swap_open = false;
        if slot.resale_price.replace(price).is_none() {
            self.resale_queue.push(ticket_id);
        }
        Ok(ticket_id)
    }

    /// Buys a listed ticket from its holder at the listed price. `proceeds_to`
    /// is the account the caller will pay and must be the current holder.
    pub fn accept_resale(
        &mut self,
        ticket_id: u32,
        buyer: Pubkey,
        proceeds_to: Pubkey,
        payment: u64,
    ) -> Result<Payment> {
        let (seller, price) = match self.slot(ticket_id) {
            Some(TicketSlot {
                owner: Some(owner),
                resale_price: Some(price),
                ..
            }) => (*owner, *price),
            _ => return err!(ErrorCode::NoListingExists),
        };
        require!(
            self.ticket_of(&buyer).is_none(),
            ErrorCode::AlreadyOwnsTicket
        );
        require!(payment == price, ErrorCode::IncorrectPayment);
        require_keys_eq!(proceeds_to, seller, ErrorCode::SellerMismatch);

        self.clear_market(ticket_id);
        self.release(&seller);
        self.assign(ticket_id, buyer);

        Ok(Payment {
            recipient: seller,
            amount: price,
        })
    }

    fn index(ticket_id: u32) -> usize {
        (ticket_id - 1) as usize
    }

    fn slot(&self, ticket_id: u32) -> Option<&TicketSlot> {
        let index = ticket_id.checked_sub(1)? as usize;
        self.tickets.get(index)
    }

    fn holding_index(&self, holder: &Pubkey) -> std::result::Result<usize, usize> {
        self.holders
            .binary_search_by(|holding| holding.holder.cmp(holder))
    }

    /// Points `ticket_id` at `holder` in both directions.
    fn assign(&mut self, ticket_id: u32, holder: Pubkey) {
        self.tickets[Self::index(ticket_id)].owner = Some(holder);
        match self.holding_index(&holder) {
            Ok(index) => self.holders[index].ticket_id = ticket_id,
            Err(index) => self
                .holders
                .insert(index, Holding { holder, ticket_id }),
        }
    }

    fn release(&mut self, holder: &Pubkey) {
        if let Ok(index) = self.holding_index(holder) {
            self.holders.remove(index);
        }
    }

    fn clear_market(&mut self, ticket_id: u32) {
        let slot = &mut self.tickets[Self::index(ticket_id)];
        slot.swap_open = false;
        if slot.resale_price.take().is_some() {
            self.resale_queue.retain(|listed| *listed != ticket_id);
        }
    }
}
