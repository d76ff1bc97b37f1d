//! Holder-to-holder ticket swaps

use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::events::{SwapOffered, TicketsSwapped};
use crate::state::Registry;

#[derive(Accounts)]
pub struct OfferSwapAccountConstraints<'info> {
    pub holder: Signer<'info>,
    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.administrator.as_ref()],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,
}

pub fn offer_swap(context: Context<OfferSwapAccountConstraints>, ticket_id: u32) -> Result<()> {
    let holder = context.accounts.holder.key();
    context.accounts.registry.offer_swap(ticket_id, holder)?;

    msg!("Ticket {} offered for swap by {}", ticket_id, holder);
    emit!(SwapOffered {
        registry: context.accounts.registry.key(),
        holder,
        ticket_id,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AcceptSwapAccountConstraints<'info> {
    pub accepter: Signer<'info>,
    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.administrator.as_ref()],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,
}

pub fn accept_swap(context: Context<AcceptSwapAccountConstraints>, ticket_id: u32) -> Result<()> {
    let accepter = context.accounts.accepter.key();
    let outcome = context.accounts.registry.accept_swap(ticket_id, accepter)?;

    msg!(
        "Ticket {} swapped for ticket {} between {} and {}",
        ticket_id,
        outcome.returned_ticket,
        outcome.offerer,
        accepter
    );
    emit!(TicketsSwapped {
        registry: context.accounts.registry.key(),
        offerer: outcome.offerer,
        accepter,
        offered_ticket: ticket_id,
        returned_ticket: outcome.returned_ticket,
    });

    Ok(())
}
