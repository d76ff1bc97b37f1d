//! First-sale ticket purchase

use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::events::TicketPurchased;
use crate::state::Registry;

use super::settlement::transfer_lamports;

#[derive(Accounts)]
pub struct BuyTicketAccountConstraints<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,
    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.administrator.as_ref()],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,
    /// Receives the sale proceeds; must be the registry administrator
    #[account(mut)]
    pub administrator: SystemAccount<'info>,
    pub system_program: Program<'info, System>,
}

pub fn buy_ticket(
    context: Context<BuyTicketAccountConstraints>,
    ticket_id: u32,
    payment: u64,
) -> Result<()> {
    let buyer = context.accounts.buyer.key();
    let proceeds_to = context.accounts.administrator.key();

    let settlement = context
        .accounts
        .registry
        .buy(ticket_id, buyer, proceeds_to, payment)?;

    transfer_lamports(
        &context.accounts.buyer,
        &context.accounts.administrator,
        &context.accounts.system_program,
        settlement.amount,
    )?;

    msg!(
        "Ticket {} sold to {} for {} lamports",
        ticket_id,
        buyer,
        settlement.amount
    );
    emit!(TicketPurchased {
        registry: context.accounts.registry.key(),
        buyer,
        ticket_id,
        price: settlement.amount,
    });

    Ok(())
}
