//! Secondary market: holders list their ticket, buyers pay the seller directly

use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::events::{ResaleCompleted, ResaleListed};
use crate::state::Registry;

use super::settlement::transfer_lamports;

#[derive(Accounts)]
pub struct ResaleTicketAccountConstraints<'info> {
    pub seller: Signer<'info>,
    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.administrator.as_ref()],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,
}

pub fn resale_ticket(context: Context<ResaleTicketAccountConstraints>, price: u64) -> Result<()> {
    let seller = context.accounts.seller.key();
    let ticket_id = context.accounts.registry.list_for_resale(seller, price)?;

    msg!(
        "Ticket {} listed by {} at {} lamports",
        ticket_id,
        seller,
        price
    );
    emit!(ResaleListed {
        registry: context.accounts.registry.key(),
        seller,
        ticket_id,
        price,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AcceptResaleAccountConstraints<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,
    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.administrator.as_ref()],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,
    /// Current holder of the listed ticket; receives the payment
    #[account(mut)]
    pub seller: SystemAccount<'info>,
    pub system_program: Program<'info, System>,
}

pub fn accept_resale(
    context: Context<AcceptResaleAccountConstraints>,
    ticket_id: u32,
    payment: u64,
) -> Result<()> {
    let buyer = context.accounts.buyer.key();
    let proceeds_to = context.accounts.seller.key();

    let settlement = context
        .accounts
        .registry
        .accept_resale(ticket_id, buyer, proceeds_to, payment)?;

    transfer_lamports(
        &context.accounts.buyer,
        &context.accounts.seller,
        &context.accounts.system_program,
        settlement.amount,
    )?;

    msg!(
        "Ticket {} resold by {} to {} for {} lamports",
        ticket_id,
        settlement.recipient,
        buyer,
        settlement.amount
    );
    emit!(ResaleCompleted {
        registry: context.accounts.registry.key(),
        seller: settlement.recipient,
        buyer,
        ticket_id,
        price: settlement.amount,
    });

    Ok(())
}
