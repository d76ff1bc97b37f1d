//! Read-only views over the registry. These never mutate and never fail once
//! the registry account itself has loaded.

use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::state::Registry;

#[derive(Accounts)]
pub struct ReadRegistryAccountConstraints<'info> {
    #[account(
        seeds = [REGISTRY_SEED, registry.administrator.as_ref()],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,
}

pub fn get_ticket_of(
    context: Context<ReadRegistryAccountConstraints>,
    account: Pubkey,
) -> Result<Option<u32>> {
    Ok(context.accounts.registry.ticket_of(&account))
}

pub fn check_resale(context: Context<ReadRegistryAccountConstraints>) -> Result<Vec<u32>> {
    Ok(context.accounts.registry.listed_tickets())
}

pub fn swap_offers(
    context: Context<ReadRegistryAccountConstraints>,
    ticket_id: u32,
) -> Result<Option<u32>> {
    Ok(context.accounts.registry.swap_offer(ticket_id))
}

pub fn registry_owner(context: Context<ReadRegistryAccountConstraints>) -> Result<Pubkey> {
    Ok(context.accounts.registry.administrator)
}
