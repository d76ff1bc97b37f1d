//! Ticket sale registry creation

use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::events::RegistryCreated;
use crate::state::Registry;

#[derive(Accounts)]
#[instruction(total_tickets: u32)]
pub struct CreateRegistryAccountConstraints<'info> {
    #[account(mut)]
    pub administrator: Signer<'info>,
    #[account(
        init,
        payer = administrator,
        space = Registry::DISCRIMINATOR.len() + Registry::space(total_tickets),
        seeds = [REGISTRY_SEED, administrator.key().as_ref()],
        bump
    )]
    pub registry: Account<'info, Registry>,
    pub system_program: Program<'info, System>,
}

pub fn create_registry(
    context: Context<CreateRegistryAccountConstraints>,
    total_tickets: u32,
    ticket_price: u64,
) -> Result<()> {
    let administrator = context.accounts.administrator.key();
    let registry = Registry::new(
        administrator,
        total_tickets,
        ticket_price,
        context.bumps.registry,
    )?;
    context.accounts.registry.set_inner(registry);

    msg!(
        "Registry created: {} tickets at {} lamports",
        total_tickets,
        ticket_price
    );
    emit!(RegistryCreated {
        registry: context.accounts.registry.key(),
        administrator,
        total_tickets,
        ticket_price,
    });

    Ok(())
}
