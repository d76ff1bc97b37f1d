use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

/// Moves `amount` lamports from the signing payer to `recipient`.
pub fn transfer_lamports<'info>(
    payer: &Signer<'info>,
    recipient: &SystemAccount<'info>,
    system_program: &Program<'info, System>,
    amount: u64,
) -> Result<()> {
    let accounts = Transfer {
        from: payer.to_account_info(),
        to: recipient.to_account_info(),
    };
    transfer(
        CpiContext::new(system_program.to_account_info(), accounts),
        amount,
    )
}
