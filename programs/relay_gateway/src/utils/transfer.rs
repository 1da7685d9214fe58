use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::GatewayError;

/// Move `amount` lamports from a payer into the treasury through the system program
pub fn collect<'info>(
    payer: &Signer<'info>,
    treasury: &AccountInfo<'info>,
    system_program: &Program<'info, System>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    system_program::transfer(
        CpiContext::new(
            system_program.to_account_info(),
            system_program::Transfer {
                from: payer.to_account_info(),
                to: treasury.clone(),
            },
        ),
        amount,
    )
}

/// Checks one payout without moving lamports
///
/// `reserve` is the part of the treasury's lamports that must stay behind
/// (its rent-exempt minimum).
fn check_payout(
    treasury: &AccountInfo,
    recipient: &AccountInfo,
    expected: &Pubkey,
    amount: u64,
    available: u64,
) -> Result<u64> {
    require_keys_eq!(*recipient.key, *expected, GatewayError::TransferFailed);
    require!(recipient.is_writable, GatewayError::TransferFailed);
    require!(!recipient.executable, GatewayError::TransferFailed);
    require_keys_neq!(*recipient.key, *treasury.key, GatewayError::TransferFailed);

    available
        .checked_sub(amount)
        .ok_or_else(|| error!(GatewayError::TransferFailed))
}

fn move_lamports(treasury: &AccountInfo, recipient: &AccountInfo, amount: u64) -> Result<()> {
    let treasury_lamports = treasury
        .lamports()
        .checked_sub(amount)
        .ok_or_else(|| error!(GatewayError::TransferFailed))?;
    let recipient_lamports = recipient
        .lamports()
        .checked_add(amount)
        .ok_or_else(|| error!(GatewayError::TransferFailed))?;

    **treasury
        .try_borrow_mut_lamports()
        .map_err(|_| error!(GatewayError::TransferFailed))? = treasury_lamports;
    **recipient
        .try_borrow_mut_lamports()
        .map_err(|_| error!(GatewayError::TransferFailed))? = recipient_lamports;
    Ok(())
}

fn spendable(treasury: &AccountInfo, reserve: u64) -> u64 {
    treasury.lamports().saturating_sub(reserve)
}

/// Pay `amount` from the program-owned treasury to `recipient`
pub fn pay_out(
    treasury: &AccountInfo,
    recipient: &AccountInfo,
    expected: &Pubkey,
    amount: u64,
    reserve: u64,
) -> Result<()> {
    check_payout(treasury, recipient, expected, amount, spendable(treasury, reserve))?;
    move_lamports(treasury, recipient, amount)
}

/// Pay every `(recipients[i], amounts[i])` in order, or nothing at all
///
/// All payouts are checked against `accounts` before the first lamport moves.
pub fn pay_out_batch(
    treasury: &AccountInfo,
    accounts: &[AccountInfo],
    recipients: &[Pubkey],
    amounts: &[u64],
    reserve: u64,
) -> Result<()> {
    require!(
        accounts.len() >= recipients.len() && recipients.len() == amounts.len(),
        GatewayError::TransferFailed
    );

    let mut available = spendable(treasury, reserve);
    for ((account, recipient), &amount) in accounts.iter().zip(recipients).zip(amounts) {
        available = check_payout(treasury, account, recipient, amount, available)?;
    }

    for (account, &amount) in accounts.iter().zip(amounts) {
        move_lamports(treasury, account, amount)?;
    }
    Ok(())
}
