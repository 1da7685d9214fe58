use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GatewayError;
use crate::events::FundsWithdrawn;
use crate::state::{Gateway, Treasury};
use crate::utils::{pay_out, ReentrancyGuard};

/// Sweep the pooled treasury balance to the owner
pub fn withdraw_funds(ctx: Context<WithdrawFunds>) -> Result<()> {
    let reserve = Rent::get()?.minimum_balance(8 + Treasury::SIZE);
    let treasury_info = ctx.accounts.treasury.to_account_info();
    let owner_info = ctx.accounts.owner.to_account_info();
    let owner = ctx.accounts.owner.key();

    let mut treasury = ReentrancyGuard::enter(&mut ctx.accounts.treasury)?;
    let amount = treasury.balance;
    require!(amount > 0, GatewayError::InsufficientBalance);

    pay_out(&treasury_info, &owner_info, &owner, amount, reserve)?;
    treasury.debit(amount)?;

    emit!(FundsWithdrawn { owner, amount });

    msg!("Withdrew {} lamports to owner {}", amount, owner);
    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawFunds<'info> {
    #[account(
        seeds = [GATEWAY_SEED],
        bump = gateway.bump,
        constraint = gateway.is_owner(&owner.key()) @ GatewayError::Unauthorized
    )]
    pub gateway: Account<'info, Gateway>,

    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = treasury.bump
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub owner: Signer<'info>,
}
