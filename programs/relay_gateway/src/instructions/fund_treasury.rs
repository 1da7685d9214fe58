use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GatewayError;
use crate::events::TreasuryFunded;
use crate::state::Treasury;
use crate::utils::collect;

pub fn handler(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
    require!(amount > 0, GatewayError::ValidationError);

    collect(
        &ctx.accounts.funder,
        &ctx.accounts.treasury.to_account_info(),
        &ctx.accounts.system_program,
        amount,
    )?;

    let treasury = &mut ctx.accounts.treasury;
    treasury.credit(amount)?;

    emit!(TreasuryFunded {
        funder: ctx.accounts.funder.key(),
        amount,
        balance: treasury.balance,
    });

    msg!("Treasury funded with {} lamports, balance={}", amount, treasury.balance);
    Ok(())
}

#[derive(Accounts)]
pub struct FundTreasury<'info> {
    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = treasury.bump
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub funder: Signer<'info>,

    pub system_program: Program<'info, System>,
}
