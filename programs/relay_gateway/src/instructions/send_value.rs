use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GatewayError;
use crate::events::ValueSent;
use crate::state::{ChainRegistry, OutboundSequence, Treasury};
use crate::utils::{collect, destination};

/// Lock `amount` in the treasury for release to `recipient` on the destination chain
pub fn handler(
    ctx: Context<SendValue>,
    chain_id: u32,
    recipient: Vec<u8>,
    amount: u64,
) -> Result<u64> {
    destination(&ctx.accounts.chain_registry, chain_id)?;

    require!(amount > 0, GatewayError::ValidationError);
    require!(
        !recipient.is_empty() && recipient.len() <= MAX_ADDRESS_SIZE,
        GatewayError::ValidationError
    );

    collect(
        &ctx.accounts.sender,
        &ctx.accounts.treasury.to_account_info(),
        &ctx.accounts.system_program,
        amount,
    )?;
    ctx.accounts.treasury.credit(amount)?;

    let sequence = &mut ctx.accounts.outbound_sequence;
    if sequence.chain_id == 0 {
        sequence.chain_id = chain_id;
        sequence.bump = ctx.bumps.outbound_sequence;
    }
    let message_id = sequence.next()?;
    let sender = ctx.accounts.sender.key();

    msg!(
        "Value sent: id={}, dest_chain={}, amount={}",
        message_id,
        chain_id,
        amount
    );

    emit!(ValueSent {
        dest_chain_id: chain_id,
        message_id,
        sender,
        recipient,
        amount,
    });
    Ok(message_id)
}

#[derive(Accounts)]
#[instruction(chain_id: u32)]
pub struct SendValue<'info> {
    #[account(
        seeds = [CHAIN_REGISTRY_SEED],
        bump = chain_registry.bump
    )]
    pub chain_registry: Account<'info, ChainRegistry>,

    #[account(
        init_if_needed,
        payer = sender,
        space = 8 + OutboundSequence::SIZE,
        seeds = [OUTBOUND_SEED, chain_id.to_le_bytes().as_ref()],
        bump
    )]
    pub outbound_sequence: Account<'info, OutboundSequence>,

    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = treasury.bump
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub sender: Signer<'info>,

    pub system_program: Program<'info, System>,
}
