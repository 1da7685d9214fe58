use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GatewayError;
use crate::events::MessageSent;
use crate::state::{ChainRegistry, Gateway, OutboundSequence, Treasury};
use crate::utils::{check_message_fee, collect, message_digest};

pub fn handler(
    ctx: Context<SendMessage>,
    chain_id: u32,
    message_type: u8,
    payload: Vec<u8>,
    payment: u64,
) -> Result<u64> {
    let fee = check_message_fee(&ctx.accounts.chain_registry, chain_id, message_type, payment)?;

    // DOS protection: validate payload size
    require!(
        payload.len() <= MAX_PAYLOAD_SIZE,
        GatewayError::ValidationError
    );

    collect(
        &ctx.accounts.sender,
        &ctx.accounts.treasury.to_account_info(),
        &ctx.accounts.system_program,
        fee,
    )?;
    ctx.accounts.treasury.credit(fee)?;

    let sequence = &mut ctx.accounts.outbound_sequence;
    if sequence.chain_id == 0 {
        sequence.chain_id = chain_id;
        sequence.bump = ctx.bumps.outbound_sequence;
    }
    let message_id = sequence.next()?;

    let sender = ctx.accounts.sender.key();
    let digest = message_digest(
        message_id,
        ctx.accounts.gateway.chain_id,
        chain_id,
        sender.as_ref(),
        &payload,
    )?;

    emit!(MessageSent {
        dest_chain_id: chain_id,
        message_id,
        sender,
        message_type,
        payload,
        payment: fee,
        digest,
    });

    msg!(
        "Message sent: id={}, dest_chain={}, type={}, fee={}",
        message_id,
        chain_id,
        message_type,
        fee
    );
    Ok(message_id)
}

#[derive(Accounts)]
#[instruction(chain_id: u32)]
pub struct SendMessage<'info> {
    #[account(
        seeds = [GATEWAY_SEED],
        bump = gateway.bump
    )]
    pub gateway: Account<'info, Gateway>,

    #[account(
        seeds = [CHAIN_REGISTRY_SEED],
        bump = chain_registry.bump
    )]
    pub chain_registry: Account<'info, ChainRegistry>,

    /// Write-locked for the whole instruction, serializing id assignment per chain
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
