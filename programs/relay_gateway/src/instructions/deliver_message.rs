use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GatewayError;
use crate::events::MessageDelivered;
use crate::state::{Gateway, InboundSequence, RelayerRegistry};
use crate::utils::message_digest;

pub fn handler(
    ctx: Context<DeliverMessage>,
    source_chain_id: u32,
    source_sender: Vec<u8>,
    source_message_id: u64,
    payload: Vec<u8>,
) -> Result<()> {
    require!(source_chain_id != 0, GatewayError::ValidationError);

    let sequence = &mut ctx.accounts.inbound_sequence;
    if sequence.source_chain_id == 0 {
        sequence.source_chain_id = source_chain_id;
        sequence.bump = ctx.bumps.inbound_sequence;
    }
    sequence.check(source_message_id)?;

    // Also bounds sender and payload sizes
    let digest = message_digest(
        source_message_id,
        source_chain_id,
        ctx.accounts.gateway.chain_id,
        &source_sender,
        &payload,
    )?;

    sequence.advance_to(source_message_id)?;

    emit!(MessageDelivered {
        source_chain_id,
        message_id: source_message_id,
        source_sender,
        relayer: ctx.accounts.relayer.key(),
        digest,
    });

    msg!(
        "Message delivered: id={} from chain {}",
        source_message_id,
        source_chain_id
    );
    Ok(())
}

#[derive(Accounts)]
#[instruction(source_chain_id: u32)]
pub struct DeliverMessage<'info> {
    #[account(
        seeds = [GATEWAY_SEED],
        bump = gateway.bump
    )]
    pub gateway: Account<'info, Gateway>,

    #[account(
        seeds = [RELAYER_REGISTRY_SEED],
        bump = relayer_registry.bump
    )]
    pub relayer_registry: Account<'info, RelayerRegistry>,

    #[account(
        mut,
        constraint = relayer_registry.is_active(&relayer.key()) @ GatewayError::Unauthorized
    )]
    pub relayer: Signer<'info>,

    /// Write-locked for the whole instruction, serializing deliveries per source chain
    #[account(
        init_if_needed,
        payer = relayer,
        space = 8 + InboundSequence::SIZE,
        seeds = [INBOUND_SEED, source_chain_id.to_le_bytes().as_ref()],
        bump
    )]
    pub inbound_sequence: Account<'info, InboundSequence>,

    pub system_program: Program<'info, System>,
}
