use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GatewayError;
use crate::events::ValueBatchDelivered;
use crate::state::{InboundSequence, RelayerRegistry, Treasury};
use crate::utils::{commit, pay_out_batch, plan_batch, ReentrancyGuard};

/// Settle one contiguous id range to many recipients
///
/// Recipient accounts are passed as remaining accounts, in the same order as
/// `recipients`.
pub fn handler(
    ctx: Context<DeliverValueBatch>,
    source_chain_id: u32,
    first_message_id: u64,
    recipients: Vec<Pubkey>,
    amounts: Vec<u64>,
) -> Result<()> {
    require!(source_chain_id != 0, GatewayError::ValidationError);

    let reserve = Rent::get()?.minimum_balance(8 + Treasury::SIZE);
    let treasury_info = ctx.accounts.treasury.to_account_info();

    let sequence = &mut ctx.accounts.inbound_sequence;
    if sequence.source_chain_id == 0 {
        sequence.source_chain_id = source_chain_id;
        sequence.bump = ctx.bumps.inbound_sequence;
    }

    let mut treasury = ReentrancyGuard::enter(&mut ctx.accounts.treasury)?;
    let settlement = plan_batch(sequence, &treasury, first_message_id, &recipients, &amounts)?;

    pay_out_batch(
        &treasury_info,
        ctx.remaining_accounts,
        &recipients,
        &amounts,
        reserve,
    )?;
    commit(sequence, &mut treasury, &settlement)?;

    msg!(
        "Batch delivered: ids {}..={} from chain {}, {} transfers, total={}",
        settlement.first_message_id,
        settlement.last_message_id,
        source_chain_id,
        recipients.len(),
        settlement.total
    );

    emit!(ValueBatchDelivered {
        source_chain_id,
        first_message_id: settlement.first_message_id,
        last_message_id: settlement.last_message_id,
        recipients,
        amounts,
        total: settlement.total,
        relayer: ctx.accounts.relayer.key(),
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(source_chain_id: u32)]
pub struct DeliverValueBatch<'info> {
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

    #[account(
        init_if_needed,
        payer = relayer,
        space = 8 + InboundSequence::SIZE,
        seeds = [INBOUND_SEED, source_chain_id.to_le_bytes().as_ref()],
        bump
    )]
    pub inbound_sequence: Account<'info, InboundSequence>,

    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = treasury.bump
    )]
    pub treasury: Account<'info, Treasury>,

    pub system_program: Program<'info, System>,
}
