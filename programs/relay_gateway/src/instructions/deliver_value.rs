use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GatewayError;
use crate::events::ValueDelivered;
use crate::state::{InboundSequence, RelayerRegistry, Treasury};
use crate::utils::{commit, pay_out, plan_single, ReentrancyGuard};

pub fn handler(
    ctx: Context<DeliverValue>,
    source_chain_id: u32,
    source_sender: Vec<u8>,
    recipient: Pubkey,
    source_message_id: u64,
    amount: u64,
) -> Result<()> {
    require!(source_chain_id != 0, GatewayError::ValidationError);
    require!(
        source_sender.len() <= MAX_ADDRESS_SIZE,
        GatewayError::ValidationError
    );

    let reserve = Rent::get()?.minimum_balance(8 + Treasury::SIZE);
    let treasury_info = ctx.accounts.treasury.to_account_info();
    let recipient_info = ctx.accounts.recipient.to_account_info();

    let sequence = &mut ctx.accounts.inbound_sequence;
    if sequence.source_chain_id == 0 {
        sequence.source_chain_id = source_chain_id;
        sequence.bump = ctx.bumps.inbound_sequence;
    }

    let mut treasury = ReentrancyGuard::enter(&mut ctx.accounts.treasury)?;
    let settlement = plan_single(sequence, &treasury, source_message_id, &recipient, amount)?;

    pay_out(&treasury_info, &recipient_info, &recipient, amount, reserve)?;
    commit(sequence, &mut treasury, &settlement)?;

    msg!(
        "Value delivered: id={} from chain {}, amount={}, treasury balance={}",
        source_message_id,
        source_chain_id,
        amount,
        treasury.balance
    );

    emit!(ValueDelivered {
        source_chain_id,
        message_id: source_message_id,
        source_sender,
        recipient,
        amount,
        relayer: ctx.accounts.relayer.key(),
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(source_chain_id: u32)]
pub struct DeliverValue<'info> {
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

    /// Write-locked together with the treasury: admission, balance check,
    /// debit and sequence advance form one critical section per source chain
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

    /// CHECK: only credited with lamports; the key is matched against the
    /// `recipient` argument before any transfer
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
