use anchor_lang::prelude::*;

use crate::constants::MAX_BATCH_SIZE;
use crate::errors::GatewayError;
use crate::state::{InboundSequence, Treasury};

/// A validated settlement covering `first_message_id..=last_message_id`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub first_message_id: u64,
    pub last_message_id: u64,
    pub total: u64,
}

/// Validate a single delivery without mutating anything
///
/// Checks run in order: sequence admission, amount, balance, recipient.
pub fn plan_single(
    inbound: &InboundSequence,
    treasury: &Treasury,
    message_id: u64,
    recipient: &Pubkey,
    amount: u64,
) -> Result<Settlement> {
    inbound.check(message_id)?;
    require!(amount > 0, GatewayError::ValidationError);
    treasury.ensure_covers(amount)?;
    require!(*recipient != Pubkey::default(), GatewayError::ValidationError);

    Ok(Settlement {
        first_message_id: message_id,
        last_message_id: message_id,
        total: amount,
    })
}

/// Validate a batch delivery without mutating anything
///
/// Only `first_message_id` is checked for admission; the batch then claims
/// the whole range `first_message_id..first_message_id + len`. The balance
/// is read once, against the sum of all amounts.
pub fn plan_batch(
    inbound: &InboundSequence,
    treasury: &Treasury,
    first_message_id: u64,
    recipients: &[Pubkey],
    amounts: &[u64],
) -> Result<Settlement> {
    require!(
        !recipients.is_empty() && recipients.len() == amounts.len(),
        GatewayError::ValidationError
    );
    require!(
        recipients.len() <= MAX_BATCH_SIZE,
        GatewayError::ValidationError
    );

    inbound.check(first_message_id)?;

    require!(amounts.iter().all(|&a| a > 0), GatewayError::ValidationError);
    require!(
        recipients.iter().all(|r| *r != Pubkey::default()),
        GatewayError::ValidationError
    );

    let total = amounts
        .iter()
        .try_fold(0u64, |sum, &a| sum.checked_add(a))
        .ok_or_else(|| error!(GatewayError::InsufficientBalance))?;
    let balance = treasury.balance;
    require!(total <= balance, GatewayError::InsufficientBalance);

    let last_message_id = first_message_id
        .checked_add(recipients.len() as u64 - 1)
        .ok_or_else(|| error!(GatewayError::ValidationError))?;

    Ok(Settlement {
        first_message_id,
        last_message_id,
        total,
    })
}

/// Apply a planned settlement to the sequence and treasury records
pub fn commit(
    inbound: &mut InboundSequence,
    treasury: &mut Treasury,
    settlement: &Settlement,
) -> Result<()> {
    inbound.check(settlement.first_message_id)?;
    treasury.ensure_covers(settlement.total)?;

    inbound.advance_to(settlement.last_message_id)?;
    treasury.debit(settlement.total)
}
