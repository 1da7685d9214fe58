use anchor_lang::prelude::*;

use crate::errors::GatewayError;
use crate::state::{ChainRegistry, DestinationChain};

/// Resolve the destination chain for an outbound send
pub fn destination(registry: &ChainRegistry, chain_id: u32) -> Result<&DestinationChain> {
    registry
        .find(chain_id)
        .ok_or_else(|| error!(GatewayError::ChainNotSupported))
}

/// Validate an outbound message payment, which must equal the configured fee exactly
pub fn check_message_fee(
    registry: &ChainRegistry,
    chain_id: u32,
    message_type: u8,
    payment: u64,
) -> Result<u64> {
    let fee = destination(registry, chain_id)?.fee_for(message_type)?;
    require_eq!(payment, fee, GatewayError::IncorrectFee);
    Ok(fee)
}
