use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

use crate::constants::{MAX_ADDRESS_SIZE, MAX_PAYLOAD_SIZE};
use crate::errors::GatewayError;

/// Digest identifying a relayed message
///
/// Encoding: message id (u64 LE), source chain id (u32 LE), destination
/// chain id (u32 LE), then sender and payload each as u32 length + bytes.
pub fn message_digest(
    message_id: u64,
    source_chain_id: u32,
    dest_chain_id: u32,
    sender: &[u8],
    payload: &[u8],
) -> Result<[u8; 32]> {
    require!(sender.len() <= MAX_ADDRESS_SIZE, GatewayError::ValidationError);
    require!(payload.len() <= MAX_PAYLOAD_SIZE, GatewayError::ValidationError);

    let mut encoded = Vec::with_capacity(24 + sender.len() + payload.len());
    encoded.extend_from_slice(&message_id.to_le_bytes());
    encoded.extend_from_slice(&source_chain_id.to_le_bytes());
    encoded.extend_from_slice(&dest_chain_id.to_le_bytes());
    encode_length_prefixed(&mut encoded, sender);
    encode_length_prefixed(&mut encoded, payload);

    Ok(keccak::hash(&encoded).to_bytes())
}

/// Encode data with length prefix (u32 length + data bytes)
fn encode_length_prefixed(buffer: &mut Vec<u8>, data: &[u8]) {
    buffer.extend_from_slice(&(data.len() as u32).to_le_bytes());
    buffer.extend_from_slice(data);
}
