use anchor_lang::prelude::*;

/// Event emitted when the gateway is initialized
#[event]
pub struct GatewayInitialized {
    pub owner: Pubkey,
    pub chain_id: u32,
}

#[event]
pub struct RelayerAdded {
    pub relayer: Pubkey,
}

#[event]
pub struct RelayerRemoved {
    pub relayer: Pubkey,
}

/// Event emitted when a destination chain is configured
#[event]
pub struct ChainAdded {
    pub chain_id: u32,
    pub endpoint: String,
    pub target: Vec<u8>,
    pub supported_types: Vec<u8>,
    pub fees: Vec<u64>,
}

#[event]
pub struct ChainUpdated {
    pub chain_id: u32,
    pub endpoint: String,
    pub target: Vec<u8>,
    pub supported_types: Vec<u8>,
    pub fees: Vec<u64>,
}

#[event]
pub struct ChainRemoved {
    pub chain_id: u32,
}

/// Event emitted when a message is sent to a destination chain
#[event]
pub struct MessageSent {
    pub dest_chain_id: u32,
    pub message_id: u64,
    pub sender: Pubkey,
    pub message_type: u8,
    pub payload: Vec<u8>,
    pub payment: u64,
    pub digest: [u8; 32],
}

/// Event emitted when value is locked for release on a destination chain
#[event]
pub struct ValueSent {
    pub dest_chain_id: u32,
    pub message_id: u64,
    pub sender: Pubkey,
    pub recipient: Vec<u8>,
    pub amount: u64,
}

/// Event emitted when an inbound message is admitted
#[event]
pub struct MessageDelivered {
    pub source_chain_id: u32,
    pub message_id: u64,
    pub source_sender: Vec<u8>,
    pub relayer: Pubkey,
    pub digest: [u8; 32],
}

/// Event emitted when inbound value is settled to a recipient
#[event]
pub struct ValueDelivered {
    pub source_chain_id: u32,
    pub message_id: u64,
    pub source_sender: Vec<u8>,
    pub recipient: Pubkey,
    pub amount: u64,
    pub relayer: Pubkey,
}

/// Event emitted once per settled batch covering `first_message_id..=last_message_id`
#[event]
pub struct ValueBatchDelivered {
    pub source_chain_id: u32,
    pub first_message_id: u64,
    pub last_message_id: u64,
    pub recipients: Vec<Pubkey>,
    pub amounts: Vec<u64>,
    pub total: u64,
    pub relayer: Pubkey,
}

#[event]
pub struct TreasuryFunded {
    pub funder: Pubkey,
    pub amount: u64,
    pub balance: u64,
}

#[event]
pub struct FundsWithdrawn {
    pub owner: Pubkey,
    pub amount: u64,
}
