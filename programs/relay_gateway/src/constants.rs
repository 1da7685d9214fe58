/// Constants for the relay gateway
pub const GATEWAY_SEED: &[u8] = b"gateway";
pub const RELAYER_REGISTRY_SEED: &[u8] = b"relayer_registry";
pub const CHAIN_REGISTRY_SEED: &[u8] = b"chain_registry";
pub const TREASURY_SEED: &[u8] = b"treasury";
pub const OUTBOUND_SEED: &[u8] = b"outbound";
pub const INBOUND_SEED: &[u8] = b"inbound";

/// Maximum sizes for DOS protection
pub const MAX_ADDRESS_SIZE: usize = 64;
pub const MAX_PAYLOAD_SIZE: usize = 1024;
pub const MAX_ENDPOINT_SIZE: usize = 96;
pub const MAX_TARGET_SIZE: usize = 32;

/// Registry capacities, fixed at account creation
///
/// Full listings must fit the 1024-byte return data of a view.
pub const MAX_RELAYERS: usize = 31;
pub const MAX_CHAINS: usize = 12;
pub const MAX_SUPPORTED_TYPES: usize = 8;
pub const MAX_FEE_ENTRIES: usize = 16;

/// Settlement limits
pub const MAX_BATCH_SIZE: usize = 16;
