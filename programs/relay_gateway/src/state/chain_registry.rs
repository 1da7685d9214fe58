use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GatewayError;

/// Stored fee for one message type
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeEntry {
    pub message_type: u8,
    pub fee: u64,
}

impl FeeEntry {
    pub const SIZE: usize = 1 + 8;
}

/// Configuration of a destination chain
///
/// `supported_types` is authoritative. `fees` may still hold entries for
/// types that were dropped by an update; those entries are unreachable
/// through [`DestinationChain::fee_for`] but are kept in storage.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct DestinationChain {
    pub chain_id: u32,

    /// Endpoint descriptor (e.g. an RPC URL) used by relayers
    pub endpoint: String,

    /// Target reference on the destination chain (e.g. a contract address)
    pub target: Vec<u8>,

    pub supported_types: Vec<u8>,

    pub fees: Vec<FeeEntry>,
}

impl DestinationChain {
    pub const SIZE: usize = 4                               // chain_id
        + 4 + MAX_ENDPOINT_SIZE                             // endpoint
        + 4 + MAX_TARGET_SIZE                               // target
        + 4 + MAX_SUPPORTED_TYPES                           // supported_types
        + 4 + (FeeEntry::SIZE * MAX_FEE_ENTRIES);           // fees

    pub fn supports(&self, message_type: u8) -> bool {
        self.supported_types.contains(&message_type)
    }

    fn stored_fee(&self, message_type: u8) -> Option<u64> {
        self.fees
            .iter()
            .find(|entry| entry.message_type == message_type)
            .map(|entry| entry.fee)
    }

    /// Fee for `message_type`, only if the type is currently supported
    pub fn fee_for(&self, message_type: u8) -> Result<u64> {
        require!(self.supports(message_type), GatewayError::TypeNotSupported);
        self.stored_fee(message_type)
            .ok_or_else(|| error!(GatewayError::TypeNotSupported))
    }

    /// Replace endpoint, target and supported types, upserting fees for the
    /// given types. Fees of types absent from `types` are left untouched.
    fn apply(&mut self, endpoint: String, target: Vec<u8>, types: &[u8], fees: &[u64]) -> Result<()> {
        let mut fee_table = self.fees.clone();
        let mut supported = Vec::with_capacity(types.len());

        for (&message_type, &fee) in types.iter().zip(fees) {
            if !supported.contains(&message_type) {
                supported.push(message_type);
            }
            match fee_table.iter_mut().find(|e| e.message_type == message_type) {
                Some(entry) => entry.fee = fee,
                None => fee_table.push(FeeEntry { message_type, fee }),
            }
        }

        require!(
            fee_table.len() <= MAX_FEE_ENTRIES,
            GatewayError::RegistryFull
        );

        self.endpoint = endpoint;
        self.target = target;
        self.supported_types = supported;
        self.fees = fee_table;
        Ok(())
    }
}

/// Shape and bound checks shared by add and update
pub fn validate_chain_params(endpoint: &str, target: &[u8], types: &[u8], fees: &[u64]) -> Result<()> {
    require!(types.len() == fees.len(), GatewayError::ValidationError);
    require!(
        types.len() <= MAX_SUPPORTED_TYPES,
        GatewayError::ValidationError
    );
    require!(
        endpoint.len() <= MAX_ENDPOINT_SIZE,
        GatewayError::ValidationError
    );
    require!(
        !target.is_empty() && target.len() <= MAX_TARGET_SIZE,
        GatewayError::ValidationError
    );
    Ok(())
}

/// Set of configured destination chains
///
/// Removal swaps the last chain into the vacated slot; enumeration order is
/// not stable across removals.
#[account]
pub struct ChainRegistry {
    pub chains: Vec<DestinationChain>,

    /// PDA bump seed
    pub bump: u8,
}

impl ChainRegistry {
    pub const SIZE: usize = 4 + (DestinationChain::SIZE * MAX_CHAINS)  // chains vec
        + 1;                                                           // bump

    pub fn find(&self, chain_id: u32) -> Option<&DestinationChain> {
        self.chains.iter().find(|c| c.chain_id == chain_id)
    }

    pub fn get(&self, chain_id: u32) -> Result<&DestinationChain> {
        self.find(chain_id)
            .ok_or_else(|| error!(GatewayError::NotFound))
    }

    fn position(&self, chain_id: u32) -> Option<usize> {
        self.chains.iter().position(|c| c.chain_id == chain_id)
    }

    pub fn add_chain(
        &mut self,
        chain_id: u32,
        endpoint: String,
        target: Vec<u8>,
        types: &[u8],
        fees: &[u64],
    ) -> Result<()> {
        require!(
            self.position(chain_id).is_none(),
            GatewayError::AlreadyExists
        );
        validate_chain_params(&endpoint, &target, types, fees)?;
        require!(self.chains.len() < MAX_CHAINS, GatewayError::RegistryFull);

        let mut chain = DestinationChain {
            chain_id,
            endpoint: String::new(),
            target: Vec::new(),
            supported_types: Vec::new(),
            fees: Vec::new(),
        };
        chain.apply(endpoint, target, types, fees)?;

        self.chains.push(chain);
        Ok(())
    }

    pub fn update_chain(
        &mut self,
        chain_id: u32,
        endpoint: String,
        target: Vec<u8>,
        types: &[u8],
        fees: &[u64],
    ) -> Result<()> {
        let index = self.position(chain_id).ok_or(GatewayError::NotFound)?;
        validate_chain_params(&endpoint, &target, types, fees)?;

        self.chains[index].apply(endpoint, target, types, fees)
    }

    pub fn remove_chain(&mut self, chain_id: u32) -> Result<DestinationChain> {
        let index = self.position(chain_id).ok_or(GatewayError::NotFound)?;
        Ok(self.chains.swap_remove(index))
    }

    pub fn fee_for(&self, chain_id: u32, message_type: u8) -> Result<u64> {
        self.get(chain_id)?.fee_for(message_type)
    }

    pub fn chain_ids(&self) -> Vec<u32> {
        self.chains.iter().map(|c| c.chain_id).collect()
    }
}
