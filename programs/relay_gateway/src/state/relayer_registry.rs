use anchor_lang::prelude::*;

use crate::constants::MAX_RELAYERS;
use crate::errors::GatewayError;

/// Whitelist of relayers allowed to submit inbound deliveries
///
/// Membership is the active flag. Removal swaps the last entry into the
/// vacated slot, so enumeration order is not stable across removals.
#[account]
pub struct RelayerRegistry {
    pub relayers: Vec<Pubkey>,

    /// PDA bump seed
    pub bump: u8,
}

impl RelayerRegistry {
    pub const SIZE: usize = 4 + (32 * MAX_RELAYERS)  // relayers vec
        + 1;                                         // bump

    pub fn is_active(&self, relayer: &Pubkey) -> bool {
        self.relayers.contains(relayer)
    }

    pub fn add(&mut self, relayer: Pubkey) -> Result<()> {
        require!(!self.is_active(&relayer), GatewayError::AlreadyExists);
        require!(
            self.relayers.len() < MAX_RELAYERS,
            GatewayError::RegistryFull
        );

        self.relayers.push(relayer);
        Ok(())
    }

    pub fn remove(&mut self, relayer: &Pubkey) -> Result<()> {
        let position = self
            .relayers
            .iter()
            .position(|r| r == relayer)
            .ok_or(GatewayError::NotFound)?;

        self.relayers.swap_remove(position);
        Ok(())
    }

    pub fn list(&self) -> Vec<Pubkey> {
        self.relayers.clone()
    }
}
