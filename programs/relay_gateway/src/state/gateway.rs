use anchor_lang::prelude::*;

/// Singleton gateway account holding the owner and local chain identity
#[account]
pub struct Gateway {
    /// Owner authority; gates configuration and withdrawal
    pub owner: Pubkey,

    /// Chain identifier of this deployment
    pub chain_id: u32,

    /// PDA bump seed
    pub bump: u8,
}

impl Gateway {
    pub const SIZE: usize = 32  // owner
        + 4                     // chain_id
        + 1;                    // bump

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner == *key
    }
}
