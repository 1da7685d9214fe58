use anchor_lang::prelude::*;

use crate::errors::GatewayError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ReentrancyStatus {
    #[default]
    NotEntered,
    Entered,
}

/// Program-owned account custodying pooled funds
///
/// `balance` tracks the pooled lamports only; the account's rent-exempt
/// reserve is never part of it.
#[account]
pub struct Treasury {
    pub balance: u64,

    /// Marker for fund-moving entry points, see `utils::guard`
    pub status: ReentrancyStatus,

    /// PDA bump seed
    pub bump: u8,
}

impl Treasury {
    pub const SIZE: usize = 8   // balance
        + 1                     // status
        + 1;                    // bump

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| error!(GatewayError::ValidationError))?;
        Ok(())
    }

    pub fn ensure_covers(&self, amount: u64) -> Result<()> {
        require!(amount <= self.balance, GatewayError::InsufficientBalance);
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        self.ensure_covers(amount)?;
        self.balance -= amount;
        Ok(())
    }
}
