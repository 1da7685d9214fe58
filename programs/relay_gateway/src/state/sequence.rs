use anchor_lang::prelude::*;

use crate::errors::GatewayError;

/// Outbound message counter for one destination chain
///
/// Created lazily on the first send; never closed, so ids survive removal
/// and re-addition of the chain.
#[account]
pub struct OutboundSequence {
    /// Destination chain identifier
    pub chain_id: u32,

    /// Last id handed out, zero before the first send
    pub last_id: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl OutboundSequence {
    pub const SIZE: usize = 4   // chain_id
        + 8                     // last_id
        + 1;                    // bump

    /// Id the next send will receive
    pub fn peek_next(&self) -> Result<u64> {
        self.last_id
            .checked_add(1)
            .ok_or_else(|| error!(GatewayError::ValidationError))
    }

    /// Assign and return the next outbound id
    pub fn next(&mut self) -> Result<u64> {
        let id = self.peek_next()?;
        self.last_id = id;
        Ok(id)
    }
}

/// Replay protection for one source chain
///
/// Admits ids in strictly increasing order. Gaps are allowed, but an id
/// that was skipped can never be admitted afterwards.
#[account]
pub struct InboundSequence {
    /// Source chain identifier
    pub source_chain_id: u32,

    /// Highest message id processed from this chain
    pub last_processed: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl InboundSequence {
    pub const SIZE: usize = 4   // source_chain_id
        + 8                     // last_processed
        + 1;                    // bump

    pub fn check(&self, candidate_id: u64) -> Result<()> {
        require!(
            candidate_id > self.last_processed,
            GatewayError::StaleOrDuplicateMessage
        );
        Ok(())
    }

    /// Move the high-water mark to `end_id`; `end_id` must be admissible
    pub fn advance_to(&mut self, end_id: u64) -> Result<()> {
        self.check(end_id)?;
        self.last_processed = end_id;
        Ok(())
    }

    /// Check and advance for a single delivery
    pub fn admit(&mut self, candidate_id: u64) -> Result<()> {
        self.advance_to(candidate_id)
    }
}
