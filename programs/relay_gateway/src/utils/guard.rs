use std::ops::{Deref, DerefMut};

use anchor_lang::prelude::*;

use crate::errors::GatewayError;
use crate::state::{ReentrancyStatus, Treasury};

/// Scoped hold on the treasury for fund-moving entry points
///
/// `enter` marks the treasury as entered and fails with `ReentrantCall` if it
/// already is. The marker is cleared when the guard drops, on every exit
/// path.
pub struct ReentrancyGuard<'a> {
    treasury: &'a mut Treasury,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn enter(treasury: &'a mut Treasury) -> Result<Self> {
        require!(
            treasury.status == ReentrancyStatus::NotEntered,
            GatewayError::ReentrantCall
        );
        treasury.status = ReentrancyStatus::Entered;
        Ok(Self { treasury })
    }
}

impl Deref for ReentrancyGuard<'_> {
    type Target = Treasury;

    fn deref(&self) -> &Treasury {
        self.treasury
    }
}

impl DerefMut for ReentrancyGuard<'_> {
    fn deref_mut(&mut self) -> &mut Treasury {
        self.treasury
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.treasury.status = ReentrancyStatus::NotEntered;
    }
}
