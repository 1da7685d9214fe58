use anchor_lang::prelude::*;

use crate::{
    constants::{CHAIN_REGISTRY_SEED, GATEWAY_SEED},
    errors::GatewayError,
    events::{ChainAdded, ChainRemoved, ChainUpdated},
    state::{ChainRegistry, Gateway},
};

/// Owner-gated access to destination chain configuration
#[derive(Accounts)]
pub struct ManageChains<'info> {
    #[account(
        mut,
        seeds = [CHAIN_REGISTRY_SEED],
        bump = chain_registry.bump
    )]
    pub chain_registry: Account<'info, ChainRegistry>,

    #[account(
        seeds = [GATEWAY_SEED],
        bump = gateway.bump,
        constraint = gateway.is_owner(&owner.key()) @ GatewayError::Unauthorized
    )]
    pub gateway: Account<'info, Gateway>,

    pub owner: Signer<'info>,
}

pub fn add_chain(
    ctx: Context<ManageChains>,
    chain_id: u32,
    endpoint: String,
    target: Vec<u8>,
    types: Vec<u8>,
    fees: Vec<u64>,
) -> Result<()> {
    require!(
        chain_id != 0 && chain_id != ctx.accounts.gateway.chain_id,
        GatewayError::ValidationError
    );

    let registry = &mut ctx.accounts.chain_registry;
    registry.add_chain(chain_id, endpoint.clone(), target.clone(), &types, &fees)?;

    msg!(
        "Added chain {} at {} with {} message types (total chains: {})",
        chain_id,
        endpoint,
        types.len(),
        registry.chains.len()
    );

    emit!(ChainAdded {
        chain_id,
        endpoint,
        target,
        supported_types: types,
        fees,
    });
    Ok(())
}

pub fn update_chain(
    ctx: Context<ManageChains>,
    chain_id: u32,
    endpoint: String,
    target: Vec<u8>,
    types: Vec<u8>,
    fees: Vec<u64>,
) -> Result<()> {
    let registry = &mut ctx.accounts.chain_registry;
    registry.update_chain(chain_id, endpoint.clone(), target.clone(), &types, &fees)?;

    msg!(
        "Updated chain {}: endpoint={}, supported types={:?}",
        chain_id,
        endpoint,
        types
    );

    emit!(ChainUpdated {
        chain_id,
        endpoint,
        target,
        supported_types: types,
        fees,
    });
    Ok(())
}

pub fn remove_chain(ctx: Context<ManageChains>, chain_id: u32) -> Result<()> {
    let registry = &mut ctx.accounts.chain_registry;
    registry.remove_chain(chain_id)?;

    emit!(ChainRemoved { chain_id });

    msg!(
        "Removed chain {} (remaining chains: {})",
        chain_id,
        registry.chains.len()
    );
    Ok(())
}
