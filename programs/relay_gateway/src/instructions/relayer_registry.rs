use anchor_lang::prelude::*;

use crate::{
    constants::{GATEWAY_SEED, RELAYER_REGISTRY_SEED},
    errors::GatewayError,
    events::{RelayerAdded, RelayerRemoved},
    state::{Gateway, RelayerRegistry},
};

/// Owner-gated access to the relayer whitelist
#[derive(Accounts)]
pub struct ManageRelayers<'info> {
    #[account(
        mut,
        seeds = [RELAYER_REGISTRY_SEED],
        bump = relayer_registry.bump
    )]
    pub relayer_registry: Account<'info, RelayerRegistry>,

    #[account(
        seeds = [GATEWAY_SEED],
        bump = gateway.bump,
        constraint = gateway.is_owner(&owner.key()) @ GatewayError::Unauthorized
    )]
    pub gateway: Account<'info, Gateway>,

    pub owner: Signer<'info>,
}

pub fn add_relayer(ctx: Context<ManageRelayers>, relayer: Pubkey) -> Result<()> {
    require_keys_neq!(relayer, Pubkey::default(), GatewayError::ValidationError);

    let registry = &mut ctx.accounts.relayer_registry;
    registry.add(relayer)?;

    emit!(RelayerAdded { relayer });

    msg!(
        "Added relayer {} (total relayers: {})",
        relayer,
        registry.relayers.len()
    );
    Ok(())
}

pub fn remove_relayer(ctx: Context<ManageRelayers>, relayer: Pubkey) -> Result<()> {
    let registry = &mut ctx.accounts.relayer_registry;
    registry.remove(&relayer)?;

    emit!(RelayerRemoved { relayer });

    msg!(
        "Removed relayer {} (remaining relayers: {})",
        relayer,
        registry.relayers.len()
    );
    Ok(())
}
