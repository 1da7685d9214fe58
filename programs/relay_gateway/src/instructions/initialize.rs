use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GatewayError;
use crate::events::GatewayInitialized;
use crate::state::{ChainRegistry, Gateway, ReentrancyStatus, RelayerRegistry, Treasury};

pub fn handler(ctx: Context<InitializeGateway>, chain_id: u32) -> Result<()> {
    require!(chain_id != 0, GatewayError::ValidationError);

    let gateway = &mut ctx.accounts.gateway;
    gateway.owner = ctx.accounts.owner.key();
    gateway.chain_id = chain_id;
    gateway.bump = ctx.bumps.gateway;

    let relayers = &mut ctx.accounts.relayer_registry;
    relayers.relayers = Vec::new();
    relayers.bump = ctx.bumps.relayer_registry;

    let chains = &mut ctx.accounts.chain_registry;
    chains.chains = Vec::new();
    chains.bump = ctx.bumps.chain_registry;

    let treasury = &mut ctx.accounts.treasury;
    treasury.balance = 0;
    treasury.status = ReentrancyStatus::NotEntered;
    treasury.bump = ctx.bumps.treasury;

    emit!(GatewayInitialized {
        owner: gateway.owner,
        chain_id,
    });

    msg!("Gateway initialized for chain: {}, owner: {}", chain_id, gateway.owner);
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeGateway<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + Gateway::SIZE,
        seeds = [GATEWAY_SEED],
        bump
    )]
    pub gateway: Account<'info, Gateway>,

    #[account(
        init,
        payer = owner,
        space = 8 + RelayerRegistry::SIZE,
        seeds = [RELAYER_REGISTRY_SEED],
        bump
    )]
    pub relayer_registry: Account<'info, RelayerRegistry>,

    #[account(
        init,
        payer = owner,
        space = 8 + ChainRegistry::SIZE,
        seeds = [CHAIN_REGISTRY_SEED],
        bump
    )]
    pub chain_registry: Account<'info, ChainRegistry>,

    #[account(
        init,
        payer = owner,
        space = 8 + Treasury::SIZE,
        seeds = [TREASURY_SEED],
        bump
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}
