use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GatewayError;
use crate::state::{
    ChainRegistry, DestinationChain, InboundSequence, OutboundSequence, RelayerRegistry, Treasury,
};

/// Deserialize a lazily created program account, `None` if it does not exist yet
pub fn load_if_exists<T: AccountDeserialize>(info: &AccountInfo) -> Result<Option<T>> {
    if info.data_is_empty() {
        return Ok(None);
    }
    require_keys_eq!(*info.owner, crate::ID, GatewayError::NotFound);

    let data = info.try_borrow_data()?;
    Ok(Some(T::try_deserialize(&mut &data[..])?))
}

#[derive(Accounts)]
pub struct ChainView<'info> {
    #[account(
        seeds = [CHAIN_REGISTRY_SEED],
        bump = chain_registry.bump
    )]
    pub chain_registry: Account<'info, ChainRegistry>,
}

pub fn get_chain_info(ctx: Context<ChainView>, chain_id: u32) -> Result<DestinationChain> {
    Ok(ctx.accounts.chain_registry.get(chain_id)?.clone())
}

pub fn get_fee(ctx: Context<ChainView>, chain_id: u32, message_type: u8) -> Result<u64> {
    ctx.accounts.chain_registry.fee_for(chain_id, message_type)
}

pub fn list_chains(ctx: Context<ChainView>) -> Result<Vec<u32>> {
    Ok(ctx.accounts.chain_registry.chain_ids())
}

#[derive(Accounts)]
pub struct RelayerView<'info> {
    #[account(
        seeds = [RELAYER_REGISTRY_SEED],
        bump = relayer_registry.bump
    )]
    pub relayer_registry: Account<'info, RelayerRegistry>,
}

pub fn list_relayers(ctx: Context<RelayerView>) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.relayer_registry.list())
}

#[derive(Accounts)]
#[instruction(source_chain_id: u32)]
pub struct InboundView<'info> {
    /// CHECK: address pinned by seeds; may not be created yet
    #[account(
        seeds = [INBOUND_SEED, source_chain_id.to_le_bytes().as_ref()],
        bump
    )]
    pub inbound_sequence: UncheckedAccount<'info>,
}

pub fn get_last_processed(ctx: Context<InboundView>, _source_chain_id: u32) -> Result<u64> {
    let sequence = load_if_exists::<InboundSequence>(&ctx.accounts.inbound_sequence)?;
    Ok(sequence.map_or(0, |s| s.last_processed))
}

#[derive(Accounts)]
#[instruction(chain_id: u32)]
pub struct OutboundView<'info> {
    /// CHECK: address pinned by seeds; may not be created yet
    #[account(
        seeds = [OUTBOUND_SEED, chain_id.to_le_bytes().as_ref()],
        bump
    )]
    pub outbound_sequence: UncheckedAccount<'info>,
}

/// Id the next outbound send to `chain_id` will receive
pub fn get_next_outbound(ctx: Context<OutboundView>, _chain_id: u32) -> Result<u64> {
    match load_if_exists::<OutboundSequence>(&ctx.accounts.outbound_sequence)? {
        Some(sequence) => sequence.peek_next(),
        None => Ok(1),
    }
}

#[derive(Accounts)]
pub struct TreasuryView<'info> {
    #[account(
        seeds = [TREASURY_SEED],
        bump = treasury.bump
    )]
    pub treasury: Account<'info, Treasury>,
}

pub fn get_treasury_balance(ctx: Context<TreasuryView>) -> Result<u64> {
    Ok(ctx.accounts.treasury.balance)
}
