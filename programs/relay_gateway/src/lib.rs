use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod tests;

use instructions::*;
use state::DestinationChain;

declare_id!("Ei5r3cpNjxWTor2JLEqECbYW4Krk4riQbYyMuuQESQZ9");

/// Cross-chain relay gateway
///
/// Charges exact fees for outbound messages, admits inbound deliveries from
/// whitelisted relayers in strict per-source-chain order, and settles pooled
/// treasury funds to recipients singly or in atomic batches.
#[program]
pub mod relay_gateway {
    use super::*;

    /// Initialize the gateway; the signer becomes the owner
    pub fn initialize_gateway(ctx: Context<InitializeGateway>, chain_id: u32) -> Result<()> {
        instructions::initialize::handler(ctx, chain_id)
    }

    /// Add a destination chain (owner only)
    pub fn add_chain(
        ctx: Context<ManageChains>,
        chain_id: u32,
        endpoint: String,
        target: Vec<u8>,
        types: Vec<u8>,
        fees: Vec<u64>,
    ) -> Result<()> {
        instructions::chain_registry::add_chain(ctx, chain_id, endpoint, target, types, fees)
    }

    /// Update a destination chain (owner only)
    ///
    /// Fees of types dropped from `types` stay stored but become unreachable.
    pub fn update_chain(
        ctx: Context<ManageChains>,
        chain_id: u32,
        endpoint: String,
        target: Vec<u8>,
        types: Vec<u8>,
        fees: Vec<u64>,
    ) -> Result<()> {
        instructions::chain_registry::update_chain(ctx, chain_id, endpoint, target, types, fees)
    }

    /// Remove a destination chain (owner only)
    pub fn remove_chain(ctx: Context<ManageChains>, chain_id: u32) -> Result<()> {
        instructions::chain_registry::remove_chain(ctx, chain_id)
    }

    /// Whitelist a relayer (owner only)
    pub fn add_relayer(ctx: Context<ManageRelayers>, relayer: Pubkey) -> Result<()> {
        instructions::relayer_registry::add_relayer(ctx, relayer)
    }

    /// Remove a relayer from the whitelist (owner only)
    pub fn remove_relayer(ctx: Context<ManageRelayers>, relayer: Pubkey) -> Result<()> {
        instructions::relayer_registry::remove_relayer(ctx, relayer)
    }

    /// Send a message to a destination chain, paying exactly the configured fee
    pub fn send_message(
        ctx: Context<SendMessage>,
        chain_id: u32,
        message_type: u8,
        payload: Vec<u8>,
        payment: u64,
    ) -> Result<u64> {
        instructions::send_message::handler(ctx, chain_id, message_type, payload, payment)
    }

    /// Lock value in the treasury for release on a destination chain
    pub fn send_value(
        ctx: Context<SendValue>,
        chain_id: u32,
        recipient: Vec<u8>,
        amount: u64,
    ) -> Result<u64> {
        instructions::send_value::handler(ctx, chain_id, recipient, amount)
    }

    /// Deposit into the pooled treasury
    pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
        instructions::fund_treasury::handler(ctx, amount)
    }

    /// Admit an inbound message (active relayers only)
    pub fn deliver_message(
        ctx: Context<DeliverMessage>,
        source_chain_id: u32,
        source_sender: Vec<u8>,
        source_message_id: u64,
        payload: Vec<u8>,
    ) -> Result<()> {
        instructions::deliver_message::handler(
            ctx,
            source_chain_id,
            source_sender,
            source_message_id,
            payload,
        )
    }

    /// Admit an inbound value transfer and pay the recipient (active relayers only)
    pub fn deliver_value(
        ctx: Context<DeliverValue>,
        source_chain_id: u32,
        source_sender: Vec<u8>,
        recipient: Pubkey,
        source_message_id: u64,
        amount: u64,
    ) -> Result<()> {
        instructions::deliver_value::handler(
            ctx,
            source_chain_id,
            source_sender,
            recipient,
            source_message_id,
            amount,
        )
    }

    /// Settle the id range `first_message_id..first_message_id + recipients.len()`
    /// in one atomic batch (active relayers only)
    pub fn deliver_value_batch(
        ctx: Context<DeliverValueBatch>,
        source_chain_id: u32,
        first_message_id: u64,
        recipients: Vec<Pubkey>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        instructions::deliver_value_batch::handler(
            ctx,
            source_chain_id,
            first_message_id,
            recipients,
            amounts,
        )
    }

    /// Sweep the treasury balance to the owner (owner only)
    pub fn withdraw_funds(ctx: Context<WithdrawFunds>) -> Result<()> {
        instructions::admin::withdraw_funds(ctx)
    }

    /// Full configuration of a destination chain
    pub fn get_chain_info(ctx: Context<ChainView>, chain_id: u32) -> Result<DestinationChain> {
        instructions::views::get_chain_info(ctx, chain_id)
    }

    /// Fee charged for `message_type` on `chain_id`
    pub fn get_fee(ctx: Context<ChainView>, chain_id: u32, message_type: u8) -> Result<u64> {
        instructions::views::get_fee(ctx, chain_id, message_type)
    }

    /// Ids of every configured destination chain
    pub fn list_chains(ctx: Context<ChainView>) -> Result<Vec<u32>> {
        instructions::views::list_chains(ctx)
    }

    /// Every whitelisted relayer
    pub fn list_relayers(ctx: Context<RelayerView>) -> Result<Vec<Pubkey>> {
        instructions::views::list_relayers(ctx)
    }

    /// Last admitted inbound id from `source_chain_id` (0 if none)
    pub fn get_last_processed(ctx: Context<InboundView>, source_chain_id: u32) -> Result<u64> {
        instructions::views::get_last_processed(ctx, source_chain_id)
    }

    /// Id the next send to `chain_id` will receive
    pub fn get_next_outbound(ctx: Context<OutboundView>, chain_id: u32) -> Result<u64> {
        instructions::views::get_next_outbound(ctx, chain_id)
    }

    /// Pooled treasury balance available for settlement
    pub fn get_treasury_balance(ctx: Context<TreasuryView>) -> Result<u64> {
        instructions::views::get_treasury_balance(ctx)
    }
}
