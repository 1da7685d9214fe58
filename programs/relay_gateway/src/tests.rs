//! End-to-end flows over the program's state, following the order the
//! instruction handlers apply each step.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GatewayError;
use crate::instructions::{
    DeliverMessage, DeliverValue, DeliverValueBatch, ManageChains, ManageRelayers, WithdrawFunds,
};
use crate::state::*;
use crate::test_utils::*;
use crate::utils::*;

const LOCAL_CHAIN: u32 = 9012;
const REMOTE_CHAIN: u32 = 9013;

fn configured_chains() -> ChainRegistry {
    let mut chains = chain_registry();
    chains
        .add_chain(
            REMOTE_CHAIN,
            "http://localhost:8546".to_string(),
            vec![0x42; 20],
            &[0, 1],
            &[100, 200],
        )
        .unwrap();
    chains
}

fn send(
    chains: &ChainRegistry,
    outbound: &mut OutboundSequence,
    treasury: &mut Treasury,
    message_type: u8,
    payment: u64,
) -> Result<u64> {
    let fee = check_message_fee(chains, outbound.chain_id, message_type, payment)?;
    treasury.credit(fee)?;
    outbound.next()
}

fn deliver(
    inbound: &mut InboundSequence,
    treasury: &mut Treasury,
    message_id: u64,
    recipient: &Pubkey,
    amount: u64,
) -> Result<()> {
    let mut treasury = ReentrancyGuard::enter(treasury)?;
    let settlement = plan_single(inbound, &treasury, message_id, recipient, amount)?;
    commit(inbound, &mut treasury, &settlement)
}

#[test]
fn send_then_deliver_scenario() {
    let chains = configured_chains();
    let mut outbound = outbound(REMOTE_CHAIN);
    let mut treasury = treasury(900);

    assert_gateway_err(
        send(&chains, &mut outbound, &mut treasury, 0, 99),
        GatewayError::IncorrectFee,
    );
    assert_eq!(send(&chains, &mut outbound, &mut treasury, 0, 100).unwrap(), 1);
    assert_eq!(treasury.balance, 1_000);

    let mut inbound = inbound(REMOTE_CHAIN);
    let recipient = Pubkey::new_unique();

    deliver(&mut inbound, &mut treasury, 1, &recipient, 50).unwrap();
    assert_eq!(treasury.balance, 950);

    assert_gateway_err(
        deliver(&mut inbound, &mut treasury, 1, &recipient, 50),
        GatewayError::StaleOrDuplicateMessage,
    );
    assert_eq!(treasury.balance, 950);
    assert_eq!(treasury.status, ReentrancyStatus::NotEntered);
}

#[test]
fn rejected_send_changes_nothing() {
    let chains = configured_chains();
    let mut outbound = outbound(REMOTE_CHAIN);
    let mut treasury = treasury(0);

    for (message_type, payment, expected) in [
        (0, 101, GatewayError::IncorrectFee),
        (1, 100, GatewayError::IncorrectFee),
        (7, 100, GatewayError::TypeNotSupported),
    ] {
        assert_gateway_err(
            send(&chains, &mut outbound, &mut treasury, message_type, payment),
            expected,
        );
    }

    let mut unknown = crate::test_utils::outbound(LOCAL_CHAIN);
    assert_gateway_err(
        send(&chains, &mut unknown, &mut treasury, 0, 100),
        GatewayError::ChainNotSupported,
    );

    assert_eq!(outbound.peek_next().unwrap(), 1);
    assert_eq!(treasury.balance, 0);
}

#[test]
fn outbound_ids_survive_chain_removal() {
    let mut chains = configured_chains();
    let mut outbound = outbound(REMOTE_CHAIN);
    let mut treasury = treasury(0);

    send(&chains, &mut outbound, &mut treasury, 1, 200).unwrap();
    chains.remove_chain(REMOTE_CHAIN).unwrap();
    assert_gateway_err(
        send(&chains, &mut outbound, &mut treasury, 1, 200),
        GatewayError::ChainNotSupported,
    );

    chains
        .add_chain(REMOTE_CHAIN, String::new(), vec![1], &[1], &[200])
        .unwrap();
    assert_eq!(send(&chains, &mut outbound, &mut treasury, 1, 200).unwrap(), 2);
}

#[test]
fn failed_batch_transfer_leaves_sequence_and_balances() {
    let mut inbound = inbound(REMOTE_CHAIN);
    let mut treasury_state = treasury(300);

    let mut vault = TestAccount::new(1_300);
    let mut good = TestAccount::new(0);
    let mut readonly = TestAccount::new(0);
    readonly.writable = false;
    let recipients = [good.key, readonly.key];
    let amounts = [100, 100];

    let result = {
        let vault_info = vault.info();
        let accounts = [good.info(), readonly.info()];

        let mut guarded = ReentrancyGuard::enter(&mut treasury_state).unwrap();
        plan_batch(&inbound, &guarded, 1, &recipients, &amounts).and_then(|settlement| {
            pay_out_batch(&vault_info, &accounts, &recipients, &amounts, 1_000)?;
            commit(&mut inbound, &mut guarded, &settlement)
        })
    };

    assert_gateway_err(result, GatewayError::TransferFailed);
    assert_eq!(inbound.last_processed, 0);
    assert_eq!(treasury_state.balance, 300);
    assert_eq!(treasury_state.status, ReentrancyStatus::NotEntered);
    assert_eq!(vault.lamports, 1_300);
    assert_eq!(good.lamports, 0);
}

#[test]
fn successful_batch_moves_exact_total() {
    let mut inbound = inbound(REMOTE_CHAIN);
    let mut treasury_state = treasury(300);

    let mut vault = TestAccount::new(1_300);
    let mut a = TestAccount::new(0);
    let mut b = TestAccount::new(0);
    let recipients = [a.key, b.key, a.key];
    let amounts = [100, 50, 25];

    {
        let vault_info = vault.info();
        let a_info = a.info();
        let accounts = [a_info.clone(), b.info(), a_info];

        let mut guarded = ReentrancyGuard::enter(&mut treasury_state).unwrap();
        let settlement = plan_batch(&inbound, &guarded, 5, &recipients, &amounts).unwrap();
        pay_out_batch(&vault_info, &accounts, &recipients, &amounts, 1_000).unwrap();
        commit(&mut inbound, &mut guarded, &settlement).unwrap();
    }

    assert_eq!(inbound.last_processed, 7);
    assert_eq!(treasury_state.balance, 125);
    assert_eq!(vault.lamports, 1_125);
    assert_eq!(a.lamports, 125);
    assert_eq!(b.lamports, 50);
}

fn gateway_account(owner: Pubkey) -> TestAccount {
    let gateway = Gateway {
        owner,
        chain_id: LOCAL_CHAIN,
        bump: pda_bump(&[GATEWAY_SEED]),
    };
    TestAccount::pda(&[GATEWAY_SEED], &gateway)
}

fn relayer_registry_account(relayers: &[Pubkey]) -> TestAccount {
    let mut registry = relayer_registry();
    registry.relayers = relayers.to_vec();
    registry.bump = pda_bump(&[RELAYER_REGISTRY_SEED]);
    TestAccount::pda(&[RELAYER_REGISTRY_SEED], &registry)
}

fn chain_registry_account() -> TestAccount {
    let mut registry = configured_chains();
    registry.bump = pda_bump(&[CHAIN_REGISTRY_SEED]);
    TestAccount::pda(&[CHAIN_REGISTRY_SEED], &registry)
}

fn treasury_account() -> TestAccount {
    let mut state = treasury(1_000);
    state.bump = pda_bump(&[TREASURY_SEED]);
    TestAccount::pda(&[TREASURY_SEED], &state)
}

fn inbound_account() -> TestAccount {
    let chain_id = REMOTE_CHAIN.to_le_bytes();
    let seeds: &[&[u8]] = &[INBOUND_SEED, &chain_id];
    let mut state = inbound(REMOTE_CHAIN);
    state.bump = pda_bump(seeds);

    let mut account = TestAccount::pda(seeds, &state);
    account.data.resize(8 + InboundSequence::SIZE, 0);
    account
}

#[test]
fn owner_passes_configuration_constraints() {
    let owner = Pubkey::new_unique();

    try_accounts::<ManageChains>(
        vec![
            chain_registry_account(),
            gateway_account(owner),
            TestAccount::signer(owner),
        ],
        &[],
    )
    .unwrap();
    try_accounts::<ManageRelayers>(
        vec![
            relayer_registry_account(&[]),
            gateway_account(owner),
            TestAccount::signer(owner),
        ],
        &[],
    )
    .unwrap();
}

#[test]
fn non_owner_cannot_configure_or_withdraw() {
    let owner = Pubkey::new_unique();
    let stranger = Pubkey::new_unique();

    assert_gateway_err(
        try_accounts::<ManageChains>(
            vec![
                chain_registry_account(),
                gateway_account(owner),
                TestAccount::signer(stranger),
            ],
            &[],
        ),
        GatewayError::Unauthorized,
    );
    assert_gateway_err(
        try_accounts::<ManageRelayers>(
            vec![
                relayer_registry_account(&[stranger]),
                gateway_account(owner),
                TestAccount::signer(stranger),
            ],
            &[],
        ),
        GatewayError::Unauthorized,
    );
    assert_gateway_err(
        try_accounts::<WithdrawFunds>(
            vec![
                gateway_account(owner),
                treasury_account(),
                TestAccount::signer(stranger),
            ],
            &[],
        ),
        GatewayError::Unauthorized,
    );
}

#[test]
fn unlisted_signer_cannot_deliver() {
    let owner = Pubkey::new_unique();
    let relayer = Pubkey::new_unique();
    let stranger = Pubkey::new_unique();
    let ix_data = REMOTE_CHAIN.to_le_bytes();

    assert_gateway_err(
        try_accounts::<DeliverMessage>(
            vec![
                gateway_account(owner),
                relayer_registry_account(&[relayer]),
                TestAccount::signer(stranger),
                inbound_account(),
                TestAccount::system_program(),
            ],
            &ix_data,
        ),
        GatewayError::Unauthorized,
    );
    assert_gateway_err(
        try_accounts::<DeliverValue>(
            vec![
                relayer_registry_account(&[relayer]),
                TestAccount::signer(owner),
                inbound_account(),
                treasury_account(),
                TestAccount::new(0),
                TestAccount::system_program(),
            ],
            &ix_data,
        ),
        GatewayError::Unauthorized,
    );
    assert_gateway_err(
        try_accounts::<DeliverValueBatch>(
            vec![
                relayer_registry_account(&[]),
                TestAccount::signer(relayer),
                inbound_account(),
                treasury_account(),
                TestAccount::system_program(),
            ],
            &ix_data,
        ),
        GatewayError::Unauthorized,
    );
}
