use std::collections::BTreeSet;
use std::fmt::Debug;

use anchor_lang::prelude::*;
use std::sync::Once;

use anchor_lang::solana_program::entrypoint::SUCCESS;
use anchor_lang::solana_program::program::MAX_RETURN_DATA;
use anchor_lang::solana_program::program_stubs::{set_syscall_stubs, SyscallStubs};
use anchor_lang::Bumps;

use crate::errors::GatewayError;
use crate::state::*;

pub fn assert_gateway_err<T: Debug>(result: Result<T>, expected: GatewayError) {
    match result {
        Ok(value) => panic!("expected {expected:?}, got Ok({value:?})"),
        Err(err) => assert_eq!(err, anchor_lang::error::Error::from(expected)),
    }
}

/// Whether `value` fits the return data a view instruction can hand back
pub fn fits_return_data<T: AnchorSerialize>(value: &T) -> bool {
    let mut data = Vec::new();
    value.serialize(&mut data).unwrap();
    data.len() <= MAX_RETURN_DATA
}

/// Canonical bump of the program PDA for `seeds`
pub fn pda_bump(seeds: &[&[u8]]) -> u8 {
    Pubkey::find_program_address(seeds, &crate::ID).1
}

pub fn chain_registry() -> ChainRegistry {
    ChainRegistry {
        chains: Vec::new(),
        bump: 255,
    }
}

pub fn relayer_registry() -> RelayerRegistry {
    RelayerRegistry {
        relayers: Vec::new(),
        bump: 255,
    }
}

pub fn outbound(chain_id: u32) -> OutboundSequence {
    OutboundSequence {
        chain_id,
        last_id: 0,
        bump: 255,
    }
}

pub fn inbound(source_chain_id: u32) -> InboundSequence {
    InboundSequence {
        source_chain_id,
        last_processed: 0,
        bump: 255,
    }
}

pub fn treasury(balance: u64) -> Treasury {
    Treasury {
        balance,
        status: ReentrancyStatus::NotEntered,
        bump: 255,
    }
}

/// Backing storage for an `AccountInfo` in tests
pub struct TestAccount {
    pub key: Pubkey,
    pub owner: Pubkey,
    pub lamports: u64,
    pub data: Vec<u8>,
    pub writable: bool,
    pub signer: bool,
    pub executable: bool,
}

impl TestAccount {
    pub fn new(lamports: u64) -> Self {
        Self {
            key: Pubkey::new_unique(),
            owner: crate::ID,
            lamports,
            data: Vec::new(),
            writable: true,
            signer: false,
            executable: false,
        }
    }

    /// A wallet signing the transaction
    pub fn signer(key: Pubkey) -> Self {
        Self {
            key,
            owner: anchor_lang::system_program::ID,
            signer: true,
            ..Self::new(1_000_000_000)
        }
    }

    /// A program-owned account at the PDA for `seeds`, holding `state`
    pub fn pda<T: AccountSerialize>(seeds: &[&[u8]], state: &T) -> Self {
        let (key, _) = Pubkey::find_program_address(seeds, &crate::ID);
        let mut account = Self {
            key,
            ..Self::new(1_000_000_000)
        };
        state.try_serialize(&mut account.data).unwrap();
        account
    }

    pub fn system_program() -> Self {
        Self {
            key: anchor_lang::system_program::ID,
            owner: solana_sdk_ids::native_loader::ID,
            writable: false,
            executable: true,
            ..Self::new(1)
        }
    }

    pub fn info(&mut self) -> AccountInfo<'_> {
        AccountInfo::new(
            &self.key,
            self.signer,
            self.writable,
            &mut self.lamports,
            &mut self.data,
            &self.owner,
            self.executable,
            0,
        )
    }
}

/// Serves the rent sysvar that `init_if_needed` reads off-chain
struct RentSysvar;

impl SyscallStubs for RentSysvar {
    fn sol_get_rent_sysvar(&self, var_addr: *mut u8) -> u64 {
        unsafe { std::ptr::write(var_addr as *mut Rent, Rent::default()) };
        SUCCESS
    }
}

static SYSCALLS: Once = Once::new();

/// Run account validation for `T` over `accounts`, in instruction order
///
/// The backing accounts are leaked so the infos can live for `'static`.
pub fn try_accounts<T>(accounts: Vec<TestAccount>, ix_data: &[u8]) -> Result<()>
where
    T: Bumps + Accounts<'static, <T as Bumps>::Bumps>,
    <T as Bumps>::Bumps: Default,
{
    SYSCALLS.call_once(|| {
        set_syscall_stubs(Box::new(RentSysvar));
    });

    let accounts: &'static mut [TestAccount] = Box::leak(accounts.into_boxed_slice());
    let infos: Vec<AccountInfo<'static>> = accounts.iter_mut().map(TestAccount::info).collect();
    let mut infos: &'static [AccountInfo<'static>] = Box::leak(infos.into_boxed_slice());

    let mut bumps = <T as Bumps>::Bumps::default();
    T::try_accounts(
        &crate::ID,
        &mut infos,
        ix_data,
        &mut bumps,
        &mut BTreeSet::new(),
    )
    .map(|_| ())
}
