// Test utilities for AMM core
#![allow(dead_code)]

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_error::ProgramError;
use anchor_spl::associated_token::get_associated_token_address;
use cp_amm::{
    state::{load_mint, load_token_account, mint_record, store_mint, store_token_account, token_account_record},
    Amm, DepositLiquidity, InMemoryLedger, InitializePool, Ledger, PoolAddresses,
    WithdrawLiquidity,
};

// Token decimals
pub const DECIMALS: u8 = 6;
pub const FEE_BASIS_POINTS: u16 = 30;

pub struct TestPool {
    pub amm: Amm<InMemoryLedger>,
    pub admin: Pubkey,
    pub mint_x: Pubkey,
    pub mint_y: Pubkey,
    pub addresses: PoolAddresses,
}

#[derive(Clone, Copy, Debug)]
pub struct TestUser {
    pub key: Pubkey,
    pub ata_x: Pubkey,
    pub ata_y: Pubkey,
    pub ata_lp: Pubkey,
}

// Mint owned by the token program, authority held by `authority`
pub fn create_mint(ledger: &mut InMemoryLedger, authority: &Pubkey) -> Pubkey {
    let mint = Pubkey::new_unique();
    ledger.put(mint, mint_record(authority, 0, DECIMALS).unwrap());
    mint
}

pub fn create_token_account(ledger: &mut InMemoryLedger, mint: &Pubkey, owner: &Pubkey) -> Pubkey {
    let address = get_associated_token_address(owner, mint);
    ledger.put(address, token_account_record(mint, owner, 0).unwrap());
    address
}

// Faucet: raise both the account balance and the mint supply
pub fn mint_to(ledger: &mut InMemoryLedger, mint: &Pubkey, account: &Pubkey, amount: u64) {
    let mut mint_state = load_mint(&*ledger, mint).unwrap();
    let mut account_state = load_token_account(&*ledger, account).unwrap();
    mint_state.supply += amount;
    account_state.amount += amount;
    store_mint(ledger, mint, mint_state).unwrap();
    store_token_account(ledger, account, account_state).unwrap();
}

pub fn setup_mints() -> (Amm<InMemoryLedger>, Pubkey, Pubkey, Pubkey) {
    let admin = Pubkey::new_unique();
    let mut ledger = InMemoryLedger::new();
    let mint_x = create_mint(&mut ledger, &admin);
    let mint_y = create_mint(&mut ledger, &admin);
    (Amm::new(ledger), admin, mint_x, mint_y)
}

pub fn setup_pool(seed: u64) -> TestPool {
    let (mut amm, admin, mint_x, mint_y) = setup_mints();
    let accounts = InitializePool::new(amm.deriver(), admin, seed, mint_x, mint_y);
    amm.initialize_pool(&accounts, seed, FEE_BASIS_POINTS, Some(admin))
        .expect("Pool initialization failed");

    let addresses = amm.pool_addresses(seed, &mint_x, &mint_y);
    TestPool {
        amm,
        admin,
        mint_x,
        mint_y,
        addresses,
    }
}

impl TestPool {
    pub fn create_user(&mut self, amount_x: u64, amount_y: u64) -> TestUser {
        let key = Pubkey::new_unique();
        let (mint_x, mint_y) = (self.mint_x, self.mint_y);
        let ledger = self.amm.ledger_mut();

        let ata_x = create_token_account(ledger, &mint_x, &key);
        let ata_y = create_token_account(ledger, &mint_y, &key);
        mint_to(ledger, &mint_x, &ata_x, amount_x);
        mint_to(ledger, &mint_y, &ata_y, amount_y);

        TestUser {
            key,
            ata_x,
            ata_y,
            ata_lp: get_associated_token_address(&key, &self.addresses.mint_lp),
        }
    }

    pub fn deposit_accounts(&self, user: &TestUser) -> DepositLiquidity {
        DepositLiquidity {
            user: user.key,
            user_x: user.ata_x,
            user_y: user.ata_y,
            user_lp: user.ata_lp,
            vault_x: self.addresses.vault_x,
            vault_y: self.addresses.vault_y,
            config: self.addresses.config,
            mint_lp: self.addresses.mint_lp,
        }
    }

    pub fn withdraw_accounts(&self, user: &TestUser) -> WithdrawLiquidity {
        WithdrawLiquidity {
            user: user.key,
            user_x: user.ata_x,
            user_y: user.ata_y,
            user_lp: user.ata_lp,
            vault_x: self.addresses.vault_x,
            vault_y: self.addresses.vault_y,
            config: self.addresses.config,
            mint_lp: self.addresses.mint_lp,
        }
    }

    pub fn deposit(
        &mut self,
        user: &TestUser,
        max_x: u64,
        max_y: u64,
        lp_amount: u64,
    ) -> anchor_lang::Result<cp_amm::DepositReceipt> {
        let accounts = self.deposit_accounts(user);
        self.amm.deposit_liquidity(&accounts, max_x, max_y, lp_amount)
    }

    pub fn withdraw(
        &mut self,
        user: &TestUser,
        min_x: u64,
        min_y: u64,
        lp_amount: u64,
    ) -> anchor_lang::Result<cp_amm::WithdrawReceipt> {
        let accounts = self.withdraw_accounts(user);
        self.amm.withdraw_liquidity(&accounts, min_x, min_y, lp_amount)
    }

    // Missing accounts read as zero
    pub fn balance(&self, account: &Pubkey) -> u64 {
        self.amm.token_balance(account).unwrap_or(0)
    }

    pub fn vaults(&self) -> (u64, u64) {
        (
            self.balance(&self.addresses.vault_x),
            self.balance(&self.addresses.vault_y),
        )
    }

    pub fn lp_supply(&self) -> u64 {
        self.amm.mint_supply(&self.addresses.mint_lp).unwrap()
    }

    pub fn snapshot(&self) -> InMemoryLedger {
        self.amm.ledger().clone()
    }
}

// Custom error number an instruction failed with
pub fn error_code<T: std::fmt::Debug>(result: anchor_lang::Result<T>) -> u32 {
    let error = result.expect_err("Instruction should have failed");
    match ProgramError::from(error) {
        ProgramError::Custom(code) => code,
        other => panic!("Unexpected program error: {:?}", other),
    }
}

pub fn assert_error<T: std::fmt::Debug>(result: anchor_lang::Result<T>, expected: impl Into<u32>) {
    assert_eq!(error_code(result), expected.into());
}

// Ledgers compare by every account the tests touch
pub fn assert_unchanged(before: &InMemoryLedger, pool: &TestPool, accounts: &[Pubkey]) {
    for account in accounts {
        assert_eq!(
            before.get(account),
            pool.amm.ledger().get(account),
            "Account {} changed after failed instruction",
            account
        );
    }
}
