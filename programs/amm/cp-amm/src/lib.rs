// Constant Product AMM - pool core
//
// Liquidity pool for a pair of tokens with LP share accounting. Every
// instruction runs as one all-or-nothing transaction against an injected
// `Ledger`; pool addresses come from an injected `AddressDeriver`.
//
// Instructions:
// - initialize_pool: Create config, LP mint and both vaults for a seed
// - deposit_liquidity: Add tokens, receive LP tokens
// - withdraw_liquidity: Burn LP tokens, receive tokens
// - lock_pool / unlock_pool: Emergency pause mechanism

use anchor_lang::prelude::*;

pub mod authority;
pub mod constants;
pub mod derivation;
pub mod errors;
pub mod helpers;
pub mod instructions;
pub mod ledger;
pub mod state;

pub use derivation::{AddressDeriver, PoolAddresses, ProgramDerivation};
pub use instructions::*;
pub use ledger::{AccountRecord, InMemoryLedger, Ledger, Transaction};

declare_id!("3k6pmDkLLF7FBANTs1ddTCGpsxvDjx8UBc5tUryisKTG");

// Instruction processor bound to one ledger
pub struct Amm<L: Ledger, D: AddressDeriver = ProgramDerivation> {
    ledger: L,
    deriver: D,
}

impl<L: Ledger> Amm<L> {
    pub fn new(ledger: L) -> Self {
        Self::with_deriver(ledger, ProgramDerivation)
    }
}

impl<L: Ledger, D: AddressDeriver> Amm<L, D> {
    pub fn with_deriver(ledger: L, deriver: D) -> Self {
        Self { ledger, deriver }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    // Direct access for external collaborators (faucets, token program)
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    pub fn into_ledger(self) -> L {
        self.ledger
    }

    pub fn deriver(&self) -> &D {
        &self.deriver
    }

    pub fn pool_addresses(&self, seed: u64, mint_x: &Pubkey, mint_y: &Pubkey) -> PoolAddresses {
        PoolAddresses::derive(&self.deriver, seed, mint_x, mint_y)
    }

    pub fn initialize_pool(
        &mut self,
        accounts: &InitializePool,
        seed: u64,
        fee: u16,
        authority: Option<Pubkey>,
    ) -> Result<()> {
        self.execute(|ledger, deriver| {
            accounts.initialize_pool(ledger, deriver, seed, fee, authority)
        })
    }

    pub fn deposit_liquidity(
        &mut self,
        accounts: &DepositLiquidity,
        max_x: u64,
        max_y: u64,
        lp_amount: u64,
    ) -> Result<DepositReceipt> {
        self.execute(|ledger, deriver| {
            accounts.deposit_liquidity(ledger, deriver, max_x, max_y, lp_amount)
        })
    }

    pub fn withdraw_liquidity(
        &mut self,
        accounts: &WithdrawLiquidity,
        min_x: u64,
        min_y: u64,
        lp_amount: u64,
    ) -> Result<WithdrawReceipt> {
        self.execute(|ledger, deriver| {
            accounts.withdraw_liquidity(ledger, deriver, min_x, min_y, lp_amount)
        })
    }

    pub fn lock_pool(&mut self, accounts: &LockPool) -> Result<()> {
        self.execute(|ledger, deriver| accounts.lock_pool(ledger, deriver))
    }

    pub fn unlock_pool(&mut self, accounts: &UnlockPool) -> Result<()> {
        self.execute(|ledger, deriver| accounts.unlock_pool(ledger, deriver))
    }

    pub fn config(&self, address: &Pubkey) -> Result<state::Config> {
        state::Config::load(&self.ledger, address)
    }

    pub fn token_balance(&self, address: &Pubkey) -> Result<u64> {
        Ok(state::load_token_account(&self.ledger, address)?.amount)
    }

    pub fn mint_supply(&self, address: &Pubkey) -> Result<u64> {
        Ok(state::load_mint(&self.ledger, address)?.supply)
    }

    // Commit on success, discard every staged write on failure
    fn execute<T>(
        &mut self,
        instruction: impl FnOnce(&mut Transaction<'_, L>, &D) -> Result<T>,
    ) -> Result<T> {
        let mut tx = Transaction::begin(&mut self.ledger);
        match instruction(&mut tx, &self.deriver) {
            Ok(value) => {
                tx.commit();
                Ok(value)
            }
            Err(error) => {
                tx.abort();
                Err(error)
            }
        }
    }
}
