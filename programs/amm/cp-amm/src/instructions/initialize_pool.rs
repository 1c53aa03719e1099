// Initialize Pool Instruction
//
// Creates the config, the LP mint and both vaults for a (seed, mint_x,
// mint_y) pool. No tokens move; reserves start at zero.

use anchor_lang::prelude::*;

use crate::{constants::*, derivation::*, errors::*, ledger::Ledger, state::*};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitializePool {
    pub initializer: Pubkey,
    pub mint_x: Pubkey,
    pub mint_y: Pubkey,
    pub mint_lp: Pubkey,
    pub vault_x: Pubkey,
    pub vault_y: Pubkey,
    pub config: Pubkey,
}

impl InitializePool {
    // Account set with every pool address derived the canonical way
    pub fn new<D: AddressDeriver + ?Sized>(
        deriver: &D,
        initializer: Pubkey,
        seed: u64,
        mint_x: Pubkey,
        mint_y: Pubkey,
    ) -> Self {
        let addresses = PoolAddresses::derive(deriver, seed, &mint_x, &mint_y);
        Self {
            initializer,
            mint_x,
            mint_y,
            mint_lp: addresses.mint_lp,
            vault_x: addresses.vault_x,
            vault_y: addresses.vault_y,
            config: addresses.config,
        }
    }

    pub fn initialize_pool<L: Ledger + ?Sized, D: AddressDeriver + ?Sized>(
        &self,
        ledger: &mut L,
        deriver: &D,
        seed: u64,
        fee: u16,
        authority: Option<Pubkey>,
    ) -> Result<()> {
        require!(fee < MAX_FEE_BASIS_POINTS, AmmError::InvalidFee);
        require_keys_neq!(self.mint_x, self.mint_y, AmmError::SameAsset);

        // Both assets must already exist as mints
        load_mint(ledger, &self.mint_x)?;
        load_mint(ledger, &self.mint_y)?;

        let addresses = PoolAddresses::derive(deriver, seed, &self.mint_x, &self.mint_y);
        require_keys_eq!(self.config, addresses.config, AmmError::AccountMismatch);
        require_keys_eq!(self.mint_lp, addresses.mint_lp, AmmError::AccountMismatch);
        require_keys_eq!(self.vault_x, addresses.vault_x, AmmError::AccountMismatch);
        require_keys_eq!(self.vault_y, addresses.vault_y, AmmError::AccountMismatch);

        for address in [&self.config, &self.mint_lp, &self.vault_x, &self.vault_y] {
            require!(!ledger.contains(address), AmmError::DuplicatePool);
        }

        Config {
            seed,
            authority,
            mint_x: self.mint_x,
            mint_y: self.mint_y,
            fee,
            locked: false,
            config_bump: addresses.config_bump,
            lp_bump: addresses.lp_bump,
        }
        .store(ledger, &self.config)?;

        // Vaults and LP mint answer to the config address only
        ledger.put(self.mint_lp, mint_record(&self.config, 0, LP_DECIMALS)?);
        ledger.put(self.vault_x, token_account_record(&self.mint_x, &self.config, 0)?);
        ledger.put(self.vault_y, token_account_record(&self.mint_y, &self.config, 0)?);

        msg!(
            "Pool initialized: seed={} {} / {} by {}",
            seed,
            self.mint_x,
            self.mint_y,
            self.initializer
        );
        msg!("Fee: {} basis points", fee);

        Ok(())
    }
}
