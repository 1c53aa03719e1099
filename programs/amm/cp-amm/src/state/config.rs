// Pool Configuration State

use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;

use crate::{
    authority::PoolAuthority,
    constants::*,
    derivation::AddressDeriver,
    errors::*,
    ledger::{AccountRecord, Ledger},
};

#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Config {
    pub seed: u64,                 // Part of the config address derivation
    pub authority: Option<Pubkey>, // Can lock/unlock pool; None once renounced
    pub mint_x: Pubkey,
    pub mint_y: Pubkey,
    pub fee: u16,                  // Swap fee in basis points
    pub locked: bool,              // Emergency pause state
    pub config_bump: u8,
    pub lp_bump: u8,
}

impl Config {
    pub fn load<L: Ledger + ?Sized>(ledger: &L, address: &Pubkey) -> Result<Self> {
        let record = ledger.load(address)?;
        require_keys_eq!(
            record.owner,
            crate::ID,
            ErrorCode::AccountOwnedByWrongProgram
        );
        Config::try_deserialize(&mut record.data.as_slice())
    }

    pub fn store<L: Ledger + ?Sized>(&self, ledger: &mut L, address: &Pubkey) -> Result<()> {
        let mut data = Vec::with_capacity(ANCHOR_DISCRIMINATOR + Config::INIT_SPACE);
        self.try_serialize(&mut data)?;
        ledger.put(*address, AccountRecord::new(crate::ID, data));
        Ok(())
    }

    // Re-derive the config address from the stored seed and bump. Only a
    // config living at its own canonical address may act for the pool.
    pub fn pool_authority<D: AddressDeriver + ?Sized>(
        &self,
        deriver: &D,
        address: &Pubkey,
    ) -> Result<PoolAuthority> {
        let derived = deriver
            .create_program_address(
                &[CONFIG_SEED, &self.seed.to_le_bytes(), &[self.config_bump]],
                &crate::ID,
            )
            .ok_or(AmmError::AccountMismatch)?;
        require_keys_eq!(derived, *address, AmmError::AccountMismatch);
        Ok(PoolAuthority::new(derived))
    }

    pub fn assert_lp_mint<D: AddressDeriver + ?Sized>(
        &self,
        deriver: &D,
        config: &Pubkey,
        mint_lp: &Pubkey,
    ) -> Result<()> {
        let derived = deriver
            .create_program_address(&[LP_MINT_SEED, config.as_ref(), &[self.lp_bump]], &crate::ID)
            .ok_or(AmmError::AccountMismatch)?;
        require_keys_eq!(derived, *mint_lp, AmmError::AccountMismatch);
        Ok(())
    }

    pub fn lock(&mut self) -> Result<()> {
        require!(!self.locked, AmmError::PoolAlreadyLocked);
        self.locked = true;
        Ok(())
    }

    pub fn unlock(&mut self) -> Result<()> {
        require!(self.locked, AmmError::PoolAlreadyUnlocked);
        self.locked = false;
        Ok(())
    }

    pub fn assert_not_locked(&self) -> Result<()> {
        require!(!self.locked, AmmError::PoolLocked);
        Ok(())
    }

    pub fn assert_is_authority(&self, caller: &Pubkey) -> Result<()> {
        require!(
            self.authority == Some(*caller),
            AmmError::UnauthorizedAccess
        );
        Ok(())
    }
}
