// Unlock Pool Instruction

use anchor_lang::prelude::*;

use crate::{derivation::AddressDeriver, ledger::Ledger, state::*};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnlockPool {
    pub authority: Pubkey,
    pub config: Pubkey,
}

impl UnlockPool {
    pub fn unlock_pool<L: Ledger + ?Sized, D: AddressDeriver + ?Sized>(
        &self,
        ledger: &mut L,
        deriver: &D,
    ) -> Result<()> {
        let mut config = Config::load(ledger, &self.config)?;
        config.pool_authority(deriver, &self.config)?;
        config.assert_is_authority(&self.authority)?;

        config.unlock()?;
        config.store(ledger, &self.config)?;

        msg!("Pool unlocked by {}", self.authority);

        Ok(())
    }
}
