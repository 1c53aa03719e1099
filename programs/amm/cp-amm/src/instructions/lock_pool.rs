// Lock Pool Instruction
//
// Emergency pause: blocks deposits and withdrawals until unlocked.

use anchor_lang::prelude::*;

use crate::{derivation::AddressDeriver, ledger::Ledger, state::*};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LockPool {
    pub authority: Pubkey,
    pub config: Pubkey,
}

impl LockPool {
    pub fn lock_pool<L: Ledger + ?Sized, D: AddressDeriver + ?Sized>(
        &self,
        ledger: &mut L,
        deriver: &D,
    ) -> Result<()> {
        let mut config = Config::load(ledger, &self.config)?;
        config.pool_authority(deriver, &self.config)?;
        config.assert_is_authority(&self.authority)?;

        config.lock()?;
        config.store(ledger, &self.config)?;

        msg!("Pool locked by {}", self.authority);

        Ok(())
    }
}
