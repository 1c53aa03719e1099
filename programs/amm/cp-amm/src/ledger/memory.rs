use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use super::{AccountRecord, Ledger};

// BTreeMap-backed ledger for tests and off-chain simulation
#[derive(Clone, Debug, Default)]
pub struct InMemoryLedger {
    accounts: BTreeMap<Pubkey, AccountRecord>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Ledger for InMemoryLedger {
    fn get(&self, address: &Pubkey) -> Option<AccountRecord> {
        self.accounts.get(address).cloned()
    }

    fn put(&mut self, address: Pubkey, record: AccountRecord) {
        self.accounts.insert(address, record);
    }
}
