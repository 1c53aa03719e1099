// Ledger Account Store
//
// Key-addressed account storage the pool runs against. Every instruction
// executes inside a `Transaction`: writes are staged over the base ledger
// and only reach it on `commit`, so a failed instruction leaves no trace.

use std::collections::BTreeMap;

use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;

pub mod memory;

pub use memory::InMemoryLedger;

// Raw account as held by the store: owning program plus opaque data
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountRecord {
    pub owner: Pubkey,
    pub data: Vec<u8>,
}

impl AccountRecord {
    pub fn new(owner: Pubkey, data: Vec<u8>) -> Self {
        Self { owner, data }
    }
}

pub trait Ledger {
    fn get(&self, address: &Pubkey) -> Option<AccountRecord>;

    fn put(&mut self, address: Pubkey, record: AccountRecord);

    fn contains(&self, address: &Pubkey) -> bool {
        self.get(address).is_some()
    }

    // Fetch a record, failing with the store's own error when absent
    fn load(&self, address: &Pubkey) -> Result<AccountRecord> {
        Ok(self.get(address).ok_or(ErrorCode::AccountNotInitialized)?)
    }
}

// All-or-nothing view over a base ledger
pub struct Transaction<'a, L: Ledger + ?Sized> {
    base: &'a mut L,
    writes: BTreeMap<Pubkey, AccountRecord>,
}

impl<'a, L: Ledger + ?Sized> Transaction<'a, L> {
    pub fn begin(base: &'a mut L) -> Self {
        Self {
            base,
            writes: BTreeMap::new(),
        }
    }

    pub fn pending_writes(&self) -> usize {
        self.writes.len()
    }

    pub fn commit(self) {
        let Transaction { base, writes } = self;
        for (address, record) in writes {
            base.put(address, record);
        }
    }

    pub fn abort(self) {}
}

impl<L: Ledger + ?Sized> Ledger for Transaction<'_, L> {
    fn get(&self, address: &Pubkey) -> Option<AccountRecord> {
        match self.writes.get(address) {
            Some(record) => Some(record.clone()),
            None => self.base.get(address),
        }
    }

    fn put(&mut self, address: Pubkey, record: AccountRecord) {
        self.writes.insert(address, record);
    }
}
