// Authority Capabilities
//
// Token movements name the identity that authorizes them. A user can only
// present their own signature; the pool can only present a `PoolAuthority`,
// which is handed out by `Config` after re-deriving its own address.

use anchor_lang::prelude::*;

pub trait Authority {
    fn pubkey(&self) -> Pubkey;
}

// Transaction signer, as verified by the surrounding runtime
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserAuthority(Pubkey);

impl UserAuthority {
    pub fn new(signer: Pubkey) -> Self {
        Self(signer)
    }
}

impl Authority for UserAuthority {
    fn pubkey(&self) -> Pubkey {
        self.0
    }
}

// Signing-equivalent capability of a pool's config address.
// Owns both vaults and mints the LP token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolAuthority {
    config: Pubkey,
}

impl PoolAuthority {
    pub(crate) fn new(config: Pubkey) -> Self {
        Self { config }
    }
}

impl Authority for PoolAuthority {
    fn pubkey(&self) -> Pubkey {
        self.config
    }
}
