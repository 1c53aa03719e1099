// Deterministic Address Derivation
//
// Every pool-scoped account is addressable from (program id, seed):
//   config  = PDA([CONFIG_SEED, seed_le])                under this program
//   mint_lp = PDA([LP_MINT_SEED, config])                under this program
//   vault   = PDA([config, token program, mint])         under the ATA program
// The hashing scheme sits behind `AddressDeriver` so the pool logic only
// asks for canonical addresses.

use anchor_lang::prelude::*;
use anchor_spl::{associated_token, token};

use crate::constants::*;

pub trait AddressDeriver {
    // Canonical (highest valid) bump search
    fn find_program_address(&self, seeds: &[&[u8]], program_id: &Pubkey) -> (Pubkey, u8);

    // Single derivation with a known bump; None if the seeds land on the curve
    fn create_program_address(&self, seeds: &[&[u8]], program_id: &Pubkey) -> Option<Pubkey>;
}

// SHA-256 program-derived addresses, as the runtime computes them
#[derive(Clone, Copy, Debug, Default)]
pub struct ProgramDerivation;

impl AddressDeriver for ProgramDerivation {
    fn find_program_address(&self, seeds: &[&[u8]], program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(seeds, program_id)
    }

    fn create_program_address(&self, seeds: &[&[u8]], program_id: &Pubkey) -> Option<Pubkey> {
        Pubkey::create_program_address(seeds, program_id).ok()
    }
}

pub fn config_address<D: AddressDeriver + ?Sized>(deriver: &D, seed: u64) -> (Pubkey, u8) {
    deriver.find_program_address(&[CONFIG_SEED, &seed.to_le_bytes()], &crate::ID)
}

pub fn lp_mint_address<D: AddressDeriver + ?Sized>(deriver: &D, config: &Pubkey) -> (Pubkey, u8) {
    deriver.find_program_address(&[LP_MINT_SEED, config.as_ref()], &crate::ID)
}

// Associated token account of `wallet` for `mint`
pub fn associated_token_address<D: AddressDeriver + ?Sized>(
    deriver: &D,
    wallet: &Pubkey,
    mint: &Pubkey,
) -> Pubkey {
    deriver
        .find_program_address(
            &[wallet.as_ref(), token::ID.as_ref(), mint.as_ref()],
            &associated_token::ID,
        )
        .0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolAddresses {
    pub seed: u64,
    pub config: Pubkey,
    pub config_bump: u8,
    pub mint_lp: Pubkey,
    pub lp_bump: u8,
    pub vault_x: Pubkey,
    pub vault_y: Pubkey,
}

impl PoolAddresses {
    pub fn derive<D: AddressDeriver + ?Sized>(
        deriver: &D,
        seed: u64,
        mint_x: &Pubkey,
        mint_y: &Pubkey,
    ) -> Self {
        let (config, config_bump) = config_address(deriver, seed);
        let (mint_lp, lp_bump) = lp_mint_address(deriver, &config);

        Self {
            seed,
            config,
            config_bump,
            mint_lp,
            lp_bump,
            vault_x: associated_token_address(deriver, &config, mint_x),
            vault_y: associated_token_address(deriver, &config, mint_y),
        }
    }

    // Where a user's LP shares live
    pub fn user_lp<D: AddressDeriver + ?Sized>(&self, deriver: &D, user: &Pubkey) -> Pubkey {
        associated_token_address(deriver, user, &self.mint_lp)
    }
}
