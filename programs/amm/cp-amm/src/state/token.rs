// Token Records
//
// Mints and token accounts are stored in the SPL token layout and owned by
// the token program, exactly as the pool's vaults and LP mint are on chain.

use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::{program_option::COption, program_pack::Pack};
use anchor_spl::token::{
    self,
    spl_token::state::{Account as SplTokenAccount, AccountState, Mint as SplMint},
};

use crate::ledger::{AccountRecord, Ledger};

pub fn mint_record(mint_authority: &Pubkey, supply: u64, decimals: u8) -> Result<AccountRecord> {
    pack_mint(SplMint {
        mint_authority: COption::Some(*mint_authority),
        supply,
        decimals,
        is_initialized: true,
        freeze_authority: COption::None,
    })
}

pub fn token_account_record(mint: &Pubkey, owner: &Pubkey, amount: u64) -> Result<AccountRecord> {
    pack_token_account(SplTokenAccount {
        mint: *mint,
        owner: *owner,
        amount,
        state: AccountState::Initialized,
        ..SplTokenAccount::default()
    })
}

pub fn load_mint<L: Ledger + ?Sized>(ledger: &L, address: &Pubkey) -> Result<SplMint> {
    let record = ledger.load(address)?;
    require_keys_eq!(record.owner, token::ID, ErrorCode::AccountOwnedByWrongProgram);
    Ok(SplMint::unpack(&record.data).map_err(|_| ErrorCode::AccountDidNotDeserialize)?)
}

pub fn load_token_account<L: Ledger + ?Sized>(
    ledger: &L,
    address: &Pubkey,
) -> Result<SplTokenAccount> {
    let record = ledger.load(address)?;
    require_keys_eq!(record.owner, token::ID, ErrorCode::AccountOwnedByWrongProgram);
    Ok(SplTokenAccount::unpack(&record.data).map_err(|_| ErrorCode::AccountDidNotDeserialize)?)
}

pub fn store_mint<L: Ledger + ?Sized>(ledger: &mut L, address: &Pubkey, mint: SplMint) -> Result<()> {
    ledger.put(*address, pack_mint(mint)?);
    Ok(())
}

pub fn store_token_account<L: Ledger + ?Sized>(
    ledger: &mut L,
    address: &Pubkey,
    account: SplTokenAccount,
) -> Result<()> {
    ledger.put(*address, pack_token_account(account)?);
    Ok(())
}

fn pack_mint(mint: SplMint) -> Result<AccountRecord> {
    let mut data = vec![0u8; SplMint::LEN];
    SplMint::pack(mint, &mut data).map_err(|_| ErrorCode::AccountDidNotSerialize)?;
    Ok(AccountRecord::new(token::ID, data))
}

fn pack_token_account(account: SplTokenAccount) -> Result<AccountRecord> {
    let mut data = vec![0u8; SplTokenAccount::LEN];
    SplTokenAccount::pack(account, &mut data).map_err(|_| ErrorCode::AccountDidNotSerialize)?;
    Ok(AccountRecord::new(token::ID, data))
}
