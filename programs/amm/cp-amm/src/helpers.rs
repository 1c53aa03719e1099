// AMM Helper Functions
//
// Liquidity math plus the token movements every instruction builds on.
// Token movements mirror the token program: they check the authorizing
// identity against the account owner (or mint authority) and never let a
// balance or supply wrap.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::spl_token::state::Account as SplTokenAccount;

use crate::{
    authority::{Authority, PoolAuthority},
    derivation::{associated_token_address, AddressDeriver},
    errors::*,
    ledger::Ledger,
    state::*,
};

// LIQUIDITY CALCULATION HELPERS

// Token amounts required to mint `lp_amount` shares into a non-empty pool.
// Rounded up, so the depositor never gets shares cheaper than existing
// holders paid for theirs.
pub fn deposit_amounts_from_l(
    reserve_x: u64,
    reserve_y: u64,
    lp_supply: u64,
    lp_amount: u64,
) -> Result<(u64, u64)> {
    Ok((
        mul_div_ceil(reserve_x, lp_amount, lp_supply)?,
        mul_div_ceil(reserve_y, lp_amount, lp_supply)?,
    ))
}

// Token amounts paid out for burning `lp_amount` shares.
// Rounded down, so the pool never pays more than the shares are worth.
pub fn withdraw_amounts_from_l(
    reserve_x: u64,
    reserve_y: u64,
    lp_supply: u64,
    lp_amount: u64,
) -> Result<(u64, u64)> {
    Ok((
        mul_div_floor(reserve_x, lp_amount, lp_supply)?,
        mul_div_floor(reserve_y, lp_amount, lp_supply)?,
    ))
}

fn mul_div_floor(value: u64, numerator: u64, denominator: u64) -> Result<u64> {
    require!(denominator > 0, AmmError::DivisionByZero);
    let quotient = (value as u128)
        .checked_mul(numerator as u128)
        .ok_or(AmmError::Overflow)?
        / denominator as u128;
    Ok(u64::try_from(quotient).map_err(|_| AmmError::Overflow)?)
}

fn mul_div_ceil(value: u64, numerator: u64, denominator: u64) -> Result<u64> {
    require!(denominator > 0, AmmError::DivisionByZero);
    let product = (value as u128)
        .checked_mul(numerator as u128)
        .ok_or(AmmError::Overflow)?;
    let quotient = product.div_ceil(denominator as u128);
    Ok(u64::try_from(quotient).map_err(|_| AmmError::Overflow)?)
}

// VALIDATION HELPERS

// Check the pool-scoped accounts an instruction was handed against the
// config and return the pool's signing capability.
pub fn validate_pool_accounts<L: Ledger + ?Sized, D: AddressDeriver + ?Sized>(
    ledger: &L,
    deriver: &D,
    config: &Config,
    config_address: &Pubkey,
    vault_x: &Pubkey,
    vault_y: &Pubkey,
    mint_lp: &Pubkey,
) -> Result<PoolAuthority> {
    let pool = config.pool_authority(deriver, config_address)?;
    config.assert_lp_mint(deriver, config_address, mint_lp)?;

    require_keys_eq!(
        *vault_x,
        associated_token_address(deriver, config_address, &config.mint_x),
        AmmError::AccountMismatch
    );
    require_keys_eq!(
        *vault_y,
        associated_token_address(deriver, config_address, &config.mint_y),
        AmmError::AccountMismatch
    );

    let lp_mint = load_mint(ledger, mint_lp)?;
    require!(
        lp_mint.mint_authority == COption::Some(pool.pubkey()),
        AmmError::AccountMismatch
    );

    Ok(pool)
}

// Token account must hold `mint` and belong to `owner`
pub fn validate_token_account<L: Ledger + ?Sized>(
    ledger: &L,
    address: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Result<SplTokenAccount> {
    let account = load_token_account(ledger, address)?;
    require_keys_eq!(account.mint, *mint, AmmError::AccountMismatch);
    require_keys_eq!(account.owner, *owner, AmmError::AccountMismatch);
    Ok(account)
}

// TOKEN MOVEMENT HELPERS

pub fn transfer_tokens<L: Ledger + ?Sized, A: Authority>(
    ledger: &mut L,
    from: &Pubkey,
    to: &Pubkey,
    authority: &A,
    amount: u64,
) -> Result<()> {
    let mut source = load_token_account(ledger, from)?;
    require_keys_eq!(source.owner, authority.pubkey(), AmmError::AccountMismatch);
    require!(source.amount >= amount, AmmError::InsufficientFunds);

    if from == to {
        return Ok(());
    }

    let mut destination = load_token_account(ledger, to)?;
    require_keys_eq!(destination.mint, source.mint, AmmError::AccountMismatch);

    source.amount -= amount;
    destination.amount = destination
        .amount
        .checked_add(amount)
        .ok_or(AmmError::Overflow)?;

    store_token_account(ledger, from, source)?;
    store_token_account(ledger, to, destination)
}

pub fn mint_lp_tokens<L: Ledger + ?Sized, A: Authority>(
    ledger: &mut L,
    mint: &Pubkey,
    to: &Pubkey,
    authority: &A,
    amount: u64,
) -> Result<()> {
    let mut lp_mint = load_mint(ledger, mint)?;
    require!(
        lp_mint.mint_authority == COption::Some(authority.pubkey()),
        AmmError::AccountMismatch
    );

    let mut destination = load_token_account(ledger, to)?;
    require_keys_eq!(destination.mint, *mint, AmmError::AccountMismatch);

    lp_mint.supply = lp_mint.supply.checked_add(amount).ok_or(AmmError::Overflow)?;
    destination.amount = destination
        .amount
        .checked_add(amount)
        .ok_or(AmmError::Overflow)?;

    store_mint(ledger, mint, lp_mint)?;
    store_token_account(ledger, to, destination)
}

pub fn burn_lp_tokens<L: Ledger + ?Sized, A: Authority>(
    ledger: &mut L,
    mint: &Pubkey,
    from: &Pubkey,
    authority: &A,
    amount: u64,
) -> Result<()> {
    let mut lp_mint = load_mint(ledger, mint)?;
    let mut source = load_token_account(ledger, from)?;
    require_keys_eq!(source.mint, *mint, AmmError::AccountMismatch);
    require_keys_eq!(source.owner, authority.pubkey(), AmmError::AccountMismatch);
    require!(source.amount >= amount, AmmError::InsufficientShares);

    source.amount -= amount;
    lp_mint.supply = lp_mint.supply.checked_sub(amount).ok_or(AmmError::Overflow)?;

    store_token_account(ledger, from, source)?;
    store_mint(ledger, mint, lp_mint)
}
