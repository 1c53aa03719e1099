// Withdraw Liquidity Instruction
//
// Burns LP tokens and returns proportional share of pool tokens,
// floor(reserve * lp_amount / supply) per asset.

use anchor_lang::prelude::*;

use crate::{
    authority::UserAuthority,
    derivation::AddressDeriver,
    errors::*,
    helpers::*,
    ledger::Ledger,
    state::*,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawLiquidity {
    pub user: Pubkey,
    pub user_x: Pubkey,
    pub user_y: Pubkey,
    pub user_lp: Pubkey,
    pub vault_x: Pubkey,
    pub vault_y: Pubkey,
    pub config: Pubkey,
    pub mint_lp: Pubkey,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawReceipt {
    pub amount_x: u64,
    pub amount_y: u64,
    pub lp_burned: u64,
}

impl WithdrawLiquidity {
    pub fn withdraw_liquidity<L: Ledger + ?Sized, D: AddressDeriver + ?Sized>(
        &self,
        ledger: &mut L,
        deriver: &D,
        min_x: u64,
        min_y: u64,
        lp_amount: u64,
    ) -> Result<WithdrawReceipt> {
        let config = Config::load(ledger, &self.config)?;
        config.assert_not_locked()?;

        require!(lp_amount > 0, AmmError::ZeroAmount);

        let pool = validate_pool_accounts(
            ledger,
            deriver,
            &config,
            &self.config,
            &self.vault_x,
            &self.vault_y,
            &self.mint_lp,
        )?;
        // The pool never trades with itself
        require_keys_neq!(self.user, self.config, AmmError::AccountMismatch);
        validate_token_account(ledger, &self.user_x, &config.mint_x, &self.user)?;
        validate_token_account(ledger, &self.user_y, &config.mint_y, &self.user)?;
        let user_lp = validate_token_account(ledger, &self.user_lp, &self.mint_lp, &self.user)?;

        let vault_x_balance = load_token_account(ledger, &self.vault_x)?.amount;
        let vault_y_balance = load_token_account(ledger, &self.vault_y)?.amount;
        let lp_supply = load_mint(ledger, &self.mint_lp)?.supply;

        require!(lp_supply > 0, AmmError::PoolEmpty);
        require!(user_lp.amount >= lp_amount, AmmError::InsufficientShares);

        let (amount_x, amount_y) =
            withdraw_amounts_from_l(vault_x_balance, vault_y_balance, lp_supply, lp_amount)?;

        require!(
            amount_x >= min_x && amount_y >= min_y,
            AmmError::SlippageExceeded
        );

        let user = UserAuthority::new(self.user);
        burn_lp_tokens(ledger, &self.mint_lp, &self.user_lp, &user, lp_amount)?;
        transfer_tokens(ledger, &self.vault_x, &self.user_x, &pool, amount_x)?;
        transfer_tokens(ledger, &self.vault_y, &self.user_y, &pool, amount_y)?;

        msg!("Withdrawn: {} LP -> {} X, {} Y", lp_amount, amount_x, amount_y);

        Ok(WithdrawReceipt {
            amount_x,
            amount_y,
            lp_burned: lp_amount,
        })
    }
}
