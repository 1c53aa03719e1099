// Deposit Liquidity Instruction
//
// Adds liquidity to pool and receives LP tokens.
// First deposit: the caller's maxima become the reserves and the requested
//                LP amount becomes the supply.
// Subsequent:    required = ceil(reserve * lp_amount / supply) per asset.

use anchor_lang::prelude::*;

use crate::{
    authority::UserAuthority,
    derivation::*,
    errors::*,
    helpers::*,
    ledger::Ledger,
    state::*,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepositLiquidity {
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
pub struct DepositReceipt {
    pub amount_x: u64,
    pub amount_y: u64,
    pub lp_minted: u64,
}

impl DepositLiquidity {
    pub fn deposit_liquidity<L: Ledger + ?Sized, D: AddressDeriver + ?Sized>(
        &self,
        ledger: &mut L,
        deriver: &D,
        max_x: u64,
        max_y: u64,
        lp_amount: u64,
    ) -> Result<DepositReceipt> {
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
        self.prepare_user_lp(ledger, deriver)?;

        // One snapshot of reserves and supply for all share math
        let vault_x_balance = load_token_account(ledger, &self.vault_x)?.amount;
        let vault_y_balance = load_token_account(ledger, &self.vault_y)?.amount;
        let lp_supply = load_mint(ledger, &self.mint_lp)?.supply;

        let (amount_x, amount_y) = if lp_supply == 0 {
            require!(max_x > 0 && max_y > 0, AmmError::ZeroAmount);
            (max_x, max_y)
        } else {
            deposit_amounts_from_l(vault_x_balance, vault_y_balance, lp_supply, lp_amount)?
        };

        require!(
            amount_x <= max_x && amount_y <= max_y,
            AmmError::SlippageExceeded
        );

        let user = UserAuthority::new(self.user);
        transfer_tokens(ledger, &self.user_x, &self.vault_x, &user, amount_x)?;
        transfer_tokens(ledger, &self.user_y, &self.vault_y, &user, amount_y)?;
        mint_lp_tokens(ledger, &self.mint_lp, &self.user_lp, &pool, lp_amount)?;

        msg!("Deposited: {} X, {} Y -> {} LP", amount_x, amount_y, lp_amount);

        Ok(DepositReceipt {
            amount_x,
            amount_y,
            lp_minted: lp_amount,
        })
    }

    // Share account is created on first deposit at the user's associated address
    fn prepare_user_lp<L: Ledger + ?Sized, D: AddressDeriver + ?Sized>(
        &self,
        ledger: &mut L,
        deriver: &D,
    ) -> Result<()> {
        if ledger.contains(&self.user_lp) {
            validate_token_account(ledger, &self.user_lp, &self.mint_lp, &self.user)?;
            return Ok(());
        }

        require_keys_eq!(
            self.user_lp,
            associated_token_address(deriver, &self.user, &self.mint_lp),
            AmmError::AccountMismatch
        );
        ledger.put(self.user_lp, token_account_record(&self.mint_lp, &self.user, 0)?);
        Ok(())
    }
}
