use anchor_lang::prelude::*;

#[error_code]
pub enum AmmError {
    #[msg("A pool already exists for this seed")]
    DuplicatePool,

    #[msg("Fee basis points must be below 10000")]
    InvalidFee,

    #[msg("Token mints must be different - cannot create pool with same token")]
    SameAsset,

    #[msg("Amount cannot be zero")]
    ZeroAmount,

    #[msg("Required or returned amount violates the caller's bound (slippage protection)")]
    SlippageExceeded,

    #[msg("Supplied account does not match the pool or the signer")]
    AccountMismatch,

    #[msg("Not enough LP tokens to burn")]
    InsufficientShares,

    #[msg("Pool has no outstanding LP supply")]
    PoolEmpty,

    #[msg("Token account balance is too low for this transfer")]
    InsufficientFunds,

    #[msg("Pool is currently locked - operations are disabled")]
    PoolLocked,

    #[msg("Pool is already locked")]
    PoolAlreadyLocked,

    #[msg("Pool is already unlocked")]
    PoolAlreadyUnlocked,

    #[msg("Only the pool authority can perform this action")]
    UnauthorizedAccess,

    #[msg("Arithmetic overflow occurred")]
    Overflow,

    #[msg("Division by zero attempted")]
    DivisionByZero,
}
