pub mod deposit_liquidity;
pub mod initialize_pool;
pub mod lock_pool;
pub mod unlock_pool;
pub mod withdraw_liquidity;

pub use deposit_liquidity::*;
pub use initialize_pool::*;
pub use lock_pool::*;
pub use unlock_pool::*;
pub use withdraw_liquidity::*;
