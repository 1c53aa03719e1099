// AMM Program Constants

pub const CONFIG_SEED: &[u8] = b"config";
pub const LP_MINT_SEED: &[u8] = b"lp";
pub const MAX_FEE_BASIS_POINTS: u16 = 10_000; // exclusive upper bound (100%)
pub const LP_DECIMALS: u8 = 6;
pub const ANCHOR_DISCRIMINATOR: usize = 8;
