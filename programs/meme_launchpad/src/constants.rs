// PDA seed strings, shared with the launchpad program
pub const SEED_GLOBAL_STATE: &str = "global_state";
pub const SEED_BONDING_CURVE: &str = "bonding_curve";
pub const SEED_SOL_ESCROW: &str = "bonding_curve_sol_escrow";
pub const SEED_TOKEN_MINT: &str = "token_mint";
pub const SEED_METADATA: &str = "metadata";

// Mints created by the launchpad use 6 decimals
pub const TOKEN_DECIMALS: u8 = 6;

// On-chain prices are fixed point with 18 decimals
pub const PRICE_SCALE: u128 = 1_000_000_000_000_000_000;

// Basis point denominator 10_000 bps = 100.00%
pub const BPS_DENOMINATOR: u16 = 10_000;

// 0.5%, the tolerance shown in the trade panel
pub const DEFAULT_SLIPPAGE_BPS: u16 = 50;

// Tokens at or above this share of max supply are close to DEX migration
pub const ALPHA_PROGRESS_BPS: u16 = 8_000;

pub const DEFAULT_NETWORK_ID: u64 = 13579;

pub const LAUNCHPAD_CONTRACT_NAME: &str = "MemeLaunchpad";

pub const MAX_SYMBOL_LEN: usize = 10;

// Projection samples every 5% from 0% to 100% inclusive
pub const CURVE_STEP_PERCENT: u32 = 5;
pub const CURVE_SAMPLE_COUNT: usize = 21;
