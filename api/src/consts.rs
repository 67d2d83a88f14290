use steel::*;

pub const PAIR: &[u8]           = b"pair";
pub const BUCKET: &[u8]         = b"bucket";
pub const VAULT: &[u8]          = b"vault";

/// Fixed-point scale for reward-per-share and per-user reward accumulators.
pub const PRECISION: u128       = 1_000_000_000_000_000_000;

/// Fixed-point scale for the time-weighted price accumulators.
pub const PRICE_PRECISION: u128 = 1_000_000_000_000_000_000;

/// Swap fees are expressed in basis points of the input amount.
pub const FEE_DENOMINATOR: u64  = 10_000;
pub const MAX_SWAP_FEE_BPS: u64 = 1_000; // 10%

pub const DEFAULT_SWAP_FEE_BPS: u64      = 30;
pub const DEFAULT_COLLECTING_PERIOD: u64 = 8_192; // slots

/// Longest route a single swap may take.
pub const MAX_ROUTE_HOPS: usize = 8;

/// The chain-native staking asset. Pairs holding it own a bucket.
pub const NATIVE_ASSET: Pubkey  = solana_program::pubkey!("So11111111111111111111111111111111111111112");

/// "No delegate" sentinel for voters and delegation slots.
pub const NO_DELEGATE: Pubkey   = Pubkey::new_from_array([0; 32]);
