//! Ecosystem Constants for the fee harvester
//!
//! This module centralizes pallet IDs and the fixed-point parameters shared by the
//! pair pallet and the fee receiver. Both sides of a swap quote must agree on the
//! same fee denominator, so it is defined once here.

/// Balance type alias for consistency across ecosystem
pub type Balance = u128;

/// Pallet identifiers for deriving pallet-owned accounts.
pub mod pallet_ids {
  /// Swap pairs pallet ID (constant-product pairs and their factory)
  pub const SWAP_PAIRS_PALLET_ID: &[u8; 8] = b"dxpairs0";

  /// Fee receiver pallet ID (protocol fee custody and distribution)
  pub const FEE_RECEIVER_PALLET_ID: &[u8; 8] = b"feercvr0";
}

/// Fixed-point parameters for swaps, protocol fee and distribution.
pub mod params {
  use super::Balance;

  /// Denominator of per-pair swap fees, expressed in basis points.
  pub const SWAP_FEE_DENOMINATOR: u32 = 10_000;

  /// Swap fee assigned to a freshly created pair (0.25%).
  pub const DEFAULT_SWAP_FEE: u32 = 25;

  /// Upper bound for a pair swap fee (10%).
  pub const MAX_SWAP_FEE: u32 = 1_000;

  /// Protocol fee denominator: the collector receives `1 / (denominator + 1)`
  /// of the invariant growth, i.e. ~10% of swap fees with the default of 9.
  pub const DEFAULT_PROTOCOL_FEE_DENOMINATOR: u32 = 9;

  /// Shares permanently locked on the first deposit into a pair.
  pub const MINIMUM_LIQUIDITY: Balance = 1_000;

  /// Denominator of the harvester split proportion (10^10).
  pub const SPLIT_PROPORTION_DENOMINATOR: u64 = 10_000_000_000;

  /// Ceiling of the split proportion (50%): target B always receives at least half.
  pub const MAX_SPLIT_PROPORTION: u64 = SPLIT_PROPORTION_DENOMINATOR / 2;

  /// Split proportion used when genesis does not set one (50%).
  pub const DEFAULT_SPLIT_PROPORTION: u64 = MAX_SPLIT_PROPORTION;

  /// Maximum number of pairs a single harvest call accepts.
  pub const MAX_PAIRS_PER_HARVEST: u32 = 64;
}
