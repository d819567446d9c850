use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Identifier of a fungible token held in `pallet-assets`.
pub type AssetId = u32;

/// Identifier of a liquidity pair registered by the pair factory.
pub type PairId = u32;

/// What the fee harvester does with a redeemed token that has no pair against the base asset.
///
/// - `Reject`: abort the whole batch with `NoRouteToBaseAsset`.
/// - `ForwardToFallback`: hand the raw token to the fallback receiver and keep going.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Default,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum UnroutablePolicy {
  #[default]
  Reject,
  ForwardToFallback,
}

/// Canonical ordering of an unordered token pair: `(lower, higher)`.
pub fn sorted_pair(a: AssetId, b: AssetId) -> (AssetId, AssetId) {
  if a < b { (a, b) } else { (b, a) }
}

// Bitmask Architecture for Asset Classification
//
// 32-bit ID Structure:
// [ 4 bits: Type ] [ 28 bits: Index/ID ]
//
// 0x1... -> Standard tokens
// 0x2... -> Wrapped native currency (the routing base asset)
// 0x3... -> Distribution targets (honey, hsf)

pub const MASK_TYPE: u32 = 0xF000_0000;
pub const MASK_INDEX: u32 = 0x0FFF_FFFF;

pub const TYPE_STD: u32 = 0x1000_0000;
pub const TYPE_WRAPPED: u32 = 0x2000_0000;
pub const TYPE_TARGET: u32 = 0x3000_0000;

/// Helper to construct compile-time IDs
const fn make_id(type_mask: u32, index: u32) -> u32 {
  type_mask | (index & MASK_INDEX)
}

/// Whether an asset id lives in the wrapped-native namespace
pub fn is_wrapped_native(id: AssetId) -> bool {
  (id & MASK_TYPE) == TYPE_WRAPPED
}

/// Well-known asset constants serving as system defaults
pub mod well_known {
  use super::*;

  /// Wrapped native currency, the base asset every harvested token is routed through
  pub const WRAPPED_NATIVE: u32 = make_id(TYPE_WRAPPED, 1);

  /// First distribution target (sink A)
  pub const HONEY: u32 = make_id(TYPE_TARGET, 1);

  /// Second distribution target (half to sink B, half burned)
  pub const HSF: u32 = make_id(TYPE_TARGET, 2);
}
