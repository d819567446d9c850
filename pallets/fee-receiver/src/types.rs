use polkadot_sdk::frame_support::pallet_prelude::*;
use primitives::{AssetId, Balance, PairId};

/// What the harvester needs to know about a pair to route and quote through it
#[derive(Clone, PartialEq, Eq, RuntimeDebug)]
pub struct PairSnapshot<AccountId> {
  /// Account holding the pair reserves
  pub account: AccountId,
  pub token_a: AssetId,
  pub token_b: AssetId,
  pub reserve_a: Balance,
  pub reserve_b: Balance,
  /// Swap fee out of `SWAP_FEE_DENOMINATOR`
  pub swap_fee: u32,
}

impl<AccountId> PairSnapshot<AccountId> {
  /// `(reserve_in, reserve_out)` when `token_in` is sold into the pair
  pub fn reserves_for(&self, token_in: AssetId) -> Option<(Balance, Balance)> {
    if token_in == self.token_a {
      Some((self.reserve_a, self.reserve_b))
    } else if token_in == self.token_b {
      Some((self.reserve_b, self.reserve_a))
    } else {
      None
    }
  }

  /// `(amount_out_a, amount_out_b)` for buying `amount_out` with `token_in`
  pub fn outputs_for(&self, token_in: AssetId, amount_out: Balance) -> (Balance, Balance) {
    if token_in == self.token_a {
      (0, amount_out)
    } else {
      (amount_out, 0)
    }
  }

  pub fn is_empty(&self) -> bool {
    self.reserve_a == 0 || self.reserve_b == 0
  }
}

/// Liquidity pair collaborator used by the harvester
pub trait PairRegistry<AccountId> {
  /// Current state of a pair
  fn pair(pair_id: PairId) -> Option<PairSnapshot<AccountId>>;

  /// Pair registered for the unordered token pair
  fn find_pair(token_a: AssetId, token_b: AssetId) -> Option<PairId>;

  /// Shares of `pair_id` held by `who`
  fn share_balance(pair_id: PairId, who: &AccountId) -> Balance;

  /// Burn `shares` of `who`, sending the redeemed tokens to `to`
  fn burn(
    who: &AccountId,
    pair_id: PairId,
    shares: Balance,
    to: &AccountId,
  ) -> Result<(Balance, Balance), DispatchError>;

  /// Take the given outputs against input already transferred to the pair account
  fn swap(
    who: &AccountId,
    pair_id: PairId,
    amount_out_a: Balance,
    amount_out_b: Balance,
    to: &AccountId,
  ) -> DispatchResult;
}

/// How a token reaches the base asset
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum Route {
  /// Token is the base asset
  Identity,
  /// Through the (token, base) pair
  ViaPair(PairId),
  /// No (token, base) pair is registered
  Unroutable,
}

/// Recipients of the distributed fee
#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct Receivers<AccountId> {
  /// Receives all of target asset A
  pub sink_a: AccountId,
  /// Receives half of target asset B, the other half is burned
  pub sink_b: AccountId,
  /// Receives unroutable tokens under `UnroutablePolicy::ForwardToFallback`
  pub fallback: Option<AccountId>,
}
