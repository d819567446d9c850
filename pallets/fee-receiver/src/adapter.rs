//! `PairRegistry` backed by `pallet-swap-pairs`.

use crate::types::{PairRegistry, PairSnapshot};
use core::marker::PhantomData;
use polkadot_sdk::frame_support::pallet_prelude::*;
use primitives::{AssetId, Balance, PairId};

pub struct SwapPairsAdapter<T>(PhantomData<T>);

impl<T: pallet_swap_pairs::Config> PairRegistry<T::AccountId> for SwapPairsAdapter<T> {
  fn pair(pair_id: PairId) -> Option<PairSnapshot<T::AccountId>> {
    pallet_swap_pairs::Pairs::<T>::get(pair_id).map(|pair| PairSnapshot {
      account: pallet_swap_pairs::Pallet::<T>::pair_account(pair_id),
      token_a: pair.token_a,
      token_b: pair.token_b,
      reserve_a: pair.reserve_a,
      reserve_b: pair.reserve_b,
      swap_fee: pair.swap_fee,
    })
  }

  fn find_pair(token_a: AssetId, token_b: AssetId) -> Option<PairId> {
    pallet_swap_pairs::Pallet::<T>::pair_id(token_a, token_b)
  }

  fn share_balance(pair_id: PairId, who: &T::AccountId) -> Balance {
    pallet_swap_pairs::ShareBalances::<T>::get(pair_id, who)
  }

  fn burn(
    who: &T::AccountId,
    pair_id: PairId,
    shares: Balance,
    to: &T::AccountId,
  ) -> Result<(Balance, Balance), DispatchError> {
    pallet_swap_pairs::Pallet::<T>::do_burn(who, pair_id, shares, to)
  }

  fn swap(
    who: &T::AccountId,
    pair_id: PairId,
    amount_out_a: Balance,
    amount_out_b: Balance,
    to: &T::AccountId,
  ) -> DispatchResult {
    pallet_swap_pairs::Pallet::<T>::do_swap(who, pair_id, amount_out_a, amount_out_b, to)
  }
}
