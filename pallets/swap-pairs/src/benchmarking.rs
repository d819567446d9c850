extern crate alloc;

use crate::*;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_support::traits::{fungibles::Mutate, tokens::Preservation};
use polkadot_sdk::frame_system::RawOrigin;
use primitives::{AssetId, Balance, PairId};

const TOKEN_A: AssetId = 1_001;
const TOKEN_B: AssetId = 1_002;
const SEED: Balance = 1_000_000_000_000_000;

fn funded_pair<T: Config>(caller: &T::AccountId) -> PairId {
  T::BenchmarkHelper::ensure_funded(caller, TOKEN_A, SEED * 10).expect("Failed to fund caller");
  T::BenchmarkHelper::ensure_funded(caller, TOKEN_B, SEED * 10).expect("Failed to fund caller");
  let pair_id = Pallet::<T>::do_create_pair(TOKEN_A, TOKEN_B).expect("Failed to create pair");
  deposit::<T>(caller, pair_id, SEED, SEED);
  Pallet::<T>::do_mint(caller, pair_id, caller).expect("Failed to seed pair");
  pair_id
}

fn deposit<T: Config>(caller: &T::AccountId, pair_id: PairId, amount_a: Balance, amount_b: Balance) {
  let account = Pallet::<T>::pair_account(pair_id);
  T::Assets::transfer(TOKEN_A, caller, &account, amount_a, Preservation::Expendable)
    .expect("Failed to deposit");
  T::Assets::transfer(TOKEN_B, caller, &account, amount_b, Preservation::Expendable)
    .expect("Failed to deposit");
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn create_pair() {
    let caller: T::AccountId = whitelisted_caller();

    #[extrinsic_call]
    create_pair(RawOrigin::Signed(caller), TOKEN_A, TOKEN_B);

    assert!(Pallet::<T>::pair_id(TOKEN_A, TOKEN_B).is_some());
  }

  #[benchmark]
  fn mint() {
    let caller: T::AccountId = whitelisted_caller();
    let pair_id = funded_pair::<T>(&caller);
    FeeTo::<T>::put(caller.clone());
    deposit::<T>(&caller, pair_id, SEED / 10, SEED / 10);

    #[extrinsic_call]
    mint(RawOrigin::Signed(caller.clone()), pair_id, caller.clone());
  }

  #[benchmark]
  fn burn() {
    let caller: T::AccountId = whitelisted_caller();
    let pair_id = funded_pair::<T>(&caller);
    FeeTo::<T>::put(caller.clone());

    #[extrinsic_call]
    burn(RawOrigin::Signed(caller.clone()), pair_id, SEED / 10, caller.clone());
  }

  #[benchmark]
  fn swap() {
    let caller: T::AccountId = whitelisted_caller();
    let pair_id = funded_pair::<T>(&caller);
    deposit::<T>(&caller, pair_id, SEED / 100, 0);
    let out = Pallet::<T>::quote_swap(pair_id, TOKEN_A, SEED / 100).expect("Failed to quote");

    #[extrinsic_call]
    swap(RawOrigin::Signed(caller.clone()), pair_id, 0, out, caller.clone());
  }

  #[benchmark]
  fn transfer_shares() {
    let caller: T::AccountId = whitelisted_caller();
    let recipient: T::AccountId = account("recipient", 0, 0);
    let pair_id = funded_pair::<T>(&caller);

    #[extrinsic_call]
    transfer_shares(RawOrigin::Signed(caller), pair_id, recipient, SEED / 10);
  }

  #[benchmark]
  fn sync() {
    let caller: T::AccountId = whitelisted_caller();
    let pair_id = funded_pair::<T>(&caller);
    deposit::<T>(&caller, pair_id, SEED / 100, SEED / 100);

    #[extrinsic_call]
    sync(RawOrigin::Signed(caller), pair_id);
  }

  #[benchmark]
  fn skim() {
    let caller: T::AccountId = whitelisted_caller();
    let pair_id = funded_pair::<T>(&caller);
    deposit::<T>(&caller, pair_id, SEED / 100, SEED / 100);

    #[extrinsic_call]
    skim(RawOrigin::Signed(caller.clone()), pair_id, caller.clone());
  }

  #[benchmark]
  fn set_fee_to() {
    let collector: T::AccountId = account("collector", 0, 0);

    #[extrinsic_call]
    set_fee_to(RawOrigin::Root, Some(collector));
  }

  #[benchmark]
  fn set_protocol_fee_denominator() {
    #[extrinsic_call]
    set_protocol_fee_denominator(RawOrigin::Root, 5);
  }

  #[benchmark]
  fn set_swap_fee() {
    let pair_id = Pallet::<T>::do_create_pair(TOKEN_A, TOKEN_B).expect("Failed to create pair");

    #[extrinsic_call]
    set_swap_fee(RawOrigin::Root, pair_id, 30);
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
