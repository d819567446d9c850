extern crate alloc;

use crate::*;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_support::{BoundedVec, traits::Get};
use polkadot_sdk::frame_system::RawOrigin;
use primitives::{UnroutablePolicy, ecosystem::params::MAX_SPLIT_PROPORTION};

fn set_owner<T: Config>() -> T::AccountId {
  let owner: T::AccountId = whitelisted_caller();
  Owner::<T>::put(owner.clone());
  owner
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn take_protocol_fee(n: Linear<1, { T::MaxPairsPerHarvest::get() }>) {
    let caller: T::AccountId = whitelisted_caller();
    let pairs = T::BenchmarkHelper::setup_harvest(&Pallet::<T>::account_id(), n)
      .expect("Failed to set up harvest");
    let pairs: BoundedVec<_, T::MaxPairsPerHarvest> =
      BoundedVec::try_from(pairs).expect("Too many pairs");

    #[extrinsic_call]
    take_protocol_fee(RawOrigin::Signed(caller), pairs.clone());

    for pair_id in pairs {
      assert_eq!(
        T::Pairs::share_balance(pair_id, &Pallet::<T>::account_id()),
        0
      );
    }
  }

  #[benchmark]
  fn change_receivers() {
    let owner = set_owner::<T>();
    let sink_a: T::AccountId = account("sink", 0, 0);
    let sink_b: T::AccountId = account("sink", 1, 0);
    let fallback: T::AccountId = account("fallback", 0, 0);

    #[extrinsic_call]
    change_receivers(RawOrigin::Signed(owner), sink_a, sink_b, Some(fallback));

    assert!(ReceiversConfig::<T>::get().is_some());
  }

  #[benchmark]
  fn change_split_honey_proportion() {
    let owner = set_owner::<T>();

    #[extrinsic_call]
    change_split_honey_proportion(RawOrigin::Signed(owner), MAX_SPLIT_PROPORTION / 2);

    assert_eq!(SplitProportion::<T>::get(), MAX_SPLIT_PROPORTION / 2);
  }

  #[benchmark]
  fn transfer_ownership() {
    let owner = set_owner::<T>();
    let new_owner: T::AccountId = account("owner", 0, 0);

    #[extrinsic_call]
    transfer_ownership(RawOrigin::Signed(owner), new_owner.clone());

    assert_eq!(Owner::<T>::get(), Some(new_owner));
  }

  #[benchmark]
  fn set_unroutable_policy() {
    let owner = set_owner::<T>();

    #[extrinsic_call]
    set_unroutable_policy(RawOrigin::Signed(owner), UnroutablePolicy::ForwardToFallback);

    assert_eq!(Policy::<T>::get(), UnroutablePolicy::ForwardToFallback);
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
