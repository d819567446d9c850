#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn take_protocol_fee(n: u32, ) -> Weight;
	fn change_receivers() -> Weight;
	fn change_split_honey_proportion() -> Weight;
	fn transfer_ownership() -> Weight;
	fn set_unroutable_policy() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	/// The range of component `n` is `[1, 64]`.
	fn take_protocol_fee(n: u32, ) -> Weight {
		Weight::from_parts(120_000_000, 12000)
			// Burn plus up to two conversions per pair
			.saturating_add(Weight::from_parts(180_000_000, 9000).saturating_mul(n.into()))
			.saturating_add(T::DbWeight::get().reads(14))
			.saturating_add(T::DbWeight::get().reads((16_u64).saturating_mul(n.into())))
			.saturating_add(T::DbWeight::get().writes(12))
			.saturating_add(T::DbWeight::get().writes((14_u64).saturating_mul(n.into())))
	}
	fn change_receivers() -> Weight {
		Weight::from_parts(12_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn change_split_honey_proportion() -> Weight {
		Weight::from_parts(10_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn transfer_ownership() -> Weight {
		Weight::from_parts(10_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_unroutable_policy() -> Weight {
		Weight::from_parts(10_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
}

impl WeightInfo for () {
	fn take_protocol_fee(n: u32, ) -> Weight {
		Weight::from_parts(120_000_000, 12000)
			.saturating_add(Weight::from_parts(180_000_000, 9000).saturating_mul(n.into()))
	}
	fn change_receivers() -> Weight {
		Weight::from_parts(12_000_000, 1500)
	}
	fn change_split_honey_proportion() -> Weight {
		Weight::from_parts(10_000_000, 1500)
	}
	fn transfer_ownership() -> Weight {
		Weight::from_parts(10_000_000, 1500)
	}
	fn set_unroutable_policy() -> Weight {
		Weight::from_parts(10_000_000, 1500)
	}
}
