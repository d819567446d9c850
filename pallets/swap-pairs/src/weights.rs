#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn create_pair() -> Weight;
	fn mint() -> Weight;
	fn burn() -> Weight;
	fn swap() -> Weight;
	fn transfer_shares() -> Weight;
	fn sync() -> Weight;
	fn skim() -> Weight;
	fn set_fee_to() -> Weight;
	fn set_protocol_fee_denominator() -> Weight;
	fn set_swap_fee() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	fn create_pair() -> Weight {
		Weight::from_parts(30_000_000, 3000)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(4))
	}
	fn mint() -> Weight {
		Weight::from_parts(80_000_000, 6000)
			.saturating_add(T::DbWeight::get().reads(7))
			.saturating_add(T::DbWeight::get().writes(5))
	}
	fn burn() -> Weight {
		Weight::from_parts(90_000_000, 6000)
			.saturating_add(T::DbWeight::get().reads(8))
			.saturating_add(T::DbWeight::get().writes(7))
	}
	fn swap() -> Weight {
		Weight::from_parts(80_000_000, 6000)
			.saturating_add(T::DbWeight::get().reads(6))
			.saturating_add(T::DbWeight::get().writes(5))
	}
	fn transfer_shares() -> Weight {
		Weight::from_parts(25_000_000, 3000)
			.saturating_add(T::DbWeight::get().reads(3))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn sync() -> Weight {
		Weight::from_parts(40_000_000, 4000)
			.saturating_add(T::DbWeight::get().reads(3))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn skim() -> Weight {
		Weight::from_parts(60_000_000, 5000)
			.saturating_add(T::DbWeight::get().reads(5))
			.saturating_add(T::DbWeight::get().writes(4))
	}
	fn set_fee_to() -> Weight {
		Weight::from_parts(10_000_000, 1000)
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_protocol_fee_denominator() -> Weight {
		Weight::from_parts(10_000_000, 1000)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_swap_fee() -> Weight {
		Weight::from_parts(15_000_000, 2000)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
}

impl WeightInfo for () {
	fn create_pair() -> Weight {
		Weight::from_parts(30_000_000, 3000)
	}
	fn mint() -> Weight {
		Weight::from_parts(80_000_000, 6000)
	}
	fn burn() -> Weight {
		Weight::from_parts(90_000_000, 6000)
	}
	fn swap() -> Weight {
		Weight::from_parts(80_000_000, 6000)
	}
	fn transfer_shares() -> Weight {
		Weight::from_parts(25_000_000, 3000)
	}
	fn sync() -> Weight {
		Weight::from_parts(40_000_000, 4000)
	}
	fn skim() -> Weight {
		Weight::from_parts(60_000_000, 5000)
	}
	fn set_fee_to() -> Weight {
		Weight::from_parts(10_000_000, 1000)
	}
	fn set_protocol_fee_denominator() -> Weight {
		Weight::from_parts(10_000_000, 1000)
	}
	fn set_swap_fee() -> Weight {
		Weight::from_parts(15_000_000, 2000)
	}
}
