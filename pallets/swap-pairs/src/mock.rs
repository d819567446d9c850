extern crate alloc;

use crate as pallet_swap_pairs;
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl,
  traits::{
    ConstU32, ConstU128,
    fungibles::Mutate,
    tokens::Preservation,
  },
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::{
  AssetId, Balance, PairId,
  ecosystem::{pallet_ids, params},
};

pub type AccountId = u64;

pub const ALICE: AccountId = 1;
pub const BOB: AccountId = 2;
pub const FEE_COLLECTOR: AccountId = 10;

pub const TOKEN_0: AssetId = 1;
pub const TOKEN_1: AssetId = 2;
pub const TOKEN_2: AssetId = 3;

pub const UNIT: Balance = 1_000_000_000_000_000_000;
pub const INITIAL_BALANCE: Balance = 1_000_000 * UNIT;

/// Pair registered at genesis for (TOKEN_0, TOKEN_1)
pub const PAIR: PairId = 0;

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    Assets: polkadot_sdk::pallet_assets,
    SwapPairs: pallet_swap_pairs,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = AccountId;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<u128>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = u128;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

impl polkadot_sdk::pallet_assets::Config for Test {
  type RuntimeEvent = RuntimeEvent;
  type Balance = u128;
  type AssetId = u32;
  type AssetIdParameter = u32;
  type Currency = Balances;
  type CreateOrigin = polkadot_sdk::frame_support::traits::AsEnsureOriginWithArg<
    frame_system::EnsureSigned<Self::AccountId>,
  >;
  type ForceOrigin = frame_system::EnsureRoot<Self::AccountId>;
  type AssetDeposit = ConstU128<1>;
  type AssetAccountDeposit = ConstU128<1>;
  type MetadataDepositBase = ConstU128<1>;
  type MetadataDepositPerByte = ConstU128<1>;
  type ApprovalDeposit = ConstU128<1>;
  type StringLimit = ConstU32<50>;
  type Freezer = ();
  type Extra = ();
  type ReserveData = ();
  type CallbackHandle = ();
  type WeightInfo = ();
  type RemoveItemsLimit = ConstU32<5>;
  type Holder = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = AssetBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct AssetBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl polkadot_sdk::pallet_assets::BenchmarkHelper<u32, ()> for AssetBenchmarkHelper {
  fn create_asset_id_parameter(id: u32) -> u32 {
    id
  }
  fn create_reserve_id_parameter(_id: u32) -> () {
    ()
  }
}

polkadot_sdk::frame_support::parameter_types! {
  pub const SwapPairsPalletId: PalletId = PalletId(*pallet_ids::SWAP_PAIRS_PALLET_ID);
}

impl pallet_swap_pairs::Config for Test {
  type Assets = Assets;
  type AdminOrigin = frame_system::EnsureRoot<AccountId>;
  type PalletId = SwapPairsPalletId;
  type MinimumLiquidity = ConstU128<{ params::MINIMUM_LIQUIDITY }>;
  type DefaultSwapFee = ConstU32<{ params::DEFAULT_SWAP_FEE }>;
  type DefaultProtocolFeeDenominator = ConstU32<{ params::DEFAULT_PROTOCOL_FEE_DENOMINATOR }>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = SwapPairsBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct SwapPairsBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<AccountId> for SwapPairsBenchmarkHelper {
  fn create_asset(asset: AssetId) -> polkadot_sdk::sp_runtime::DispatchResult {
    let _ = Assets::force_create(frame_system::RawOrigin::Root.into(), asset, 1, true, 1);
    Ok(())
  }

  fn ensure_funded(
    who: &AccountId,
    asset: AssetId,
    amount: Balance,
  ) -> polkadot_sdk::sp_runtime::DispatchResult {
    Self::create_asset(asset)?;
    Assets::mint_into(asset, who, amount)?;
    Ok(())
  }
}

/// Move `amount_a`/`amount_b` into the pair account and mint shares to `who`.
pub fn add_liquidity(
  who: AccountId,
  pair_id: PairId,
  amount_a: Balance,
  amount_b: Balance,
) -> Result<Balance, polkadot_sdk::sp_runtime::DispatchError> {
  let pair = SwapPairs::pairs(pair_id).ok_or(crate::Error::<Test>::PairNotFound)?;
  let account = SwapPairs::pair_account(pair_id);
  <Assets as Mutate<AccountId>>::transfer(
    pair.token_a,
    &who,
    &account,
    amount_a,
    Preservation::Expendable,
  )?;
  <Assets as Mutate<AccountId>>::transfer(
    pair.token_b,
    &who,
    &account,
    amount_b,
    Preservation::Expendable,
  )?;
  SwapPairs::do_mint(&who, pair_id, &who)
}

/// Pay `amount_in` of `token_in` into the pair and take the quoted output.
pub fn swap_exact_in(
  who: AccountId,
  pair_id: PairId,
  token_in: AssetId,
  amount_in: Balance,
) -> Result<Balance, polkadot_sdk::sp_runtime::DispatchError> {
  let pair = SwapPairs::pairs(pair_id).ok_or(crate::Error::<Test>::PairNotFound)?;
  let amount_out = SwapPairs::quote_swap(pair_id, token_in, amount_in)?;
  let account = SwapPairs::pair_account(pair_id);
  <Assets as Mutate<AccountId>>::transfer(
    token_in,
    &who,
    &account,
    amount_in,
    Preservation::Expendable,
  )?;
  let (out_a, out_b) = if token_in == pair.token_a {
    (0, amount_out)
  } else {
    (amount_out, 0)
  };
  SwapPairs::do_swap(&who, pair_id, out_a, out_b, &who)?;
  Ok(amount_out)
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_balances::GenesisConfig::<Test> {
    balances: alloc::vec![(ALICE, 1_000), (BOB, 1_000)],
    dev_accounts: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  polkadot_sdk::pallet_assets::GenesisConfig::<Test> {
    // (id, owner, sufficient, min_balance)
    assets: alloc::vec![
      (TOKEN_0, ALICE, true, 1),
      (TOKEN_1, ALICE, true, 1),
      (TOKEN_2, ALICE, true, 1),
    ],
    metadata: alloc::vec![],
    accounts: alloc::vec![
      (TOKEN_0, ALICE, INITIAL_BALANCE),
      (TOKEN_1, ALICE, INITIAL_BALANCE),
      (TOKEN_2, ALICE, INITIAL_BALANCE),
      (TOKEN_0, BOB, INITIAL_BALANCE),
      (TOKEN_1, BOB, INITIAL_BALANCE),
      (TOKEN_2, BOB, INITIAL_BALANCE),
    ],
    reserves: alloc::vec![],
    next_asset_id: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  pallet_swap_pairs::GenesisConfig::<Test> {
    fee_to: None,
    protocol_fee_denominator: None,
    pairs: alloc::vec![(TOKEN_1, TOKEN_0)],
  }
  .assimilate_storage(&mut t)
  .unwrap();

  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| System::set_block_number(1));
  ext
}
