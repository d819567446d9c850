extern crate alloc;

use crate as pallet_fee_receiver;
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl,
  traits::{
    ConstU32, ConstU128, Get,
    fungibles::Mutate,
    tokens::Preservation,
  },
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage, DispatchError,
  testing::H256,
  traits::{AccountIdConversion, BlakeTwo256, IdentityLookup},
};
use primitives::{
  AssetId, Balance, PairId, UnroutablePolicy,
  ecosystem::{pallet_ids, params},
  well_known,
};

pub type AccountId = u64;

pub const ALICE: AccountId = 1;
pub const BOB: AccountId = 2;
pub const OWNER: AccountId = 3;
pub const SINK_A: AccountId = 4;
pub const SINK_B: AccountId = 5;
pub const FALLBACK: AccountId = 6;
pub const OTHER: AccountId = 7;
pub const BURN: AccountId = 999;

pub const TOKEN_0: AssetId = 1;
pub const TOKEN_1: AssetId = 2;
/// Traded only against each other, never against the base asset
pub const TOKEN_A: AssetId = 3;
pub const TOKEN_B: AssetId = 4;
pub const WETH: AssetId = well_known::WRAPPED_NATIVE;
pub const HONEY: AssetId = well_known::HONEY;
pub const HSF: AssetId = well_known::HSF;

pub const UNIT: Balance = 1_000_000_000_000_000_000;

// Pairs registered at genesis, in id order
pub const PAIR_0_1: PairId = 0;
pub const PAIR_0_WETH: PairId = 1;
pub const PAIR_1_WETH: PairId = 2;
pub const PAIR_WETH_HONEY: PairId = 3;
pub const PAIR_WETH_HSF: PairId = 4;
pub const PAIR_A_B: PairId = 5;

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    Assets: polkadot_sdk::pallet_assets,
    SwapPairs: pallet_swap_pairs,
    FeeReceiver: pallet_fee_receiver,
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
  pub const FeeReceiverPalletId: PalletId = PalletId(*pallet_ids::FEE_RECEIVER_PALLET_ID);
  pub const BaseAsset: AssetId = WETH;
  pub const TargetAssetA: AssetId = HONEY;
  pub const TargetAssetB: AssetId = HSF;
  pub const BurnAccount: AccountId = BURN;
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
  type BenchmarkHelper = BenchmarkAssets;
}

impl pallet_fee_receiver::Config for Test {
  type Assets = Assets;
  type Pairs = pallet_fee_receiver::SwapPairsAdapter<Test>;
  type PalletId = FeeReceiverPalletId;
  type BaseAsset = BaseAsset;
  type TargetAssetA = TargetAssetA;
  type TargetAssetB = TargetAssetB;
  type BurnAccount = BurnAccount;
  type MaxPairsPerHarvest = ConstU32<{ params::MAX_PAIRS_PER_HARVEST }>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = BenchmarkAssets;
}

pub fn fee_receiver_account() -> AccountId {
  FeeReceiverPalletId::get().into_account_truncating()
}

/// Deposit `amount_a`/`amount_b` (in the pair's sorted token order) and mint to ALICE.
pub fn add_liquidity(
  pair_id: PairId,
  amount_a: Balance,
  amount_b: Balance,
) -> Result<Balance, DispatchError> {
  let pair = SwapPairs::pairs(pair_id).ok_or(pallet_swap_pairs::Error::<Test>::PairNotFound)?;
  let account = SwapPairs::pair_account(pair_id);
  <Assets as Mutate<AccountId>>::transfer(
    pair.token_a,
    &ALICE,
    &account,
    amount_a,
    Preservation::Expendable,
  )?;
  <Assets as Mutate<AccountId>>::transfer(
    pair.token_b,
    &ALICE,
    &account,
    amount_b,
    Preservation::Expendable,
  )?;
  SwapPairs::do_mint(&ALICE, pair_id, &ALICE)
}

/// Sell `amount_in` of `token_in` from ALICE through the pair at the quoted price.
pub fn swap_exact_in(
  pair_id: PairId,
  token_in: AssetId,
  amount_in: Balance,
) -> Result<Balance, DispatchError> {
  let pair = SwapPairs::pairs(pair_id).ok_or(pallet_swap_pairs::Error::<Test>::PairNotFound)?;
  let amount_out = SwapPairs::quote_swap(pair_id, token_in, amount_in)?;
  <Assets as Mutate<AccountId>>::transfer(
    token_in,
    &ALICE,
    &SwapPairs::pair_account(pair_id),
    amount_in,
    Preservation::Expendable,
  )?;
  let (out_a, out_b) = if token_in == pair.token_a {
    (0, amount_out)
  } else {
    (amount_out, 0)
  };
  SwapPairs::do_swap(&ALICE, pair_id, out_a, out_b, &ALICE)?;
  Ok(amount_out)
}

/// Seed a pair with 100/100, trade 10 each way, then deposit 10/10 so the accrued
/// protocol fee is minted to the fee receiver.
pub fn accrue_protocol_fee(pair_id: PairId) -> Result<Balance, DispatchError> {
  let pair = SwapPairs::pairs(pair_id).ok_or(pallet_swap_pairs::Error::<Test>::PairNotFound)?;
  add_liquidity(pair_id, 100 * UNIT, 100 * UNIT)?;
  swap_exact_in(pair_id, pair.token_a, 10 * UNIT)?;
  swap_exact_in(pair_id, pair.token_b, 10 * UNIT)?;
  add_liquidity(pair_id, 10 * UNIT, 10 * UNIT)?;
  Ok(SwapPairs::share_balance(pair_id, fee_receiver_account()))
}

pub struct BenchmarkAssets;

#[cfg(feature = "runtime-benchmarks")]
impl pallet_swap_pairs::BenchmarkHelper<AccountId> for BenchmarkAssets {
  fn create_asset(asset: AssetId) -> polkadot_sdk::sp_runtime::DispatchResult {
    let _ = Assets::force_create(frame_system::RawOrigin::Root.into(), asset, ALICE, true, 1);
    Ok(())
  }

  fn ensure_funded(
    who: &AccountId,
    asset: AssetId,
    amount: Balance,
  ) -> polkadot_sdk::sp_runtime::DispatchResult {
    <Self as pallet_swap_pairs::BenchmarkHelper<AccountId>>::create_asset(asset)?;
    Assets::mint_into(asset, who, amount)?;
    Ok(())
  }
}

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<AccountId> for BenchmarkAssets {
  fn setup_harvest(
    _collector: &AccountId,
    n: u32,
  ) -> Result<alloc::vec::Vec<PairId>, DispatchError> {
    add_liquidity(PAIR_WETH_HONEY, 1_000 * UNIT, 1_000 * UNIT)?;
    add_liquidity(PAIR_WETH_HSF, 1_000 * UNIT, 1_000 * UNIT)?;
    let mut pairs = alloc::vec::Vec::new();
    for i in 0..n {
      let token = 100 + i;
      <Self as pallet_swap_pairs::BenchmarkHelper<AccountId>>::ensure_funded(
        &ALICE,
        token,
        1_000 * UNIT,
      )?;
      let pair_id = match SwapPairs::pair_id(token, WETH) {
        Some(pair_id) => pair_id,
        None => SwapPairs::do_create_pair(token, WETH)?,
      };
      accrue_protocol_fee(pair_id)?;
      pairs.push(pair_id);
    }
    Ok(pairs)
  }
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  new_test_ext_with_policy(UnroutablePolicy::Reject)
}

pub fn new_test_ext_with_policy(policy: UnroutablePolicy) -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_balances::GenesisConfig::<Test> {
    balances: alloc::vec![(ALICE, 1_000), (OWNER, 1_000)],
    dev_accounts: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  let tokens = [TOKEN_0, TOKEN_1, TOKEN_A, TOKEN_B, WETH, HONEY, HSF];
  polkadot_sdk::pallet_assets::GenesisConfig::<Test> {
    // (id, owner, sufficient, min_balance)
    assets: tokens.iter().map(|id| (*id, ALICE, true, 1)).collect(),
    metadata: alloc::vec![],
    accounts: tokens
      .iter()
      .map(|id| (*id, ALICE, 1_000_000 * UNIT))
      .collect(),
    reserves: alloc::vec![],
    next_asset_id: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  pallet_swap_pairs::GenesisConfig::<Test> {
    fee_to: Some(fee_receiver_account()),
    protocol_fee_denominator: None,
    pairs: alloc::vec![
      (TOKEN_0, TOKEN_1),
      (TOKEN_0, WETH),
      (TOKEN_1, WETH),
      (WETH, HONEY),
      (WETH, HSF),
      (TOKEN_A, TOKEN_B),
    ],
  }
  .assimilate_storage(&mut t)
  .unwrap();

  pallet_fee_receiver::GenesisConfig::<Test> {
    owner: Some(OWNER),
    sink_a: Some(SINK_A),
    sink_b: Some(SINK_B),
    fallback: Some(FALLBACK),
    split_proportion: None,
    policy,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| System::set_block_number(1));
  ext
}
