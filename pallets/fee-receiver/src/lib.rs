//! Fee Receiver Pallet
//!
//! Custodian of the protocol fee shares minted by the swap pairs. Anyone may trigger a
//! harvest of a list of pairs: the accrued shares are redeemed, every redeemed token is
//! sold into the base asset through its (token, base) pair, and the base asset total is
//! split between the two target assets. Target A goes to sink A; target B is halved
//! between sink B and the burn account.
//!
//! A harvest is all-or-nothing: any failing pair aborts the whole batch.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod adapter;
pub mod types;
pub use adapter::SwapPairsAdapter;
pub use types::{PairRegistry, PairSnapshot, Receivers, Route};

#[cfg(test)]
pub mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

pub const LOG_TARGET: &str = "runtime::fee-receiver";

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
  /// Prepare `n` routable pairs with accrued protocol fee owned by `collector`
  /// and liquid target pairs. Returns the pairs to harvest.
  fn setup_harvest(
    collector: &AccountId,
    n: u32,
  ) -> Result<alloc::vec::Vec<primitives::PairId>, frame::deps::sp_runtime::DispatchError>;
}

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, WeightInfo};
  use crate::types::{PairRegistry, Receivers, Route};
  use frame::deps::{
    frame_support::traits::{
      ConstU64,
      fungibles::{Inspect, Mutate},
      tokens::Preservation,
    },
    sp_runtime::traits::AccountIdConversion,
  };
  use frame::prelude::*;
  use primitives::{
    AssetId, Balance, PairId, UnroutablePolicy,
    amm::{self, MathError},
    ecosystem::params::{
      DEFAULT_SPLIT_PROPORTION, MAX_SPLIT_PROPORTION, SPLIT_PROPORTION_DENOMINATOR,
      SWAP_FEE_DENOMINATOR,
    },
  };

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Token ledger of redeemed, converted and distributed amounts
    type Assets: Inspect<Self::AccountId, AssetId = AssetId, Balance = Balance>
      + Mutate<Self::AccountId, AssetId = AssetId, Balance = Balance>;

    /// Liquidity pairs the fee shares are redeemed from and swapped through
    type Pairs: PairRegistry<Self::AccountId>;

    /// Derives the custody account holding fee shares between harvests
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Asset every redeemed token is converted into
    #[pallet::constant]
    type BaseAsset: Get<AssetId>;

    /// Target asset sent in full to sink A
    #[pallet::constant]
    type TargetAssetA: Get<AssetId>;

    /// Target asset split between sink B and the burn account
    #[pallet::constant]
    type TargetAssetB: Get<AssetId>;

    /// Unrecoverable account receiving the burned half of target B
    #[pallet::constant]
    type BurnAccount: Get<Self::AccountId>;

    /// Maximum number of pairs per harvest call
    #[pallet::constant]
    type MaxPairsPerHarvest: Get<u32>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId>;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(PhantomData<T>);

  /// Single writer of the harvester configuration
  #[pallet::storage]
  #[pallet::getter(fn owner)]
  pub type Owner<T: Config> = StorageValue<_, T::AccountId>;

  #[pallet::storage]
  #[pallet::getter(fn receivers)]
  pub type ReceiversConfig<T: Config> = StorageValue<_, Receivers<T::AccountId>>;

  /// Share of the base asset converted into target A, out of `SPLIT_PROPORTION_DENOMINATOR`
  #[pallet::storage]
  #[pallet::getter(fn split_proportion)]
  pub type SplitProportion<T: Config> =
    StorageValue<_, u64, ValueQuery, ConstU64<DEFAULT_SPLIT_PROPORTION>>;

  #[pallet::storage]
  #[pallet::getter(fn unroutable_policy)]
  pub type Policy<T: Config> = StorageValue<_, UnroutablePolicy, ValueQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// Protocol fee shares of a pair were redeemed
    PairHarvested {
      pair_id: PairId,
      shares: Balance,
      amount_a: Balance,
      amount_b: Balance,
    },
    /// A redeemed token was sold into the base asset
    TokenConverted {
      token: AssetId,
      pair_id: PairId,
      amount_in: Balance,
      base_out: Balance,
    },
    /// An unroutable token was handed to the fallback receiver
    TokenForwarded {
      token: AssetId,
      amount: Balance,
      to: T::AccountId,
    },
    /// The batch base total was converted and paid out
    FeeDistributed {
      base_total: Balance,
      target_a_out: Balance,
      target_b_to_sink: Balance,
      target_b_burned: Balance,
    },
    ReceiversChanged {
      sink_a: T::AccountId,
      sink_b: T::AccountId,
      fallback: Option<T::AccountId>,
    },
    SplitProportionChanged { old: u64, new: u64 },
    OwnershipTransferred {
      old: T::AccountId,
      new: T::AccountId,
    },
    UnroutablePolicyChanged { policy: UnroutablePolicy },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Caller is not the owner
    Forbidden,
    /// Split proportion above 50%
    ProportionTooHigh,
    /// A pair on the conversion path has no reserves or yields nothing
    InsufficientLiquidity,
    /// A redeemed token has no pair against the base asset
    NoRouteToBaseAsset,
    /// No pair with this id
    UnknownPair,
    /// Sinks have not been configured
    ReceiversNotSet,
    /// Forwarding policy active without a fallback receiver
    FallbackReceiverNotSet,
    /// Arithmetic overflow occurred
    ArithmeticOverflow,
  }

  impl<T> From<MathError> for Error<T> {
    fn from(error: MathError) -> Self {
      match error {
        MathError::InsufficientLiquidity
        | MathError::InsufficientInputAmount
        | MathError::InsufficientLiquidityMinted
        | MathError::InsufficientLiquidityBurned => Error::<T>::InsufficientLiquidity,
        MathError::Overflow | MathError::DivisionByZero | MathError::InvalidFee => {
          Error::<T>::ArithmeticOverflow
        }
      }
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Harvest the protocol fee of `pairs` and distribute it. Permissionless.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::take_protocol_fee(pairs.len() as u32))]
    pub fn take_protocol_fee(
      origin: OriginFor<T>,
      pairs: BoundedVec<PairId, T::MaxPairsPerHarvest>,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      log::debug!(
        target: LOG_TARGET,
        "harvest of {} pairs requested by {:?}",
        pairs.len(),
        who
      );
      Self::do_take_protocol_fee(&pairs)
    }

    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::change_receivers())]
    pub fn change_receivers(
      origin: OriginFor<T>,
      sink_a: T::AccountId,
      sink_b: T::AccountId,
      fallback: Option<T::AccountId>,
    ) -> DispatchResult {
      Self::ensure_owner(origin)?;
      ReceiversConfig::<T>::put(Receivers {
        sink_a: sink_a.clone(),
        sink_b: sink_b.clone(),
        fallback: fallback.clone(),
      });
      Self::deposit_event(Event::ReceiversChanged {
        sink_a,
        sink_b,
        fallback,
      });
      Ok(())
    }

    /// Set the share of the base asset converted into target A. At most 50%.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::change_split_honey_proportion())]
    pub fn change_split_honey_proportion(origin: OriginFor<T>, proportion: u64) -> DispatchResult {
      Self::ensure_owner(origin)?;
      ensure!(
        proportion <= MAX_SPLIT_PROPORTION,
        Error::<T>::ProportionTooHigh
      );
      let old = SplitProportion::<T>::get();
      SplitProportion::<T>::put(proportion);
      Self::deposit_event(Event::SplitProportionChanged {
        old,
        new: proportion,
      });
      Ok(())
    }

    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::transfer_ownership())]
    pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
      let old = Self::ensure_owner(origin)?;
      Owner::<T>::put(new_owner.clone());
      Self::deposit_event(Event::OwnershipTransferred {
        old,
        new: new_owner,
      });
      Ok(())
    }

    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::set_unroutable_policy())]
    pub fn set_unroutable_policy(origin: OriginFor<T>, policy: UnroutablePolicy) -> DispatchResult {
      Self::ensure_owner(origin)?;
      Policy::<T>::put(policy);
      Self::deposit_event(Event::UnroutablePolicyChanged { policy });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// Custody account: holds fee shares and transient balances during a harvest
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
      let who = ensure_signed(origin)?;
      ensure!(
        Owner::<T>::get().as_ref() == Some(&who),
        Error::<T>::Forbidden
      );
      Ok(who)
    }

    /// How `token` reaches the base asset.
    ///
    /// Fails with `InsufficientLiquidity` when the (token, base) pair exists but is empty.
    pub fn resolve_route(token: AssetId) -> Result<Route, DispatchError> {
      let base = T::BaseAsset::get();
      if token == base {
        return Ok(Route::Identity);
      }
      let Some(pair_id) = T::Pairs::find_pair(token, base) else {
        return Ok(Route::Unroutable);
      };
      let pair = T::Pairs::pair(pair_id).ok_or(Error::<T>::UnknownPair)?;
      ensure!(!pair.is_empty(), Error::<T>::InsufficientLiquidity);
      Ok(Route::ViaPair(pair_id))
    }

    pub fn do_take_protocol_fee(pairs: &[PairId]) -> DispatchResult {
      let receivers = ReceiversConfig::<T>::get().ok_or(Error::<T>::ReceiversNotSet)?;
      let custody = Self::account_id();

      let mut base_total: Balance = 0;
      for &pair_id in pairs {
        let pair = T::Pairs::pair(pair_id).ok_or(Error::<T>::UnknownPair)?;
        let shares = T::Pairs::share_balance(pair_id, &custody);
        if shares == 0 {
          log::debug!(target: LOG_TARGET, "pair {pair_id}: no fee shares, skipped");
          continue;
        }
        let (amount_a, amount_b) = T::Pairs::burn(&custody, pair_id, shares, &custody)?;
        Self::deposit_event(Event::PairHarvested {
          pair_id,
          shares,
          amount_a,
          amount_b,
        });
        for (token, amount) in [(pair.token_a, amount_a), (pair.token_b, amount_b)] {
          let converted = Self::convert_to_base(token, amount, &receivers)?;
          base_total = base_total
            .checked_add(converted)
            .ok_or(Error::<T>::ArithmeticOverflow)?;
        }
      }

      if base_total == 0 {
        return Ok(());
      }
      Self::distribute(base_total, &receivers)
    }

    /// Sell `amount` of `token` held in custody into the base asset.
    fn convert_to_base(
      token: AssetId,
      amount: Balance,
      receivers: &Receivers<T::AccountId>,
    ) -> Result<Balance, DispatchError> {
      if amount == 0 {
        return Ok(0);
      }
      match Self::resolve_route(token)? {
        Route::Identity => Ok(amount),
        Route::ViaPair(pair_id) => {
          let base_out = Self::swap_in_custody(pair_id, token, amount, &Self::account_id())?;
          Self::deposit_event(Event::TokenConverted {
            token,
            pair_id,
            amount_in: amount,
            base_out,
          });
          Ok(base_out)
        }
        Route::Unroutable => match Policy::<T>::get() {
          UnroutablePolicy::Reject => {
            log::warn!(
              target: LOG_TARGET,
              "token {token} has no pair against base asset, harvest rejected"
            );
            Err(Error::<T>::NoRouteToBaseAsset.into())
          }
          UnroutablePolicy::ForwardToFallback => {
            let fallback = receivers
              .fallback
              .clone()
              .ok_or(Error::<T>::FallbackReceiverNotSet)?;
            log::warn!(
              target: LOG_TARGET,
              "token {token} has no pair against base asset, forwarding {amount} to fallback"
            );
            T::Assets::transfer(
              token,
              &Self::account_id(),
              &fallback,
              amount,
              Preservation::Expendable,
            )?;
            Self::deposit_event(Event::TokenForwarded {
              token,
              amount,
              to: fallback,
            });
            Ok(0)
          }
        },
      }
    }

    /// Split the base total between the targets and pay the sinks and the burn account.
    fn distribute(base_total: Balance, receivers: &Receivers<T::AccountId>) -> DispatchResult {
      let (base_for_a, base_for_b) = amm::split_by_proportion(
        base_total,
        SplitProportion::<T>::get(),
        SPLIT_PROPORTION_DENOMINATOR,
      )
      .map_err(Error::<T>::from)?;

      let target_a_out = Self::buy_target(T::TargetAssetA::get(), base_for_a, &receivers.sink_a)?;

      let custody = Self::account_id();
      let target_b = T::TargetAssetB::get();
      let target_b_out = Self::buy_target(target_b, base_for_b, &custody)?;
      let (target_b_to_sink, target_b_burned) = amm::split_in_halves(target_b_out);
      Self::pay_out(target_b, &custody, &receivers.sink_b, target_b_to_sink)?;
      Self::pay_out(target_b, &custody, &T::BurnAccount::get(), target_b_burned)?;

      log::debug!(
        target: LOG_TARGET,
        "distributed {base_total} base: {target_a_out} to sink A, \
         {target_b_to_sink} to sink B, {target_b_burned} burned"
      );
      Self::deposit_event(Event::FeeDistributed {
        base_total,
        target_a_out,
        target_b_to_sink,
        target_b_burned,
      });
      Ok(())
    }

    /// Convert `base_amount` held in custody into `target`, delivered to `to`.
    fn buy_target(
      target: AssetId,
      base_amount: Balance,
      to: &T::AccountId,
    ) -> Result<Balance, DispatchError> {
      if base_amount == 0 {
        return Ok(0);
      }
      let base = T::BaseAsset::get();
      match Self::resolve_route(target)? {
        Route::Identity => {
          Self::pay_out(base, &Self::account_id(), to, base_amount)?;
          Ok(base_amount)
        }
        Route::ViaPair(pair_id) => Self::swap_in_custody(pair_id, base, base_amount, to),
        Route::Unroutable => Err(Error::<T>::NoRouteToBaseAsset.into()),
      }
    }

    /// Sell `amount_in` of `token_in` from custody through `pair_id`, output to `to`.
    fn swap_in_custody(
      pair_id: PairId,
      token_in: AssetId,
      amount_in: Balance,
      to: &T::AccountId,
    ) -> Result<Balance, DispatchError> {
      let pair = T::Pairs::pair(pair_id).ok_or(Error::<T>::UnknownPair)?;
      let (reserve_in, reserve_out) = pair
        .reserves_for(token_in)
        .ok_or(Error::<T>::UnknownPair)?;
      let amount_out = amm::swap_output(
        reserve_in,
        reserve_out,
        amount_in,
        pair.swap_fee,
        SWAP_FEE_DENOMINATOR,
      )
      .map_err(Error::<T>::from)?;
      ensure!(amount_out > 0, Error::<T>::InsufficientLiquidity);

      let custody = Self::account_id();
      T::Assets::transfer(
        token_in,
        &custody,
        &pair.account,
        amount_in,
        Preservation::Expendable,
      )?;
      let (amount_out_a, amount_out_b) = pair.outputs_for(token_in, amount_out);
      T::Pairs::swap(&custody, pair_id, amount_out_a, amount_out_b, to)?;
      Ok(amount_out)
    }

    fn pay_out(
      token: AssetId,
      from: &T::AccountId,
      to: &T::AccountId,
      amount: Balance,
    ) -> DispatchResult {
      if amount == 0 {
        return Ok(());
      }
      T::Assets::transfer(token, from, to, amount, Preservation::Expendable)?;
      Ok(())
    }
  }

  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    pub owner: Option<T::AccountId>,
    pub sink_a: Option<T::AccountId>,
    pub sink_b: Option<T::AccountId>,
    pub fallback: Option<T::AccountId>,
    /// Overrides the 50% default when set
    pub split_proportion: Option<u64>,
    pub policy: UnroutablePolicy,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      // Custody account survives zero native balance via provider reference
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
      if let Some(owner) = &self.owner {
        Owner::<T>::put(owner);
      }
      if let (Some(sink_a), Some(sink_b)) = (&self.sink_a, &self.sink_b) {
        ReceiversConfig::<T>::put(Receivers {
          sink_a: sink_a.clone(),
          sink_b: sink_b.clone(),
          fallback: self.fallback.clone(),
        });
      }
      if let Some(proportion) = self.split_proportion {
        assert!(
          proportion <= MAX_SPLIT_PROPORTION,
          "split proportion above 50%"
        );
        SplitProportion::<T>::put(proportion);
      }
      Policy::<T>::put(self.policy);
    }
  }
}
