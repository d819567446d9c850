//! Swap Pairs Pallet
//!
//! Constant-product liquidity pairs over `pallet-assets` tokens, plus the small factory
//! that registers them and holds the protocol fee configuration.
//!
//! Deposits follow the "transfer then call" pattern: tokens are first moved to the pair
//! account and `mint`/`swap` price whatever the account holds above its recorded
//! reserves. A protocol fee, when `FeeTo` is set, accrues lazily: every `mint` and
//! `burn` first mints the collector its share of the invariant growth since the last
//! liquidity event.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

#[cfg(test)]
pub mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

pub const LOG_TARGET: &str = "runtime::swap-pairs";

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
  fn create_asset(asset: primitives::AssetId) -> frame::deps::sp_runtime::DispatchResult;
  fn ensure_funded(
    who: &AccountId,
    asset: primitives::AssetId,
    amount: primitives::Balance,
  ) -> frame::deps::sp_runtime::DispatchResult;
}

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, WeightInfo};
  use alloc::vec::Vec;
  use frame::deps::{
    frame_support::traits::{
      fungibles::{Inspect, Mutate},
      tokens::Preservation,
    },
    sp_runtime::traits::TrailingZeroInput,
  };
  use frame::prelude::*;
  use polkadot_sdk::sp_io::hashing::blake2_256;
  use primitives::{
    AssetId, Balance, PairId,
    amm::{self, MathError},
    ecosystem::params::{MAX_SWAP_FEE, SWAP_FEE_DENOMINATOR},
    sorted_pair,
  };

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Token ledger the pairs hold their reserves in
    type Assets: Inspect<Self::AccountId, AssetId = AssetId, Balance = Balance>
      + Mutate<Self::AccountId, AssetId = AssetId, Balance = Balance>;

    /// Origin allowed to change the protocol fee configuration and pair swap fees
    type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    /// Seed for pair account derivation
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Shares locked forever on the first deposit into a pair
    #[pallet::constant]
    type MinimumLiquidity: Get<Balance>;

    /// Swap fee (out of 10_000) assigned to new pairs
    #[pallet::constant]
    type DefaultSwapFee: Get<u32>;

    /// Protocol fee denominator used until governance sets one
    #[pallet::constant]
    type DefaultProtocolFeeDenominator: Get<u32>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId>;
  }

  /// State of one liquidity pair. `token_a < token_b` always holds.
  #[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
  pub struct PairInfo {
    pub token_a: AssetId,
    pub token_b: AssetId,
    /// Balances of the pair account as of the last mint, burn, swap or sync
    pub reserve_a: Balance,
    pub reserve_b: Balance,
    /// Outstanding shares, including the locked minimum liquidity
    pub total_shares: Balance,
    /// `floor(sqrt(reserve_a * reserve_b))` after the last liquidity event while the
    /// protocol fee was on, zero otherwise
    pub last_invariant_root: Balance,
    /// Swap fee out of `SWAP_FEE_DENOMINATOR`
    pub swap_fee: u32,
  }

  impl PairInfo {
    /// `(reserve_in, reserve_out)` when swapping `token_in` through this pair.
    pub fn reserves_for(&self, token_in: AssetId) -> Option<(Balance, Balance)> {
      if token_in == self.token_a {
        Some((self.reserve_a, self.reserve_b))
      } else if token_in == self.token_b {
        Some((self.reserve_b, self.reserve_a))
      } else {
        None
      }
    }

    /// The token on the other side of `token`.
    pub fn other(&self, token: AssetId) -> Option<AssetId> {
      if token == self.token_a {
        Some(self.token_b)
      } else if token == self.token_b {
        Some(self.token_a)
      } else {
        None
      }
    }
  }

  #[pallet::pallet]
  pub struct Pallet<T>(PhantomData<T>);

  /// Registered pairs
  #[pallet::storage]
  #[pallet::getter(fn pairs)]
  pub type Pairs<T: Config> = StorageMap<_, Twox64Concat, PairId, PairInfo>;

  /// Sorted token pair -> pair id
  #[pallet::storage]
  pub type PairIndex<T: Config> =
    StorageDoubleMap<_, Twox64Concat, AssetId, Twox64Concat, AssetId, PairId>;

  #[pallet::storage]
  pub type NextPairId<T: Config> = StorageValue<_, PairId, ValueQuery>;

  /// Per-account share ledger of every pair
  #[pallet::storage]
  #[pallet::getter(fn share_balance)]
  pub type ShareBalances<T: Config> = StorageDoubleMap<
    _,
    Twox64Concat,
    PairId,
    Blake2_128Concat,
    T::AccountId,
    Balance,
    ValueQuery,
  >;

  /// Protocol fee collector; `None` disables the protocol fee
  #[pallet::storage]
  #[pallet::getter(fn fee_to)]
  pub type FeeTo<T: Config> = StorageValue<_, T::AccountId>;

  /// The collector receives `1 / (denominator + 1)` of invariant growth
  #[pallet::storage]
  #[pallet::getter(fn protocol_fee_denominator)]
  pub type ProtocolFeeDenominator<T: Config> =
    StorageValue<_, u32, ValueQuery, T::DefaultProtocolFeeDenominator>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A pair was registered
    PairCreated {
      pair_id: PairId,
      token_a: AssetId,
      token_b: AssetId,
      account: T::AccountId,
    },
    /// Liquidity was added
    Minted {
      pair_id: PairId,
      who: T::AccountId,
      to: T::AccountId,
      amount_a: Balance,
      amount_b: Balance,
      shares: Balance,
    },
    /// Liquidity was removed
    Burned {
      pair_id: PairId,
      who: T::AccountId,
      to: T::AccountId,
      amount_a: Balance,
      amount_b: Balance,
      shares: Balance,
    },
    /// Tokens were swapped through a pair
    Swapped {
      pair_id: PairId,
      who: T::AccountId,
      to: T::AccountId,
      amount_in_a: Balance,
      amount_in_b: Balance,
      amount_out_a: Balance,
      amount_out_b: Balance,
    },
    /// Reserves now match the pair account balances
    Synced {
      pair_id: PairId,
      reserve_a: Balance,
      reserve_b: Balance,
    },
    /// Balance surplus over reserves was sent out
    Skimmed {
      pair_id: PairId,
      to: T::AccountId,
      amount_a: Balance,
      amount_b: Balance,
    },
    /// Accrued protocol fee was minted to the collector
    ProtocolFeeMinted {
      pair_id: PairId,
      to: T::AccountId,
      shares: Balance,
    },
    /// Shares moved between accounts
    SharesTransferred {
      pair_id: PairId,
      from: T::AccountId,
      to: T::AccountId,
      amount: Balance,
    },
    /// Protocol fee collector changed
    FeeToChanged { fee_to: Option<T::AccountId> },
    /// Protocol fee denominator changed
    ProtocolFeeDenominatorChanged { old: u32, new: u32 },
    /// Swap fee of a pair changed
    SwapFeeChanged { pair_id: PairId, old: u32, new: u32 },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Both tokens of a pair are the same
    IdenticalAssets,
    /// A pair for these tokens already exists
    PairExists,
    /// No pair with this id
    PairNotFound,
    /// Token is not one of the pair's tokens
    AssetNotInPair,
    /// A reserve is empty or an output would drain it
    InsufficientLiquidity,
    /// Deposit would mint zero shares
    InsufficientLiquidityMinted,
    /// Redemption would pay out zero of one token
    InsufficientLiquidityBurned,
    /// Nothing was paid into the pair
    InsufficientInputAmount,
    /// Both requested outputs are zero
    InsufficientOutputAmount,
    /// Fee-adjusted constant product decreased
    InvariantViolation,
    /// Share balance too low
    InsufficientShares,
    /// Recipient is the pair account itself
    InvalidRecipient,
    /// Swap fee above the allowed maximum
    InvalidSwapFee,
    /// Protocol fee denominator must be positive
    InvalidProtocolFeeDenominator,
    /// Arithmetic overflow occurred
    ArithmeticOverflow,
  }

  impl<T> From<MathError> for Error<T> {
    fn from(error: MathError) -> Self {
      match error {
        MathError::Overflow | MathError::DivisionByZero => Error::<T>::ArithmeticOverflow,
        MathError::InsufficientInputAmount => Error::<T>::InsufficientInputAmount,
        MathError::InsufficientLiquidity => Error::<T>::InsufficientLiquidity,
        MathError::InsufficientLiquidityMinted => Error::<T>::InsufficientLiquidityMinted,
        MathError::InsufficientLiquidityBurned => Error::<T>::InsufficientLiquidityBurned,
        MathError::InvalidFee => Error::<T>::InvalidSwapFee,
      }
    }
  }

  #[pallet::hooks]
  impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
    fn integrity_test() {
      assert!(
        T::DefaultSwapFee::get() <= MAX_SWAP_FEE,
        "default swap fee above MAX_SWAP_FEE"
      );
      assert!(
        T::DefaultProtocolFeeDenominator::get() > 0,
        "protocol fee denominator must be positive"
      );
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Register a pair for two distinct tokens. Permissionless.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::create_pair())]
    pub fn create_pair(origin: OriginFor<T>, token_a: AssetId, token_b: AssetId) -> DispatchResult {
      ensure_signed(origin)?;
      Self::do_create_pair(token_a, token_b)?;
      Ok(())
    }

    /// Mint shares to `to` for whatever the pair account holds above its reserves.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::mint())]
    pub fn mint(origin: OriginFor<T>, pair_id: PairId, to: T::AccountId) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_mint(&who, pair_id, &to)?;
      Ok(())
    }

    /// Burn `shares` of the caller and send the redeemed tokens to `to`.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::burn())]
    pub fn burn(
      origin: OriginFor<T>,
      pair_id: PairId,
      shares: Balance,
      to: T::AccountId,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_burn(&who, pair_id, shares, &to)?;
      Ok(())
    }

    /// Send the requested outputs to `to`, provided the input already paid into the pair
    /// keeps the fee-adjusted invariant.
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::swap())]
    pub fn swap(
      origin: OriginFor<T>,
      pair_id: PairId,
      amount_out_a: Balance,
      amount_out_b: Balance,
      to: T::AccountId,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_swap(&who, pair_id, amount_out_a, amount_out_b, &to)
    }

    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::transfer_shares())]
    pub fn transfer_shares(
      origin: OriginFor<T>,
      pair_id: PairId,
      to: T::AccountId,
      amount: Balance,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_transfer_shares(pair_id, &who, &to, amount)
    }

    /// Force reserves to match the pair account balances.
    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::sync())]
    pub fn sync(origin: OriginFor<T>, pair_id: PairId) -> DispatchResult {
      ensure_signed(origin)?;
      let mut pair = Pairs::<T>::get(pair_id).ok_or(Error::<T>::PairNotFound)?;
      let (balance_a, balance_b) = Self::pair_balances(pair_id, &pair);
      pair.reserve_a = balance_a;
      pair.reserve_b = balance_b;
      Pairs::<T>::insert(pair_id, pair);
      Self::deposit_event(Event::Synced {
        pair_id,
        reserve_a: balance_a,
        reserve_b: balance_b,
      });
      Ok(())
    }

    /// Send the balance surplus over reserves to `to`.
    #[pallet::call_index(6)]
    #[pallet::weight(T::WeightInfo::skim())]
    pub fn skim(origin: OriginFor<T>, pair_id: PairId, to: T::AccountId) -> DispatchResult {
      ensure_signed(origin)?;
      let pair = Pairs::<T>::get(pair_id).ok_or(Error::<T>::PairNotFound)?;
      let account = Self::pair_account(pair_id);
      ensure!(to != account, Error::<T>::InvalidRecipient);
      let (balance_a, balance_b) = Self::pair_balances(pair_id, &pair);
      let amount_a = balance_a.saturating_sub(pair.reserve_a);
      let amount_b = balance_b.saturating_sub(pair.reserve_b);
      Self::transfer_out(pair.token_a, &account, &to, amount_a)?;
      Self::transfer_out(pair.token_b, &account, &to, amount_b)?;
      Self::deposit_event(Event::Skimmed {
        pair_id,
        to,
        amount_a,
        amount_b,
      });
      Ok(())
    }

    /// Set or clear the protocol fee collector.
    #[pallet::call_index(7)]
    #[pallet::weight(T::WeightInfo::set_fee_to())]
    pub fn set_fee_to(origin: OriginFor<T>, fee_to: Option<T::AccountId>) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      FeeTo::<T>::set(fee_to.clone());
      Self::deposit_event(Event::FeeToChanged { fee_to });
      Ok(())
    }

    #[pallet::call_index(8)]
    #[pallet::weight(T::WeightInfo::set_protocol_fee_denominator())]
    pub fn set_protocol_fee_denominator(origin: OriginFor<T>, denominator: u32) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      ensure!(denominator > 0, Error::<T>::InvalidProtocolFeeDenominator);
      let old = ProtocolFeeDenominator::<T>::get();
      ProtocolFeeDenominator::<T>::put(denominator);
      Self::deposit_event(Event::ProtocolFeeDenominatorChanged {
        old,
        new: denominator,
      });
      Ok(())
    }

    #[pallet::call_index(9)]
    #[pallet::weight(T::WeightInfo::set_swap_fee())]
    pub fn set_swap_fee(origin: OriginFor<T>, pair_id: PairId, swap_fee: u32) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      ensure!(swap_fee <= MAX_SWAP_FEE, Error::<T>::InvalidSwapFee);
      let old = Pairs::<T>::try_mutate(pair_id, |maybe_pair| -> Result<u32, DispatchError> {
        let pair = maybe_pair.as_mut().ok_or(Error::<T>::PairNotFound)?;
        let old = pair.swap_fee;
        pair.swap_fee = swap_fee;
        Ok(old)
      })?;
      Self::deposit_event(Event::SwapFeeChanged {
        pair_id,
        old,
        new: swap_fee,
      });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// Account holding the reserves of `pair_id`.
    ///
    /// Derived from a hash of the pallet id and the pair id, so it never collides with
    /// another pair even when the account type is narrower than the hash.
    pub fn pair_account(pair_id: PairId) -> T::AccountId {
      let entropy = (T::PalletId::get(), pair_id).using_encoded(blake2_256);
      Decode::decode(&mut TrailingZeroInput::new(entropy.as_ref()))
        .expect("infinite length input; no invalid inputs for type; qed")
    }

    /// Pair registered for the unordered token pair, if any.
    pub fn pair_id(token_a: AssetId, token_b: AssetId) -> Option<PairId> {
      let (lower, higher) = sorted_pair(token_a, token_b);
      PairIndex::<T>::get(lower, higher)
    }

    pub fn do_create_pair(token_a: AssetId, token_b: AssetId) -> Result<PairId, DispatchError> {
      ensure!(token_a != token_b, Error::<T>::IdenticalAssets);
      let (token_a, token_b) = sorted_pair(token_a, token_b);
      ensure!(
        !PairIndex::<T>::contains_key(token_a, token_b),
        Error::<T>::PairExists
      );
      let pair_id = NextPairId::<T>::get();
      let next = pair_id
        .checked_add(1)
        .ok_or(Error::<T>::ArithmeticOverflow)?;
      Pairs::<T>::insert(
        pair_id,
        PairInfo {
          token_a,
          token_b,
          reserve_a: 0,
          reserve_b: 0,
          total_shares: 0,
          last_invariant_root: 0,
          swap_fee: T::DefaultSwapFee::get(),
        },
      );
      PairIndex::<T>::insert(token_a, token_b, pair_id);
      NextPairId::<T>::put(next);
      let account = Self::pair_account(pair_id);
      // Pair accounts must accept non-sufficient tokens without holding native balance
      frame_system::Pallet::<T>::inc_providers(&account);
      log::debug!(
        target: LOG_TARGET,
        "created pair {pair_id} for tokens ({token_a}, {token_b})"
      );
      Self::deposit_event(Event::PairCreated {
        pair_id,
        token_a,
        token_b,
        account,
      });
      Ok(pair_id)
    }

    /// Mint shares for the deposit already sitting in the pair account.
    pub fn do_mint(
      who: &T::AccountId,
      pair_id: PairId,
      to: &T::AccountId,
    ) -> Result<Balance, DispatchError> {
      let mut pair = Pairs::<T>::get(pair_id).ok_or(Error::<T>::PairNotFound)?;
      let (balance_a, balance_b) = Self::pair_balances(pair_id, &pair);
      let amount_a = balance_a
        .checked_sub(pair.reserve_a)
        .ok_or(Error::<T>::ArithmeticOverflow)?;
      let amount_b = balance_b
        .checked_sub(pair.reserve_b)
        .ok_or(Error::<T>::ArithmeticOverflow)?;

      let fee_on = Self::mint_protocol_fee(pair_id, &mut pair)?;
      let shares = if pair.total_shares == 0 {
        let minimum = T::MinimumLiquidity::get();
        let shares =
          amm::initial_shares(amount_a, amount_b, minimum).map_err(Error::<T>::from)?;
        // Counted in the supply but owned by nobody
        pair.total_shares = minimum;
        shares
      } else {
        amm::proportional_shares(
          amount_a,
          amount_b,
          pair.reserve_a,
          pair.reserve_b,
          pair.total_shares,
        )
        .map_err(Error::<T>::from)?
      };
      Self::mint_shares(pair_id, &mut pair, to, shares)?;

      pair.reserve_a = balance_a;
      pair.reserve_b = balance_b;
      Self::record_invariant(&mut pair, fee_on);
      Pairs::<T>::insert(pair_id, pair);

      log::debug!(
        target: LOG_TARGET,
        "pair {pair_id}: minted {shares} shares for deposit ({amount_a}, {amount_b})"
      );
      Self::deposit_event(Event::Minted {
        pair_id,
        who: who.clone(),
        to: to.clone(),
        amount_a,
        amount_b,
        shares,
      });
      Ok(shares)
    }

    /// Burn `shares` held by `who` and send the pro-rata balances to `to`.
    pub fn do_burn(
      who: &T::AccountId,
      pair_id: PairId,
      shares: Balance,
      to: &T::AccountId,
    ) -> Result<(Balance, Balance), DispatchError> {
      ensure!(shares > 0, Error::<T>::InsufficientLiquidityBurned);
      let mut pair = Pairs::<T>::get(pair_id).ok_or(Error::<T>::PairNotFound)?;
      ensure!(
        ShareBalances::<T>::get(pair_id, who) >= shares,
        Error::<T>::InsufficientShares
      );
      let account = Self::pair_account(pair_id);
      ensure!(*to != account, Error::<T>::InvalidRecipient);
      let (balance_a, balance_b) = Self::pair_balances(pair_id, &pair);

      let fee_on = Self::mint_protocol_fee(pair_id, &mut pair)?;
      let (amount_a, amount_b) =
        amm::redeem_amounts(shares, balance_a, balance_b, pair.total_shares)
          .map_err(Error::<T>::from)?;
      Self::burn_shares(pair_id, &mut pair, who, shares)?;
      Self::transfer_out(pair.token_a, &account, to, amount_a)?;
      Self::transfer_out(pair.token_b, &account, to, amount_b)?;

      let (balance_a, balance_b) = Self::pair_balances(pair_id, &pair);
      pair.reserve_a = balance_a;
      pair.reserve_b = balance_b;
      Self::record_invariant(&mut pair, fee_on);
      Pairs::<T>::insert(pair_id, pair);

      log::debug!(
        target: LOG_TARGET,
        "pair {pair_id}: burned {shares} shares for ({amount_a}, {amount_b})"
      );
      Self::deposit_event(Event::Burned {
        pair_id,
        who: who.clone(),
        to: to.clone(),
        amount_a,
        amount_b,
        shares,
      });
      Ok((amount_a, amount_b))
    }

    /// Pay out the requested amounts and check the input already transferred in.
    pub fn do_swap(
      who: &T::AccountId,
      pair_id: PairId,
      amount_out_a: Balance,
      amount_out_b: Balance,
      to: &T::AccountId,
    ) -> DispatchResult {
      ensure!(
        amount_out_a > 0 || amount_out_b > 0,
        Error::<T>::InsufficientOutputAmount
      );
      let mut pair = Pairs::<T>::get(pair_id).ok_or(Error::<T>::PairNotFound)?;
      ensure!(
        amount_out_a < pair.reserve_a && amount_out_b < pair.reserve_b,
        Error::<T>::InsufficientLiquidity
      );
      let account = Self::pair_account(pair_id);
      ensure!(*to != account, Error::<T>::InvalidRecipient);

      Self::transfer_out(pair.token_a, &account, to, amount_out_a)?;
      Self::transfer_out(pair.token_b, &account, to, amount_out_b)?;
      let (balance_a, balance_b) = Self::pair_balances(pair_id, &pair);

      let amount_in_a = balance_a.saturating_sub(pair.reserve_a - amount_out_a);
      let amount_in_b = balance_b.saturating_sub(pair.reserve_b - amount_out_b);
      ensure!(
        amount_in_a > 0 || amount_in_b > 0,
        Error::<T>::InsufficientInputAmount
      );
      let holds = amm::invariant_holds(
        balance_a,
        balance_b,
        amount_in_a,
        amount_in_b,
        pair.reserve_a,
        pair.reserve_b,
        pair.swap_fee,
        SWAP_FEE_DENOMINATOR,
      )
      .map_err(Error::<T>::from)?;
      ensure!(holds, Error::<T>::InvariantViolation);

      pair.reserve_a = balance_a;
      pair.reserve_b = balance_b;
      Pairs::<T>::insert(pair_id, pair);

      Self::deposit_event(Event::Swapped {
        pair_id,
        who: who.clone(),
        to: to.clone(),
        amount_in_a,
        amount_in_b,
        amount_out_a,
        amount_out_b,
      });
      Ok(())
    }

    pub fn do_transfer_shares(
      pair_id: PairId,
      from: &T::AccountId,
      to: &T::AccountId,
      amount: Balance,
    ) -> DispatchResult {
      ensure!(Pairs::<T>::contains_key(pair_id), Error::<T>::PairNotFound);
      ShareBalances::<T>::try_mutate(pair_id, from, |balance| -> DispatchResult {
        *balance = balance
          .checked_sub(amount)
          .ok_or(Error::<T>::InsufficientShares)?;
        Ok(())
      })?;
      ShareBalances::<T>::try_mutate(pair_id, to, |balance| -> DispatchResult {
        *balance = balance
          .checked_add(amount)
          .ok_or(Error::<T>::ArithmeticOverflow)?;
        Ok(())
      })?;
      Self::deposit_event(Event::SharesTransferred {
        pair_id,
        from: from.clone(),
        to: to.clone(),
        amount,
      });
      Ok(())
    }

    /// Output of swapping `amount_in` of `token_in` at the current reserves and fee.
    pub fn quote_swap(
      pair_id: PairId,
      token_in: AssetId,
      amount_in: Balance,
    ) -> Result<Balance, DispatchError> {
      let pair = Pairs::<T>::get(pair_id).ok_or(Error::<T>::PairNotFound)?;
      let (reserve_in, reserve_out) = pair
        .reserves_for(token_in)
        .ok_or(Error::<T>::AssetNotInPair)?;
      let out = amm::swap_output(
        reserve_in,
        reserve_out,
        amount_in,
        pair.swap_fee,
        SWAP_FEE_DENOMINATOR,
      )
      .map_err(Error::<T>::from)?;
      Ok(out)
    }

    /// Shares the collector would receive if liquidity changed now.
    pub fn pending_protocol_fee(pair_id: PairId) -> Result<Balance, DispatchError> {
      let pair = Pairs::<T>::get(pair_id).ok_or(Error::<T>::PairNotFound)?;
      if FeeTo::<T>::get().is_none() {
        return Ok(0);
      }
      let shares = amm::protocol_fee_share(
        pair.reserve_a,
        pair.reserve_b,
        pair.last_invariant_root,
        pair.total_shares,
        ProtocolFeeDenominator::<T>::get(),
      )
      .map_err(Error::<T>::from)?;
      Ok(shares)
    }

    /// Mint the collector's share of invariant growth. Returns whether the fee is on.
    fn mint_protocol_fee(pair_id: PairId, pair: &mut PairInfo) -> Result<bool, DispatchError> {
      let Some(fee_to) = FeeTo::<T>::get() else {
        return Ok(false);
      };
      let shares = amm::protocol_fee_share(
        pair.reserve_a,
        pair.reserve_b,
        pair.last_invariant_root,
        pair.total_shares,
        ProtocolFeeDenominator::<T>::get(),
      )
      .map_err(Error::<T>::from)?;
      if shares > 0 {
        Self::mint_shares(pair_id, pair, &fee_to, shares)?;
        log::debug!(
          target: LOG_TARGET,
          "pair {pair_id}: accrued {shares} protocol fee shares"
        );
        Self::deposit_event(Event::ProtocolFeeMinted {
          pair_id,
          to: fee_to,
          shares,
        });
      }
      Ok(true)
    }

    fn record_invariant(pair: &mut PairInfo, fee_on: bool) {
      pair.last_invariant_root = if fee_on {
        amm::invariant_root(pair.reserve_a, pair.reserve_b)
      } else {
        0
      };
    }

    fn mint_shares(
      pair_id: PairId,
      pair: &mut PairInfo,
      to: &T::AccountId,
      shares: Balance,
    ) -> DispatchResult {
      pair.total_shares = pair
        .total_shares
        .checked_add(shares)
        .ok_or(Error::<T>::ArithmeticOverflow)?;
      ShareBalances::<T>::try_mutate(pair_id, to, |balance| -> DispatchResult {
        *balance = balance
          .checked_add(shares)
          .ok_or(Error::<T>::ArithmeticOverflow)?;
        Ok(())
      })
    }

    fn burn_shares(
      pair_id: PairId,
      pair: &mut PairInfo,
      from: &T::AccountId,
      shares: Balance,
    ) -> DispatchResult {
      ShareBalances::<T>::try_mutate(pair_id, from, |balance| -> DispatchResult {
        *balance = balance
          .checked_sub(shares)
          .ok_or(Error::<T>::InsufficientShares)?;
        Ok(())
      })?;
      pair.total_shares = pair
        .total_shares
        .checked_sub(shares)
        .ok_or(Error::<T>::ArithmeticOverflow)?;
      Ok(())
    }

    fn pair_balances(pair_id: PairId, pair: &PairInfo) -> (Balance, Balance) {
      let account = Self::pair_account(pair_id);
      (
        T::Assets::balance(pair.token_a, &account),
        T::Assets::balance(pair.token_b, &account),
      )
    }

    fn transfer_out(
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
    /// Protocol fee collector at launch
    pub fee_to: Option<T::AccountId>,
    /// Overrides `DefaultProtocolFeeDenominator` when set
    pub protocol_fee_denominator: Option<u32>,
    /// Pairs registered at launch, ids assigned in order
    pub pairs: Vec<(AssetId, AssetId)>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      if let Some(fee_to) = &self.fee_to {
        FeeTo::<T>::put(fee_to);
      }
      if let Some(denominator) = self.protocol_fee_denominator {
        assert!(denominator > 0, "protocol fee denominator must be positive");
        ProtocolFeeDenominator::<T>::put(denominator);
      }
      for (token_a, token_b) in &self.pairs {
        Pallet::<T>::do_create_pair(*token_a, *token_b)
          .expect("genesis pairs must be distinct and unique");
      }
    }
  }
}
