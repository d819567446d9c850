//! Constant-product math shared by the pair pallet and the fee receiver.
//!
//! Every function is pure integer arithmetic. Products of two balances are taken in
//! 256-bit space (512-bit for the fee-adjusted invariant check) and all divisions
//! floor, so the pool side of every rounding decision is the one that keeps value.

use crate::ecosystem::Balance;
use polkadot_sdk::sp_core::{U256, U512};
use sp_arithmetic::{Rounding, helpers_128bit::multiply_by_rational_with_rounding};

/// Failure modes of the AMM math.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MathError {
  /// An intermediate or final value does not fit its type
  Overflow,
  /// Division by a zero total or denominator
  DivisionByZero,
  /// Zero input amount
  InsufficientInputAmount,
  /// A reserve is empty
  InsufficientLiquidity,
  /// A deposit would mint zero shares
  InsufficientLiquidityMinted,
  /// A redemption would pay out zero of one token
  InsufficientLiquidityBurned,
  /// Fee is larger than its denominator
  InvalidFee,
}

fn to_balance(value: U256) -> Result<Balance, MathError> {
  if value > U256::from(u128::MAX) {
    return Err(MathError::Overflow);
  }
  Ok(value.low_u128())
}

/// `floor(a * b / c)` without intermediate overflow.
pub fn mul_div(a: Balance, b: Balance, c: Balance) -> Result<Balance, MathError> {
  if c == 0 {
    return Err(MathError::DivisionByZero);
  }
  to_balance(U256::from(a) * U256::from(b) / U256::from(c))
}

/// Floor of the square root of a 256-bit value.
pub fn integer_sqrt(value: U256) -> U256 {
  value.integer_sqrt()
}

/// `floor(sqrt(reserve_a * reserve_b))`, the root of the constant-product invariant.
pub fn invariant_root(reserve_a: Balance, reserve_b: Balance) -> Balance {
  // sqrt(a * b) <= max(a, b), so the root always fits in 128 bits
  integer_sqrt(U256::from(reserve_a) * U256::from(reserve_b)).low_u128()
}

/// Output of a constant-product swap with the fee taken from the input side:
///
/// `out = in·(D−f)·R_out / (R_in·D + in·(D−f))`
///
/// For any positive input the result is strictly below `reserve_out`.
pub fn swap_output(
  reserve_in: Balance,
  reserve_out: Balance,
  amount_in: Balance,
  fee_bps: u32,
  fee_denominator: u32,
) -> Result<Balance, MathError> {
  if amount_in == 0 {
    return Err(MathError::InsufficientInputAmount);
  }
  if reserve_in == 0 || reserve_out == 0 {
    return Err(MathError::InsufficientLiquidity);
  }
  if fee_denominator == 0 || fee_bps > fee_denominator {
    return Err(MathError::InvalidFee);
  }
  let amount_in_with_fee = U256::from(amount_in) * U256::from(fee_denominator - fee_bps);
  let numerator = amount_in_with_fee
    .checked_mul(U256::from(reserve_out))
    .ok_or(MathError::Overflow)?;
  let denominator = (U256::from(reserve_in) * U256::from(fee_denominator))
    .checked_add(amount_in_with_fee)
    .ok_or(MathError::Overflow)?;
  to_balance(numerator / denominator)
}

/// Shares owed to the protocol for the invariant growth since `last_invariant_root`.
///
/// `shares = total·(√k − √k_last) / (√k·denominator + √k_last)`
///
/// Zero when no root was recorded (fee disabled or first deposit) or when the
/// invariant did not grow.
pub fn protocol_fee_share(
  reserve_a: Balance,
  reserve_b: Balance,
  last_invariant_root: Balance,
  total_shares: Balance,
  protocol_fee_denominator: u32,
) -> Result<Balance, MathError> {
  if last_invariant_root == 0 {
    return Ok(0);
  }
  let root_k = invariant_root(reserve_a, reserve_b);
  if root_k <= last_invariant_root {
    return Ok(0);
  }
  let numerator = U256::from(total_shares) * U256::from(root_k - last_invariant_root);
  let denominator = (U256::from(root_k) * U256::from(protocol_fee_denominator))
    .checked_add(U256::from(last_invariant_root))
    .ok_or(MathError::Overflow)?;
  to_balance(numerator / denominator)
}

/// Shares for the first deposit into an empty pair, net of the locked minimum.
pub fn initial_shares(
  amount_a: Balance,
  amount_b: Balance,
  minimum_liquidity: Balance,
) -> Result<Balance, MathError> {
  let root = invariant_root(amount_a, amount_b);
  if root <= minimum_liquidity {
    return Err(MathError::InsufficientLiquidityMinted);
  }
  Ok(root - minimum_liquidity)
}

/// Shares for a deposit into an active pair: the smaller of both sides' pro-rata claims.
pub fn proportional_shares(
  amount_a: Balance,
  amount_b: Balance,
  reserve_a: Balance,
  reserve_b: Balance,
  total_shares: Balance,
) -> Result<Balance, MathError> {
  if reserve_a == 0 || reserve_b == 0 {
    return Err(MathError::InsufficientLiquidity);
  }
  let by_a = mul_div(amount_a, total_shares, reserve_a)?;
  let by_b = mul_div(amount_b, total_shares, reserve_b)?;
  let shares = by_a.min(by_b);
  if shares == 0 {
    return Err(MathError::InsufficientLiquidityMinted);
  }
  Ok(shares)
}

/// Token amounts redeemed by `shares` out of `total_shares`, floored on both sides.
pub fn redeem_amounts(
  shares: Balance,
  balance_a: Balance,
  balance_b: Balance,
  total_shares: Balance,
) -> Result<(Balance, Balance), MathError> {
  if total_shares == 0 {
    return Err(MathError::InsufficientLiquidity);
  }
  let amount_a = mul_div(shares, balance_a, total_shares)?;
  let amount_b = mul_div(shares, balance_b, total_shares)?;
  if amount_a == 0 || amount_b == 0 {
    return Err(MathError::InsufficientLiquidityBurned);
  }
  Ok((amount_a, amount_b))
}

/// Fee-adjusted constant-product check performed after a swap has moved balances:
///
/// `(B_a·D − in_a·f)·(B_b·D − in_b·f) >= R_a·R_b·D²`
pub fn invariant_holds(
  balance_a: Balance,
  balance_b: Balance,
  amount_in_a: Balance,
  amount_in_b: Balance,
  reserve_a: Balance,
  reserve_b: Balance,
  fee_bps: u32,
  fee_denominator: u32,
) -> Result<bool, MathError> {
  if fee_bps > fee_denominator {
    return Err(MathError::InvalidFee);
  }
  let denominator = U256::from(fee_denominator);
  let fee = U256::from(fee_bps);
  let adjusted_a = (U256::from(balance_a) * denominator)
    .checked_sub(U256::from(amount_in_a) * fee)
    .ok_or(MathError::Overflow)?;
  let adjusted_b = (U256::from(balance_b) * denominator)
    .checked_sub(U256::from(amount_in_b) * fee)
    .ok_or(MathError::Overflow)?;
  let after = U512::from(adjusted_a) * U512::from(adjusted_b);
  let before = U512::from(U256::from(reserve_a) * U256::from(reserve_b))
    * U512::from(denominator * denominator);
  Ok(after >= before)
}

/// Splits `total` into `(floor(total·proportion/denominator), remainder)`.
///
/// The second part is computed by subtraction, so both parts always sum to `total`.
pub fn split_by_proportion(
  total: Balance,
  proportion: u64,
  denominator: u64,
) -> Result<(Balance, Balance), MathError> {
  if denominator == 0 {
    return Err(MathError::DivisionByZero);
  }
  let first = multiply_by_rational_with_rounding(
    total,
    proportion as u128,
    denominator as u128,
    Rounding::Down,
  )
  .ok_or(MathError::Overflow)?
  .min(total);
  Ok((first, total - first))
}

/// Splits `amount` into `(floor(amount/2), amount − floor(amount/2))`.
pub fn split_in_halves(amount: Balance) -> (Balance, Balance) {
  let half = amount / 2;
  (half, amount - half)
}
