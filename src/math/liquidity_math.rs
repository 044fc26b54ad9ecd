//! Mapping between liquidity magnitudes and token-amount pairs over a
//! price range.
//!
//! The forward direction (`liquidity_for_*`) runs entirely in Q64.96
//! integer arithmetic so it floors exactly where the contract math
//! floors. The inverse ([`amounts_for_liquidity`]) evaluates the
//! closed-form ratios in `f64` and floors only the final amounts.

use alloy_primitives::U256;

use crate::domain::{Amount, Liquidity, SqrtPriceX96, Tick, Q96, Q96_F64};
use crate::error::EngineError;
use crate::math::convert::{tick_at_sqrt_price, BASE};

// 2^128, the first f64 value that no longer fits an Amount.
const AMOUNT_LIMIT_F64: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

/// Orders two sqrt-price bounds and rejects zero-width ranges.
fn normalized(a: SqrtPriceX96, b: SqrtPriceX96) -> crate::error::Result<(U256, U256)> {
    let (lo, hi) = if a > b {
        (b.get(), a.get())
    } else {
        (a.get(), b.get())
    };
    if lo == hi {
        return Err(EngineError::DegenerateRange("price range has zero width"));
    }
    Ok((lo, hi))
}

fn to_liquidity(raw: U256) -> crate::error::Result<Liquidity> {
    u128::try_from(raw)
        .map(Liquidity::new)
        .map_err(|_| EngineError::Overflow("liquidity exceeds 128 bits"))
}

fn to_amount(value: f64) -> crate::error::Result<Amount> {
    if !value.is_finite() || value < 0.0 {
        return Err(EngineError::InvalidAmount(
            "amount must be finite and non-negative",
        ));
    }
    if value >= AMOUNT_LIMIT_F64 {
        return Err(EngineError::Overflow("amount exceeds 128 bits"));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let truncated = value as u128;
    Ok(Amount::new(truncated))
}

/// Computes the liquidity a given `amount0` of token0 provides over a
/// sqrt-price range: `floor(amount0 * floor(a*b / Q96) / (b - a))`.
///
/// Bound order does not matter; the pair is normalized internally.
///
/// # Errors
///
/// - [`EngineError::DegenerateRange`] if the bounds coincide.
/// - [`EngineError::Overflow`] if an intermediate quotient exceeds 256
///   bits or the liquidity exceeds 128 bits.
pub fn liquidity_for_amount0(
    a: SqrtPriceX96,
    b: SqrtPriceX96,
    amount0: Amount,
) -> crate::error::Result<Liquidity> {
    let (lo, hi) = normalized(a, b)?;
    let intermediate = super::mul_div(lo, hi, Q96)?;
    let raw = super::mul_div(U256::from(amount0.get()), intermediate, hi - lo)?;
    to_liquidity(raw)
}

/// Computes the liquidity a given `amount1` of token1 provides over a
/// sqrt-price range: `floor(amount1 * Q96 / (b - a))`.
///
/// Bound order does not matter; the pair is normalized internally.
///
/// # Errors
///
/// - [`EngineError::DegenerateRange`] if the bounds coincide.
/// - [`EngineError::Overflow`] if the result exceeds 128 bits.
pub fn liquidity_for_amount1(
    a: SqrtPriceX96,
    b: SqrtPriceX96,
    amount1: Amount,
) -> crate::error::Result<Liquidity> {
    let (lo, hi) = normalized(a, b)?;
    let raw = super::mul_div(U256::from(amount1.get()), Q96, hi - lo)?;
    to_liquidity(raw)
}

/// Computes the liquidity a token pair provides over a range, given the
/// current sqrt price.
///
/// Three-way branch: at or below the range only token0 counts; at or
/// above only token1 counts; inside, both candidates are computed
/// against the current price and the smaller one binds.
///
/// # Errors
///
/// Propagates the failure modes of the single-sided computations.
pub fn liquidity_for_amounts(
    current: SqrtPriceX96,
    a: SqrtPriceX96,
    b: SqrtPriceX96,
    amount0: Amount,
    amount1: Amount,
) -> crate::error::Result<Liquidity> {
    let (lo, hi) = normalized(a, b)?;
    let (lo, hi) = (SqrtPriceX96::new(lo), SqrtPriceX96::new(hi));
    if current <= lo {
        liquidity_for_amount0(lo, hi, amount0)
    } else if current >= hi {
        liquidity_for_amount1(lo, hi, amount1)
    } else {
        let from0 = liquidity_for_amount0(current, hi, amount0)?;
        let from1 = liquidity_for_amount1(lo, current, amount1)?;
        Ok(from0.min(from1))
    }
}

/// Computes the token amounts a liquidity magnitude represents over a
/// tick range, given the current sqrt price.
///
/// The range bounds enter as ticks and their sqrt ratios are evaluated
/// in continuous space; the branch is taken on the current price's raw
/// tick against `[tick_low, tick_high)`. Both amounts are floored.
///
/// Returns `(amount0, amount1)`.
///
/// # Errors
///
/// - [`EngineError::DegenerateRange`] if `tick_low >= tick_high`.
/// - [`EngineError::InvalidPrice`] for a zero current reading.
/// - [`EngineError::Overflow`] if an amount does not fit 128 bits.
pub fn amounts_for_liquidity(
    liquidity: Liquidity,
    current: SqrtPriceX96,
    tick_low: Tick,
    tick_high: Tick,
) -> crate::error::Result<(Amount, Amount)> {
    if tick_low >= tick_high {
        return Err(EngineError::DegenerateRange("tick range is empty"));
    }
    let current_tick = tick_at_sqrt_price(current)?;

    let sqrt_low = BASE.powf(f64::from(tick_low.get()) / 2.0);
    let sqrt_high = BASE.powf(f64::from(tick_high.get()) / 2.0);
    let sqrt_current = current.to_f64() / Q96_F64;
    #[allow(clippy::cast_precision_loss)]
    let l = liquidity.get() as f64;

    if current_tick < tick_low {
        let amount0 = (l * ((sqrt_high - sqrt_low) / (sqrt_low * sqrt_high))).floor();
        Ok((to_amount(amount0)?, Amount::ZERO))
    } else if current_tick >= tick_high {
        let amount1 = (l * (sqrt_high - sqrt_low)).floor();
        Ok((Amount::ZERO, to_amount(amount1)?))
    } else {
        let amount0 = (l * ((sqrt_high - sqrt_current) / (sqrt_current * sqrt_high))).floor();
        let amount1 = (l * (sqrt_current - sqrt_low)).floor();
        Ok((to_amount(amount0)?, to_amount(amount1)?))
    }
}
