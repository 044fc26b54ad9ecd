//! Conversions between price, tick, and fixed-point square-root price.
//!
//! These implement the standard relationship `price = 1.0001^tick` and
//! its Q64.96 square-root encoding.
//!
//! # Functions
//!
//! - [`price_to_sqrt_price_x96`] / [`sqrt_price_x96_to_price`] —
//!   Price ⇄ SqrtPriceX96.
//! - [`tick_to_sqrt_price_x96`] / [`tick_at_sqrt_price`] —
//!   Tick ⇄ SqrtPriceX96.
//! - [`price_to_tick`] — Price → Tick via the sqrt-price round-trip,
//!   so boundary behavior matches the on-chain tick search rather than
//!   a naive logarithm.
//! - [`nearest_usable_tick`] — snaps a tick to the fee tier's grid.

use crate::domain::{Price, Q96_F64, SqrtPriceX96, Tick};
use crate::error::EngineError;

/// Base of the tick-price exponential: `price = BASE^tick`.
pub(crate) const BASE: f64 = 1.0001;

/// Converts a price to its Q64.96 square-root representation:
/// `floor(sqrt(price) * 2^96)`.
///
/// # Errors
///
/// Returns [`EngineError::Overflow`] if the scaled value does not fit
/// 256 bits (prices far beyond the valid tick range).
pub fn price_to_sqrt_price_x96(price: Price) -> crate::error::Result<SqrtPriceX96> {
    SqrtPriceX96::from_f64(price.sqrt() * Q96_F64)
}

/// Recovers the price from a Q64.96 square-root reading:
/// `(sqrt_price / 2^96)^2`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPrice`] for a zero reading (an empty
/// or uninitialized pool slot).
pub fn sqrt_price_x96_to_price(sqrt_price: SqrtPriceX96) -> crate::error::Result<Price> {
    if sqrt_price.is_zero() {
        return Err(EngineError::InvalidPrice("sqrt price reading is zero"));
    }
    let ratio = sqrt_price.to_f64() / Q96_F64;
    Price::new(ratio * ratio)
}

/// Computes the Q64.96 square-root price at a tick:
/// `floor(sqrt(1.0001^tick) * 2^96)`.
///
/// # Errors
///
/// Returns [`EngineError::Overflow`] only if the scaled value exceeds
/// 256 bits, which cannot happen for a validated [`Tick`].
pub fn tick_to_sqrt_price_x96(tick: Tick) -> crate::error::Result<SqrtPriceX96> {
    SqrtPriceX96::from_f64(BASE.powf(f64::from(tick.get()) / 2.0) * Q96_F64)
}

/// Computes the greatest tick whose price is ≤ the price encoded by a
/// raw pool reading: `floor(log_1.0001((sqrt_price / 2^96)^2))`.
///
/// # Errors
///
/// - [`EngineError::InvalidPrice`] for a zero reading.
/// - [`EngineError::TickOutOfRange`] if the result falls outside the
///   valid tick range.
pub fn tick_at_sqrt_price(sqrt_price: SqrtPriceX96) -> crate::error::Result<Tick> {
    if sqrt_price.is_zero() {
        return Err(EngineError::InvalidPrice("sqrt price reading is zero"));
    }
    let ratio = sqrt_price.to_f64() / Q96_F64;
    let raw = (ratio * ratio).ln() / BASE.ln();
    if !raw.is_finite() {
        return Err(EngineError::TickOutOfRange(
            "sqrt price produces non-finite tick",
        ));
    }
    // Float-to-int casts saturate; Tick::new rejects anything outside
    // the valid range.
    #[allow(clippy::cast_possible_truncation)]
    let floored = raw.floor() as i32;
    Tick::new(floored)
}

/// Computes the greatest tick whose price is ≤ the given price.
///
/// Routed through the sqrt-price encoding rather than a direct
/// logarithm so that results at tick boundaries agree with
/// [`tick_at_sqrt_price`] on live pool readings.
///
/// # Errors
///
/// Propagates [`EngineError::Overflow`] and
/// [`EngineError::TickOutOfRange`] from the two conversion steps.
pub fn price_to_tick(price: Price) -> crate::error::Result<Tick> {
    tick_at_sqrt_price(price_to_sqrt_price_x96(price)?)
}

/// Rounds a tick to the nearest multiple of `spacing`, ties toward
/// positive infinity.
///
/// The result is clamped inward by one spacing step at the extremes so
/// it always stays in range and remains a multiple of `spacing`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for zero spacing.
pub fn nearest_usable_tick(tick: Tick, spacing: u16) -> crate::error::Result<Tick> {
    if spacing == 0 {
        return Err(EngineError::InvalidInput("tick spacing must be non-zero"));
    }
    let s = i32::from(spacing);
    let quotient = tick.get().div_euclid(s);
    let remainder = tick.get().rem_euclid(s);
    let mut snapped = if 2 * remainder >= s {
        (quotient + 1) * s
    } else {
        quotient * s
    };
    if snapped < Tick::MIN.get() {
        snapped += s;
    } else if snapped > Tick::MAX.get() {
        snapped -= s;
    }
    Tick::new(snapped)
}
