//! Numeric core: fixed-point helpers, price/tick conversion, and
//! liquidity ⇄ amount mapping.
//!
//! Two arithmetic regimes coexist deliberately:
//!
//! - **Q64.96 integer math** (`U256`, floored `mul_div`) for everything
//!   that must reproduce on-chain rounding bit for bit.
//! - **`f64` math** for closed-form formulas over continuous price
//!   inputs, where fixed point would add nothing but noise.
//!
//! Evaluation order inside the integer helpers is pinned: reordering a
//! multiply/divide chain changes floor results and breaks parity with
//! the contract arithmetic.

mod convert;
mod full_math;
mod liquidity_math;

#[cfg(test)]
mod proptest_properties;

pub use convert::{
    nearest_usable_tick, price_to_sqrt_price_x96, price_to_tick, sqrt_price_x96_to_price,
    tick_at_sqrt_price, tick_to_sqrt_price_x96,
};
pub(crate) use convert::BASE;
pub use full_math::mul_div;
pub use liquidity_math::{
    amounts_for_liquidity, liquidity_for_amount0, liquidity_for_amount1, liquidity_for_amounts,
};
