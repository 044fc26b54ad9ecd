//! Convenience re-exports for common types and functions.
//!
//! A single import brings the usual working set into scope:
//!
//! ```rust
//! use naiad_clmm::prelude::*;
//! ```

// Domain value types
pub use crate::domain::{Amount, FeeTier, Liquidity, Price, SqrtPriceX96, Tick, Q96};

// Conversion and liquidity math
pub use crate::math::{
    amounts_for_liquidity, liquidity_for_amount0, liquidity_for_amount1, liquidity_for_amounts,
    mul_div, nearest_usable_tick, price_to_sqrt_price_x96, price_to_tick,
    sqrt_price_x96_to_price, tick_at_sqrt_price, tick_to_sqrt_price_x96,
};

// Deposit quoting
pub use crate::solver::{quote_deposit, quote_deposit_with_source, DepositRequest};

// Collaborator seams
pub use crate::traits::PriceSource;

// Error types
pub use crate::error::{EngineError, Result};
