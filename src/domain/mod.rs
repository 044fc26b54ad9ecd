//! Fundamental domain value types used throughout the engine.
//!
//! All types are immutable value objects with validated constructors.
//! Nothing here performs I/O or caches pool state: a fresh reading is
//! supplied by the caller for every computation.

mod amount;
mod fee_tier;
mod liquidity;
mod price;
mod sqrt_price;
mod tick;

pub use amount::Amount;
pub use fee_tier::FeeTier;
pub use liquidity::Liquidity;
pub use price::Price;
pub use sqrt_price::{SqrtPriceX96, Q96};
pub(crate) use sqrt_price::Q96_F64;
pub use tick::Tick;
