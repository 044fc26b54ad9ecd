//! # Naiad CLMM
//!
//! Pure math engine for concentrated-liquidity AMM positions: price/tick
//! conversion, liquidity ⇄ amount mapping, and deposit quoting.
//!
//! The crate performs no I/O and holds no pool state. Every entry point
//! is a pure function over validated value types, so results are
//! deterministic and safe to compute concurrently. Pool readings arrive
//! either as explicit parameters or through the
//! [`PriceSource`](traits::PriceSource) seam.
//!
//! Two arithmetic regimes coexist by design: Q64.96 fixed-point integer
//! math (for everything that must floor exactly where the pool contract
//! floors) and `f64` for closed-form formulas over continuous price
//! inputs. See the [`math`] module docs for the boundary between them.
//!
//! # Quick Start
//!
//! Quote how much token1 pairs with a 1-token0 deposit into a
//! 4545–5500 range while the pool trades at 5000:
//!
//! ```rust
//! use naiad_clmm::domain::{FeeTier, Price};
//! use naiad_clmm::solver::{quote_deposit, DepositRequest};
//!
//! let request = DepositRequest::new(1.0, 4545.0, 5500.0, 0.5)
//!     .expect("valid request");
//! let current = Price::new(5000.0).expect("valid price");
//!
//! let amount1 = quote_deposit(&request, current, FeeTier::Medium)
//!     .expect("quoted");
//! assert!(amount1 > 5041.0 && amount1 < 5068.0);
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Price`](domain::Price), [`Tick`](domain::Tick), [`SqrtPriceX96`](domain::SqrtPriceX96), [`Liquidity`](domain::Liquidity), [`Amount`](domain::Amount), [`FeeTier`](domain::FeeTier) |
//! | [`math`] | Price/tick/sqrt-price conversion, tick snapping, full-precision `mul_div`, liquidity ⇄ amount mapping |
//! | [`solver`] | [`DepositRequest`](solver::DepositRequest) and [`quote_deposit`](solver::quote_deposit) |
//! | [`traits`] | [`PriceSource`](traits::PriceSource) — the pool-client seam |
//! | [`error`] | [`EngineError`] unified error enum |
//! | [`prelude`] | Convenience re-exports for common types |

pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
pub mod solver;
pub mod traits;

pub use error::{EngineError, Result};
