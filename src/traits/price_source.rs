//! Seam for the external component that knows the pool's price.

use crate::domain::Price;

/// Supplies the current pool price for a computation.
///
/// The engine itself never holds pool state; every solver entry point
/// that needs a live price pulls exactly one fresh reading through this
/// trait and nothing is cached between calls. Implementations typically
/// wrap a chain client querying the pool's slot; tests use a fixed
/// value.
///
/// # Errors
///
/// Implementations return whatever [`EngineError`](crate::EngineError)
/// fits the failure; the solver reports any failure to its caller as
/// [`EngineError::PriceUnavailable`](crate::EngineError::PriceUnavailable).
pub trait PriceSource {
    /// Returns the current price, token1 per token0.
    fn current_price(&self) -> crate::error::Result<Price>;
}
