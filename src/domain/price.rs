//! Spot price of token0 denominated in token1.

use core::fmt;

use crate::error::EngineError;

/// A pool price expressed as units of token1 per token0.
///
/// Wraps an `f64` that must be finite and strictly positive. Prices are
/// inherently continuous inputs; the fixed-point representation used for
/// on-chain parity is [`SqrtPriceX96`](super::SqrtPriceX96).
///
/// # Examples
///
/// ```
/// use naiad_clmm::domain::Price;
///
/// assert!(Price::new(5000.0).is_ok());
/// assert!(Price::new(0.0).is_err());
/// assert!(Price::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Price ratio of 1:1.
    pub const ONE: Self = Self(1.0);

    /// Creates a new `Price` from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPrice`] if the value is zero,
    /// negative, NaN, or infinite.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(EngineError::InvalidPrice(
                "price must be finite and positive",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `sqrt(price)` for the closed-form continuous formulas.
    #[must_use]
    pub fn sqrt(&self) -> f64 {
        self.0.sqrt()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
