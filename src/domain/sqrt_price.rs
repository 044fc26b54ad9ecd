//! Q64.96 fixed-point square-root price.

use core::fmt;

use alloy_primitives::U256;

use crate::error::EngineError;

/// `2^96`, the Q64.96 scaling factor.
pub const Q96: U256 = U256::from_limbs([0, 1 << 32, 0, 0]);

/// `2^96` as an `f64`, for crossing between the continuous and
/// fixed-point representations.
pub(crate) const Q96_F64: f64 = 79_228_162_514_264_337_593_543_950_336.0;

/// The square root of a pool price scaled by `2^96` (Q64.96).
///
/// All integer liquidity math operates in this representation so that
/// floor-rounding matches on-chain fixed-point arithmetic bit for bit.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use naiad_clmm::domain::SqrtPriceX96;
///
/// let sp = SqrtPriceX96::new(U256::from(1u8) << 96);
/// assert!(!sp.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SqrtPriceX96(U256);

impl SqrtPriceX96 {
    /// Creates a new `SqrtPriceX96` from a raw `U256` value.
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    /// Returns the underlying `U256` value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the value is zero (no valid pool reading).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Converts a continuous non-negative value into the fixed-point
    /// representation, flooring toward zero.
    ///
    /// The conversion is exact: the float is decomposed into mantissa
    /// and exponent rather than cast through a narrower integer.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPrice`] for NaN, infinite, or
    /// negative inputs, and [`EngineError::Overflow`] if the floored
    /// value does not fit 256 bits.
    pub(crate) fn from_f64(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(EngineError::InvalidPrice(
                "sqrt price must be finite and non-negative",
            ));
        }
        let floored = value.floor();
        if floored < 1.0 {
            return Ok(Self(U256::ZERO));
        }

        // floored >= 1.0, so the float is normal: implicit leading bit set.
        let bits = floored.to_bits();
        let exponent = ((bits >> 52) & 0x7ff) as i64 - 1075;
        let mantissa = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);
        let m = U256::from(mantissa);
        if exponent <= 0 {
            return Ok(Self(m >> exponent.unsigned_abs() as usize));
        }
        if exponent > 256 - 53 {
            return Err(EngineError::Overflow("sqrt price exceeds 256 bits"));
        }
        Ok(Self(m << exponent as usize))
    }

    /// Converts the fixed-point value back to `f64`, rounding to
    /// nearest.
    pub(crate) fn to_f64(&self) -> f64 {
        const LIMB: f64 = 18_446_744_073_709_551_616.0; // 2^64
        self.0
            .as_limbs()
            .iter()
            .rev()
            .fold(0.0, |acc, &limb| acc * LIMB + limb as f64)
    }
}

impl fmt::Display for SqrtPriceX96 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
