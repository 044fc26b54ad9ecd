//! Full-precision 256-bit multiply-then-divide.

use alloy_primitives::{U256, U512};

use crate::error::EngineError;

fn widen(value: U256) -> U512 {
    let l = value.into_limbs();
    U512::from_limbs([l[0], l[1], l[2], l[3], 0, 0, 0, 0])
}

/// Computes `floor(a * b / denominator)` without losing the 512-bit
/// intermediate product.
///
/// This mirrors the contract-side `mulDiv` and underpins all liquidity
/// computations.
///
/// # Errors
///
/// Returns [`EngineError::DivisionByZero`] for a zero denominator and
/// [`EngineError::Overflow`] when the quotient does not fit 256 bits.
pub fn mul_div(a: U256, b: U256, denominator: U256) -> crate::error::Result<U256> {
    if denominator.is_zero() {
        return Err(EngineError::DivisionByZero);
    }
    let quotient = (widen(a) * widen(b)) / widen(denominator);
    let l = quotient.into_limbs();
    if l[4] | l[5] | l[6] | l[7] != 0 {
        return Err(EngineError::Overflow("mul_div quotient exceeds 256 bits"));
    }
    Ok(U256::from_limbs([l[0], l[1], l[2], l[3]]))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn simple_division() {
        let Ok(r) = mul_div(U256::from(10u8), U256::from(20u8), U256::from(5u8)) else {
            panic!("expected Ok");
        };
        assert_eq!(r, U256::from(40u8));
    }

    #[test]
    fn floors_toward_zero() {
        // 7 * 10 / 8 = 8.75 → 8
        let Ok(r) = mul_div(U256::from(7u8), U256::from(10u8), U256::from(8u8)) else {
            panic!("expected Ok");
        };
        assert_eq!(r, U256::from(8u8));
    }

    #[test]
    fn intermediate_wider_than_256_bits() {
        // MAX * MAX / MAX = MAX: the product overflows 256 bits but the
        // quotient fits.
        let Ok(r) = mul_div(U256::MAX, U256::MAX, U256::MAX) else {
            panic!("expected Ok");
        };
        assert_eq!(r, U256::MAX);
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(
            mul_div(U256::from(1u8), U256::from(1u8), U256::ZERO),
            Err(EngineError::DivisionByZero)
        );
    }

    #[test]
    fn quotient_overflow() {
        // MAX * 2 / 1 exceeds 256 bits.
        assert_eq!(
            mul_div(U256::MAX, U256::from(2u8), U256::from(1u8)),
            Err(EngineError::Overflow("mul_div quotient exceeds 256 bits"))
        );
    }

    #[test]
    fn zero_numerator() {
        let Ok(r) = mul_div(U256::ZERO, U256::MAX, U256::from(3u8)) else {
            panic!("expected Ok");
        };
        assert_eq!(r, U256::ZERO);
    }
}
