//! Protocol fee tiers and their tick spacings.

use core::fmt;

use crate::error::EngineError;

/// A pool fee tier, expressed in hundredths of a basis point.
///
/// Each tier fixes the spacing of usable ticks: position bounds must be
/// multiples of the tier's spacing.
///
/// | Tier | Fee | Tick spacing |
/// |------|-----|--------------|
/// | [`Low`](Self::Low) | 0.05% (`500`) | 10 |
/// | [`Medium`](Self::Medium) | 0.30% (`3000`) | 60 |
/// | [`High`](Self::High) | 1.00% (`10000`) | 200 |
///
/// # Examples
///
/// ```
/// use naiad_clmm::domain::FeeTier;
///
/// let tier = FeeTier::from_fee(3000).expect("known tier");
/// assert_eq!(tier, FeeTier::Medium);
/// assert_eq!(tier.tick_spacing(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeeTier {
    /// 0.05% fee — stablecoin pairs.
    Low,
    /// 0.30% fee — standard volatile pairs.
    Medium,
    /// 1.00% fee — exotic pairs.
    High,
}

impl FeeTier {
    /// All supported tiers, in ascending fee order.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Resolves a raw fee value (`500`, `3000`, or `10000`) to a tier.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] for any other value.
    pub const fn from_fee(fee: u32) -> crate::error::Result<Self> {
        match fee {
            500 => Ok(Self::Low),
            3000 => Ok(Self::Medium),
            10_000 => Ok(Self::High),
            _ => Err(EngineError::InvalidInput("unknown fee tier")),
        }
    }

    /// Returns the fee in hundredths of a basis point.
    #[must_use]
    pub const fn fee(&self) -> u32 {
        match self {
            Self::Low => 500,
            Self::Medium => 3000,
            Self::High => 10_000,
        }
    }

    /// Returns the tick spacing enforced for this tier.
    #[must_use]
    pub const fn tick_spacing(&self) -> u16 {
        match self {
            Self::Low => 10,
            Self::Medium => 60,
            Self::High => 200,
        }
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.fee())
    }
}
