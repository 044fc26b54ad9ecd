//! Discrete price point on the geometric tick grid.

use core::fmt;

use crate::error::EngineError;

/// Minimum valid tick index.
const MIN_TICK: i32 = -887_272;

/// Maximum valid tick index.
const MAX_TICK: i32 = 887_272;

/// A discrete index into the geometric price grid, base 1.0001.
///
/// Price increases exponentially with the tick index:
/// `price = 1.0001^tick`. Valid indices span [`MIN`](Self::MIN)
/// (`-887272`) to [`MAX`](Self::MAX) (`887272`), the conventional
/// `int24` bounds.
///
/// # Examples
///
/// ```
/// use naiad_clmm::domain::Tick;
///
/// let tick = Tick::new(100);
/// assert!(tick.is_ok());
/// assert_eq!(tick.unwrap_or(Tick::ZERO).get(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tick(i32);

impl Tick {
    /// Minimum valid tick (`-887272`).
    pub const MIN: Self = Self(MIN_TICK);

    /// Maximum valid tick (`887272`).
    pub const MAX: Self = Self(MAX_TICK);

    /// Neutral tick where `price = 1.0001^0 = 1.0`.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Tick` with range validation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TickOutOfRange`] if `value` is outside
    /// the range `[-887272, 887272]`.
    pub const fn new(value: i32) -> crate::error::Result<Self> {
        if value < MIN_TICK || value > MAX_TICK {
            return Err(EngineError::TickOutOfRange(
                "tick out of range [-887272, 887272]",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `i32` tick index.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// Returns `true` if this tick is a multiple of `spacing`.
    ///
    /// Only usable ticks may bound a position for a given fee tier.
    #[must_use]
    pub const fn is_usable(&self, spacing: u16) -> bool {
        spacing != 0 && self.0 % spacing as i32 == 0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tick({})", self.0)
    }
}
