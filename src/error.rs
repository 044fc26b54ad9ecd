//! Unified error types for the concentrated-liquidity math engine.
//!
//! All fallible operations across the crate return [`EngineError`] as their
//! error type. Every condition is local and recoverable: the engine never
//! panics in non-test code, so callers can surface validation and slippage
//! failures without crashing.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, EngineError>;

/// Error conditions produced by the engine.
///
/// Each variant carries a static message describing the violated
/// constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A solver input was missing, non-positive, or otherwise unusable.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A price value is outside the domain of the requested conversion.
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),

    /// A tick index falls outside the representable range.
    #[error("tick out of range: {0}")]
    TickOutOfRange(&'static str),

    /// A computed token amount is negative or not representable.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// A price range collapsed to zero width.
    #[error("degenerate range: {0}")]
    DegenerateRange(&'static str),

    /// The pool-client collaborator failed to supply a price reading.
    #[error("price unavailable: {0}")]
    PriceUnavailable(&'static str),

    /// An intermediate fixed-point result exceeded its representation.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A fixed-point division had a zero denominator.
    #[error("division by zero")]
    DivisionByZero,
}
