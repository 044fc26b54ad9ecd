//! Collaborator seams for external state.

mod price_source;

pub use price_source::PriceSource;
