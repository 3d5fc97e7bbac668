//! Core types: errors and pricing parameters.

pub mod error;
pub mod params;

pub use error::{
    require_count, require_finite, require_non_negative, require_positive, PricingError, Result,
};
pub use params::{JumpParameters, MarketParameters, OptionParameters, OptionType};
