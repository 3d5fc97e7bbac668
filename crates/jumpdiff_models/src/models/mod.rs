//! Stochastic models available to the path simulator.
//!
//! Dispatch is static, through the [`PathModel`] enum, rather than through
//! trait objects.

pub mod model_enum;

pub use model_enum::PathModel;
