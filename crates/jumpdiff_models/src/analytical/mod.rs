//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions:
//! - Black-Scholes model for lognormal dynamics, with a continuous dividend
//!   yield and analytical Greeks
//! - Merton (1976) Poisson series for jump-diffusion, used as the benchmark
//!   for jump-diffusion simulation
//!
//! Both return an [`OptionPrices`] pair so the two can be compared directly.

pub mod black_scholes;
pub mod merton;
pub mod prices;

pub use black_scholes::{black_scholes, BlackScholes, Greeks};
pub use merton::merton_jump_diffusion;
pub use prices::OptionPrices;
