//! Monte Carlo path simulation and pricing.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── SimulationConfig  (grid dimensions, seed)
//! ├── PricerRng         (random number generation)
//! └── Orchestration
//!     ├── simulate()          → PathMatrix
//!     ├── price_terminal()    → PriceEstimate
//!     └── BenchmarkComparison (against the model's closed form)
//! ```
//!
//! Every stage is also usable on its own:
//!
//! ```rust
//! use jumpdiff_core::types::MarketParameters;
//! use jumpdiff_pricing::mc::{price_call, simulate_gbm, SimulationConfig};
//! use jumpdiff_pricing::rng::PricerRng;
//!
//! let market = MarketParameters::new(100.0, 0.05, 0.25).unwrap();
//! let config = SimulationConfig::builder().steps(100).paths(10_000).build().unwrap();
//! let mut rng = PricerRng::from_seed(42);
//!
//! let paths = simulate_gbm(&market, 0.5, &config, &mut rng).unwrap();
//! let estimate = price_call(&paths, 110.0, 0.05, 0.5).unwrap();
//! assert!(estimate.value() > 0.0);
//! ```

pub mod comparison;
pub mod config;
pub mod estimator;
pub mod matrix;
pub mod pricer;
pub mod simulate;

pub use comparison::BenchmarkComparison;
pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_CELLS, MAX_PATHS, MAX_STEPS};
pub use estimator::{price_call, price_put, price_terminal, PriceEstimate};
pub use matrix::PathMatrix;
pub use pricer::MonteCarloPricer;
pub use simulate::{simulate, simulate_gbm, simulate_merton};
