//! # Jumpdiff Pricing (Layer 3: Monte Carlo Engine)
//!
//! ## Layer 3 Role
//!
//! jumpdiff_pricing is the simulation engine on top of the foundation and
//! model layers:
//! - Layer 1 (jumpdiff_core): errors, parameter types, normal CDF
//! - Layer 2 (jumpdiff_models): Black-Scholes and Merton closed forms,
//!   `PathModel`
//! - Layer 3 (this crate): seeded random numbers, GBM and Merton path
//!   simulation, Monte Carlo estimation, benchmark comparison
//!
//! ## Usage Example
//!
//! ```rust
//! use jumpdiff_core::types::{JumpParameters, MarketParameters, OptionParameters, OptionType};
//! use jumpdiff_models::models::PathModel;
//! use jumpdiff_pricing::mc::{MonteCarloPricer, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .steps(52)
//!     .paths(20_000)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//! let mut pricer = MonteCarloPricer::new(config).unwrap();
//!
//! let market = MarketParameters::new(100.0, 0.05, 0.2).unwrap();
//! let option = OptionParameters::new(100.0, 1.0).unwrap();
//! let model = PathModel::Merton(JumpParameters::new(0.5, 0.0, 0.15).unwrap());
//!
//! let cmp = pricer
//!     .compare_with_analytic(&market, &model, &option, OptionType::Call)
//!     .unwrap();
//! assert!(cmp.within(4.0));
//! ```
//!
//! ## Logging
//!
//! The engine emits `tracing` events (`debug` for simulation and pricing,
//! `warn` when a simulated grid leaves the representable range). It never
//! installs a subscriber; that is the application's choice.
//!
//! ## Concurrency
//!
//! Single-threaded. The generator is passed by `&mut`, so each generator
//! has one consumer at a time. `PricerRng` is `Send`; give each thread its
//! own independently seeded instance.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;
