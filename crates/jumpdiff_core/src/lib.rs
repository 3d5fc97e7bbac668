//! # jumpdiff_core: foundation layer
//!
//! Provides the pieces every other jumpdiff crate depends on:
//! - Error type and validation helpers (`types::error`)
//! - Market, option and jump parameter types (`types::params`)
//! - Standard normal CDF and PDF (`math::distributions`)
//!
//! No dependency on other jumpdiff crates.
//!
//! ## Usage
//!
//! ```rust
//! use jumpdiff_core::math::standard_normal_cdf;
//! use jumpdiff_core::types::{MarketParameters, OptionParameters};
//!
//! let market = MarketParameters::new(100.0, 0.05, 0.25).unwrap();
//! let option = OptionParameters::new(110.0, 0.5).unwrap();
//! assert!(market.discount_factor(option.maturity()) < 1.0);
//!
//! let p = standard_normal_cdf(1.0_f64);
//! assert!((p - 0.8413).abs() < 1e-4);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: derive `Serialize`/`Deserialize` for the parameter types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
