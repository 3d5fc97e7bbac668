//! # Random Number Generation Infrastructure
//!
//! Random number generation for the path simulator.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator is seeded, and a generator drawn
//!   from entropy records its seed
//! - **Injection**: simulators take `&mut PricerRng` instead of reaching for
//!   a global generator
//! - **Efficiency**: zero-allocation batch operations via `&mut [f64]` slices
//!
//! ## Module Structure
//!
//! - [`PricerRng`]: PRNG wrapper with seed management (uniform, normal,
//!   Poisson)
//! - [`sample_standard_normal`] / [`sample_poisson`]: shaped draws
//!
//! ## Usage Example
//!
//! ```rust
//! use jumpdiff_pricing::rng::{sample_poisson, PricerRng};
//!
//! let mut rng = PricerRng::from_seed(12345);
//!
//! let normal_value = rng.gen_normal();
//! let counts = sample_poisson(&mut rng, 0.5, (10, 100)).unwrap();
//! assert_eq!(counts.len(), 1000);
//! ```

mod prng;
mod sampling;

pub use prng::{PricerRng, MAX_POISSON_RATE};
pub use sampling::{sample_poisson, sample_standard_normal};
