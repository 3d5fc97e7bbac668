//! Mathematical utilities.

pub mod distributions;

pub use distributions::{standard_normal_cdf, standard_normal_pdf};
