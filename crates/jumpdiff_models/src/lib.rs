//! # Jumpdiff Models (L2: Business Logic)
//!
//! Analytic pricers and model definitions.
//!
//! This crate provides:
//! - The Black-Scholes closed form with Greeks
//! - The Merton jump-diffusion series
//! - [`models::PathModel`], the discriminant the simulation engine dispatches on
//!
//! ## Design Principles
//!
//! - **Enum-based models** for static dispatch
//! - **Generic over `T: Float`** where the formula allows it
//! - **Validation first**: every entry point rejects bad input with
//!   `PricingError::InvalidParameter` before computing

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod models;
