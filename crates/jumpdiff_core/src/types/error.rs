//! Error types for structured error handling.
//!
//! Every fallible operation in the workspace reports a [`PricingError`].
//! There is a single failure mode: a caller-supplied parameter violated a
//! precondition. Validation happens before any computation or random draw,
//! so an error never leaves a partially built result behind.

use thiserror::Error;

/// Result alias used throughout the jumpdiff crates.
pub type Result<T> = std::result::Result<T, PricingError>;

/// Pricing and simulation errors.
///
/// # Examples
/// ```
/// use jumpdiff_core::types::PricingError;
///
/// let err = PricingError::invalid("volatility", 0.0, "must be positive");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'volatility' = 0: must be positive"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// A parameter violated its precondition (sign, finiteness, range).
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in the API.
        name: &'static str,
        /// The offending value (counts are widened to `f64`).
        value: f64,
        /// Which precondition failed.
        reason: &'static str,
    },
}

impl PricingError {
    /// Shorthand constructor for [`PricingError::InvalidParameter`].
    #[inline]
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        PricingError::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    /// Returns the name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            PricingError::InvalidParameter { name, .. } => name,
        }
    }
}

/// Requires `value` to be finite and strictly positive.
#[inline]
pub fn require_positive(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(PricingError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(PricingError::invalid(name, value, "must be positive"));
    }
    Ok(value)
}

/// Requires `value` to be finite and non-negative.
#[inline]
pub fn require_non_negative(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(PricingError::invalid(name, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(PricingError::invalid(name, value, "must be non-negative"));
    }
    Ok(value)
}

/// Requires `value` to be finite (any sign).
#[inline]
pub fn require_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::invalid(name, value, "must be finite"))
    }
}

/// Requires a count (steps, paths) to be at least one.
#[inline]
pub fn require_count(name: &'static str, value: usize) -> Result<usize> {
    if value == 0 {
        Err(PricingError::invalid(name, 0.0, "must be at least 1"))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = PricingError::invalid("spot", -100.0, "must be positive");
        assert_eq!(
            format!("{}", err),
            "Invalid parameter 'spot' = -100: must be positive"
        );
    }

    #[test]
    fn test_parameter_name() {
        let err = PricingError::invalid("strike", 0.0, "must be positive");
        assert_eq!(err.parameter(), "strike");
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("x", 1.5), Ok(1.5));
        assert!(require_positive("x", 0.0).is_err());
        assert!(require_positive("x", -1.0).is_err());
        assert!(require_positive("x", f64::NAN).is_err());
        assert!(require_positive("x", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_non_negative() {
        assert_eq!(require_non_negative("x", 0.0), Ok(0.0));
        assert!(require_non_negative("x", -1e-12).is_err());
        assert!(require_non_negative("x", f64::NAN).is_err());
    }

    #[test]
    fn test_require_finite_allows_negative() {
        assert_eq!(require_finite("rate", -0.02), Ok(-0.02));
        assert!(require_finite("rate", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_require_count() {
        assert_eq!(require_count("steps", 1), Ok(1));
        let err = require_count("paths", 0).unwrap_err();
        assert_eq!(err.parameter(), "paths");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::invalid("maturity", -1.0, "must be positive");
        let _: &dyn std::error::Error = &err;
    }
}
