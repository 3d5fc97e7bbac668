//! Monte Carlo estimate versus closed-form benchmark.

use std::fmt;

use super::estimator::PriceEstimate;

/// Error of a Monte Carlo estimate against an analytic price.
///
/// # Examples
///
/// ```rust
/// use jumpdiff_pricing::mc::{price_call, BenchmarkComparison, PathMatrix};
///
/// let matrix = PathMatrix::from_rows(&[vec![90.0, 110.0, 130.0]]).unwrap();
/// let estimate = price_call(&matrix, 100.0, 0.0, 1.0).unwrap();
/// let cmp = BenchmarkComparison::new(estimate, 13.0);
///
/// assert!(cmp.absolute_error() < 0.5);
/// assert!(cmp.within(3.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkComparison {
    estimate: PriceEstimate,
    analytic: f64,
    absolute_error: f64,
    relative_error: f64,
    z_score: f64,
}

impl BenchmarkComparison {
    /// Compares `estimate` with the benchmark price `analytic`.
    pub fn new(estimate: PriceEstimate, analytic: f64) -> Self {
        let absolute_error = (estimate.value() - analytic).abs();
        let relative_error = ratio(absolute_error, analytic.abs());
        let z_score = ratio(absolute_error, estimate.standard_error());
        Self {
            estimate,
            analytic,
            absolute_error,
            relative_error,
            z_score,
        }
    }

    /// The Monte Carlo side.
    #[inline]
    pub fn estimate(&self) -> &PriceEstimate {
        &self.estimate
    }

    /// Monte Carlo value.
    #[inline]
    pub fn monte_carlo(&self) -> f64 {
        self.estimate.value()
    }

    /// Benchmark value.
    #[inline]
    pub fn analytic(&self) -> f64 {
        self.analytic
    }

    /// `|mc - analytic|`.
    #[inline]
    pub fn absolute_error(&self) -> f64 {
        self.absolute_error
    }

    /// `|mc - analytic| / |analytic|`.
    #[inline]
    pub fn relative_error(&self) -> f64 {
        self.relative_error
    }

    /// Absolute error in units of the estimate's standard error.
    #[inline]
    pub fn z_score(&self) -> f64 {
        self.z_score
    }

    /// True when the benchmark lies within `n_std_errors` standard errors.
    #[inline]
    pub fn within(&self, n_std_errors: f64) -> bool {
        self.z_score <= n_std_errors
    }
}

/// `num / den` with an exact match scoring zero and any miss against a zero
/// denominator scoring infinity.
fn ratio(num: f64, den: f64) -> f64 {
    if num == 0.0 {
        0.0
    } else if den == 0.0 {
        f64::INFINITY
    } else {
        num / den
    }
}

impl fmt::Display for BenchmarkComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mc {:.6} vs analytic {:.6}: abs {:.3e}, rel {:.3}%, {:.2} se",
            self.monte_carlo(),
            self.analytic,
            self.absolute_error,
            100.0 * self.relative_error,
            self.z_score
        )
    }
}
