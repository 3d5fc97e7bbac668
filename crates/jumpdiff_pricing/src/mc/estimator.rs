//! Monte Carlo estimator for European payoffs.
//!
//! Reduces the terminal row of a [`PathMatrix`] to a discounted sample mean
//! and its standard error:
//!
//! ```text
//! value          = e^{-rT} · mean(payoff)
//! standard_error = e^{-rT} · std(payoff) / √paths     (sample std, n - 1)
//! ```

use std::fmt;

use tracing::{debug, warn};

use jumpdiff_core::types::{require_finite, OptionParameters, OptionType, PricingError, Result};

use super::matrix::PathMatrix;

/// Monte Carlo price with its sampling error.
///
/// # Examples
///
/// ```rust
/// use jumpdiff_pricing::mc::{price_call, PathMatrix};
///
/// let matrix = PathMatrix::from_rows(&[vec![90.0, 110.0, 130.0]]).unwrap();
/// let estimate = price_call(&matrix, 100.0, 0.0, 1.0).unwrap();
/// assert!((estimate.value() - 40.0 / 3.0).abs() < 1e-12);
/// assert_eq!(estimate.paths(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceEstimate {
    value: f64,
    standard_error: f64,
    paths: usize,
}

impl PriceEstimate {
    /// Discounted mean payoff.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Standard error of [`value`](Self::value).
    #[inline]
    pub fn standard_error(&self) -> f64 {
        self.standard_error
    }

    /// Number of paths behind the estimate.
    #[inline]
    pub fn paths(&self) -> usize {
        self.paths
    }

    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.standard_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.standard_error
    }
}

impl fmt::Display for PriceEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6} ± {:.6} ({} paths)",
            self.value, self.standard_error, self.paths
        )
    }
}

/// Prices a European call from simulated paths.
///
/// # Errors
///
/// `InvalidParameter` if `strike ≤ 0`, `maturity ≤ 0`, or `rate` is not
/// finite.
pub fn price_call(
    matrix: &PathMatrix,
    strike: f64,
    rate: f64,
    maturity: f64,
) -> Result<PriceEstimate> {
    let option = OptionParameters::new(strike, maturity)?;
    price_terminal(matrix, &option, OptionType::Call, rate)
}

/// Prices a European put from simulated paths.
///
/// # Errors
///
/// Same as [`price_call`].
pub fn price_put(
    matrix: &PathMatrix,
    strike: f64,
    rate: f64,
    maturity: f64,
) -> Result<PriceEstimate> {
    let option = OptionParameters::new(strike, maturity)?;
    price_terminal(matrix, &option, OptionType::Put, rate)
}

/// Prices either side from the terminal row of `matrix`.
///
/// # Errors
///
/// `InvalidParameter` if the option terms are invalid, `rate` is not
/// finite, or the discounted estimate is not representable.
pub fn price_terminal(
    matrix: &PathMatrix,
    option: &OptionParameters,
    option_type: OptionType,
    rate: f64,
) -> Result<PriceEstimate> {
    option.validate()?;
    require_finite("rate", rate)?;

    let strike = option.strike();
    let payoffs: Vec<f64> = matrix
        .terminal_prices()
        .iter()
        .map(|&s| option_type.payoff(s, strike))
        .collect();
    let n = payoffs.len();

    // Moments are taken on payoffs scaled by their maximum so that large
    // but finite grids do not overflow the squared deviations.
    let scale = payoffs.iter().copied().fold(0.0, f64::max);
    let (mean, std_error) = if scale > 0.0 {
        let scaled_mean = payoffs.iter().map(|p| p / scale).sum::<f64>() / n as f64;
        let std_error = if n > 1 {
            let variance = payoffs
                .iter()
                .map(|p| (p / scale - scaled_mean).powi(2))
                .sum::<f64>()
                / (n - 1) as f64;
            scale * (variance / n as f64).sqrt()
        } else {
            0.0
        };
        (scale * scaled_mean, std_error)
    } else {
        (0.0, 0.0)
    };

    let discount = (-rate * option.maturity()).exp();
    let estimate = PriceEstimate {
        value: mean * discount,
        standard_error: std_error * discount,
        paths: n,
    };

    if !(estimate.value.is_finite() && estimate.standard_error.is_finite()) {
        warn!(
            value = estimate.value,
            standard_error = estimate.standard_error,
            "discounted estimate left the representable range"
        );
        return Err(PricingError::invalid(
            "price",
            estimate.value,
            "discounted payoff is not representable",
        ));
    }

    debug!(
        option_type = %option_type,
        strike,
        value = estimate.value,
        standard_error = estimate.standard_error,
        paths = n,
        "monte carlo estimate"
    );
    Ok(estimate)
}
