//! Market, option and jump parameter types.
//!
//! All parameter types are immutable once constructed. Constructors validate
//! their inputs; `validate()` re-checks an existing value, which matters when
//! the value arrived through deserialisation rather than a constructor.

use std::fmt;

use super::error::{require_finite, require_non_negative, require_positive, Result};

/// Market state of the underlying for one pricing run.
///
/// # Examples
/// ```
/// use jumpdiff_core::types::MarketParameters;
///
/// let market = MarketParameters::new(100.0, 0.05, 0.25)
///     .unwrap()
///     .with_dividend_yield(0.02)
///     .unwrap();
/// assert_eq!(market.spot(), 100.0);
/// assert_eq!(market.dividend_yield(), 0.02);
///
/// assert!(MarketParameters::new(-1.0, 0.05, 0.25).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParameters {
    spot: f64,
    rate: f64,
    dividend_yield: f64,
    volatility: f64,
}

impl MarketParameters {
    /// Creates market parameters with zero dividend yield.
    ///
    /// # Errors
    /// `InvalidParameter` if `spot <= 0`, `volatility <= 0`, or any input is
    /// not finite. Negative rates are allowed.
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self> {
        let market = Self {
            spot,
            rate,
            dividend_yield: 0.0,
            volatility,
        };
        market.validate()?;
        Ok(market)
    }

    /// Returns a copy with the given continuous dividend yield.
    ///
    /// # Errors
    /// `InvalidParameter` if `dividend_yield` is negative or not finite.
    pub fn with_dividend_yield(self, dividend_yield: f64) -> Result<Self> {
        require_non_negative("dividend_yield", dividend_yield)?;
        Ok(Self {
            dividend_yield,
            ..self
        })
    }

    /// Re-checks every precondition.
    pub fn validate(&self) -> Result<()> {
        require_positive("spot", self.spot)?;
        require_finite("rate", self.rate)?;
        require_non_negative("dividend_yield", self.dividend_yield)?;
        require_positive("volatility", self.volatility)?;
        Ok(())
    }

    /// Spot price (S0).
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Continuously compounded risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Continuous dividend yield (q).
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Annualised volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Discount factor `exp(-r T)`.
    #[inline]
    pub fn discount_factor(&self, maturity: f64) -> f64 {
        (-self.rate * maturity).exp()
    }
}

/// Contract terms of a European option.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParameters {
    strike: f64,
    maturity: f64,
}

impl OptionParameters {
    /// Creates option terms.
    ///
    /// # Errors
    /// `InvalidParameter` if `strike <= 0` or `maturity <= 0`.
    pub fn new(strike: f64, maturity: f64) -> Result<Self> {
        let option = Self { strike, maturity };
        option.validate()?;
        Ok(option)
    }

    /// Re-checks every precondition.
    pub fn validate(&self) -> Result<()> {
        require_positive("strike", self.strike)?;
        require_positive("maturity", self.maturity)?;
        Ok(())
    }

    /// Strike price (K).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Time to maturity in years (T).
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }
}

/// Compound-Poisson jump component of the Merton model.
///
/// Jumps arrive at rate `intensity` per year; each log-jump is drawn from
/// `Normal(mean, std_dev)`. An intensity of zero switches jumps off.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JumpParameters {
    intensity: f64,
    mean: f64,
    std_dev: f64,
}

impl JumpParameters {
    /// Creates jump parameters.
    ///
    /// # Errors
    /// `InvalidParameter` if `intensity < 0`, `std_dev < 0`, or any input is
    /// not finite.
    ///
    /// # Examples
    /// ```
    /// use jumpdiff_core::types::JumpParameters;
    ///
    /// let jumps = JumpParameters::new(1.0, 0.0, 0.1).unwrap();
    /// assert_eq!(jumps.intensity(), 1.0);
    /// assert!(JumpParameters::new(-1.0, 0.0, 0.1).is_err());
    /// ```
    pub fn new(intensity: f64, mean: f64, std_dev: f64) -> Result<Self> {
        let jumps = Self {
            intensity,
            mean,
            std_dev,
        };
        jumps.validate()?;
        Ok(jumps)
    }

    /// Jump component switched off (`intensity = 0`).
    pub const fn none() -> Self {
        Self {
            intensity: 0.0,
            mean: 0.0,
            std_dev: 0.0,
        }
    }

    /// Re-checks every precondition.
    pub fn validate(&self) -> Result<()> {
        require_non_negative("intensity", self.intensity)?;
        require_finite("mean", self.mean)?;
        require_non_negative("std_dev", self.std_dev)?;
        Ok(())
    }

    /// Jump intensity λ (expected jumps per year).
    #[inline]
    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Mean of the log-jump size (m).
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation of the log-jump size (v).
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Drift correction per unit intensity used by the path simulator,
    /// `m + v²/2`.
    #[inline]
    pub fn log_compensator(&self) -> f64 {
        self.mean + 0.5 * self.std_dev * self.std_dev
    }

    /// Expected relative jump size `κ = exp(m + v²/2) - 1`.
    #[inline]
    pub fn kappa(&self) -> f64 {
        self.log_compensator().exp_m1()
    }

    /// True when no jumps can occur.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.intensity == 0.0
    }
}

impl Default for JumpParameters {
    fn default() -> Self {
        Self::none()
    }
}

/// Call or put.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Payoff at maturity for a terminal price.
    ///
    /// ```
    /// use jumpdiff_core::types::OptionType;
    ///
    /// assert_eq!(OptionType::Call.payoff(120.0, 100.0), 20.0);
    /// assert_eq!(OptionType::Put.payoff(120.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn payoff(self, terminal: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (terminal - strike).max(0.0),
            OptionType::Put => (strike - terminal).max(0.0),
        }
    }

    /// True for a call.
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionType::Call)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PricingError;
    use approx::assert_relative_eq;

    #[test]
    fn test_market_parameters_valid() {
        let market = MarketParameters::new(116.75, 0.05, 0.3173).unwrap();
        assert_eq!(market.spot(), 116.75);
        assert_eq!(market.rate(), 0.05);
        assert_eq!(market.dividend_yield(), 0.0);
        assert_eq!(market.volatility(), 0.3173);
    }

    #[test]
    fn test_market_parameters_negative_rate_allowed() {
        assert!(MarketParameters::new(100.0, -0.01, 0.2).is_ok());
    }

    #[test]
    fn test_market_parameters_rejects_bad_inputs() {
        let err = MarketParameters::new(-100.0, 0.05, 0.2).unwrap_err();
        assert_eq!(err.parameter(), "spot");

        let err = MarketParameters::new(100.0, 0.05, 0.0).unwrap_err();
        assert_eq!(err.parameter(), "volatility");

        let err = MarketParameters::new(100.0, f64::NAN, 0.2).unwrap_err();
        assert_eq!(err.parameter(), "rate");

        let err = MarketParameters::new(100.0, 0.05, 0.2)
            .unwrap()
            .with_dividend_yield(-0.01)
            .unwrap_err();
        assert_eq!(err.parameter(), "dividend_yield");
    }

    #[test]
    fn test_discount_factor() {
        let market = MarketParameters::new(100.0, 0.05, 0.2).unwrap();
        assert_relative_eq!(market.discount_factor(2.0), (-0.1_f64).exp());
    }

    #[test]
    fn test_option_parameters() {
        let option = OptionParameters::new(110.0, 0.5).unwrap();
        assert_eq!(option.strike(), 110.0);
        assert_eq!(option.maturity(), 0.5);

        assert!(matches!(
            OptionParameters::new(-110.0, 0.5),
            Err(PricingError::InvalidParameter { name: "strike", .. })
        ));
        assert!(matches!(
            OptionParameters::new(110.0, -0.5),
            Err(PricingError::InvalidParameter {
                name: "maturity",
                ..
            })
        ));
    }

    #[test]
    fn test_jump_parameters() {
        let jumps = JumpParameters::new(6.0, 0.0, 0.3).unwrap();
        assert_relative_eq!(jumps.log_compensator(), 0.045, epsilon = 1e-15);
        assert_relative_eq!(jumps.kappa(), 0.045_f64.exp() - 1.0, epsilon = 1e-15);
        assert!(!jumps.is_degenerate());

        assert!(JumpParameters::none().is_degenerate());
        assert_eq!(JumpParameters::default(), JumpParameters::none());
    }

    #[test]
    fn test_jump_parameters_rejects_bad_inputs() {
        assert!(JumpParameters::new(-0.5, 0.0, 0.1).is_err());
        assert!(JumpParameters::new(1.0, 0.0, -0.1).is_err());
        assert!(JumpParameters::new(1.0, f64::INFINITY, 0.1).is_err());
        // Zero jump volatility is a fixed jump size, not an error
        assert!(JumpParameters::new(1.0, -0.1, 0.0).is_ok());
    }

    #[test]
    fn test_option_type_payoff() {
        assert_eq!(OptionType::Call.payoff(90.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.payoff(90.0, 100.0), 10.0);
        assert!(OptionType::Call.is_call());
        assert!(!OptionType::Put.is_call());
        assert_eq!(OptionType::Put.to_string(), "put");
    }
}
