//! Black-Scholes pricing model for European options.
//!
//! Closed-form call and put prices with analytical Greeks, on an underlying
//! paying a continuous dividend yield `q`.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! With `q = 0` these reduce to the textbook formulas.

use num_traits::Float;

use jumpdiff_core::math::{standard_normal_cdf, standard_normal_pdf};
use jumpdiff_core::types::{MarketParameters, OptionType, PricingError, Result};

use super::prices::OptionPrices;

/// Converts a generic float for error reporting.
#[inline]
fn as_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[inline]
fn check_positive<T: Float>(name: &'static str, value: T) -> Result<T> {
    if !value.is_finite() {
        return Err(PricingError::invalid(name, as_f64(value), "must be finite"));
    }
    if value <= T::zero() {
        return Err(PricingError::invalid(name, as_f64(value), "must be positive"));
    }
    Ok(value)
}

/// Analytical Greeks for one option.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Greeks<T: Float> {
    /// ∂V/∂S
    pub delta: T,
    /// ∂²V/∂S²
    pub gamma: T,
    /// ∂V/∂σ
    pub vega: T,
    /// ∂V/∂t (calendar time, usually negative)
    pub theta: T,
    /// ∂V/∂r
    pub rho: T,
}

/// Black-Scholes model for European option pricing.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (`f64`, `f32`)
///
/// # Examples
/// ```
/// use jumpdiff_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0).unwrap();
/// let put = bs.price_put(100.0, 1.0).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Continuous dividend yield (q)
    dividend_yield: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model with zero dividend yield.
    ///
    /// # Errors
    /// `InvalidParameter` if spot or volatility is not positive and finite,
    /// or the rate is not finite. Negative rates are allowed.
    ///
    /// # Examples
    /// ```
    /// use jumpdiff_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self> {
        check_positive("spot", spot)?;
        check_positive("volatility", volatility)?;
        if !rate.is_finite() {
            return Err(PricingError::invalid("rate", as_f64(rate), "must be finite"));
        }

        Ok(Self {
            spot,
            rate,
            dividend_yield: T::zero(),
            volatility,
        })
    }

    /// Returns a copy with the given continuous dividend yield.
    ///
    /// # Errors
    /// `InvalidParameter` if the yield is negative or not finite.
    pub fn with_dividend_yield(mut self, dividend_yield: T) -> Result<Self> {
        if !dividend_yield.is_finite() || dividend_yield < T::zero() {
            return Err(PricingError::invalid(
                "dividend_yield",
                as_f64(dividend_yield),
                "must be finite and non-negative",
            ));
        }
        self.dividend_yield = dividend_yield;
        Ok(self)
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> T {
        self.dividend_yield
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Validates contract terms and returns `(d1, d2, σ√T)`.
    ///
    /// Degenerate limits (`σ√T` underflowing, log-moneyness overflowing) are
    /// rejected rather than propagated as NaN/Inf.
    fn d_terms(&self, strike: T, expiry: T) -> Result<(T, T, T)> {
        check_positive("strike", strike)?;
        check_positive("maturity", expiry)?;

        let half = T::from(0.5).unwrap();
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        if !(vol_sqrt_t > T::min_positive_value()) {
            return Err(PricingError::invalid(
                "volatility",
                as_f64(self.volatility),
                "sigma*sqrt(T) is too small to evaluate d1",
            ));
        }

        let log_moneyness = (self.spot / strike).ln();
        let drift =
            (self.rate - self.dividend_yield + half * self.volatility * self.volatility) * expiry;
        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        if !d1.is_finite() {
            return Err(PricingError::invalid(
                "strike",
                as_f64(strike),
                "d1 is not finite for this spot/strike ratio",
            ));
        }

        Ok((d1, d1 - vol_sqrt_t, vol_sqrt_t))
    }

    /// Computes d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T).
    pub fn d1(&self, strike: T, expiry: T) -> Result<T> {
        self.d_terms(strike, expiry).map(|(d1, _, _)| d1)
    }

    /// Computes d₂ = d₁ - σ√T.
    pub fn d2(&self, strike: T, expiry: T) -> Result<T> {
        self.d_terms(strike, expiry).map(|(_, d2, _)| d2)
    }

    /// Computes the European call price, clamped at zero.
    ///
    /// # Examples
    /// ```
    /// use jumpdiff_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let price = bs.price_call(100.0, 1.0).unwrap();
    /// assert!((price - 10.4506).abs() < 1e-3);
    /// ```
    pub fn price_call(&self, strike: T, expiry: T) -> Result<T> {
        self.price(strike, expiry, OptionType::Call)
    }

    /// Computes the European put price, clamped at zero.
    pub fn price_put(&self, strike: T, expiry: T) -> Result<T> {
        self.price(strike, expiry, OptionType::Put)
    }

    /// Computes the price for either side.
    pub fn price(&self, strike: T, expiry: T, option_type: OptionType) -> Result<T> {
        let (d1, d2, _) = self.d_terms(strike, expiry)?;
        let discount = (-self.rate * expiry).exp();
        let carry = (-self.dividend_yield * expiry).exp();
        let forward_spot = self.spot * carry;

        let price = match option_type {
            OptionType::Call => {
                forward_spot * standard_normal_cdf(d1) - strike * discount * standard_normal_cdf(d2)
            }
            OptionType::Put => {
                strike * discount * standard_normal_cdf(-d2)
                    - forward_spot * standard_normal_cdf(-d1)
            }
        };

        if !price.is_finite() {
            return Err(PricingError::invalid(
                "rate",
                as_f64(self.rate),
                "discounting overflowed",
            ));
        }
        // Cancellation near zero can leave a few ulps of negative noise
        Ok(price.max(T::zero()))
    }

    /// Computes call and put in one pass.
    pub fn prices(&self, strike: T, expiry: T) -> Result<(T, T)> {
        Ok((
            self.price(strike, expiry, OptionType::Call)?,
            self.price(strike, expiry, OptionType::Put)?,
        ))
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = e^(-qT)·N(d₁)
    /// - Put Delta = e^(-qT)·(N(d₁) - 1)
    pub fn delta(&self, strike: T, expiry: T, option_type: OptionType) -> Result<T> {
        let (d1, _, _) = self.d_terms(strike, expiry)?;
        let carry = (-self.dividend_yield * expiry).exp();
        let n_d1 = standard_normal_cdf(d1);

        Ok(match option_type {
            OptionType::Call => carry * n_d1,
            OptionType::Put => carry * (n_d1 - T::one()),
        })
    }

    /// Computes Gamma (∂²V/∂S²), identical for calls and puts.
    ///
    /// Gamma = e^(-qT)·φ(d₁) / (S·σ·√T)
    pub fn gamma(&self, strike: T, expiry: T) -> Result<T> {
        let (d1, _, vol_sqrt_t) = self.d_terms(strike, expiry)?;
        let carry = (-self.dividend_yield * expiry).exp();
        Ok(carry * standard_normal_pdf(d1) / (self.spot * vol_sqrt_t))
    }

    /// Computes Vega (∂V/∂σ), identical for calls and puts.
    ///
    /// Vega = S·e^(-qT)·√T·φ(d₁)
    pub fn vega(&self, strike: T, expiry: T) -> Result<T> {
        let (d1, _, _) = self.d_terms(strike, expiry)?;
        let carry = (-self.dividend_yield * expiry).exp();
        Ok(self.spot * carry * expiry.sqrt() * standard_normal_pdf(d1))
    }

    /// Computes Theta (∂V/∂t), the calendar-time decay.
    ///
    /// - Call: -S·e^(-qT)·φ(d₁)·σ/(2√T) - r·K·e^(-rT)·N(d₂) + q·S·e^(-qT)·N(d₁)
    /// - Put: -S·e^(-qT)·φ(d₁)·σ/(2√T) + r·K·e^(-rT)·N(-d₂) - q·S·e^(-qT)·N(-d₁)
    pub fn theta(&self, strike: T, expiry: T, option_type: OptionType) -> Result<T> {
        let (d1, d2, _) = self.d_terms(strike, expiry)?;
        let two = T::from(2.0).unwrap();
        let discount = (-self.rate * expiry).exp();
        let forward_spot = self.spot * (-self.dividend_yield * expiry).exp();

        let decay =
            -(forward_spot * standard_normal_pdf(d1) * self.volatility) / (two * expiry.sqrt());

        Ok(match option_type {
            OptionType::Call => {
                decay - self.rate * strike * discount * standard_normal_cdf(d2)
                    + self.dividend_yield * forward_spot * standard_normal_cdf(d1)
            }
            OptionType::Put => {
                decay + self.rate * strike * discount * standard_normal_cdf(-d2)
                    - self.dividend_yield * forward_spot * standard_normal_cdf(-d1)
            }
        })
    }

    /// Computes Rho (∂V/∂r).
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    pub fn rho(&self, strike: T, expiry: T, option_type: OptionType) -> Result<T> {
        let (_, d2, _) = self.d_terms(strike, expiry)?;
        let discount = (-self.rate * expiry).exp();

        Ok(match option_type {
            OptionType::Call => strike * expiry * discount * standard_normal_cdf(d2),
            OptionType::Put => -strike * expiry * discount * standard_normal_cdf(-d2),
        })
    }

    /// Computes all Greeks for one side.
    pub fn greeks(&self, strike: T, expiry: T, option_type: OptionType) -> Result<Greeks<T>> {
        Ok(Greeks {
            delta: self.delta(strike, expiry, option_type)?,
            gamma: self.gamma(strike, expiry)?,
            vega: self.vega(strike, expiry)?,
            theta: self.theta(strike, expiry, option_type)?,
            rho: self.rho(strike, expiry, option_type)?,
        })
    }
}

impl BlackScholes<f64> {
    /// Builds the model from validated market parameters, dividend yield
    /// included.
    pub fn from_market(market: &MarketParameters) -> Result<Self> {
        market.validate()?;
        Self::new(market.spot(), market.rate(), market.volatility())?
            .with_dividend_yield(market.dividend_yield())
    }

    /// Call and put as an [`OptionPrices`] pair.
    pub fn option_prices(&self, strike: f64, expiry: f64) -> Result<OptionPrices> {
        let (call, put) = self.prices(strike, expiry)?;
        Ok(OptionPrices { call, put })
    }
}

/// Closed-form Black-Scholes call and put prices (no dividends).
///
/// # Errors
/// `InvalidParameter` if `spot`, `strike`, `volatility` or `maturity` is not
/// positive and finite, or `rate` is not finite.
///
/// # Examples
/// ```
/// use jumpdiff_models::analytical::black_scholes;
///
/// let prices = black_scholes(116.75, 150.0, 0.05, 0.3173, 1.0).unwrap();
/// let parity = prices.call - prices.put - (116.75 - 150.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-9);
/// ```
pub fn black_scholes(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
) -> Result<OptionPrices> {
    BlackScholes::new(spot, rate, volatility)?.option_prices(strike, maturity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_eq!(bs.spot(), 100.0);
        assert_eq!(bs.rate(), 0.05);
        assert_eq!(bs.volatility(), 0.2);
        assert_eq!(bs.dividend_yield(), 0.0);
    }

    #[test]
    fn test_new_invalid_spot() {
        match BlackScholes::new(-100.0_f64, 0.05, 0.2).unwrap_err() {
            PricingError::InvalidParameter { name, value, .. } => {
                assert_eq!(name, "spot");
                assert_eq!(value, -100.0);
            }
        }
        assert!(BlackScholes::new(0.0_f64, 0.05, 0.2).is_err());
    }

    #[test]
    fn test_new_invalid_volatility() {
        let err = BlackScholes::new(100.0_f64, 0.05, 0.0).unwrap_err();
        assert_eq!(err.parameter(), "volatility");
        assert!(BlackScholes::new(100.0_f64, 0.05, -0.2).is_err());
        assert!(BlackScholes::new(100.0_f64, 0.05, f64::NAN).is_err());
    }

    #[test]
    fn test_new_negative_rate_allowed() {
        assert!(BlackScholes::new(100.0_f64, -0.02, 0.2).is_ok());
    }

    #[test]
    fn test_invalid_dividend_yield() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.clone().with_dividend_yield(-0.01).is_err());
        assert!(bs.with_dividend_yield(0.03).is_ok());
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_atm() {
        // ATM with r=0: d1 = σ√T / 2
        let bs = BlackScholes::new(100.0_f64, 0.0, 0.2).unwrap();
        assert_relative_eq!(bs.d1(100.0, 1.0).unwrap(), 0.1, epsilon = 1e-12);
        assert_relative_eq!(bs.d2(100.0, 1.0).unwrap(), -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_d2_relationship() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let d1 = bs.d1(105.0, 0.5).unwrap();
        let d2 = bs.d2(105.0, 0.5).unwrap();
        assert_relative_eq!(d2, d1 - 0.2 * 0.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_or_negative_expiry_rejected() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_eq!(bs.price_call(100.0, 0.0).unwrap_err().parameter(), "maturity");
        assert_eq!(bs.price_put(100.0, -1.0).unwrap_err().parameter(), "maturity");
    }

    #[test]
    fn test_invalid_strike_rejected() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_eq!(bs.price_call(-100.0, 1.0).unwrap_err().parameter(), "strike");
        assert_eq!(bs.price_call(0.0, 1.0).unwrap_err().parameter(), "strike");
    }

    #[test]
    fn test_underflowing_vol_sqrt_t_rejected() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 1e-300).unwrap();
        let err = bs.price_call(100.0, 1e-200).unwrap_err();
        assert_eq!(err.parameter(), "volatility");
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_call_price_reference_value() {
        // S=100, K=100, r=0.05, σ=0.2, T=1 → 10.4506
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_call(100.0, 1.0).unwrap(), 10.4506, epsilon = 1e-3);
    }

    #[test]
    fn test_put_price_reference_value() {
        // S=100, K=100, r=0.05, σ=0.2, T=1 → 5.5735
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_put(100.0, 1.0).unwrap(), 5.5735, epsilon = 1e-3);
    }

    #[test]
    fn test_out_of_the_money_reference_case() {
        // S=116.75, K=150, r=0.05, σ=0.3173, T=1
        let prices = black_scholes(116.75, 150.0, 0.05, 0.3173, 1.0).unwrap();
        assert_relative_eq!(prices.call, 6.509, epsilon = 0.02);
        assert_relative_eq!(prices.put, 32.443, epsilon = 0.02);
    }

    #[test]
    fn test_dividend_yield_reference_value() {
        // S=100, K=100, r=0.05, q=0.02, σ=0.25, T=0.5
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.25)
            .unwrap()
            .with_dividend_yield(0.02)
            .unwrap();
        let call = bs.price_call(100.0, 0.5).unwrap();
        assert_relative_eq!(call, 7.683, epsilon = 2e-3);
    }

    #[test]
    fn test_deep_out_of_the_money_is_non_negative() {
        let bs = BlackScholes::new(1.0_f64, 0.05, 0.05).unwrap();
        let call = bs.price_call(1_000.0, 0.1).unwrap();
        assert!(call >= 0.0);
        assert!(call < 1e-12);
    }

    #[test]
    fn test_deep_itm_call() {
        let bs = BlackScholes::new(200.0_f64, 0.05, 0.2).unwrap();
        let price = bs.price_call(100.0, 1.0).unwrap();
        assert!(price >= 200.0 - 100.0 * (-0.05_f64).exp() - 0.01);
    }

    // ==========================================================
    // Put-Call Parity Tests
    // ==========================================================

    #[test]
    fn test_put_call_parity_various_strikes() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let (call, put) = bs.prices(strike, 1.0).unwrap();
            let forward = 100.0 - strike * (-0.05_f64).exp();
            assert_relative_eq!(call - put, forward, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_put_call_parity_with_dividends() {
        let bs = BlackScholes::new(100.0_f64, 0.03, 0.3)
            .unwrap()
            .with_dividend_yield(0.04)
            .unwrap();
        for expiry in [0.25, 0.5, 1.0, 2.0] {
            let (call, put) = bs.prices(95.0, expiry).unwrap();
            let forward = 100.0 * (-0.04 * expiry).exp() - 95.0 * (-0.03 * expiry).exp();
            assert_relative_eq!(call - put, forward, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_put_call_parity_negative_rate() {
        let bs = BlackScholes::new(100.0_f64, -0.02, 0.2).unwrap();
        let (call, put) = bs.prices(100.0, 1.0).unwrap();
        assert_relative_eq!(call - put, 100.0 - 100.0 * 0.02_f64.exp(), epsilon = 1e-10);
    }

    // ==========================================================
    // Monotonicity
    // ==========================================================

    #[test]
    fn test_prices_increase_with_volatility() {
        let mut previous = (0.0, 0.0);
        for sigma in [0.1, 0.2, 0.3173, 0.5, 1.0] {
            let prices = black_scholes(116.75, 150.0, 0.05, sigma, 1.0).unwrap();
            assert!(prices.call > previous.0, "call not increasing at σ={}", sigma);
            assert!(prices.put > previous.1, "put not increasing at σ={}", sigma);
            previous = (prices.call, prices.put);
        }
    }

    // ==========================================================
    // Greeks Tests
    // ==========================================================

    #[test]
    fn test_delta_bounds() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let call = bs.delta(strike, 1.0, OptionType::Call).unwrap();
            let put = bs.delta(strike, 1.0, OptionType::Put).unwrap();
            assert!((0.0..=1.0).contains(&call));
            assert!((-1.0..=0.0).contains(&put));
            assert_relative_eq!(put, call - 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_gamma_maximum_near_atm() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let atm = bs.gamma(100.0, 1.0).unwrap();
        assert!(atm >= bs.gamma(80.0, 1.0).unwrap());
        assert!(atm >= bs.gamma(120.0, 1.0).unwrap());
    }

    #[test]
    fn test_theta_and_rho_signs() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.theta(100.0, 1.0, OptionType::Call).unwrap() < 0.0);
        assert!(bs.rho(100.0, 1.0, OptionType::Call).unwrap() > 0.0);
        assert!(bs.rho(100.0, 1.0, OptionType::Put).unwrap() < 0.0);
    }

    #[test]
    fn test_greeks_vs_finite_differences() {
        let q = 0.02;
        let make = |spot: f64, rate: f64, vol: f64| {
            BlackScholes::new(spot, rate, vol)
                .unwrap()
                .with_dividend_yield(q)
                .unwrap()
        };
        let bs = make(100.0, 0.05, 0.2);
        let greeks = bs.greeks(105.0, 1.0, OptionType::Call).unwrap();
        let call = |m: &BlackScholes<f64>, expiry: f64| m.price_call(105.0, expiry).unwrap();

        let h = 0.01;
        let fd_delta = (call(&make(100.0 + h, 0.05, 0.2), 1.0)
            - call(&make(100.0 - h, 0.05, 0.2), 1.0))
            / (2.0 * h);
        assert_relative_eq!(greeks.delta, fd_delta, epsilon = 1e-3);

        let fd_gamma = (call(&make(100.0 + h, 0.05, 0.2), 1.0) - 2.0 * call(&bs, 1.0)
            + call(&make(100.0 - h, 0.05, 0.2), 1.0))
            / (h * h);
        assert_relative_eq!(greeks.gamma, fd_gamma, epsilon = 1e-3);

        let hv = 0.001;
        let fd_vega = (call(&make(100.0, 0.05, 0.2 + hv), 1.0)
            - call(&make(100.0, 0.05, 0.2 - hv), 1.0))
            / (2.0 * hv);
        assert_relative_eq!(greeks.vega, fd_vega, epsilon = 5e-3);

        let hr = 0.0001;
        let fd_rho = (call(&make(100.0, 0.05 + hr, 0.2), 1.0)
            - call(&make(100.0, 0.05 - hr, 0.2), 1.0))
            / (2.0 * hr);
        assert_relative_eq!(greeks.rho, fd_rho, epsilon = 5e-3);

        // Theta is the derivative in calendar time, i.e. minus d/dT
        let ht = 1e-4;
        let fd_theta = -(call(&bs, 1.0 + ht) - call(&bs, 1.0 - ht)) / (2.0 * ht);
        assert_relative_eq!(greeks.theta, fd_theta, epsilon = 5e-3);
    }

    // ==========================================================
    // Adapters
    // ==========================================================

    #[test]
    fn test_from_market() {
        let market = MarketParameters::new(100.0, 0.05, 0.25)
            .unwrap()
            .with_dividend_yield(0.02)
            .unwrap();
        let bs = BlackScholes::from_market(&market).unwrap();
        assert_eq!(bs.dividend_yield(), 0.02);
        let prices = bs.option_prices(110.0, 0.5).unwrap();
        assert!(prices.call > 0.0 && prices.put > 0.0);
    }

    #[test]
    fn test_f32_compatibility() {
        let bs = BlackScholes::new(100.0_f32, 0.05_f32, 0.2_f32).unwrap();
        let call = bs.price_call(100.0_f32, 1.0_f32).unwrap();
        assert!((call - 10.4506).abs() < 1e-2);
    }
}
