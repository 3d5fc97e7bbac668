//! Merton (1976) closed-form prices for jump-diffusion.
//!
//! Conditioning on the number of jumps `n` before expiry turns the Merton
//! model into a Poisson mixture of Black-Scholes prices:
//!
//! ```text
//! V = Σ_n  e^{-λ'T} (λ'T)^n / n!  ·  BS(S, K, r_n, σ_n, q, T)
//!
//! κ    = e^{m + v²/2} - 1
//! λ'   = λ (1 + κ)
//! σ_n² = σ² + n v² / T
//! r_n  = r - λκ + n (m + v²/2) / T
//! ```
//!
//! With `λ = 0` the series collapses to a single Black-Scholes term.

use jumpdiff_core::types::{
    JumpParameters, MarketParameters, OptionParameters, PricingError, Result,
};

use super::black_scholes::BlackScholes;
use super::prices::OptionPrices;

/// Series stops once the unvisited Poisson mass is below this.
pub const TAIL_TOLERANCE: f64 = 1e-12;

/// Hard cap on the number of series terms.
pub const MAX_TERMS: usize = 1_000;

/// Merton jump-diffusion call and put prices.
///
/// # Errors
/// `InvalidParameter` for any invalid market, jump or option parameter, or
/// when the jump intensity is so large that the series cannot reach
/// [`TAIL_TOLERANCE`] within [`MAX_TERMS`] terms.
///
/// # Examples
/// ```
/// use jumpdiff_core::types::{JumpParameters, MarketParameters, OptionParameters};
/// use jumpdiff_models::analytical::{black_scholes, merton_jump_diffusion};
///
/// let market = MarketParameters::new(100.0, 0.05, 0.2).unwrap();
/// let option = OptionParameters::new(100.0, 1.0).unwrap();
///
/// let no_jumps = merton_jump_diffusion(&market, &JumpParameters::none(), &option).unwrap();
/// let bs = black_scholes(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
/// assert!((no_jumps.call - bs.call).abs() < 1e-12);
/// ```
pub fn merton_jump_diffusion(
    market: &MarketParameters,
    jump: &JumpParameters,
    option: &OptionParameters,
) -> Result<OptionPrices> {
    market.validate()?;
    jump.validate()?;
    option.validate()?;

    let base = BlackScholes::from_market(market)?;
    let strike = option.strike();
    let maturity = option.maturity();

    if jump.is_degenerate() {
        return base.option_prices(strike, maturity);
    }

    let log_jump = jump.log_compensator();
    let kappa = jump.kappa();
    let intensity_t = jump.intensity() * (1.0 + kappa) * maturity;
    let variance = market.volatility() * market.volatility();
    let jump_variance = jump.std_dev() * jump.std_dev();

    let log_intensity_t = intensity_t.ln();
    let mut log_weight = -intensity_t;
    let mut visited = 0.0;
    let mut call = 0.0;
    let mut put = 0.0;

    for n in 0..MAX_TERMS {
        if n > 0 {
            log_weight += log_intensity_t - (n as f64).ln();
        }
        let weight = log_weight.exp();

        let n_f = n as f64;
        let sigma_n = (variance + n_f * jump_variance / maturity).sqrt();
        let rate_n = market.rate() - jump.intensity() * kappa + n_f * log_jump / maturity;

        let (c, p) = BlackScholes::new(market.spot(), rate_n, sigma_n)?
            .with_dividend_yield(market.dividend_yield())?
            .prices(strike, maturity)?;
        call += weight * c;
        put += weight * p;
        visited += weight;

        // Only stop past the mode, where the weights are falling
        if n_f >= intensity_t && 1.0 - visited < TAIL_TOLERANCE {
            return Ok(OptionPrices {
                call: call.max(0.0),
                put: put.max(0.0),
            });
        }
    }

    Err(PricingError::invalid(
        "intensity",
        jump.intensity(),
        "jump series did not converge",
    ))
}
