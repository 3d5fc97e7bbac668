//! Monte Carlo pricing engine.
//!
//! The [`MonteCarloPricer`] coordinates:
//! 1. Random number generation (via [`PricerRng`])
//! 2. Path simulation (via [`simulate`](super::simulate::simulate))
//! 3. Payoff averaging and discounting (via
//!    [`price_terminal`](super::estimator::price_terminal))
//! 4. Comparison against the model's closed form

use tracing::debug;

use jumpdiff_core::types::{MarketParameters, OptionParameters, OptionType, Result};
use jumpdiff_models::models::PathModel;

use super::comparison::BenchmarkComparison;
use super::config::SimulationConfig;
use super::estimator::{price_terminal, PriceEstimate};
use super::matrix::PathMatrix;
use super::simulate::simulate;
use crate::rng::PricerRng;

/// Monte Carlo pricing engine.
///
/// Owns a [`SimulationConfig`] and the generator that drives it. Successive
/// calls continue the random stream; [`reset`](Self::reset) replays it from
/// the start.
///
/// # Examples
///
/// ```rust
/// use jumpdiff_core::types::{MarketParameters, OptionParameters, OptionType};
/// use jumpdiff_models::models::PathModel;
/// use jumpdiff_pricing::mc::{MonteCarloPricer, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .steps(50)
///     .paths(20_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// let mut pricer = MonteCarloPricer::new(config).unwrap();
///
/// let market = MarketParameters::new(100.0, 0.05, 0.2).unwrap();
/// let option = OptionParameters::new(100.0, 1.0).unwrap();
///
/// let estimate = pricer
///     .price_european(&market, &PathModel::Gbm, &option, OptionType::Call)
///     .unwrap();
/// assert!((estimate.value() - 10.45).abs() < 4.0 * estimate.standard_error());
/// ```
#[derive(Debug)]
pub struct MonteCarloPricer {
    config: SimulationConfig,
    /// Seed that [`reset`](Self::reset) returns to.
    base_seed: u64,
    rng: PricerRng,
}

impl MonteCarloPricer {
    /// Creates a new pricer with the given configuration.
    ///
    /// Seeds from the configuration when it carries a seed, otherwise from
    /// entropy (the drawn seed is kept and reported by [`seed`](Self::seed)).
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the configuration is invalid.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed() {
            Some(seed) => PricerRng::from_seed(seed),
            None => PricerRng::from_entropy(),
        };

        Ok(Self {
            config,
            base_seed: rng.seed(),
            rng,
        })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Seed of the current random stream.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Restarts the random stream from the original seed.
    pub fn reset(&mut self) {
        self.rng = PricerRng::from_seed(self.base_seed);
    }

    /// Restarts the random stream from a new seed.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.rng = PricerRng::from_seed(seed);
    }

    /// Simulates a price grid under `model` out to `maturity`.
    ///
    /// # Errors
    ///
    /// See [`simulate`](super::simulate::simulate).
    pub fn simulate(
        &mut self,
        market: &MarketParameters,
        model: &PathModel,
        maturity: f64,
    ) -> Result<PathMatrix> {
        debug!(model = model.model_name(), "pricer simulation");
        simulate(model, market, maturity, &self.config, &mut self.rng)
    }

    /// Prices a European option by simulation.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for any invalid input. Validation runs before any
    /// random draw, so a failed call leaves the stream where it was.
    pub fn price_european(
        &mut self,
        market: &MarketParameters,
        model: &PathModel,
        option: &OptionParameters,
        option_type: OptionType,
    ) -> Result<PriceEstimate> {
        option.validate()?;
        let matrix = self.simulate(market, model, option.maturity())?;
        let estimate = price_terminal(&matrix, option, option_type, market.rate())?;

        debug!(
            model = model.model_name(),
            option_type = %option_type,
            value = estimate.value(),
            standard_error = estimate.standard_error(),
            "priced european option"
        );
        Ok(estimate)
    }

    /// Prices by simulation and compares with the model's closed form.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for any invalid input, or when the closed form
    /// cannot be evaluated.
    pub fn compare_with_analytic(
        &mut self,
        market: &MarketParameters,
        model: &PathModel,
        option: &OptionParameters,
        option_type: OptionType,
    ) -> Result<BenchmarkComparison> {
        let analytic = model.analytic_prices(market, option)?.get(option_type);
        let estimate = self.price_european(market, model, option, option_type)?;
        Ok(BenchmarkComparison::new(estimate, analytic))
    }
}
