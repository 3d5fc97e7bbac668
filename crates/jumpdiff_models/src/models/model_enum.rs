//! Static dispatch enum for the simulated price dynamics.
//!
//! ## Example
//!
//! ```
//! use jumpdiff_core::types::JumpParameters;
//! use jumpdiff_models::models::PathModel;
//!
//! let gbm = PathModel::Gbm;
//! assert_eq!(gbm.model_name(), "GBM");
//!
//! let merton = PathModel::Merton(JumpParameters::new(1.0, -0.05, 0.1).unwrap());
//! assert_eq!(merton.model_name(), "Merton");
//! assert_eq!(merton.jumps().intensity(), 1.0);
//! ```

use std::fmt;

use jumpdiff_core::types::{JumpParameters, MarketParameters, OptionParameters, Result};

use crate::analytical::{merton_jump_diffusion, BlackScholes, OptionPrices};

/// Price dynamics under the risk-neutral measure.
///
/// # Supported Models
///
/// - `Gbm`: geometric Brownian motion
/// - `Merton`: geometric Brownian motion plus compound-Poisson log-normal jumps
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathModel {
    /// Geometric Brownian motion.
    #[default]
    Gbm,
    /// Merton jump-diffusion.
    Merton(JumpParameters),
}

impl PathModel {
    /// Short model name, used in log events.
    pub fn model_name(&self) -> &'static str {
        match self {
            PathModel::Gbm => "GBM",
            PathModel::Merton(_) => "Merton",
        }
    }

    /// Jump component; switched off for GBM.
    pub fn jumps(&self) -> JumpParameters {
        match self {
            PathModel::Gbm => JumpParameters::none(),
            PathModel::Merton(jumps) => *jumps,
        }
    }

    /// True when paths can jump.
    pub fn has_jumps(&self) -> bool {
        !self.jumps().is_degenerate()
    }

    /// Re-checks the jump parameters, if any.
    pub fn validate(&self) -> Result<()> {
        match self {
            PathModel::Gbm => Ok(()),
            PathModel::Merton(jumps) => jumps.validate(),
        }
    }

    /// Closed-form call and put under this model.
    ///
    /// Black-Scholes for GBM, the Merton series for jump-diffusion.
    pub fn analytic_prices(
        &self,
        market: &MarketParameters,
        option: &OptionParameters,
    ) -> Result<OptionPrices> {
        match self {
            PathModel::Gbm => {
                option.validate()?;
                BlackScholes::from_market(market)?
                    .option_prices(option.strike(), option.maturity())
            }
            PathModel::Merton(jumps) => merton_jump_diffusion(market, jumps, option),
        }
    }
}

impl fmt::Display for PathModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathModel::Gbm => write!(f, "GBM"),
            PathModel::Merton(j) => write!(
                f,
                "Merton(lambda={}, m={}, v={})",
                j.intensity(),
                j.mean(),
                j.std_dev()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gbm_has_no_jumps() {
        let model = PathModel::default();
        assert_eq!(model, PathModel::Gbm);
        assert!(!model.has_jumps());
        assert_eq!(model.jumps(), JumpParameters::none());
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_merton_with_zero_intensity_has_no_jumps() {
        let model = PathModel::Merton(JumpParameters::new(0.0, 0.1, 0.2).unwrap());
        assert!(!model.has_jumps());
        assert_eq!(model.model_name(), "Merton");
    }

    #[test]
    fn test_analytic_prices_dispatch() {
        let market = MarketParameters::new(100.0, 0.05, 0.25).unwrap();
        let option = OptionParameters::new(110.0, 0.5).unwrap();

        let gbm = PathModel::Gbm.analytic_prices(&market, &option).unwrap();
        let degenerate = PathModel::Merton(JumpParameters::none())
            .analytic_prices(&market, &option)
            .unwrap();
        assert_relative_eq!(gbm.call, degenerate.call, epsilon = 1e-12);

        let jumpy = PathModel::Merton(JumpParameters::new(2.0, 0.0, 0.2).unwrap())
            .analytic_prices(&market, &option)
            .unwrap();
        assert!(jumpy.call > gbm.call);
    }

    #[test]
    fn test_display() {
        assert_eq!(PathModel::Gbm.to_string(), "GBM");
        let model = PathModel::Merton(JumpParameters::new(1.0, 0.0, 0.1).unwrap());
        assert_eq!(model.to_string(), "Merton(lambda=1, m=0, v=0.1)");
    }
}
