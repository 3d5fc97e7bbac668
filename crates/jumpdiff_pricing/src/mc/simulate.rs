//! Path simulation under GBM and Merton jump-diffusion.
//!
//! Both simulators work in log space:
//!
//! ```text
//! GBM:    dX = (r - q - σ²/2) dt + σ √dt Z
//! Merton: dX = (r - q - σ²/2 - λ(m + v²/2)) dt + σ √dt Z + N·J
//!         N ~ Poisson(λ dt),  J ~ Normal(m, v)
//! ```
//!
//! Increments are accumulated down each column of the grid and mapped back
//! with `S = S0 · exp(X)`.
//!
//! # Draw order
//!
//! For a fixed seed the Merton simulator consumes randomness as: the
//! Poisson count grid, then the jump-size grid, then the diffusion grid,
//! each `steps × paths` in step-major order. With a zero jump intensity
//! neither jump grid is drawn, so Merton and GBM produce identical paths
//! from the same seed.
//!
//! A single jump size is drawn per cell and multiplied by that cell's jump
//! count, so several jumps in one step share one size.
//!
//! The jump compensator is `λ(m + v²/2)`, the first-order expansion of the
//! exact martingale correction `λκ = λ(e^{m + v²/2} - 1)`. The discounted
//! price therefore drifts by `λ(κ - m - v²/2)` per year, which is negligible
//! for small log-jump means.

use tracing::{debug, warn};

use jumpdiff_core::types::{
    require_positive, JumpParameters, MarketParameters, PricingError, Result,
};
use jumpdiff_models::models::PathModel;

use super::config::SimulationConfig;
use super::matrix::PathMatrix;
use crate::rng::{PricerRng, MAX_POISSON_RATE};

/// Simulates GBM price paths.
///
/// # Arguments
///
/// * `market` - Spot, rate, dividend yield and volatility
/// * `maturity` - Horizon in years, split into `config.steps()` equal steps
/// * `config` - Grid dimensions
/// * `rng` - Random source; advanced by `steps × paths` normal draws
///
/// # Errors
///
/// `InvalidParameter` for invalid inputs (before any draw) or when the
/// simulated prices leave the representable range.
///
/// # Examples
///
/// ```rust
/// use jumpdiff_core::types::MarketParameters;
/// use jumpdiff_pricing::mc::{simulate_gbm, SimulationConfig};
/// use jumpdiff_pricing::rng::PricerRng;
///
/// let market = MarketParameters::new(100.0, 0.05, 0.25).unwrap();
/// let config = SimulationConfig::builder().steps(50).paths(1_000).build().unwrap();
/// let mut rng = PricerRng::from_seed(42);
///
/// let matrix = simulate_gbm(&market, 0.5, &config, &mut rng).unwrap();
/// assert_eq!(matrix.steps(), 50);
/// assert_eq!(matrix.paths(), 1_000);
/// assert!(matrix.as_slice().iter().all(|&s| s > 0.0));
/// ```
pub fn simulate_gbm(
    market: &MarketParameters,
    maturity: f64,
    config: &SimulationConfig,
    rng: &mut PricerRng,
) -> Result<PathMatrix> {
    simulate_merton(market, &JumpParameters::none(), maturity, config, rng)
}

/// Simulates Merton jump-diffusion price paths.
///
/// # Arguments
///
/// * `market` - Spot, rate, dividend yield and volatility
/// * `jump` - Jump intensity λ, log-jump mean m and standard deviation v
/// * `maturity` - Horizon in years, split into `config.steps()` equal steps
/// * `config` - Grid dimensions
/// * `rng` - Random source
///
/// # Errors
///
/// `InvalidParameter` for invalid inputs (before any draw) or when the
/// simulated prices leave the representable range.
pub fn simulate_merton(
    market: &MarketParameters,
    jump: &JumpParameters,
    maturity: f64,
    config: &SimulationConfig,
    rng: &mut PricerRng,
) -> Result<PathMatrix> {
    market.validate()?;
    jump.validate()?;
    require_positive("maturity", maturity)?;
    config.validate()?;

    let steps = config.steps();
    let paths = config.paths();
    let cells = config.cells();
    let dt = maturity / steps as f64;
    if jump.intensity() * dt > MAX_POISSON_RATE {
        return Err(PricingError::invalid(
            "intensity",
            jump.intensity(),
            "expected jumps per step exceed the representable jump count",
        ));
    }
    let sigma = market.volatility();

    debug!(
        steps,
        paths,
        seed = rng.seed(),
        intensity = jump.intensity(),
        maturity,
        "simulating paths"
    );

    // Jump grids first, so the draw order is fixed for a given seed
    let jumps = if jump.is_degenerate() {
        None
    } else {
        let mut counts = vec![0_u32; cells];
        rng.fill_poisson(jump.intensity() * dt, &mut counts)?;
        let mut sizes = vec![0.0; cells];
        rng.fill_normal(&mut sizes);
        Some((counts, sizes))
    };

    let drift = (market.rate() - market.dividend_yield() - 0.5 * sigma * sigma
        - jump.intensity() * jump.log_compensator())
        * dt;
    let diffusion = sigma * dt.sqrt();

    let mut log_path = vec![0.0; cells];
    rng.fill_normal(&mut log_path);
    for z in log_path.iter_mut() {
        *z = drift + diffusion * *z;
    }

    if let Some((counts, sizes)) = jumps {
        let (m, v) = (jump.mean(), jump.std_dev());
        for ((x, &n), &z) in log_path.iter_mut().zip(&counts).zip(&sizes) {
            if n > 0 {
                *x += f64::from(n) * (m + v * z);
            }
        }
    }

    accumulate_columns(&mut log_path, paths);
    let spot = market.spot();
    for x in log_path.iter_mut() {
        *x = spot * x.exp();
    }

    if let Some(bad) = log_path.iter().position(|&s| !(s.is_finite() && s > 0.0)) {
        warn!(
            step = bad / paths,
            path = bad % paths,
            value = log_path[bad],
            "simulated price left the representable range"
        );
        return Err(PricingError::invalid(
            "maturity",
            maturity,
            "simulated prices overflowed or underflowed for this parameter set",
        ));
    }

    Ok(PathMatrix::from_raw(steps, paths, log_path))
}

/// Simulates paths under the given model.
///
/// # Examples
///
/// ```rust
/// use jumpdiff_core::types::{JumpParameters, MarketParameters};
/// use jumpdiff_models::models::PathModel;
/// use jumpdiff_pricing::mc::{simulate, SimulationConfig};
/// use jumpdiff_pricing::rng::PricerRng;
///
/// let market = MarketParameters::new(100.0, 0.05, 0.2).unwrap();
/// let model = PathModel::Merton(JumpParameters::new(1.0, -0.1, 0.15).unwrap());
/// let config = SimulationConfig::builder().steps(12).paths(500).seed(7).build().unwrap();
///
/// let matrix = simulate(&model, &market, 1.0, &config, &mut PricerRng::from_seed(7)).unwrap();
/// assert_eq!(matrix.terminal_prices().len(), 500);
/// ```
pub fn simulate(
    model: &PathModel,
    market: &MarketParameters,
    maturity: f64,
    config: &SimulationConfig,
    rng: &mut PricerRng,
) -> Result<PathMatrix> {
    match model {
        PathModel::Gbm => simulate_gbm(market, maturity, config, rng),
        PathModel::Merton(jump) => simulate_merton(market, jump, maturity, config, rng),
    }
}

/// Running sum down each column of a step-major grid.
fn accumulate_columns(data: &mut [f64], paths: usize) {
    for start in (paths..data.len()).step_by(paths) {
        let (done, rest) = data.split_at_mut(start);
        let previous = &done[start - paths..];
        for (x, &prev) in rest[..paths].iter_mut().zip(previous) {
            *x += prev;
        }
    }
}
