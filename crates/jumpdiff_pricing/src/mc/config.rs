//! Monte Carlo simulation configuration.
//!
//! This module provides [`SimulationConfig`] and its builder. Limits are
//! enforced at `build()`, so every config that exists is runnable.

use jumpdiff_core::types::{require_count, PricingError, Result};

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 100_000;

/// Maximum size of the `steps × paths` price grid.
pub const MAX_CELLS: usize = 500_000_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation dimensions.
/// Use [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use jumpdiff_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .steps(252)
///     .paths(10_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.paths(), 10_000);
/// assert_eq!(config.steps(), 252);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of time steps per path.
    steps: usize,
    /// Number of simulation paths.
    paths: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn paths(&self) -> usize {
        self.paths
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of cells in the simulated price grid.
    #[inline]
    pub fn cells(&self) -> usize {
        self.steps * self.paths
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - `steps` is 0 or greater than [`MAX_STEPS`]
    /// - `paths` is 0 or greater than [`MAX_PATHS`]
    /// - `steps × paths` is greater than [`MAX_CELLS`]
    pub fn validate(&self) -> Result<()> {
        check_count("steps", self.steps, MAX_STEPS)?;
        check_count("paths", self.paths, MAX_PATHS)?;
        match self.steps.checked_mul(self.paths) {
            Some(cells) if cells <= MAX_CELLS => Ok(()),
            _ => Err(PricingError::invalid(
                "paths",
                self.paths as f64,
                "steps x paths exceeds the grid size limit",
            )),
        }
    }
}

fn check_count(name: &'static str, value: usize, max: usize) -> Result<()> {
    require_count(name, value)?;
    if value > max {
        return Err(PricingError::invalid(name, value as f64, "exceeds the allowed maximum"));
    }
    Ok(())
}

/// Builder for [`SimulationConfig`].
///
/// # Examples
///
/// ```rust
/// use jumpdiff_pricing::mc::SimulationConfig;
///
/// let err = SimulationConfig::builder().steps(100).build().unwrap_err();
/// assert_eq!(err.parameter(), "paths");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    steps: Option<usize>,
    paths: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of time steps per path, in [1, 100_000].
    #[inline]
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Sets the number of simulation paths, in [1, 10_000_000].
    #[inline]
    pub fn paths(mut self, paths: usize) -> Self {
        self.paths = Some(paths);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `steps` or `paths` is not set or out of
    /// range.
    pub fn build(self) -> Result<SimulationConfig> {
        let steps = self
            .steps
            .ok_or_else(|| PricingError::invalid("steps", f64::NAN, "must be specified"))?;
        let paths = self
            .paths
            .ok_or_else(|| PricingError::invalid("paths", f64::NAN, "must be specified"))?;

        let config = SimulationConfig {
            steps,
            paths,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
