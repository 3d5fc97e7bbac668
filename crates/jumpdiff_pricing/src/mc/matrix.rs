//! Simulated price grid.

use jumpdiff_core::types::{PricingError, Result};

/// A `steps × paths` grid of simulated prices.
///
/// Row `t` holds every path's price after `t + 1` time increments, so the
/// initial spot is not a row and the last row is the terminal price. Column
/// `j` is one independent path. Storage is step-major
/// (`data[step * paths + path]`), which keeps each row contiguous.
///
/// Every entry is finite and strictly positive. The grid is never mutated
/// once built.
///
/// # Examples
///
/// ```rust
/// use jumpdiff_pricing::mc::PathMatrix;
///
/// let matrix = PathMatrix::from_rows(&[vec![101.0, 99.0], vec![103.0, 97.5]]).unwrap();
/// assert_eq!(matrix.steps(), 2);
/// assert_eq!(matrix.paths(), 2);
/// assert_eq!(matrix.terminal_prices(), &[103.0, 97.5]);
/// assert_eq!(matrix.path(1), Some(vec![99.0, 97.5]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PathMatrix {
    steps: usize,
    paths: usize,
    data: Vec<f64>,
}

impl PathMatrix {
    /// Wraps simulator output whose invariants were checked by the caller.
    pub(crate) fn from_raw(steps: usize, paths: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), steps * paths);
        Self { steps, paths, data }
    }

    /// Builds a matrix from caller-supplied rows (one row per time step).
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if there are no rows, the first row is empty, the
    /// rows differ in length, or any price is not finite and positive.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let steps = rows.len();
        if steps == 0 {
            return Err(PricingError::invalid("steps", 0.0, "must be at least 1"));
        }
        let paths = rows[0].len();
        if paths == 0 {
            return Err(PricingError::invalid("paths", 0.0, "must be at least 1"));
        }

        let mut data = Vec::with_capacity(steps * paths);
        for row in rows {
            if row.len() != paths {
                return Err(PricingError::invalid(
                    "paths",
                    row.len() as f64,
                    "rows must all have the same length",
                ));
            }
            for &price in row {
                if !(price.is_finite() && price > 0.0) {
                    return Err(PricingError::invalid(
                        "price",
                        price,
                        "must be finite and positive",
                    ));
                }
            }
            data.extend_from_slice(row);
        }

        Ok(Self { steps, paths, data })
    }

    /// Number of time steps (rows).
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of paths (columns).
    #[inline]
    pub fn paths(&self) -> usize {
        self.paths
    }

    /// Price on `path` after `step + 1` increments.
    #[inline]
    pub fn get(&self, step: usize, path: usize) -> Option<f64> {
        if step < self.steps && path < self.paths {
            Some(self.data[step * self.paths + path])
        } else {
            None
        }
    }

    /// All path prices at one time step.
    #[inline]
    pub fn row(&self, step: usize) -> Option<&[f64]> {
        if step < self.steps {
            let start = step * self.paths;
            Some(&self.data[start..start + self.paths])
        } else {
            None
        }
    }

    /// Iterates over the rows in time order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.paths)
    }

    /// Prices at maturity (the last row), one per path.
    #[inline]
    pub fn terminal_prices(&self) -> &[f64] {
        &self.data[(self.steps - 1) * self.paths..]
    }

    /// One path through time, copied out of the step-major storage.
    pub fn path(&self, path: usize) -> Option<Vec<f64>> {
        if path < self.paths {
            Some(self.data.iter().skip(path).step_by(self.paths).copied().collect())
        } else {
            None
        }
    }

    /// The raw step-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}
