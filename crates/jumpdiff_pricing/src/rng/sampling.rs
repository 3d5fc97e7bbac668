//! Shaped sampling helpers.
//!
//! Both functions return a flat, row-major buffer of `rows × cols` draws, the
//! layout [`PathMatrix`](crate::mc::PathMatrix) uses with rows as time steps.

use jumpdiff_core::types::Result;

use super::PricerRng;

/// Draws `rows × cols` i.i.d. standard normal variates, row-major.
///
/// # Panics
///
/// If `rows * cols` overflows `usize`.
///
/// # Examples
/// ```
/// use jumpdiff_pricing::rng::{sample_standard_normal, PricerRng};
///
/// let mut rng = PricerRng::from_seed(1);
/// let z = sample_standard_normal(&mut rng, (3, 4));
/// assert_eq!(z.len(), 12);
/// ```
pub fn sample_standard_normal(rng: &mut PricerRng, shape: (usize, usize)) -> Vec<f64> {
    let (rows, cols) = shape;
    let mut out = vec![0.0; rows * cols];
    rng.fill_normal(&mut out);
    out
}

/// Draws `rows × cols` i.i.d. Poisson(`rate`) counts, row-major.
///
/// A zero rate yields all zeros and consumes no randomness.
///
/// # Errors
///
/// `InvalidParameter` if `rate` is negative or not finite. Nothing is drawn.
///
/// # Panics
///
/// If `rows * cols` overflows `usize`.
pub fn sample_poisson(rng: &mut PricerRng, rate: f64, shape: (usize, usize)) -> Result<Vec<u32>> {
    let (rows, cols) = shape;
    let mut out = vec![0; rows * cols];
    rng.fill_poisson(rate, &mut out)?;
    Ok(out)
}
