//! Standard normal distribution functions.
//!
//! - [`standard_normal_cdf`]: cumulative distribution function Φ
//! - [`standard_normal_pdf`]: probability density function φ
//!
//! Both are generic over `T: Float` so the analytic models can be evaluated
//! in `f32` or `f64`.

use num_traits::Float;

const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function, Abramowitz and Stegun 7.1.26.
///
/// Maximum absolute error 1.5e-7. Negative arguments are reflected through
/// `erfc(-x) = 2 - erfc(x)`, which makes `Φ(x) + Φ(-x) = 1` hold to
/// rounding.
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let abs_x = x.abs();

    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let t = one / (one + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        T::from(2.0).unwrap() - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Φ(x) = ½ · erfc(-x / √2), result in `[0, 1]`, non-decreasing in `x`.
///
/// # Examples
/// ```
/// use jumpdiff_core::math::standard_normal_cdf;
///
/// assert!((standard_normal_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(standard_normal_cdf(-3.0_f64) < 0.01);
/// assert!(standard_normal_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn standard_normal_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();
    // The approximation gives erfc(0) = 1 - 1e-9; pin the centre so the
    // reflection identity also holds at zero.
    if x == T::zero() {
        return half;
    }
    let cdf = half * erfc_approx(-x / sqrt_2);
    // Rounding in the reflection can leave a few ulps outside [0, 1]
    cdf.max(T::zero()).min(T::one())
}

/// Standard normal probability density function.
///
/// φ(x) = exp(-x²/2) / √(2π)
///
/// ```
/// use jumpdiff_core::math::standard_normal_pdf;
///
/// assert!((standard_normal_pdf(0.0_f64) - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn standard_normal_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();
    frac_1_sqrt_2pi * (-half * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cdf_at_zero() {
        assert_relative_eq!(standard_normal_cdf(0.0_f64), 0.5, epsilon = 1e-7);
    }

    #[test]
    fn test_cdf_reference_values() {
        assert_relative_eq!(standard_normal_cdf(1.0_f64), 0.8413447460685429, epsilon = 1e-7);
        assert_relative_eq!(standard_normal_cdf(-1.0_f64), 0.15865525393145707, epsilon = 1e-7);
        assert_relative_eq!(standard_normal_cdf(2.0_f64), 0.9772498680518208, epsilon = 1e-7);
        assert_relative_eq!(standard_normal_cdf(-2.0_f64), 0.022750131948179195, epsilon = 1e-7);
        assert_relative_eq!(standard_normal_cdf(1.96_f64), 0.9750021048517795, epsilon = 1e-7);
    }

    #[test]
    fn test_cdf_symmetry() {
        for x in [-5.0, -3.0, -1.5, -0.25, 0.0, 0.25, 1.5, 3.0, 5.0] {
            let total = standard_normal_cdf(x) + standard_normal_cdf(-x);
            assert_relative_eq!(total, 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_cdf_extreme_tails() {
        assert_eq!(standard_normal_cdf(-40.0_f64), 0.0);
        assert_eq!(standard_normal_cdf(40.0_f64), 1.0);
        assert_eq!(standard_normal_cdf(f64::NEG_INFINITY), 0.0);
        assert_eq!(standard_normal_cdf(f64::INFINITY), 1.0);
    }

    #[test]
    fn test_pdf_reference_values() {
        assert_relative_eq!(standard_normal_pdf(1.0_f64), 0.2419707245191434, epsilon = 1e-12);
        assert_relative_eq!(standard_normal_pdf(-1.0_f64), standard_normal_pdf(1.0_f64));
    }

    #[test]
    fn test_f32_compatibility() {
        let cdf = standard_normal_cdf(0.5_f32);
        assert!((cdf - 0.691_462_5).abs() < 1e-5);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_cdf_in_unit_interval(x in -50.0_f64..50.0) {
                let cdf = standard_normal_cdf(x);
                prop_assert!((0.0..=1.0).contains(&cdf));
            }

            #[test]
            fn test_cdf_reflection(x in -10.0_f64..10.0) {
                let total = standard_normal_cdf(x) + standard_normal_cdf(-x);
                prop_assert!((total - 1.0).abs() < 1e-14);
            }

            #[test]
            fn test_cdf_non_decreasing(x in -8.0_f64..8.0, step in 1e-3_f64..2.0) {
                prop_assert!(standard_normal_cdf(x + step) >= standard_normal_cdf(x));
            }
        }
    }
}
