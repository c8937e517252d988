//! Special values shared by the convergent and platform kernels.
//!
//! Both evaluation paths route their inputs through these checks before
//! computing anything, so NaN, infinity and boundary remainders resolve the
//! same way no matter which kernel runs.

use crate::compare::{abs, equals};

/// Resolves `pow(base, exponent)` without computing a product.
///
/// - NaN if `base` is NaN or ±∞
/// - `1` if `exponent == 0` or `base` is within `EPSILON` of `1`
pub(crate) const fn pow(base: f64, exponent: i32) -> Option<f64> {
    if base.is_nan() || base.is_infinite() {
        Some(f64::NAN)
    } else if exponent == 0 || equals(base, 1.0) {
        Some(1.0)
    } else {
        None
    }
}

/// Resolves `tan(angle)` at the poles and zeros of the tangent.
///
/// `half_turn` is `angle mod π` and `quarter_turn` is `angle mod π/2`, each
/// computed by the caller's own remainder kernel. Multiples of π are checked
/// first, so `tan(π)` is `0` rather than NaN.
pub(crate) const fn tan(angle: f64, half_turn: f64, quarter_turn: f64) -> Option<f64> {
    if !angle.is_finite() {
        Some(f64::NAN)
    } else if equals(half_turn, 0.0) {
        Some(0.0)
    } else if !equals(angle, 0.0) && equals(quarter_turn, 0.0) {
        Some(f64::NAN)
    } else {
        None
    }
}

/// Collapses a raw remainder that is a precision artifact to exactly `0.0`.
///
/// A remainder whose magnitude is within `EPSILON` of the divisor's is one
/// full divisor short of zero, and `-0.0` loses its sign.
pub(crate) const fn remainder(remainder: f64, divisor: f64) -> f64 {
    if remainder == 0.0 || equals(abs(remainder), abs(divisor)) {
        0.0
    } else {
        remainder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_pow_special_cases() {
        assert!(pow(f64::NAN, 2).unwrap().is_nan());
        assert!(pow(f64::INFINITY, 0).unwrap().is_nan());
        assert!(pow(f64::NEG_INFINITY, -3).unwrap().is_nan());
        assert_eq!(pow(7.0, 0), Some(1.0));
        assert_eq!(pow(1.000001, 1_000), Some(1.0));
        assert_eq!(pow(2.0, 3), None);
    }

    #[test]
    fn test_tan_special_cases() {
        assert!(tan(f64::NAN, f64::NAN, f64::NAN).unwrap().is_nan());
        assert!(tan(f64::INFINITY, f64::NAN, f64::NAN).unwrap().is_nan());
        assert_eq!(tan(0.0, 0.0, 0.0), Some(0.0));
        assert_eq!(tan(PI, 0.0, 0.0), Some(0.0));
        assert!(tan(FRAC_PI_2, FRAC_PI_2, 0.0).unwrap().is_nan());
        assert_eq!(tan(1.0, 1.0, 1.0), None);
    }

    #[test]
    fn test_remainder_normalization() {
        assert_eq!(remainder(1.3, 2.0), 1.3);
        assert_eq!(remainder(-1.3, 2.0), -1.3);
        assert_eq!(remainder(0.09999999999999998, 0.1), 0.0);
        assert_eq!(remainder(-1.999999, -2.0), 0.0);
        assert!(remainder(-0.0, 3.0).is_sign_positive());
        assert!(remainder(f64::NAN, 3.0).is_nan());
    }
}
