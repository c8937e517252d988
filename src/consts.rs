//! Numeric constants shared by every layer of the crate.
//!
//! All angle constants are derived from the single canonical [`PI`] in
//! `const` expressions, so degree/radian round trips stay consistent.

/// Absolute tolerance used by every epsilon-aware comparison.
///
/// Two scalars whose difference is at most `EPSILON` are considered equal.
/// There is no per-call override.
pub const EPSILON: f64 = 0.00001;

/// Canonical π. Every other angle constant is derived from this value.
pub const PI: f64 = core::f64::consts::PI;

/// π/2
pub const FRAC_PI_2: f64 = PI / 2.0;

/// π/4
pub const FRAC_PI_4: f64 = PI / 4.0;

/// 2π, one full turn.
pub const TAU: f64 = 2.0 * PI;

/// 180/π, multiplier from radians to degrees.
pub const DEGREES_PER_RADIAN: f64 = 180.0 / PI;

/// π/180, multiplier from degrees to radians.
pub const RADIANS_PER_DEGREE: f64 = PI / 180.0;

/// Positive infinity sentinel.
pub const INFINITY: f64 = f64::INFINITY;

/// Negative infinity sentinel.
pub const NEG_INFINITY: f64 = f64::NEG_INFINITY;

/// Converts radians to degrees.
///
/// # Examples
/// ```
/// use u_numcore::consts::{radians_to_degrees, FRAC_PI_2};
/// assert!((radians_to_degrees(FRAC_PI_2) - 90.0).abs() < 1e-12);
/// ```
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians * DEGREES_PER_RADIAN
}

/// Converts degrees to radians.
///
/// # Examples
/// ```
/// use u_numcore::consts::{degrees_to_radians, PI};
/// assert!((degrees_to_radians(180.0) - PI).abs() < 1e-12);
/// ```
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * RADIANS_PER_DEGREE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::equals;

    #[test]
    fn test_derived_constants_match_canonical_pi() {
        assert_eq!(FRAC_PI_2 * 2.0, PI);
        assert_eq!(FRAC_PI_4 * 4.0, PI);
        assert_eq!(TAU / 2.0, PI);
        assert!((DEGREES_PER_RADIAN * RADIANS_PER_DEGREE - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_epsilon_is_positive() {
        const { assert!(EPSILON > 0.0) };
    }

    #[test]
    fn test_radians_to_degrees_known_values() {
        assert!((radians_to_degrees(1.570) - 90.0).abs() < 0.1);
        assert!((radians_to_degrees(-1.570) + 90.0).abs() < 0.1);
        assert!((radians_to_degrees(7.854) - 450.0).abs() < 0.1);
        assert!(equals(radians_to_degrees(FRAC_PI_2), 90.0));
        assert_eq!(radians_to_degrees(0.0), 0.0);
    }

    #[test]
    fn test_degrees_to_radians_known_values() {
        assert!((degrees_to_radians(90.0) - 1.57).abs() < 0.01);
        assert!((degrees_to_radians(-90.0) + 1.57).abs() < 0.01);
        assert!((degrees_to_radians(450.0) - 7.85).abs() < 0.01);
        assert_eq!(degrees_to_radians(0.0), 0.0);
    }

    #[test]
    fn test_conversion_in_const_context() {
        const RIGHT_ANGLE: f64 = radians_to_degrees(FRAC_PI_2);
        const HALF_TURN: f64 = degrees_to_radians(180.0);
        assert!(equals(RIGHT_ANGLE, 90.0));
        assert!(equals(HALF_TURN, PI));
    }

    #[test]
    fn test_infinity_sentinels() {
        assert!(INFINITY.is_infinite() && INFINITY > 0.0);
        assert!(NEG_INFINITY.is_infinite() && NEG_INFINITY < 0.0);
        assert_eq!(radians_to_degrees(INFINITY), INFINITY);
    }
}
