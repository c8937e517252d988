//! Epsilon-tolerant comparisons.
//!
//! Every other layer of the crate compares scalars through these functions,
//! using the single tolerance [`EPSILON`].
//!
//! # Limitations
//!
//! The tolerance band is absolute, not relative. For large magnitudes the
//! band is narrower than the spacing between adjacent `f64` values, so two
//! values that differ only by rounding may compare unequal. This is accepted
//! behavior.
//!
//! Results for NaN or infinite inputs are unspecified. Any comparison
//! involving NaN is `false`, so `sign(NaN)` is `1` and `abs(NaN)` is NaN.

use crate::consts::EPSILON;

/// Returns `true` if `|a - b| <= EPSILON`.
///
/// The band edge is inclusive up to the rounding of the operands themselves.
/// Two decimals written exactly `EPSILON` apart therefore compare equal even
/// though their binary difference is a few ulps larger.
///
/// # Examples
/// ```
/// use u_numcore::compare::equals;
/// assert!(equals(1.0, 1.00001));
/// assert!(!equals(1.0, 1.001));
/// ```
pub const fn equals(a: f64, b: f64) -> bool {
    let delta = magnitude(a - b);
    delta <= EPSILON || delta - EPSILON <= rounding_slack(a, b)
}

/// Returns `true` if `a` exceeds `b` by more than `EPSILON`.
///
/// Values inside the tolerance band are neither greater nor less.
pub const fn greater_than(a: f64, b: f64) -> bool {
    beyond_tolerance(a - b, a, b)
}

/// Returns `true` if `b` exceeds `a` by more than `EPSILON`.
pub const fn less_than(a: f64, b: f64) -> bool {
    beyond_tolerance(b - a, a, b)
}

/// Sign of `value` with a dead zone of `EPSILON` around zero.
///
/// # Examples
/// ```
/// use u_numcore::compare::sign;
/// assert_eq!(sign(-3.0), -1);
/// assert_eq!(sign(0.000001), 0);
/// assert_eq!(sign(2.5), 1);
/// ```
pub const fn sign(value: f64) -> i32 {
    if equals(value, 0.0) {
        0
    } else if less_than(value, 0.0) {
        -1
    } else {
        1
    }
}

/// Absolute value. Values within `EPSILON` below zero are returned unchanged.
pub const fn abs(value: f64) -> f64 {
    if less_than(value, 0.0) { -value } else { value }
}

/// `delta > EPSILON`, where a delta that exceeds the band only by the
/// rounding of its operands still counts as inside it.
const fn beyond_tolerance(delta: f64, a: f64, b: f64) -> bool {
    delta > EPSILON && delta - EPSILON > rounding_slack(a, b)
}

/// Upper bound on [`rounding_slack`]. Keeps the band absolute at any magnitude.
const SLACK_CAP: f64 = EPSILON * 1e-6;

// One unit of relative rounding on the larger operand, capped at SLACK_CAP.
// Decimal inputs that are exactly EPSILON apart (1.0 and 1.00001) land a few
// ulps outside the band once parsed into binary.
const fn rounding_slack(a: f64, b: f64) -> f64 {
    let (a, b) = (magnitude(a), magnitude(b));
    let larger = if a > b { a } else { b };
    if !larger.is_finite() {
        return 0.0;
    }
    let slack = f64::EPSILON * larger;
    if slack < SLACK_CAP { slack } else { SLACK_CAP }
}

const fn magnitude(value: f64) -> f64 {
    if value < 0.0 { -value } else { value }
}
