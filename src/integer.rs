//! Integer algorithms, independent of the floating-point stack.

use crate::error::{MathError, Result};

/// Greatest common divisor by the Euclidean algorithm.
///
/// The first operand must be the larger one; callers sort beforehand.
///
/// # Algorithm
/// Repeatedly replaces `(a, b)` with `(b, a mod b)` until the remainder is
/// zero. By Lamé's theorem the number of steps is at most about five times
/// the number of decimal digits of `b`.
///
/// # Errors
/// - [`MathError::ZeroInput`] if either operand is zero.
/// - [`MathError::Ordering`] if `a < b`.
///
/// # Examples
/// ```
/// use u_numcore::integer::euclidean_gcd;
/// assert_eq!(euclidean_gcd(1071, 462), Ok(21));
/// assert!(euclidean_gcd(462, 1071).is_err());
/// ```
pub const fn euclidean_gcd(a: u64, b: u64) -> Result<u64> {
    if a == 0 || b == 0 {
        return Err(MathError::ZeroInput { a, b });
    }
    if a < b {
        return Err(MathError::Ordering { a, b });
    }

    let (mut larger, mut smaller) = (a, b);
    loop {
        let rest = larger % smaller;
        if rest == 0 {
            return Ok(smaller);
        }
        larger = smaller;
        smaller = rest;
    }
}
