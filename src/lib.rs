//! # u-numcore
//!
//! Numeric primitives that give the same answers at compile time and at
//! runtime.
//!
//! Every operation exists twice: as a convergent `const fn` that needs no
//! math library and can initialise `const` items, and as a runtime kernel
//! backed by the platform math library. Both share one contract (the same
//! errors, the same NaN/∞ handling) and agree within [`EPSILON`].
//!
//! ## Modules
//!
//! - [`compare`] — Epsilon-tolerant equality, ordering, sign and abs
//! - [`consts`] — Tolerance, π and derived angle constants, degree/radian conversion
//! - [`convergent`] — Newton-Raphson, Maclaurin series and friends, all `const fn`
//! - [`dispatch`] — [`Evaluation`] context selecting the kernel per call
//! - [`integer`] — Euclidean GCD
//! - [`error`] — [`MathError`] for violated preconditions
//!
//! The free functions at the crate root dispatch through
//! [`Evaluation::BUILD`], which is `Live` unless the `convergent-only`
//! feature is enabled.
//!
//! ## Design Philosophy
//!
//! - **Infinity and NaN are values, not errors**: they propagate, and only
//!   violated preconditions produce a [`MathError`]
//! - **No hidden context**: the evaluation path is an explicit value
//! - **Property-based testing**: both paths verified against each other via proptest
//!
//! # Examples
//! ```
//! use u_numcore::{convergent, equals, sqrt, Evaluation};
//!
//! const HALF_SQRT_TWO: f64 = convergent::sin(u_numcore::consts::FRAC_PI_4);
//!
//! assert!(equals(HALF_SQRT_TWO * HALF_SQRT_TWO, 0.5));
//! assert!(equals(sqrt(2.0).unwrap(), Evaluation::AheadOfTime.sqrt(2.0).unwrap()));
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod compare;
pub mod consts;
pub mod convergent;
pub mod dispatch;
pub mod error;
pub mod integer;

mod platform;
mod special;

pub use compare::{abs, equals, greater_than, less_than, sign};
pub use consts::{EPSILON, degrees_to_radians, radians_to_degrees};
pub use dispatch::Evaluation;
pub use error::{MathError, Result};
pub use integer::euclidean_gcd;

/// Square root on the [`Evaluation::BUILD`] path.
///
/// # Errors
/// [`MathError::NegativeInput`] if `value < 0`.
///
/// # Examples
/// ```
/// assert!((u_numcore::sqrt(100.0).unwrap() - 10.0).abs() < 1e-12);
/// assert!(u_numcore::sqrt(-1.0).is_err());
/// ```
pub fn sqrt(value: f64) -> Result<f64> {
    Evaluation::BUILD.sqrt(value)
}

/// `base` to an integer power on the [`Evaluation::BUILD`] path.
pub fn pow(base: f64, exponent: i32) -> f64 {
    Evaluation::BUILD.pow(base, exponent)
}

/// `value!` as a float on the [`Evaluation::BUILD`] path.
pub fn factorial(value: u32) -> f64 {
    Evaluation::BUILD.factorial(value)
}

/// Floating-point remainder on the [`Evaluation::BUILD`] path.
///
/// # Errors
/// [`MathError::ZeroDivisor`] if `divisor` is within [`EPSILON`] of zero.
///
/// # Examples
/// ```
/// assert!((u_numcore::modulo(5.3, 2.0).unwrap() - 1.3).abs() < 1e-9);
/// assert!(u_numcore::modulo(1.0, 0.0).is_err());
/// ```
pub fn modulo(value: f64, divisor: f64) -> Result<f64> {
    Evaluation::BUILD.modulo(value, divisor)
}

/// Sine on the [`Evaluation::BUILD`] path.
pub fn sin(angle: f64) -> f64 {
    Evaluation::BUILD.sin(angle)
}

/// Cosine on the [`Evaluation::BUILD`] path.
pub fn cos(angle: f64) -> f64 {
    Evaluation::BUILD.cos(angle)
}

/// Tangent on the [`Evaluation::BUILD`] path.
///
/// # Examples
/// ```
/// use u_numcore::consts::{FRAC_PI_2, PI};
/// assert!(u_numcore::tan(FRAC_PI_2).is_nan());
/// assert_eq!(u_numcore::tan(PI), 0.0);
/// ```
pub fn tan(angle: f64) -> f64 {
    Evaluation::BUILD.tan(angle)
}
