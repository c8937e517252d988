//! Per-call choice between the convergent and platform kernels.
//!
//! [`Evaluation`] names the context a computation runs in. Both variants
//! honour the same contract: the same preconditions, the same special
//! values, and results that agree within [`EPSILON`](crate::consts::EPSILON).
//! Only the kernel doing the arithmetic differs.
//!
//! `const` items should call [`convergent`] directly; this type is for
//! runtime code that wants to pick the path explicitly.

use tracing::debug;

use crate::convergent;
use crate::error::Result;
use crate::platform;

/// Evaluation context of a numeric call.
///
/// # Examples
/// ```
/// use u_numcore::Evaluation;
///
/// let live = Evaluation::Live.sqrt(2.0).unwrap();
/// let ahead = Evaluation::AheadOfTime.sqrt(2.0).unwrap();
/// assert!((live - ahead).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Evaluation {
    /// Convergent methods only; no platform math library involved.
    AheadOfTime,
    /// Platform math routines (`std`, or `libm` without `std`).
    Live,
}

impl Evaluation {
    /// Context used by the crate-root functions.
    ///
    /// `AheadOfTime` when the `convergent-only` feature is enabled, `Live`
    /// otherwise.
    pub const BUILD: Evaluation = if cfg!(feature = "convergent-only") {
        Evaluation::AheadOfTime
    } else {
        Evaluation::Live
    };

    /// Returns `true` for [`Evaluation::AheadOfTime`].
    pub const fn is_ahead_of_time(self) -> bool {
        matches!(self, Evaluation::AheadOfTime)
    }

    /// Square root. See [`convergent::sqrt`].
    ///
    /// # Errors
    /// [`MathError::NegativeInput`](crate::MathError::NegativeInput) if
    /// `value < 0`.
    pub fn sqrt(self, value: f64) -> Result<f64> {
        let root = match self {
            Evaluation::AheadOfTime => convergent::sqrt(value),
            Evaluation::Live => platform::sqrt(value),
        };
        root.inspect_err(|err| debug!(%err, value, context = ?self, "sqrt rejected operand"))
    }

    /// Integer power. See [`convergent::pow`].
    pub fn pow(self, base: f64, exponent: i32) -> f64 {
        match self {
            Evaluation::AheadOfTime => convergent::pow(base, exponent),
            Evaluation::Live => platform::pow(base, exponent),
        }
    }

    /// Factorial as a float. The live path evaluates `Γ(value + 1)`.
    pub fn factorial(self, value: u32) -> f64 {
        match self {
            Evaluation::AheadOfTime => convergent::factorial(value),
            Evaluation::Live => platform::factorial(value),
        }
    }

    /// Floating-point remainder. See [`convergent::modulo`].
    ///
    /// # Errors
    /// [`MathError::ZeroDivisor`](crate::MathError::ZeroDivisor) if `divisor`
    /// is within `EPSILON` of zero.
    pub fn modulo(self, value: f64, divisor: f64) -> Result<f64> {
        let rest = match self {
            Evaluation::AheadOfTime => convergent::modulo(value, divisor),
            Evaluation::Live => platform::modulo(value, divisor),
        };
        rest.inspect_err(|err| {
            debug!(%err, value, divisor, context = ?self, "modulo rejected divisor")
        })
    }

    /// Sine of an angle in radians.
    pub fn sin(self, angle: f64) -> f64 {
        match self {
            Evaluation::AheadOfTime => convergent::sin(angle),
            Evaluation::Live => platform::sin(angle),
        }
    }

    /// Cosine of an angle in radians.
    pub fn cos(self, angle: f64) -> f64 {
        match self {
            Evaluation::AheadOfTime => convergent::cos(angle),
            Evaluation::Live => platform::cos(angle),
        }
    }

    /// Tangent of an angle in radians. NaN at the poles, `0` at multiples
    /// of π.
    pub fn tan(self, angle: f64) -> f64 {
        match self {
            Evaluation::AheadOfTime => convergent::tan(angle),
            Evaluation::Live => platform::tan(angle),
        }
    }
}

impl Default for Evaluation {
    fn default() -> Self {
        Self::BUILD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::equals;
    use crate::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};
    use crate::error::MathError::{NegativeInput, ZeroDivisor};
    use rand::{Rng, SeedableRng, rngs::SmallRng};

    const BOTH: [Evaluation; 2] = [Evaluation::AheadOfTime, Evaluation::Live];

    /// `a` and `b` are congruent modulo `divisor` within `EPSILON`.
    fn congruent(a: f64, b: f64, divisor: f64) -> bool {
        let gap = (a - b).abs();
        equals(gap, 0.0) || equals(gap, divisor.abs())
    }

    #[test]
    fn test_build_context_follows_feature() {
        assert_eq!(
            Evaluation::BUILD.is_ahead_of_time(),
            cfg!(feature = "convergent-only")
        );
        assert_eq!(Evaluation::default(), Evaluation::BUILD);
    }

    #[test]
    fn test_concrete_values_on_both_paths() {
        for eval in BOTH {
            assert!(equals(eval.sqrt(100.0).unwrap(), 10.0), "{eval:?}");
            assert!((eval.sqrt(52.0).unwrap() - 7.21).abs() < 0.01, "{eval:?}");
            assert_eq!(eval.sqrt(0.0), Ok(0.0));
            assert!(eval.tan(FRAC_PI_2).is_nan(), "{eval:?}");
            assert!(equals(eval.tan(FRAC_PI_4), 1.0), "{eval:?}");
            assert!(equals(eval.sin(FRAC_PI_2), 1.0), "{eval:?}");
            assert!(equals(eval.cos(PI), -1.0), "{eval:?}");
            assert!(equals(eval.pow(3.0, 3), 27.0), "{eval:?}");
            assert!(equals(eval.factorial(6), 720.0), "{eval:?}");
        }
    }

    #[test]
    fn test_errors_are_identical_on_both_paths() {
        for eval in BOTH {
            let tiny = -0.000001;
            assert_eq!(eval.sqrt(-2.0), Err(NegativeInput { value: -2.0 }));
            assert_eq!(eval.modulo(3.0, 0.0), Err(ZeroDivisor { divisor: 0.0 }));
            assert_eq!(eval.modulo(3.0, tiny), Err(ZeroDivisor { divisor: tiny }));
        }
    }

    #[test]
    fn test_special_values_are_identical_on_both_paths() {
        for eval in BOTH {
            for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
                assert!(eval.sin(v).is_nan(), "{eval:?} sin({v})");
                assert!(eval.cos(v).is_nan(), "{eval:?} cos({v})");
                assert!(eval.tan(v).is_nan(), "{eval:?} tan({v})");
                assert!(eval.pow(v, 3).is_nan(), "{eval:?} pow({v}, 3)");
                assert!(eval.modulo(v, 2.0).unwrap().is_nan(), "{eval:?} {v} mod 2");
            }
            assert!(eval.sqrt(f64::NAN).unwrap().is_nan());
            assert_eq!(eval.sqrt(f64::INFINITY), Ok(f64::INFINITY));
            assert_eq!(eval.pow(1.000001, 50), 1.0);
            assert_eq!(eval.pow(9.0, 0), 1.0);
            assert_eq!(eval.factorial(0), 1.0);
            assert_eq!(eval.tan(PI), 0.0);
            assert_eq!(eval.modulo(TAU, TAU), Ok(0.0));
        }
    }

    #[test]
    fn test_paths_agree_on_seeded_samples() {
        let mut rng = SmallRng::seed_from_u64(42);
        let (ahead, live) = (Evaluation::AheadOfTime, Evaluation::Live);
        for _ in 0..2_000 {
            let x: f64 = rng.random_range(-50.0..50.0);
            assert!(equals(ahead.sin(x), live.sin(x)), "sin({x})");
            assert!(equals(ahead.cos(x), live.cos(x)), "cos({x})");

            let v: f64 = rng.random_range(0.0..1e4);
            assert!(equals(ahead.sqrt(v).unwrap(), live.sqrt(v).unwrap()), "sqrt({v})");

            let d: f64 = rng.random_range(0.5..20.0);
            let (a, l) = (ahead.modulo(x, d).unwrap(), live.modulo(x, d).unwrap());
            assert!(congruent(a, l, d), "{x} mod {d}: {a} vs {l}");

            let base: f64 = rng.random_range(-3.0..3.0);
            let exponent: i32 = rng.random_range(-8..8);
            let (a, l) = (ahead.pow(base, exponent), live.pow(base, exponent));
            assert!(
                (a - l).abs() <= 1e-9 * l.abs().max(1.0),
                "{base}^{exponent}: {a} vs {l}"
            );
        }
    }

    #[test]
    fn test_paths_agree_at_large_magnitudes() {
        for eval in BOTH {
            assert_eq!(eval.modulo(1e17, 3.0), Ok(1.0), "{eval:?}");
            assert_eq!(eval.modulo(1e20, 7.0), Ok(2.0), "{eval:?}");
            assert!(equals(eval.sin(1e20), -0.6452512852657808), "{eval:?}");
        }

        let mut rng = SmallRng::seed_from_u64(7);
        let (ahead, live) = (Evaluation::AheadOfTime, Evaluation::Live);
        for _ in 0..1_000 {
            // Quotients from about 2^46 to well past 2^52.
            let v: f64 = rng.random_range(1e15..1e19);
            let d: f64 = rng.random_range(0.1..20.0);
            assert_eq!(ahead.modulo(v, d), live.modulo(v, d), "{v} mod {d}");
            assert_eq!(ahead.modulo(-v, d), live.modulo(-v, d), "-{v} mod {d}");

            let x = v * rng.random_range(-1e4..1e4);
            assert!(equals(ahead.sin(x), live.sin(x)), "sin({x})");
            assert!(equals(ahead.cos(x), live.cos(x)), "cos({x})");

            let (a, l) = (ahead.sqrt(v).unwrap(), live.sqrt(v).unwrap());
            assert!((a - l).abs() <= 1e-15 * l, "sqrt({v}): {a} vs {l}");
        }
    }

    #[test]
    fn test_factorial_paths_agree_relatively() {
        for n in 0..=170 {
            let a = Evaluation::AheadOfTime.factorial(n);
            let l = Evaluation::Live.factorial(n);
            assert!((a - l).abs() <= 1e-10 * l, "{n}!: {a} vs {l}");
        }
        assert!(Evaluation::AheadOfTime.factorial(200).is_infinite());
        assert!(Evaluation::Live.factorial(200).is_infinite());
    }
}
