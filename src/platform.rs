//! Live-path kernels backed by the platform math library.
//!
//! With the `std` feature the kernels call the inherent `f64` methods;
//! otherwise they call `libm`. Gamma has no stable `std` counterpart and
//! always comes from `libm`.
//!
//! Preconditions and special values are resolved exactly as in
//! [`convergent`](crate::convergent), so both paths share one contract.

use crate::compare::equals;
use crate::consts::{FRAC_PI_2, PI};
use crate::error::{MathError, Result};
use crate::special;

#[cfg(feature = "std")]
mod imp {
    #[inline]
    pub fn sqrt(x: f64) -> f64 {
        x.sqrt()
    }

    #[inline]
    pub fn pow(base: f64, exponent: f64) -> f64 {
        base.powf(exponent)
    }

    #[inline]
    pub fn fmod(x: f64, y: f64) -> f64 {
        x % y
    }

    #[inline]
    pub fn sin(x: f64) -> f64 {
        x.sin()
    }

    #[inline]
    pub fn cos(x: f64) -> f64 {
        x.cos()
    }

    #[inline]
    pub fn tan(x: f64) -> f64 {
        x.tan()
    }
}

#[cfg(not(feature = "std"))]
mod imp {
    #[inline]
    pub fn sqrt(x: f64) -> f64 {
        libm::sqrt(x)
    }

    #[inline]
    pub fn pow(base: f64, exponent: f64) -> f64 {
        libm::pow(base, exponent)
    }

    #[inline]
    pub fn fmod(x: f64, y: f64) -> f64 {
        libm::fmod(x, y)
    }

    #[inline]
    pub fn sin(x: f64) -> f64 {
        libm::sin(x)
    }

    #[inline]
    pub fn cos(x: f64) -> f64 {
        libm::cos(x)
    }

    #[inline]
    pub fn tan(x: f64) -> f64 {
        libm::tan(x)
    }
}

pub(crate) fn sqrt(value: f64) -> Result<f64> {
    if value < 0.0 {
        return Err(MathError::NegativeInput { value });
    }
    if value == 0.0 {
        return Ok(0.0);
    }
    Ok(imp::sqrt(value))
}

pub(crate) fn pow(base: f64, exponent: i32) -> f64 {
    special::pow(base, exponent).unwrap_or_else(|| imp::pow(base, f64::from(exponent)))
}

/// `Γ(value + 1)`.
pub(crate) fn factorial(value: u32) -> f64 {
    if value == 0 {
        return 1.0;
    }
    libm::tgamma(f64::from(value) + 1.0)
}

pub(crate) fn modulo(value: f64, divisor: f64) -> Result<f64> {
    if equals(divisor, 0.0) {
        return Err(MathError::ZeroDivisor { divisor });
    }
    Ok(remainder(value, divisor))
}

fn remainder(value: f64, divisor: f64) -> f64 {
    special::remainder(imp::fmod(value, divisor), divisor)
}

pub(crate) fn sin(angle: f64) -> f64 {
    imp::sin(angle)
}

pub(crate) fn cos(angle: f64) -> f64 {
    imp::cos(angle)
}

pub(crate) fn tan(angle: f64) -> f64 {
    let half_turn = remainder(angle, PI);
    let quarter_turn = remainder(angle, FRAC_PI_2);
    special::tan(angle, half_turn, quarter_turn).unwrap_or_else(|| imp::tan(angle))
}
