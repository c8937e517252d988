//! Convergent methods that need no platform math library.
//!
//! Every function here is a `const fn`, so it can initialise `const` and
//! `static` items and runs entirely at compile time there. At runtime these
//! functions are the [`Evaluation::AheadOfTime`] kernels.
//!
//! # Algorithms
//!
//! - **Square root**: Newton-Raphson iteration to a bit-identical fixed point.
//! - **Sine/cosine**: Maclaurin series after reducing the angle into `[0, 2π)`.
//! - **Power/factorial**: repeated multiplication in the same order as the
//!   textbook recursion, written as bounded loops.
//! - **Modulo**: exact binary long division, with boundary remainders
//!   collapsed to 0.
//! - **Angle reduction**: `modulo(x, 2π)` for ordinary angles; Payne-Hanek
//!   against the digits of 2/π once whole turns would swamp the rounding of
//!   [`TAU`].
//!
//! All of them agree with the platform routines to within
//! [`EPSILON`](crate::consts::EPSILON) over the ranges the tests cover.
//!
//! # Examples
//! ```
//! use u_numcore::convergent;
//!
//! const ROOT_TWO: f64 = match convergent::sqrt(2.0) {
//!     Ok(root) => root,
//!     Err(_) => panic!("negative operand"),
//! };
//! assert!((ROOT_TWO - std::f64::consts::SQRT_2).abs() < 1e-15);
//! ```
//!
//! [`Evaluation::AheadOfTime`]: crate::Evaluation::AheadOfTime

use crate::compare::equals;
use crate::consts::{FRAC_PI_2, PI, TAU};
use crate::error::{MathError, Result};
use crate::special;

/// Hard cap on Maclaurin terms. Reduced angles converge long before it.
const SERIES_TERM_LIMIT: i32 = 1_000;

/// Angles at least this large (2^20) are reduced against 2π carried to
/// extended precision instead of against [`TAU`].
const EXTENDED_REDUCTION_BOUND: f64 = 1_048_576.0;

/// 2^128, the scale of the fixed-point turn fraction.
const TWO_POW_128: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

/// Binary digits of 2/π, 24 per entry, most significant first.
const TWO_OVER_PI: [u32; 66] = [
    0xA2F983, 0x6E4E44, 0x1529FC, 0x2757D1, 0xF534DD, 0xC0DB62, 0x95993C, 0x439041, 0xFE5163,
    0xABDEBB, 0xC561B7, 0x246E3A, 0x424DD2, 0xE00649, 0x2EEA09, 0xD1921C, 0xFE1DEB, 0x1CB129,
    0xA73EE8, 0x8235F5, 0x2EBB44, 0x84E99C, 0x7026B4, 0x5F7E41, 0x3991D6, 0x398353, 0x39F49C,
    0x845F8B, 0xBDF928, 0x3B1FF8, 0x97FFDE, 0x05980F, 0xEF2F11, 0x8B5A0A, 0x6D1F6D, 0x367ECF,
    0x27CB09, 0xB74F46, 0x3F669E, 0x5FEA2D, 0x7527BA, 0xC7EBE5, 0xF17B3D, 0x0739F7, 0x8A5292,
    0xEA6BFB, 0x5FB11F, 0x8D5D08, 0x560330, 0x46FC7B, 0x6BABF0, 0xCFBC20, 0x9AF436, 0x1DA9E3,
    0x91615E, 0xE61B08, 0x659985, 0x5F14A0, 0x68408D, 0xFFD880, 0x4D7327, 0x310606, 0x1556CA,
    0x73A8C9, 0x60E27B, 0xC08C6B,
];

/// Square root by Newton-Raphson iteration.
///
/// Starts from `value` and iterates `next = (curr + value / curr) / 2` until
/// the estimate stops changing. `sqrt(0)` is exactly `0`, NaN stays NaN and
/// `+∞` stays `+∞`.
///
/// # Errors
/// [`MathError::NegativeInput`] if `value < 0`.
///
/// # Examples
/// ```
/// use u_numcore::convergent::sqrt;
/// assert!((sqrt(100.0).unwrap() - 10.0).abs() < 1e-12);
/// assert!(sqrt(-1.0).is_err());
/// ```
pub const fn sqrt(value: f64) -> Result<f64> {
    if value < 0.0 {
        return Err(MathError::NegativeInput { value });
    }
    if value == 0.0 {
        return Ok(0.0);
    }
    if value.is_nan() || value.is_infinite() {
        return Ok(value);
    }

    let mut previous = 0.0;
    let mut current = value;
    loop {
        let next = 0.5 * (current + value / current);
        if next == current {
            return Ok(current);
        }
        // Rounding can leave the estimate bouncing between two neighbours.
        if next == previous {
            return Ok(if next < current { next } else { current });
        }
        previous = current;
        current = next;
    }
}

/// `base` raised to an integer power by repeated multiplication.
///
/// NaN for a NaN or infinite `base`; `1` when `exponent == 0` or `base` is
/// within `EPSILON` of `1`. A negative exponent yields the reciprocal of the
/// positive power.
///
/// The loop runs `|exponent|` times at most and stops early once the product
/// saturates to `0` or `±∞`.
///
/// # Examples
/// ```
/// use u_numcore::convergent::pow;
/// assert_eq!(pow(2.0, 10), 1024.0);
/// assert_eq!(pow(2.0, -2), 0.25);
/// assert!(pow(f64::INFINITY, 2).is_nan());
/// ```
pub const fn pow(base: f64, exponent: i32) -> f64 {
    if let Some(resolved) = special::pow(base, exponent) {
        return resolved;
    }

    let product = repeated_product(base, exponent.unsigned_abs());
    if exponent > 0 { product } else { 1.0 / product }
}

const fn repeated_product(base: f64, count: u32) -> f64 {
    let mut product = 1.0;
    let mut remaining = count;
    while remaining > 0 {
        product = base * product;
        remaining -= 1;
        if product == 0.0 || product.is_infinite() {
            // Saturated: remaining factors can only flip the sign.
            if base.is_sign_negative() && remaining % 2 == 1 {
                product = -product;
            }
            return product;
        }
    }
    product
}

/// `value!` as a float, by repeated multiplication.
///
/// `0! == 1`. Results beyond `170!` overflow to `+∞`.
///
/// # Examples
/// ```
/// use u_numcore::convergent::factorial;
/// assert_eq!(factorial(0), 1.0);
/// assert_eq!(factorial(5), 120.0);
/// assert!(factorial(171).is_infinite());
/// ```
pub const fn factorial(value: u32) -> f64 {
    let mut product = 1.0;
    let mut factor = 1;
    while factor <= value {
        product = factor as f64 * product;
        if product.is_infinite() {
            return product;
        }
        factor += 1;
    }
    product
}

/// Floating-point remainder of `value / divisor`, truncating the quotient.
///
/// The result takes the sign of `value` and its magnitude is below
/// `|divisor|`. Remainders within `EPSILON` of `0` or of `±divisor` are
/// returned as exactly `0`.
///
/// # Errors
/// [`MathError::ZeroDivisor`] if `divisor` is within `EPSILON` of zero.
///
/// # Examples
/// ```
/// use u_numcore::convergent::modulo;
/// assert!((modulo(5.3, 2.0).unwrap() - 1.3).abs() < 1e-12);
/// assert!((modulo(-5.3, 2.0).unwrap() + 1.3).abs() < 1e-12);
/// assert_eq!(modulo(4.0, 2.0), Ok(0.0));
/// ```
pub const fn modulo(value: f64, divisor: f64) -> Result<f64> {
    if equals(divisor, 0.0) {
        return Err(MathError::ZeroDivisor { divisor });
    }
    Ok(remainder(value, divisor))
}

/// [`modulo`] for a divisor already known to be non-zero.
const fn remainder(value: f64, divisor: f64) -> f64 {
    if value.is_nan() || divisor.is_nan() || value.is_infinite() {
        return f64::NAN;
    }
    if equals(value, 0.0) {
        return 0.0;
    }
    if divisor.is_infinite() {
        return value;
    }

    let rest = exact_remainder(value.abs(), divisor.abs());
    special::remainder(if value.is_sign_negative() { -rest } else { rest }, divisor)
}

/// `dividend mod divisor` for finite positive operands, by binary long
/// division.
///
/// Each step subtracts `divisor·2^k` from a running remainder that lies in
/// `[divisor·2^k, divisor·2^(k+1))`, which is exact in binary floating point
/// (Sterbenz). The result is therefore the exact remainder at any quotient
/// size, where `value - trunc(q) * divisor` degrades to rounding noise once
/// `q` passes 2^52.
const fn exact_remainder(dividend: f64, divisor: f64) -> f64 {
    if dividend < divisor {
        return dividend;
    }
    let mut step = divisor;
    while step * 2.0 <= dividend {
        step *= 2.0;
    }
    let mut rest = dividend;
    loop {
        if rest >= step {
            rest -= step;
        }
        if step == divisor {
            return rest;
        }
        step *= 0.5;
    }
}

/// Sine of `angle` (radians) by Maclaurin series.
///
/// The angle is first reduced into `[0, 2π)`. The series
/// `Σ (-1)ⁿ x²ⁿ⁺¹ / (2n+1)!` is summed until a term falls within `EPSILON`
/// of zero (that term is still added) or stops being finite, or after
/// 1000 terms. NaN for NaN or infinite input.
///
/// # Examples
/// ```
/// use u_numcore::convergent::sin;
/// use u_numcore::consts::FRAC_PI_2;
/// assert!((sin(FRAC_PI_2) - 1.0).abs() < 1e-6);
/// assert!(sin(f64::NAN).is_nan());
/// ```
pub const fn sin(angle: f64) -> f64 {
    if !angle.is_finite() {
        return f64::NAN;
    }
    maclaurin_sin(reduce_angle(angle))
}

/// Cosine of `angle` (radians), as `sin(angle + π/2)`.
///
/// The quarter turn is added after reduction, so it survives at magnitudes
/// where `angle + π/2` would round back to `angle`.
pub const fn cos(angle: f64) -> f64 {
    if !angle.is_finite() {
        return f64::NAN;
    }
    maclaurin_sin(reduce_angle(reduce_angle(angle) + FRAC_PI_2))
}

/// Tangent of `angle` (radians), as `sin / cos`.
///
/// Exact multiples of π give `0`; other exact multiples of π/2 give NaN.
///
/// # Examples
/// ```
/// use u_numcore::convergent::tan;
/// use u_numcore::consts::{FRAC_PI_2, FRAC_PI_4, PI};
/// assert!(tan(FRAC_PI_2).is_nan());
/// assert_eq!(tan(PI), 0.0);
/// assert!((tan(FRAC_PI_4) - 1.0).abs() < 1e-5);
/// ```
pub const fn tan(angle: f64) -> f64 {
    let half_turn = remainder(angle, PI);
    let quarter_turn = remainder(angle, FRAC_PI_2);
    if let Some(resolved) = special::tan(angle, half_turn, quarter_turn) {
        return resolved;
    }
    sin(angle) / cos(angle)
}

const fn maclaurin_sin(x: f64) -> f64 {
    let mut sum = 0.0;
    let mut n = 0;
    while n < SERIES_TERM_LIMIT {
        let power = 2 * n + 1;
        let term = pow(-1.0, n) * pow(x, power) / factorial(power as u32);
        if !term.is_finite() {
            break;
        }
        sum += term;
        if equals(term, 0.0) {
            break;
        }
        n += 1;
    }
    sum
}

/// Maps a finite angle into `[0, 2π)`.
///
/// Below 2^20 this is `modulo(angle, TAU)`. Beyond it the gap between
/// [`TAU`] and the true 2π, multiplied by the number of whole turns, would
/// exceed `EPSILON`, so large angles go through [`turn_fraction`].
const fn reduce_angle(angle: f64) -> f64 {
    let reduced = if angle.abs() < EXTENDED_REDUCTION_BOUND {
        remainder(angle, TAU)
    } else {
        let turns = turn_fraction(angle) * TAU;
        if angle.is_sign_negative() { -turns } else { turns }
    };
    if reduced < 0.0 { reduced + TAU } else { reduced }
}

/// Fractional part of `|angle| / 2π` (Payne-Hanek reduction).
///
/// Writes `|angle|` as `m·2^e` and multiplies `m` by the digits of 2/π in
/// 24-bit chunks, accumulating into a 128-bit fixed-point fraction. Chunks
/// whose product is a whole number of turns are skipped, and the wrapping
/// sum discards the integer turns the remaining chunks carry.
const fn turn_fraction(angle: f64) -> f64 {
    let bits = angle.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i32 - 1075;
    let mantissa = ((bits & 0x000f_ffff_ffff_ffff) | (1 << 52)) as u128;

    let mut fraction: u128 = 0;
    let mut i = 0;
    while i < TWO_OVER_PI.len() {
        // 1/2π is 2/π shifted right by two bits.
        let shift = exponent - 2 - 24 * (i as i32 + 1) + 128;
        if shift < 128 {
            let product = mantissa * TWO_OVER_PI[i] as u128;
            if shift >= 0 {
                fraction = fraction.wrapping_add(product << shift);
            } else if shift > -77 {
                fraction = fraction.wrapping_add(product >> -shift);
            } else {
                break;
            }
        }
        i += 1;
    }
    fraction as f64 / TWO_POW_128
}
