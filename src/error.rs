//! Error type for rejected preconditions.
//!
//! NaN and infinity are domain values, not errors: they propagate through
//! the arithmetic. Only a violated precondition produces a [`MathError`].

use thiserror::Error;

/// A violated precondition, carrying the offending operands.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// An operand that must be non-negative was negative.
    #[error("value must not be negative, got {value}")]
    NegativeInput { value: f64 },

    /// A divisor was within `EPSILON` of zero.
    #[error("divisor must not be zero, got {divisor}")]
    ZeroDivisor { divisor: f64 },

    /// An integer operand that must be non-zero was zero.
    #[error("operands must not be zero, got ({a}, {b})")]
    ZeroInput { a: u64, b: u64 },

    /// The first operand was smaller than the second.
    #[error("first operand must not be smaller than the second, got ({a}, {b})")]
    Ordering { a: u64, b: u64 },
}

/// Result alias used by every fallible operation in the crate.
pub type Result<T> = core::result::Result<T, MathError>;
