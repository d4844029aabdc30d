//! # Numeric Utilities
//!
//! Small numeric helpers shared by the solver:
//!
//! - [`signed_sqrt`] - square root that keeps the sign of its input
//! - [`signed_sqrt_value`] - the same, for untyped JSON input
//! - [`round_to_digits`] - decimal rounding for display-ready results
//!
//! ## Example
//!
//! ```rust
//! use kinematics_core::math::{round_to_digits, signed_sqrt};
//!
//! assert_eq!(signed_sqrt(81.0), 9.0);
//! assert_eq!(signed_sqrt(-4.0), -2.0);
//! assert_eq!(round_to_digits(104.919, 2), 104.92);
//! ```

use serde_json::Value;

use crate::errors::{KinematicsError, KinResult};

/// Square root of `|x|` carrying the sign of `x`.
///
/// ```text
/// signed_sqrt(x) = sign(x) · √|x|
/// ```
///
/// This is not a domain-restricted square root: negative input yields a
/// negative "root" instead of NaN. Zero (including `-0.0`) maps to `0.0`.
#[inline]
pub fn signed_sqrt(x: f64) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    if x < 0.0 {
        -(-x).sqrt()
    } else {
        x.sqrt()
    }
}

/// [`signed_sqrt`] for a value that arrived untyped (e.g. from JSON).
///
/// Only JSON numbers are accepted; anything else fails with
/// [`KinematicsError::TypeMismatch`] naming the type that was found.
///
/// ```rust
/// use kinematics_core::math::signed_sqrt_value;
/// use serde_json::json;
///
/// assert_eq!(signed_sqrt_value(&json!(-4)).unwrap(), -2.0);
/// assert!(signed_sqrt_value(&json!("4")).is_err());
/// ```
pub fn signed_sqrt_value(value: &Value) -> KinResult<f64> {
    let x = number_from_value("num", value)?;
    Ok(signed_sqrt(x))
}

/// Round `value` to `digits` decimal places, ties to even.
///
/// Rounding is done on the exact binary value, so `0.125` rounds to `0.12`
/// and `2.5` to `2.0`. Negative `digits` round to tens, hundreds, and so on.
/// Beyond [`MAX_ROUNDING_DIGITS`] every `f64` is already exact and is
/// returned unchanged.
pub fn round_to_digits(value: f64, digits: i32) -> f64 {
    if !value.is_finite() || digits > MAX_ROUNDING_DIGITS {
        return value;
    }
    if digits >= 0 {
        // `{:.N}` rounds the exact decimal expansion, ties to even
        let precision = digits as usize;
        return format!("{:.*}", precision, value).parse().unwrap_or(value);
    }
    let factor = 10f64.powi(digits.saturating_neg());
    if !factor.is_finite() {
        return 0.0 * value.signum();
    }
    (value / factor).round_ties_even() * factor
}

/// Decimal places past which no `f64` changes when rounded.
pub const MAX_ROUNDING_DIGITS: i32 = 323;

/// Name of a JSON value's type, as reported in type errors.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// Extract an `f64` from a JSON value, rejecting non-numeric types.
pub(crate) fn number_from_value(field: &str, value: &Value) -> KinResult<f64> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| {
            KinematicsError::invalid_input(field, n.to_string(), "Number is not representable as f64")
        }),
        other => Err(KinematicsError::type_mismatch(field, "a number", json_type_name(other))),
    }
}
