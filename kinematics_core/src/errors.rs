//! # Error Types
//!
//! Structured error types for kinematics_core. Every failure names the
//! field (or fields) involved, so a caller can see exactly what to supply
//! or correct without parsing a message string.
//!
//! ## Example
//!
//! ```rust
//! use kinematics_core::errors::{KinematicsError, KinResult};
//!
//! fn require_time(elapsed_time: Option<f64>) -> KinResult<f64> {
//!     elapsed_time.ok_or_else(|| {
//!         KinematicsError::insufficient_data("position-absent", ["elapsed_time"])
//!     })
//! }
//!
//! let err = require_time(None).unwrap_err();
//! assert_eq!(err.error_code(), "INSUFFICIENT_DATA");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for kinematics_core operations
pub type KinResult<T> = Result<T, KinematicsError>;

/// Structured error type for solver operations.
///
/// None of these are recoverable by retrying: each one means the caller
/// supplied an input the solver cannot evaluate.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum KinematicsError {
    /// The supplied fields do not determine a unique applicable identity
    #[error("Not enough information to complete calculation ({branch} branch): missing {}", .missing.join(", "))]
    InsufficientData {
        branch: String,
        missing: Vec<String>,
    },

    /// Rounding argument is present but not an integer
    #[error("Rounding digits must be an integer, not type '{found}'")]
    InvalidRoundingSpec { found: String },

    /// A value at the dynamic boundary has the wrong JSON type
    #[error("Type mismatch for '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: String,
        found: String,
    },

    /// A value has the right type but cannot be used (non-finite, zero divisor, unknown key)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

impl KinematicsError {
    /// Create an InsufficientData error
    pub fn insufficient_data<I, S>(branch: impl Into<String>, missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        KinematicsError::InsufficientData {
            branch: branch.into(),
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an InvalidRoundingSpec error
    pub fn invalid_rounding_spec(found: impl Into<String>) -> Self {
        KinematicsError::InvalidRoundingSpec {
            found: found.into(),
        }
    }

    /// Create a TypeMismatch error
    pub fn type_mismatch(field: impl Into<String>, expected: impl Into<String>, found: impl Into<String>) -> Self {
        KinematicsError::TypeMismatch {
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        KinematicsError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            KinematicsError::InsufficientData { .. } => "INSUFFICIENT_DATA",
            KinematicsError::InvalidRoundingSpec { .. } => "INVALID_ROUNDING_SPEC",
            KinematicsError::TypeMismatch { .. } => "TYPE_MISMATCH",
            KinematicsError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = KinematicsError::insufficient_data("position-absent", ["acceleration", "elapsed_time"]);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InsufficientData\""));
        let roundtrip: KinematicsError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            KinematicsError::insufficient_data("position-present", ["final_position"]).error_code(),
            "INSUFFICIENT_DATA"
        );
        assert_eq!(KinematicsError::invalid_rounding_spec("list").error_code(), "INVALID_ROUNDING_SPEC");
        assert_eq!(KinematicsError::type_mismatch("num", "a number", "string").error_code(), "TYPE_MISMATCH");
        assert_eq!(KinematicsError::invalid_input("elapsed_time", "0", "zero").error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_error_messages() {
        let err = KinematicsError::insufficient_data("position-absent", ["acceleration", "elapsed_time"]);
        assert_eq!(
            err.to_string(),
            "Not enough information to complete calculation (position-absent branch): missing acceleration, elapsed_time"
        );

        let err = KinematicsError::invalid_rounding_spec("list");
        assert_eq!(err.to_string(), "Rounding digits must be an integer, not type 'list'");
    }
}
