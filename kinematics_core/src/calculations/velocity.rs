//! # Velocity Solver
//!
//! Solves for final velocity from whichever motion parameters are known.
//! The identity is chosen purely from which fields are present:
//!
//! | Positions | Acceleration | Time | Identity |
//! |-----------|--------------|------|----------|
//! | neither   | required     | required | `v = v0 + a·t` |
//! | any       | absent       | required | `v = 2(x - x0)/t - v0` |
//! | any       | present      | ignored  | `v = ±√(v0² + 2a(x - x0))` |
//!
//! Presence is explicit: `Some(0.0)` is a supplied zero, never "missing".
//! Initial velocity is required by every identity.
//!
//! ## Example
//!
//! ```rust
//! use kinematics_core::calculations::velocity::{solve_velocity, VelocityInput};
//!
//! let input = VelocityInput::new()
//!     .with_initial_velocity(0.0)
//!     .with_acceleration(3.2)
//!     .with_elapsed_time(32.8)
//!     .with_rounding_digits(2);
//!
//! assert_eq!(solve_velocity(&input).unwrap(), 104.96);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::equations::kinematics::{
    velocity_from_average, velocity_from_time, velocity_squared_from_displacement,
};
use crate::equations::registry::Equation;
use crate::errors::{KinematicsError, KinResult};
use crate::math::{json_type_name, number_from_value, round_to_digits, signed_sqrt};

const INITIAL_POSITION: &str = "initial_position";
const FINAL_POSITION: &str = "final_position";
const INITIAL_VELOCITY: &str = "initial_velocity";
const ACCELERATION: &str = "acceleration";
const ELAPSED_TIME: &str = "elapsed_time";
const ROUNDING_DIGITS: &str = "rounding_digits";

const BRANCH_POSITION_ABSENT: &str = "position-absent";
const BRANCH_POSITION_PRESENT: &str = "position-present";
const BRANCH_NO_ACCELERATION: &str = "no-acceleration";
const BRANCH_ACCELERATION: &str = "acceleration";

/// Known motion parameters for a single velocity solve.
///
/// Any subset may be supplied; absent fields are `None`.
///
/// ## JSON Example
///
/// ```json
/// {
///   "initial_velocity": 0.0,
///   "initial_position": 0.0,
///   "final_position": 1720.0,
///   "acceleration": 3.2,
///   "rounding_digits": 2
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VelocityInput {
    /// Position at t = 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_position: Option<f64>,

    /// Position at the query time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_position: Option<f64>,

    /// Velocity at t = 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_velocity: Option<f64>,

    /// Constant acceleration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceleration: Option<f64>,

    /// Duration of the motion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_time: Option<f64>,

    /// Decimal places to round the result to; `None` returns it unrounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounding_digits: Option<i32>,
}

impl VelocityInput {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_position(mut self, x0: f64) -> Self {
        self.initial_position = Some(x0);
        self
    }

    pub fn with_final_position(mut self, x: f64) -> Self {
        self.final_position = Some(x);
        self
    }

    pub fn with_initial_velocity(mut self, v0: f64) -> Self {
        self.initial_velocity = Some(v0);
        self
    }

    pub fn with_acceleration(mut self, a: f64) -> Self {
        self.acceleration = Some(a);
        self
    }

    pub fn with_elapsed_time(mut self, t: f64) -> Self {
        self.elapsed_time = Some(t);
        self
    }

    pub fn with_rounding_digits(mut self, digits: i32) -> Self {
        self.rounding_digits = Some(digits);
        self
    }

    /// Build an input from untyped JSON, checking types at runtime.
    ///
    /// - the value must be an object; `null` members count as absent
    /// - motion fields must be numbers ([`KinematicsError::TypeMismatch`])
    /// - `rounding_digits` must be an integer
    ///   ([`KinematicsError::InvalidRoundingSpec`]), so `2.0` or `[2]` fail;
    ///   a parameter set that is already insufficient reports
    ///   [`KinematicsError::InsufficientData`] instead
    /// - unknown keys are rejected ([`KinematicsError::InvalidInput`])
    pub fn from_json(value: &Value) -> KinResult<Self> {
        let object = value.as_object().ok_or_else(|| {
            KinematicsError::type_mismatch("input", "an object", json_type_name(value))
        })?;

        let mut input = VelocityInput::default();
        let mut rounding_error = None;
        for (key, member) in object {
            if member.is_null() {
                continue;
            }
            match key.as_str() {
                INITIAL_POSITION => input.initial_position = Some(number_from_value(INITIAL_POSITION, member)?),
                FINAL_POSITION => input.final_position = Some(number_from_value(FINAL_POSITION, member)?),
                INITIAL_VELOCITY => input.initial_velocity = Some(number_from_value(INITIAL_VELOCITY, member)?),
                ACCELERATION => input.acceleration = Some(number_from_value(ACCELERATION, member)?),
                ELAPSED_TIME => input.elapsed_time = Some(number_from_value(ELAPSED_TIME, member)?),
                ROUNDING_DIGITS => match rounding_from_value(member) {
                    Ok(digits) => input.rounding_digits = Some(digits),
                    Err(err @ KinematicsError::InvalidRoundingSpec { .. }) => rounding_error = Some(err),
                    Err(err) => return Err(err),
                },
                other => {
                    return Err(KinematicsError::invalid_input(
                        other,
                        member.to_string(),
                        "Unknown parameter",
                    ))
                }
            }
        }

        // Missing data outranks a malformed rounding argument
        if let Some(err) = rounding_error {
            evaluate(&input)?;
            return Err(err);
        }
        Ok(input)
    }

    /// Reject present values that are NaN or infinite.
    pub fn validate(&self) -> KinResult<()> {
        for (field, value) in self.motion_fields() {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(KinematicsError::invalid_input(
                        field,
                        v.to_string(),
                        "Value must be finite",
                    ));
                }
            }
        }
        Ok(())
    }

    fn motion_fields(&self) -> [(&'static str, Option<f64>); 5] {
        [
            (INITIAL_POSITION, self.initial_position),
            (FINAL_POSITION, self.final_position),
            (INITIAL_VELOCITY, self.initial_velocity),
            (ACCELERATION, self.acceleration),
            (ELAPSED_TIME, self.elapsed_time),
        ]
    }
}

fn rounding_from_value(value: &Value) -> KinResult<i32> {
    let n = match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => n,
        other => return Err(KinematicsError::invalid_rounding_spec(json_type_name(other))),
    };

    n.as_i64()
        .and_then(|digits| i32::try_from(digits).ok())
        .ok_or_else(|| {
            KinematicsError::invalid_input(ROUNDING_DIGITS, n.to_string(), "Rounding digits out of range")
        })
}

/// Result of a velocity solve.
///
/// ## JSON Example
///
/// ```json
/// {
///   "velocity": 104.92,
///   "equation": "VelocityFromDisplacement"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocitySolution {
    /// Final velocity, rounded if the input asked for it
    pub velocity: f64,

    /// Identity that produced the value
    pub equation: Equation,
}

/// Solve for final velocity, reporting which identity was applied.
///
/// # Errors
///
/// * [`KinematicsError::InsufficientData`] - the selected identity is missing fields
/// * [`KinematicsError::InvalidInput`] - a value is non-finite, or elapsed
///   time is zero where the identity divides by it
pub fn solve(input: &VelocityInput) -> KinResult<VelocitySolution> {
    input.validate()?;

    let (raw, equation) = evaluate(input)?;
    debug!(?equation, velocity = raw, "selected kinematic identity");

    let velocity = match input.rounding_digits {
        Some(digits) => {
            let rounded = round_to_digits(raw, digits);
            trace!(digits, raw, rounded, "rounded velocity");
            rounded
        }
        None => raw,
    };

    Ok(VelocitySolution { velocity, equation })
}

/// Solve for final velocity.
///
/// Shorthand for [`solve`] when the chosen identity is not needed.
pub fn solve_velocity(input: &VelocityInput) -> KinResult<f64> {
    solve(input).map(|solution| solution.velocity)
}

fn evaluate(input: &VelocityInput) -> KinResult<(f64, Equation)> {
    if input.initial_position.is_none() && input.final_position.is_none() {
        let [v0, a, t] = require(
            BRANCH_POSITION_ABSENT,
            [
                (INITIAL_VELOCITY, input.initial_velocity),
                (ACCELERATION, input.acceleration),
                (ELAPSED_TIME, input.elapsed_time),
            ],
        )?;
        return Ok((velocity_from_time(v0, a, t), Equation::VelocityFromTime));
    }

    match (input.acceleration, input.elapsed_time) {
        (None, None) => Err(KinematicsError::insufficient_data(
            BRANCH_POSITION_PRESENT,
            [ACCELERATION, ELAPSED_TIME],
        )),
        (None, Some(t)) => {
            let [v0, x0, x] = require_positions(BRANCH_NO_ACCELERATION, input)?;
            if t == 0.0 {
                return Err(KinematicsError::invalid_input(
                    ELAPSED_TIME,
                    t.to_string(),
                    "Elapsed time must be non-zero when acceleration is unknown",
                ));
            }
            Ok((velocity_from_average(x0, x, v0, t), Equation::VelocityFromAverage))
        }
        (Some(a), _) => {
            let [v0, x0, x] = require_positions(BRANCH_ACCELERATION, input)?;
            let v_squared = velocity_squared_from_displacement(x0, x, v0, a);
            Ok((signed_sqrt(v_squared), Equation::VelocityFromDisplacement))
        }
    }
}

fn require_positions(branch: &str, input: &VelocityInput) -> KinResult<[f64; 3]> {
    require(
        branch,
        [
            (INITIAL_VELOCITY, input.initial_velocity),
            (INITIAL_POSITION, input.initial_position),
            (FINAL_POSITION, input.final_position),
        ],
    )
}

/// Unpack every field or report all of the missing ones at once.
fn require<const N: usize>(branch: &str, fields: [(&'static str, Option<f64>); N]) -> KinResult<[f64; N]> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(KinematicsError::insufficient_data(branch, missing));
    }
    Ok(fields.map(|(_, value)| value.unwrap_or_default()))
}
