//! # kinematics_core - Single-Axis Kinematics Engine
//!
//! `kinematics_core` solves for final velocity under constant acceleration
//! from whatever subset of motion parameters the caller knows. The solver
//! picks the applicable identity from which fields are present, evaluates it,
//! and optionally rounds the result.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Explicit presence**: `Option` fields, never zero-as-missing
//! - **JSON-First**: Inputs, results and errors implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types naming the fields involved
//!
//! ## Quick Start
//!
//! ```rust
//! use kinematics_core::{solve_velocity, VelocityInput};
//!
//! let input = VelocityInput::new()
//!     .with_initial_velocity(0.0)
//!     .with_initial_position(0.0)
//!     .with_final_position(1720.0)
//!     .with_elapsed_time(32.8)
//!     .with_rounding_digits(2);
//!
//! assert_eq!(solve_velocity(&input).unwrap(), 104.88);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The velocity solver
//! - [`equations`] - Kinematic identities and their registry
//! - [`math`] - Signed square root and rounding
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod math;

// Re-export commonly used types at crate root for convenience
pub use calculations::{solve, solve_velocity, VelocityInput, VelocitySolution};
pub use equations::Equation;
pub use errors::{KinematicsError, KinResult};
pub use math::{signed_sqrt, signed_sqrt_value};
