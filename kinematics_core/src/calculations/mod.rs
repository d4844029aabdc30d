//! # Kinematics Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable, any subset optional)
//! - `*Solution` - Calculation results (JSON-serializable)
//! - `solve(input) -> Result<*Solution, KinematicsError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`velocity`] - Final velocity from known motion parameters

pub mod velocity;

pub use velocity::{solve, solve_velocity, VelocityInput, VelocitySolution};
