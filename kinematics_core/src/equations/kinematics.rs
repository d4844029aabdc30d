//! # Constant-Acceleration Kinematics
//!
//! The closed-form identities relating position, velocity, acceleration and
//! time for single-axis motion under constant acceleration.
//!
//! ## Notation
//!
//! - `x0` = Initial position (at t = 0)
//! - `x` = Final position (at t)
//! - `v0` = Initial velocity
//! - `v` = Final velocity
//! - `a` = Constant acceleration
//! - `t` = Elapsed time
//!
//! ## Sign Conventions
//!
//! - One axis, positive in the direction of increasing position
//! - Velocity and acceleration share the position axis' sign
//!
//! ## References
//!
//! - The Physics Classroom, "Kinematic Equations", 1-D Kinematics Lesson 6

// =============================================================================
// VELOCITY IDENTITIES
// =============================================================================

/// Final velocity from elapsed time
///
/// # Formula
/// - v = v0 + a·t
#[inline]
pub fn velocity_from_time(v0: f64, a: f64, t: f64) -> f64 {
    v0 + a * t
}

/// Final velocity from displacement over a known time, without acceleration
///
/// Rearranged from the average-velocity identity:
/// ```text
/// Δx = (v0 + v)/2 · t
/// v  = 2Δx/t - v0
/// ```
///
/// # Arguments
/// * `x0` - Initial position
/// * `x` - Final position
/// * `v0` - Initial velocity
/// * `t` - Elapsed time (must be non-zero)
#[inline]
pub fn velocity_from_average(x0: f64, x: f64, v0: f64, t: f64) -> f64 {
    ((x - x0) / t) * 2.0 - v0
}

/// Square of the final velocity from displacement and acceleration
///
/// # Formula
/// ```text
/// v² = v0² + 2a·Δx
/// ```
///
/// Returns `v²`, which can be negative when the inputs describe motion
/// that reverses before reaching `x`. Take the root with
/// [`crate::math::signed_sqrt`] to keep that sign.
#[inline]
pub fn velocity_squared_from_displacement(x0: f64, x: f64, v0: f64, a: f64) -> f64 {
    v0 * v0 + 2.0 * a * (x - x0)
}

// =============================================================================
// POSITION IDENTITIES
// =============================================================================

/// Position after time t
///
/// # Formula
/// - x = x0 + v0·t + ½·a·t²
#[inline]
pub fn displacement_from_time(x0: f64, v0: f64, a: f64, t: f64) -> f64 {
    x0 + v0 * t + 0.5 * a * t * t
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference motion: v0 = 0, a = 3.2, t = 32.8 (worked by hand)
    const V0: f64 = 0.0;
    const A: f64 = 3.2;
    const T: f64 = 32.8;

    #[test]
    fn test_velocity_from_time() {
        assert!((velocity_from_time(V0, A, T) - 104.96).abs() < 1e-9);
        assert_eq!(velocity_from_time(5.0, -2.0, 2.5), 0.0);
    }

    #[test]
    fn test_displacement_from_time() {
        // x = 0.5 · 3.2 · 32.8² = 1721.344
        let x = displacement_from_time(0.0, V0, A, T);
        assert!((x - 1721.344).abs() < 1e-9);
    }

    #[test]
    fn test_velocity_from_average() {
        // 2 · 1720 / 32.8 = 104.878...
        let v = velocity_from_average(0.0, 1720.0, V0, T);
        assert!((v - 104.878).abs() < 1e-3);
    }

    #[test]
    fn test_velocity_squared_from_displacement() {
        assert_eq!(velocity_squared_from_displacement(0.0, 1720.0, V0, A), 11008.0);
        // Decelerating past the stopping point
        assert!(velocity_squared_from_displacement(0.0, 10.0, 1.0, -1.0) < 0.0);
    }

    #[test]
    fn test_identities_agree_on_exact_motion() {
        let (x0, v0, a, t) = (2.0, 3.0, 1.5, 4.0);
        let x = displacement_from_time(x0, v0, a, t);
        let v = velocity_from_time(v0, a, t);

        assert!((velocity_from_average(x0, x, v0, t) - v).abs() < 1e-12);
        assert!((velocity_squared_from_displacement(x0, x, v0, a) - v * v).abs() < 1e-9);
    }
}
