//! # Kinematics Equations
//!
//! All closed-form identities used by the solver live here, so each one can
//! be checked against its reference in one place.
//!
//! ## Modules
//!
//! - [`kinematics`] - Constant-acceleration identities (velocity, position)
//! - [`registry`] - Equation metadata and reference generation

pub mod kinematics;
pub mod registry;

pub use kinematics::{
    displacement_from_time,
    velocity_from_average,
    velocity_from_time,
    velocity_squared_from_displacement,
};

pub use registry::{
    Equation,
    EquationCategory,
    EquationMetadata,
    Reference,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
