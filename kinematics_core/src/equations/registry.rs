//! # Equation Registry
//!
//! Central registry of the kinematic identities the solver can apply.
//! Each equation carries metadata (formula, variables, assumptions, source
//! location) so results can say which identity produced them and the
//! `EQUATIONS.md` reference can be generated from code.
//!
//! ## Usage
//!
//! ```rust
//! use kinematics_core::equations::registry::Equation;
//!
//! let meta = Equation::VelocityFromTime.metadata();
//! assert_eq!(meta.formula_plain, "v = v0 + a*t");
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Where an equation comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reference {
    /// The Physics Classroom kinematics tutorial
    PhysicsClassroom { lesson: &'static str },
    /// Derived algebraically from another identity in this registry
    DerivedFrom { equation: &'static str },
}

impl Reference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            Reference::PhysicsClassroom { lesson } => {
                format!("The Physics Classroom, 1-D Kinematics, {}", lesson)
            }
            Reference::DerivedFrom { equation } => format!("Derived from {}", equation),
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Identities solved for final velocity
    Velocity,
    /// Identities solved for position
    Position,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Velocity => "Velocity",
            EquationCategory::Position => "Position",
        }
    }

    /// Sort order in the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Velocity => 1,
            EquationCategory::Position => 2,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "v0", "a")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str) -> Self {
        Self { symbol, description }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a kinematic identity.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Source of the identity
    pub reference: Reference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All kinematic identities known to the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// v = v0 + a*t
    VelocityFromTime,
    /// v = 2(x - x0)/t - v0
    VelocityFromAverage,
    /// v² = v0² + 2a(x - x0)
    VelocityFromDisplacement,
    /// x = x0 + v0*t + a*t²/2
    DisplacementFromTime,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::VelocityFromTime => EquationMetadata {
                name: "Velocity from Elapsed Time",
                description: "Final velocity after accelerating uniformly for a known time",
                formula_plain: "v = v0 + a*t",
                reference: Reference::PhysicsClassroom { lesson: "Lesson 6" },
                variables: vec![
                    Variable::new("v", "Final velocity"),
                    Variable::new("v0", "Initial velocity"),
                    Variable::new("a", "Constant acceleration"),
                    Variable::new("t", "Elapsed time"),
                ],
                assumptions: vec!["Constant acceleration", "Single axis"],
                category: EquationCategory::Velocity,
                source_module: "equations/kinematics.rs",
                source_function: "velocity_from_time",
            },

            Equation::VelocityFromAverage => EquationMetadata {
                name: "Velocity from Average Velocity",
                description: "Final velocity from displacement over a known time when acceleration is unknown",
                formula_plain: "v = 2(x - x0)/t - v0",
                reference: Reference::DerivedFrom { equation: "x - x0 = (v0 + v)/2 * t" },
                variables: vec![
                    Variable::new("v", "Final velocity"),
                    Variable::new("v0", "Initial velocity"),
                    Variable::new("x0", "Initial position"),
                    Variable::new("x", "Final position"),
                    Variable::new("t", "Elapsed time"),
                ],
                assumptions: vec!["Constant acceleration", "Single axis", "Elapsed time is non-zero"],
                category: EquationCategory::Velocity,
                source_module: "equations/kinematics.rs",
                source_function: "velocity_from_average",
            },

            Equation::VelocityFromDisplacement => EquationMetadata {
                name: "Velocity from Displacement",
                description: "Final velocity from displacement under known acceleration, without time",
                formula_plain: "v = ssqrt(v0^2 + 2a(x - x0))",
                reference: Reference::PhysicsClassroom { lesson: "Lesson 6" },
                variables: vec![
                    Variable::new("v", "Final velocity"),
                    Variable::new("v0", "Initial velocity"),
                    Variable::new("a", "Constant acceleration"),
                    Variable::new("x0", "Initial position"),
                    Variable::new("x", "Final position"),
                ],
                assumptions: vec![
                    "Constant acceleration",
                    "Single axis",
                    "ssqrt keeps the sign of its argument: a negative v^2 yields a negative v",
                ],
                category: EquationCategory::Velocity,
                source_module: "equations/kinematics.rs",
                source_function: "velocity_squared_from_displacement",
            },

            Equation::DisplacementFromTime => EquationMetadata {
                name: "Position from Elapsed Time",
                description: "Position after accelerating uniformly for a known time",
                formula_plain: "x = x0 + v0*t + a*t^2/2",
                reference: Reference::PhysicsClassroom { lesson: "Lesson 6" },
                variables: vec![
                    Variable::new("x", "Final position"),
                    Variable::new("x0", "Initial position"),
                    Variable::new("v0", "Initial velocity"),
                    Variable::new("a", "Constant acceleration"),
                    Variable::new("t", "Elapsed time"),
                ],
                assumptions: vec!["Constant acceleration", "Single axis"],
                category: EquationCategory::Position,
                source_module: "equations/kinematics.rs",
                source_function: "displacement_from_time",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get every category used by the registry, in display order
    pub fn all_categories() -> Vec<EquationCategory> {
        let mut cats: Vec<EquationCategory> = Vec::new();
        for eq in ALL_EQUATIONS {
            let cat = eq.metadata().category;
            if !cats.contains(&cat) {
                cats.push(cat);
            }
        }
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::VelocityFromTime,
    Equation::VelocityFromAverage,
    Equation::VelocityFromDisplacement,
    Equation::DisplacementFromTime,
];

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the `EQUATIONS.md` reference from the registry.
///
/// ```rust
/// use kinematics_core::equations::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("## Velocity"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(4_000);

    output.push_str(r#"# Kinematics Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists the constant-acceleration identities used by the velocity
solver, with the source function that implements each one.

## Solver Selection

| Known fields | Identity |
|--------------|----------|
| v0, a, t (no positions) | Velocity from Elapsed Time |
| x0, x, v0, t (no acceleration) | Velocity from Average Velocity |
| x0, x, v0, a | Velocity from Displacement |

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description |\n");
                output.push_str("|--------|-------------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} |\n", var.symbol, var.description));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 4);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} has no source", eq);
        }
    }

    #[test]
    fn test_reference_citation() {
        let r = Reference::PhysicsClassroom { lesson: "Lesson 6" };
        assert_eq!(r.citation(), "The Physics Classroom, 1-D Kinematics, Lesson 6");
    }

    #[test]
    fn test_in_category() {
        let velocity = Equation::in_category(EquationCategory::Velocity);
        assert_eq!(velocity.len(), 3);
        assert!(!velocity.contains(&Equation::DisplacementFromTime));
    }

    #[test]
    fn test_categories_sorted() {
        let cats = Equation::all_categories();
        assert_eq!(cats, vec![EquationCategory::Velocity, EquationCategory::Position]);
    }

    #[test]
    fn test_categories_cover_every_equation() {
        let cats = Equation::all_categories();
        for eq in ALL_EQUATIONS {
            assert!(cats.contains(&eq.metadata().category), "{:?} has no listed category", eq);
        }
        let listed: usize = cats.iter().map(|c| Equation::in_category(*c).len()).sum();
        assert_eq!(listed, ALL_EQUATIONS.len());
    }

    #[test]
    fn test_equation_serializes_as_name() {
        let json = serde_json::to_string(&Equation::VelocityFromAverage).unwrap();
        assert_eq!(json, "\"VelocityFromAverage\"");
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();
        assert!(markdown.starts_with("# Kinematics Equations Reference"));
        assert!(markdown.contains("### Velocity from Displacement"));
        assert!(markdown.contains("`v = v0 + a*t`"));
        assert!(markdown.contains("[`displacement_from_time`](equations/kinematics.rs)"));
        assert!(markdown.contains("- **Total Equations:** 4"));
        // Velocity section comes first
        let vel = markdown.find("## Velocity").unwrap();
        let pos = markdown.find("## Position").unwrap();
        assert!(vel < pos);
    }
}
