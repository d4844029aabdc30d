//! # Kinematics CLI
//!
//! Terminal front end for `kinematics_core`. Marshals flags (or a raw JSON
//! object) into a solver call and prints the result. All physics lives in
//! the core crate.
//!
//! ```bash
//! kinematics velocity --v0 0 --a 3.2 --t 32.8 --round 2
//! kinematics velocity --input '{"initial_velocity": 0, "acceleration": 3.2, "elapsed_time": 32.8}'
//! kinematics sqrt -- -4
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use kinematics_core::equations::generate_equations_markdown;
use kinematics_core::{signed_sqrt_value, solve, KinematicsError, VelocityInput};

#[derive(Parser)]
#[command(name = "kinematics")]
#[command(about = "Solve single-axis constant-acceleration kinematics")]
struct Cmd {
    /// Print results and errors as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve for final velocity from the known parameters
    Velocity(VelocityArgs),
    /// Signed square root of a value (parsed as JSON)
    Sqrt {
        #[arg(allow_negative_numbers = true)]
        value: String,
    },
    /// Print the equations reference as markdown
    Equations,
}

#[derive(Args)]
struct VelocityArgs {
    /// Initial position
    #[arg(long = "x0", allow_negative_numbers = true)]
    initial_position: Option<f64>,

    /// Final position
    #[arg(long = "x", allow_negative_numbers = true)]
    final_position: Option<f64>,

    /// Initial velocity
    #[arg(long = "v0", allow_negative_numbers = true)]
    initial_velocity: Option<f64>,

    /// Constant acceleration
    #[arg(long = "a", allow_negative_numbers = true)]
    acceleration: Option<f64>,

    /// Elapsed time
    #[arg(long = "t", allow_negative_numbers = true)]
    elapsed_time: Option<f64>,

    /// Decimal places to round the result to
    #[arg(long = "round", allow_negative_numbers = true)]
    rounding_digits: Option<i32>,

    /// Parameters as a JSON object instead of flags
    #[arg(
        long,
        conflicts_with_all = ["initial_position", "final_position", "initial_velocity", "acceleration", "elapsed_time", "rounding_digits"]
    )]
    input: Option<String>,
}

impl VelocityArgs {
    fn into_input(self) -> Result<VelocityInput> {
        match self.input {
            Some(raw) => {
                let value: Value = serde_json::from_str(&raw).context("--input is not valid JSON")?;
                Ok(VelocityInput::from_json(&value)?)
            }
            None => Ok(VelocityInput {
                initial_position: self.initial_position,
                final_position: self.final_position,
                initial_velocity: self.initial_velocity,
                acceleration: self.acceleration,
                elapsed_time: self.elapsed_time,
                rounding_digits: self.rounding_digits,
            }),
        }
    }
}

fn main() -> ExitCode {
    let cmd = Cmd::parse();
    init_logging(cmd.verbose);

    match run(cmd.action, cmd.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if cmd.json {
                if let Some(err) = e.downcast_ref::<KinematicsError>() {
                    if let Ok(json) = serde_json::to_string_pretty(err) {
                        eprintln!("{}", json);
                    }
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(action: Action, json: bool) -> Result<()> {
    match action {
        Action::Velocity(args) => velocity(args, json),
        Action::Sqrt { value } => sqrt(value, json),
        Action::Equations => {
            print!("{}", generate_equations_markdown());
            Ok(())
        }
    }
}

fn velocity(args: VelocityArgs, json: bool) -> Result<()> {
    let input = args.into_input()?;
    tracing::info!(?input, "velocity");

    let solution = solve(&input)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        println!("{}", solution.velocity);
    }
    Ok(())
}

fn sqrt(raw: String, json: bool) -> Result<()> {
    // Anything that is not valid JSON is passed through as text
    let value = serde_json::from_str(&raw).unwrap_or(Value::String(raw));
    let root = signed_sqrt_value(&value)?;
    if json {
        println!("{}", serde_json::json!({ "root": root }));
    } else {
        println!("{}", root);
    }
    Ok(())
}
