use assert_cmd::Command;
use predicates::prelude::*;

fn kinematics() -> Command {
    Command::cargo_bin("kinematics").expect("kinematics bin")
}

#[test]
fn velocity_from_flags() {
    kinematics()
        .args(["velocity", "--v0", "0", "--a", "3.2", "--t", "32.8", "--round", "2"])
        .assert()
        .success()
        .stdout("104.96\n");
}

#[test]
fn velocity_from_json_input() {
    kinematics()
        .args([
            "velocity",
            "--input",
            r#"{"initial_velocity": 0, "initial_position": 0, "final_position": 1720, "acceleration": 3.2, "rounding_digits": 2}"#,
        ])
        .assert()
        .success()
        .stdout("104.92\n");
}

#[test]
fn velocity_json_output_names_equation() {
    kinematics()
        .args(["--json", "velocity", "--v0", "0", "--x0", "0", "--x", "1720", "--t", "32.8", "--round", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"equation\": \"VelocityFromAverage\""))
        .stdout(predicate::str::contains("104.88"));
}

#[test]
fn insufficient_data_fails() {
    kinematics()
        .args(["--json", "velocity", "--v0", "0", "--a", "3.2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not enough information"))
        .stderr(predicate::str::contains("\"type\": \"InsufficientData\""));
}

#[test]
fn invalid_rounding_spec_fails() {
    kinematics()
        .args(["velocity", "--input", r#"{"initial_velocity": 0, "acceleration": 3.2, "elapsed_time": 32.8, "rounding_digits": [2]}"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not type 'list'"));
}

#[test]
fn sqrt_negative_value() {
    kinematics().args(["sqrt", "-4"]).assert().success().stdout("-2\n");
}

#[test]
fn sqrt_rejects_text() {
    kinematics()
        .args(["sqrt", "\"4\""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("found string"));
}

#[test]
fn equations_reference_prints_markdown() {
    kinematics()
        .arg("equations")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Kinematics Equations Reference"));
}

#[test]
fn insufficient_data_reported_before_invalid_rounding() {
    kinematics()
        .args(["velocity", "--input", r#"{"initial_velocity": 0, "acceleration": 3.2, "rounding_digits": [2]}"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not enough information"));
}

#[test]
fn rounding_ties_go_to_even() {
    kinematics()
        .args(["velocity", "--v0", "0", "--a", "0.25", "--t", "1", "--round", "1"])
        .assert()
        .success()
        .stdout("0.2\n");
}
