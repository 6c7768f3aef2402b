use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sleeptrack(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sleeptrack").unwrap();
    cmd.arg("--color")
        .arg("never")
        .arg("--config")
        .arg(config_dir.path().join("config.yaml"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn sample_week_reports_severe_tier() {
    let dir = TempDir::new().unwrap();

    sleeptrack(&dir)
        .write_stdin("8\n7\n6.5\n9\n7.5\n8\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("===== Sleep Tracker ====="))
        .stdout(predicate::str::contains("Enter hours of sleep for Monday: "))
        .stdout(predicate::str::contains("===== Sleep Analysis ====="))
        .stdout(predicate::str::contains("Total sleep for the week: 49.0 hours"))
        .stdout(predicate::str::contains("Average sleep per night: 7.00 hours"))
        .stdout(predicate::str::contains("Maximum sleep: 9.0 hours"))
        .stdout(predicate::str::contains("Minimum sleep: 3.0 hours"))
        .stdout(predicate::str::contains("===== All Daily Values ====="))
        .stdout(predicate::str::contains("Day 7: 3.0"))
        .stdout(predicate::str::contains(
            "Your shortest night was Sunday (Day 7) with 3.0 hours.",
        ))
        .stdout(predicate::str::contains("severe sleep deprivation"));
}

#[test]
fn rested_week_gets_affirmation() {
    let dir = TempDir::new().unwrap();

    sleeptrack(&dir)
        .write_stdin("7 7 7 7 7 7 7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Average sleep per night: 7.00 hours"))
        .stdout(predicate::str::contains(
            "Your shortest night was Monday (Day 1) with 7.0 hours.",
        ))
        .stdout(predicate::str::contains("Great job!"));
}

#[test]
fn invalid_entries_are_reprompted() {
    let dir = TempDir::new().unwrap();

    sleeptrack(&dir)
        .write_stdin("-2\n24.0001\nlots\n24\n0\n8\n8\n8\n8\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Sleep hours cannot be negative. Please try again.",
        ))
        .stdout(predicate::str::contains(
            "Error: Sleep hours cannot exceed 24. Please try again.",
        ))
        .stdout(predicate::str::contains(
            "Error: Invalid input. Please enter a valid number.",
        ))
        .stdout(predicate::str::contains("Day 1: 24.0"))
        .stdout(predicate::str::contains("Day 2: 0.0"));
}

#[test]
fn json_output_keeps_prompts_off_stdout() {
    let dir = TempDir::new().unwrap();

    let output = sleeptrack(&dir)
        .arg("--output")
        .arg("json")
        .write_stdin("8 7 6.5 9 7.5 8 3\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["total"], 49.0);
    assert_eq!(parsed["worst_day"]["name"], "Sunday");
    assert_eq!(parsed["tier"], "severe_deprivation");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Enter hours of sleep for Sunday: "));
}

#[test]
fn config_file_sets_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.yaml"),
        "general:\n  default_output: json\n",
    )
    .unwrap();

    sleeptrack(&dir)
        .write_stdin("5 5 5 5 5 5 5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tier\": \"needs_improvement\""));
}

#[test]
fn closed_input_fails() {
    let dir = TempDir::new().unwrap();

    sleeptrack(&dir)
        .write_stdin("8\n8\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Input ended before all 7 days were entered",
        ));
}
