//! Tests for the binary's command-line behavior.

mod common;

use common::temp_config;
use std::process::Command;

fn counter_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_counter-store"));
    cmd.env_remove("COUNTER_STORE_LOG");
    cmd
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_help_lists_subcommands() {
    let output = counter_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("run"));
    assert!(stdout.contains("tui"));
    assert!(stdout.contains("--config"));
}

#[test]
fn test_run_prints_every_observed_value() {
    let (_dir, path) = temp_config("");
    let output = counter_cmd()
        .arg("--config")
        .arg(&path)
        .args(["run", "increment", "increment", "increment"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["0", "1", "2", "3"]);
}

#[test]
fn test_run_with_aliases_and_reset() {
    let (_dir, path) = temp_config("");
    let output = counter_cmd()
        .arg("--config")
        .arg(&path)
        .args(["run", "inc", "inc", "dec", "r"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(stdout_lines(&output), vec!["0", "1", "2", "1", "0"]);
}

#[test]
fn test_always_policy_repeats_noops() {
    let (_dir, path) = temp_config("[store]\nnotify = \"always\"\n");
    let output = counter_cmd()
        .arg("--config")
        .arg(&path)
        .args(["run", "reset", "reset"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(stdout_lines(&output), vec!["0", "0", "0"]);
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");
    let output = counter_cmd()
        .arg("--config")
        .arg(&path)
        .args(["run", "increment"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed"));
}

#[test]
fn test_unknown_action_is_rejected() {
    let output = counter_cmd()
        .args(["run", "double"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("double"));
}
