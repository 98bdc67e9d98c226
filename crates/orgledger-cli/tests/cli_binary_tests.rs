//! End-to-end tests against the built `orgledger` binary

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn orgledger() -> Command {
    Command::new(env!("CARGO_BIN_EXE_orgledger"))
}

#[test]
fn test_binary_replay_prints_trace() {
    let output = orgledger()
        .args(["replay", "move:3:7", "undo"])
        .output()
        .expect("Failed to execute CLI");

    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("== initial =="));
    assert!(stdout.contains("== 2 undo: reverted"));
}

#[test]
fn test_binary_error_exits_nonzero_with_code() {
    let output = orgledger()
        .args(["replay", "move:1:2"])
        .output()
        .expect("Failed to execute CLI");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: [ERR_NOT_FOUND] in operation 'move_employee'"));
}

#[test]
fn test_binary_validate_reports_bad_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.yaml");
    fs::write(&path, "schema_version: [").unwrap();

    let output = orgledger()
        .args(["validate", "--roster", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error: [ERR_INVALID_INPUT]"));
}

#[test]
fn test_binary_error_includes_request_id_flag() {
    let output = orgledger()
        .args(["replay", "--request-id", "cli-req-1", "move:99:1"])
        .output()
        .expect("Failed to execute CLI");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("(request_id: cli-req-1)"));
}
