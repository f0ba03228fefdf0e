// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! End-to-end tests for the tapscan binary
//!
//! These tests run the built binary against fixture files and check the
//! report and exit status.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Get the fixtures directory for test data
fn fixtures_dir() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    Path::new(&manifest_dir).join("tests/fixtures")
}

fn tapscan(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tapscan"))
        .args(args)
        .env_remove("TAPSCAN_INPUT")
        .env_remove("TAPSCAN_FORMAT")
        .output()
        .expect("Failed to run tapscan")
}

fn fixture(name: &str) -> String {
    fixtures_dir().join(name).display().to_string()
}

#[test]
fn test_passing_suite_exits_zero() {
    let output = tapscan(&["-q", &fixture("passing.tap")]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ok 2 - renders # TODO polish"));
    assert!(stdout.ends_with("Result: PASS\n"));
}

#[test]
fn test_failing_suite_exits_one() {
    let output = tapscan(&["-q", &fixture("failing.tap")]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("not ok 2 - renders\n    # expected 3 got 4\n"));
    assert!(stdout.ends_with("Result: FAIL\n"));
}

#[test]
fn test_failure_after_trailing_plan_exits_one() {
    let output = tapscan(&["-q", &fixture("late-failure.tap")]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("not ok 2 - late\n"));
    assert!(stdout.contains("2 tests, 1 passed, 1 failed"));
}

#[test]
fn test_parse_error_exits_two() {
    let output = tapscan(&["-q", &fixture("double-plan.tap")]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("duplicate plan"), "stderr: {stderr}");
}

#[test]
fn test_missing_file_exits_two() {
    let output = tapscan(&["-q", "/nonexistent/path/12345.tap"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_json_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tapscan"))
        .args(["-q", "--format", "json"])
        .env_remove("TAPSCAN_INPUT")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn tapscan");

    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(b"TAP version 13\n1..1\nok 1 only\n")
        .expect("write stdin");

    let output = child.wait_with_output().expect("wait");
    assert_eq!(output.status.code(), Some(0));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["ok"], true);
    assert_eq!(value["version"], 13);
    assert_eq!(value["tests"][0]["description"], "only");
}
