// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run and steps command tests.
//!
//! A real jq is not assumed on the test machine: evaluation goes through
//! small shell scripts standing in for jq, or through a missing binary.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

const MISSING_JQ: &str = "/nonexistent/lq-missing/jq";

fn lq() -> Command {
    let mut cmd = cargo_bin_cmd!("lq");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[yare::parameterized(
    env_var = { "$ENV.HOME" },
    env_builtin = { "env | keys" },
    debug = { ".a | debug" },
    input = { "input" },
    inputs = { "[inputs]" },
    input_filename = { "input_filename" },
    stderr = { "stderr" },
)]
fn blocked_filters_are_refused(filter: &str) {
    lq().args(["run", filter, "--jq", MISSING_JQ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "error: Blocked: env/debug/input builtins are disabled for security",
        ));
}

#[test]
fn long_filter_is_refused() {
    let filter = ".".repeat(2001);
    lq().args(["run", &filter, "--jq", MISSING_JQ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Filter too long (max 2000 chars)"));
}

#[test]
fn filter_at_the_limit_reaches_the_engine() {
    let filter = ".".repeat(2000);
    lq().args(["run", &filter, "--jq", MISSING_JQ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to launch"));
}

#[test]
fn missing_jq_is_reported() {
    lq().args(["run", ".", "--jq", MISSING_JQ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to launch"));
}

#[test]
fn input_and_file_conflict() {
    lq().args(["run", ".", "-i", "{}", "-f", "data.json"])
        .assert()
        .failure();
}

#[test]
fn missing_input_file_is_reported() {
    lq().args(["run", ".", "-f", "/nonexistent/lq-missing/data.json", "--jq", MISSING_JQ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read input file"));
}

#[test]
fn steps_with_missing_jq_reports_each_stage() {
    let output = lq()
        .args(["steps", ".a | .b", "--jq", MISSING_JQ, "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["pipes"], serde_json::json!([".a", ".b"]));
    let steps = value["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[1]["fullFilter"], ".a | .b");
    assert!(steps[1]["error"]
        .as_str()
        .unwrap()
        .contains("failed to launch"));
}

#[test]
fn steps_refuses_blocked_filters() {
    lq().args(["steps", ".a | $ENV", "--jq", MISSING_JQ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Blocked:"));
}

#[cfg(unix)]
mod fake_jq {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn script(dir: &TempDir, body: &str) -> String {
        let path = dir.path().join("jq");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path.display().to_string()
    }

    /// Prints every argument on its own line.
    fn echo_args(dir: &TempDir) -> String {
        script(dir, r#"for a in "$@"; do printf '%s\n' "$a"; done"#)
    }

    #[test]
    fn flags_are_passed_before_the_filter() {
        let dir = TempDir::new().unwrap();
        let jq = echo_args(&dir);
        lq().args(["run", ".a", "-r", "-n", "--jq", &jq])
            .assert()
            .success()
            .stdout("-r\n-n\n--\n.a\n");
    }

    #[test]
    fn jq_errors_fail_the_command() {
        let dir = TempDir::new().unwrap();
        let jq = script(&dir, "echo 'jq: error: boom' >&2\nexit 5");
        lq().args(["run", ".a", "--jq", &jq])
            .assert()
            .failure()
            .stderr(predicate::str::contains("error: jq: error: boom"));
    }

    #[test]
    fn slow_jq_times_out() {
        let dir = TempDir::new().unwrap();
        let jq = script(&dir, "while :; do :; done");
        lq().args(["run", ".", "--jq", &jq, "--timeout-ms", "200"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Timeout: query took too long"));
    }

    #[test]
    fn steps_show_each_progressive_filter() {
        let dir = TempDir::new().unwrap();
        let jq = script(&dir, r#"for a in "$@"; do last=$a; done; printf '%s\n' "$last""#);
        lq().args(["steps", ".a | keys | length", "--jq", &jq])
            .assert()
            .success()
            .stdout(predicate::str::contains("Step 3  length\n"))
            .stdout(predicate::str::contains("    .a | keys | length\n"));
    }
}
