// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    seconds = { Duration::from_secs(5), "Timeout: query took too long (5s limit)" },
    millis = { Duration::from_millis(250), "Timeout: query took too long (250ms limit)" },
)]
fn timeout_display(limit: Duration, expected: &str) {
    assert_eq!(Error::Timeout { limit }.to_string(), expected);
}

#[test]
fn policy_error_is_transparent() {
    let err: Error = lq_core::Error::EmptyFilter.into();
    assert_eq!(err.to_string(), "No filter provided");
    assert!(!err.is_systemic());
}

#[test]
fn engine_error_shows_stderr() {
    let err = Error::Engine("jq: error: syntax error".into());
    assert_eq!(err.to_string(), "jq: error: syntax error");
    assert!(!err.is_systemic());
    assert!(!err.is_timeout());
}

#[test]
fn launch_error_is_systemic() {
    let err = Error::Launch {
        program: "jq".into(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    assert!(err.is_systemic());
    assert!(err.to_string().contains("failed to launch jq"));
}

#[test]
fn timeout_is_not_systemic() {
    let err = Error::Timeout {
        limit: Duration::from_secs(1),
    };
    assert!(err.is_timeout());
    assert!(!err.is_systemic());
}

#[test]
fn output_too_large_display() {
    let err = Error::OutputTooLarge { limit: 1024 };
    assert_eq!(err.to_string(), "Output too large (max 1024 bytes)");
}
