// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    env_builtin = { "env.HOME", "env" },
    env_var = { "$ENV.PATH", "$ENV" },
    debug = { ".a | debug", "debug" },
    stderr = { "stderr", "stderr" },
    input = { "input", "input" },
    inputs = { "[inputs]", "inputs" },
    input_filename = { "input_filename", "input_filename" },
    env_in_object = { "{e: $ENV}", "$ENV" },
)]
fn blocks_capability_constructs(filter: &str, construct: &str) {
    assert_eq!(blocked_construct(filter), Some(construct));
    let err = check_filter(filter, MAX_FILTER_LEN).unwrap_err();
    assert!(matches!(err, Error::Blocked { .. }));
}

#[parameterized(
    identity = { "." },
    select = { ".[] | select(.age > 30)" },
    envelope = { ".envelope" },
    inputs_like = { ".user_inputs" },
    debugger = { "debugger" },
)]
fn allows_ordinary_filters(filter: &str) {
    assert!(check_filter(filter, MAX_FILTER_LEN).is_ok());
}

#[test]
fn rejects_empty_filter() {
    assert!(matches!(
        check_filter("", MAX_FILTER_LEN),
        Err(Error::EmptyFilter)
    ));
}

#[test]
fn rejects_long_filter() {
    let filter = ".".repeat(MAX_FILTER_LEN + 1);
    let err = check_filter(&filter, MAX_FILTER_LEN).unwrap_err();
    assert_eq!(err.to_string(), "Filter too long (max 2000 chars)");
}

#[test]
fn accepts_filter_at_limit() {
    let filter = ".".repeat(MAX_FILTER_LEN);
    assert!(check_filter(&filter, MAX_FILTER_LEN).is_ok());
}

#[test]
fn length_counts_characters() {
    let filter = "\"é\"";
    assert!(check_filter(filter, 3).is_ok());
}

#[test]
fn length_check_precedes_deny_list() {
    let filter = format!("env {}", " ".repeat(10));
    assert!(matches!(
        check_filter(&filter, 5),
        Err(Error::FilterTooLong { max: 5 })
    ));
}
