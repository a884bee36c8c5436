// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn input_defaults_to_empty_object() {
    assert_eq!(read_input(&InputArgs::default()).unwrap(), "{}");
}

#[test]
fn inline_input_is_used_verbatim() {
    let args = InputArgs {
        input: Some("[1,2]".into()),
        file: None,
    };
    assert_eq!(read_input(&args).unwrap(), "[1,2]");
}

#[test]
fn input_file_is_read() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{\"a\": 1}}").unwrap();
    let args = InputArgs {
        input: None,
        file: Some(file.path().to_path_buf()),
    };
    assert_eq!(read_input(&args).unwrap(), "{\"a\": 1}");
}

#[test]
fn missing_input_file_names_the_path() {
    let args = InputArgs {
        input: None,
        file: Some("/nonexistent/lq-input.json".into()),
    };
    let err = read_input(&args).unwrap_err();
    assert!(matches!(err, Error::InputFile { .. }));
    assert!(err.to_string().contains("/nonexistent/lq-input.json"));
}

#[test]
fn limits_follow_timeout_flag() {
    let args = EngineArgs {
        jq: "jq".into(),
        timeout_ms: 250,
    };
    let limits = limits(&args, 1024);
    assert_eq!(limits.timeout, Duration::from_millis(250));
    assert_eq!(limits.max_output_bytes, 1024);
}

#[test]
fn absolute_engine_path_is_kept() {
    let args = EngineArgs {
        jq: "/opt/jq/bin/jq".into(),
        timeout_ms: 5000,
    };
    assert_eq!(engine(&args).program(), std::path::Path::new("/opt/jq/bin/jq"));
}
