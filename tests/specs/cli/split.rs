// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Split command tests: top-level pipeline stages.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn lq() -> Command {
    let mut cmd = cargo_bin_cmd!("lq");
    cmd.env("NO_COLOR", "1");
    cmd
}

fn fragments(filter: &str) -> Vec<String> {
    let output = lq().args(["split", filter, "-o", "json"]).output().unwrap();
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    value["fragments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["text"].as_str().unwrap().to_string())
        .collect()
}

#[yare::parameterized(
    simple = { ".a | .b | length", &[".a", ".b", "length"] },
    update = { ".a |= . + 1 | keys", &[".a |= . + 1", "keys"] },
    brackets = { "[.[] | .x] | add", &["[.[] | .x]", "add"] },
    parens = { "(.a | .b) | .c", &["(.a | .b)", ".c"] },
    braces = { "{a: (.x | .y)} | .a", &["{a: (.x | .y)}", ".a"] },
    string_pipe = { r#""a|b" | length"#, &[r#""a|b""#, "length"] },
    alternative = { ".a // .b | .c", &[".a // .b", ".c"] },
    single = { "keys", &["keys"] },
)]
fn splits_on_top_level_pipes(filter: &str, expected: &[&str]) {
    assert_eq!(fragments(filter), expected);
}

#[test]
fn empty_segments_are_dropped() {
    assert_eq!(fragments(".a | | .b"), [".a", ".b"]);
}

#[test]
fn text_output_shows_progressive_filters() {
    lq().args(["split", ".a | .b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Progressive filters:"))
        .stdout(predicate::str::contains("  2  .a | .b"));
}

#[test]
fn blank_filter_has_no_stages() {
    lq().args(["split", "   "])
        .assert()
        .success()
        .stdout("No stages.\n");
}
