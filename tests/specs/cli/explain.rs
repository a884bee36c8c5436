// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Explain command tests: annotated tokens as text and JSON.

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

fn explain_json(filter: &str) -> Vec<Value> {
    let output = lq()
        .args(["explain", filter, "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    value["tokens"].as_array().unwrap().clone()
}

#[yare::parameterized(
    field = { ".name", "field" },
    builtin = { "length", "builtin" },
    keyword = { "if", "keyword" },
    variable = { "$x", "variable" },
    format = { "@csv", "format" },
    string = { "\"hi\"", "string" },
    number = { "42", "number" },
)]
fn single_token_category(filter: &str, category: &str) {
    let tokens = explain_json(filter);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0]["category"], category);
}

#[test]
fn tokens_reconstruct_the_filter() {
    let filter = r#".users[] | select(.age >= 18) | {name, tag: "a\"b"} // empty"#;
    let text: String = explain_json(filter)
        .iter()
        .map(|t| t["text"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(text, filter);
}

#[test]
fn unknown_identifier_is_described_as_user_defined() {
    let tokens = explain_json("my_helper");
    assert_eq!(tokens[0]["category"], "unknown");
    assert!(tokens[0]["description"]
        .as_str()
        .unwrap()
        .contains("user-defined"));
}

#[test]
fn text_output_lists_descriptions() {
    lq().args(["explain", ".a | keys"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Access field \"a\""))
        .stdout(predicate::str::contains("builtin"));
}

#[test]
fn docs_flag_adds_documentation() {
    let plain = lq().args(["explain", "map(.x)"]).output().unwrap();
    let docs = lq().args(["explain", "map(.x)", "--docs"]).output().unwrap();
    assert!(docs.stdout.len() > plain.stdout.len());
}

#[test]
fn unterminated_string_is_still_explained() {
    let tokens = explain_json("\"abc");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0]["text"], "\"abc");
    assert_eq!(tokens[0]["category"], "string");
}

#[test]
fn explain_requires_a_filter() {
    lq().arg("explain").assert().failure();
}
