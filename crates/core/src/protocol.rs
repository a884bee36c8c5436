// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON request and response bodies for the evaluation endpoints.
//!
//! Field names are camelCase on the wire. Responses are either a success
//! shape or `{ "error": "..." }`; expected failures (policy, timeout, jq
//! errors) travel as data, never as transport errors.

use serde::{Deserialize, Serialize};

use crate::token::Token;

/// Input document used when a request carries no (or an empty) input.
pub const DEFAULT_INPUT: &str = "{}";

/// The input document to evaluate against.
pub fn input_document(input: Option<&str>) -> &str {
    match input {
        Some(s) if !s.is_empty() => s,
        _ => DEFAULT_INPUT,
    }
}

/// jq command-line switches exposed to callers. All default to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvalOptions {
    /// Emit strings without JSON quoting (`-r`).
    pub raw_output: bool,
    /// Collect all inputs into one array first (`-s`).
    pub slurp: bool,
    /// Treat the input as plain text lines (`-R`).
    pub raw_input: bool,
    /// Ignore the input and start from `null` (`-n`).
    pub null_input: bool,
}

/// Body of a single evaluation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvalRequest {
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(flatten)]
    pub options: EvalOptions,
}

/// Response to a single evaluation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvalResponse {
    Output {
        output: String,
        /// Anything jq wrote to stderr on success.
        stderr: Option<String>,
    },
    Error {
        error: String,
    },
}

impl EvalResponse {
    pub fn output(output: impl Into<String>, stderr: Option<String>) -> Self {
        EvalResponse::Output {
            output: output.into(),
            stderr,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        EvalResponse::Error {
            error: message.into(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

/// Body of a stepwise (pipeline visualizer) request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepsRequest {
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub filter: Option<String>,
}

/// Outcome of evaluating one progressive filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepResult {
    /// 1-based stage ordinal.
    pub step: usize,
    /// The stage's own text.
    pub fragment: String,
    /// The progressive filter that was evaluated.
    pub full_filter: String,
    pub output: Option<String>,
    pub error: Option<String>,
}

impl StepResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Response to a stepwise request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepsResponse {
    Steps {
        steps: Vec<StepResult>,
        /// Fragment texts in stage order.
        pipes: Vec<String>,
    },
    Error {
        error: String,
    },
}

impl StepsResponse {
    pub fn steps(steps: Vec<StepResult>, pipes: Vec<String>) -> Self {
        StepsResponse::Steps { steps, pipes }
    }

    pub fn error(message: impl Into<String>) -> Self {
        StepsResponse::Error {
            error: message.into(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

/// Body of a tokenize request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainRequest {
    #[serde(default)]
    pub filter: String,
}

/// Annotated tokens for a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub tokens: Vec<Token>,
}

/// The jq version string, or `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: String,
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
