// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The seam between request handling and whatever actually runs jq.

use std::future::Future;

use lq_core::EvalOptions;

use crate::error::Result;
use crate::limits::SandboxLimits;

/// Successful output of one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Everything jq wrote to stdout.
    pub output: String,
    /// Trimmed stderr, when jq wrote any despite succeeding.
    pub stderr: Option<String>,
}

/// Evaluates a filter against an input document.
///
/// Implementations must be safe to call concurrently; each call is
/// independent of every other.
pub trait Evaluator: Send + Sync {
    fn evaluate(
        &self,
        filter: &str,
        input: &str,
        options: EvalOptions,
        limits: SandboxLimits,
    ) -> impl Future<Output = Result<Evaluation>> + Send;

    /// A human-readable engine version, if one can be determined.
    fn version(&self) -> impl Future<Output = Option<String>> + Send {
        async { None }
    }
}
