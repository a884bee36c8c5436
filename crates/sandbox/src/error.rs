// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sandboxed evaluation.
//!
//! Every variant except [`Error::Launch`] and [`Error::Io`] is an expected,
//! user-facing outcome (bad filter, slow filter, jq error) rather than a fault.

use std::time::Duration;

use thiserror::Error;

/// All possible errors from evaluating a filter.
#[derive(Debug, Error)]
pub enum Error {
    /// The filter was refused before launch (empty, too long, deny-listed).
    #[error(transparent)]
    Policy(#[from] lq_core::Error),

    #[error("Timeout: query took too long ({} limit)", format_limit(.limit))]
    Timeout { limit: Duration },

    /// jq reported a syntax or runtime error; the message is its stderr.
    #[error("{0}")]
    Engine(String),

    #[error("Output too large (max {limit} bytes)")]
    OutputTooLarge { limit: usize },

    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for failures of the sandbox itself rather than of the filter.
    pub fn is_systemic(&self) -> bool {
        matches!(self, Error::Launch { .. } | Error::Io(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }
}

fn format_limit(limit: &Duration) -> String {
    if limit.subsec_millis() == 0 {
        format!("{}s", limit.as_secs())
    } else {
        format!("{}ms", limit.as_millis())
    }
}

/// A specialized Result type for sandbox operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
