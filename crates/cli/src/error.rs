// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors from the `lq` commands.
///
/// Messages are shown to the user as `error: <message>`.
#[derive(Debug, Error)]
pub enum Error {
    /// The filter was refused before evaluation.
    #[error(transparent)]
    Filter(#[from] lq_core::Error),

    #[error(transparent)]
    Sandbox(#[from] lq_sandbox::Error),

    #[error("cannot read input file {path}: {source}")]
    InputFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for lq commands.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
