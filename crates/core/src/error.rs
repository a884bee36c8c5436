// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for lq-core operations.
//!
//! The lexer and decomposer are total and never produce these; they come
//! from filter admission.

use thiserror::Error;

/// Reasons a filter is refused before it reaches jq.
#[derive(Debug, Error)]
pub enum Error {
    #[error("No filter provided")]
    EmptyFilter,

    #[error("Filter too long (max {max} chars)")]
    FilterTooLong { max: usize },

    #[error("Blocked: env/debug/input builtins are disabled for security")]
    Blocked { construct: String },
}

/// A specialized Result type for lq-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
