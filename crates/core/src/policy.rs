// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Admission checks applied to a filter before it is evaluated.
//!
//! Filters that could reveal the host (environment access, stderr output,
//! reading further inputs) are refused outright, as are empty and
//! over-long filters.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Default maximum filter length, in characters.
pub const MAX_FILTER_LEN: usize = 2000;

// Compile-time constant pattern, verified by the policy tests.
static DENY_LIST: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(
        r"\b(env|debug|stderr|input|inputs|input_filename|path\s*\(.*\$ENV)\b|\$ENV",
    ) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

/// The first deny-listed construct in `filter`, if any.
pub fn blocked_construct(filter: &str) -> Option<&str> {
    DENY_LIST.find(filter).map(|m| m.as_str())
}

/// Check a filter against the emptiness, length and deny-list rules.
///
/// Length is measured in characters, not bytes.
///
/// # Errors
///
/// Returns [`Error::EmptyFilter`], [`Error::FilterTooLong`] or
/// [`Error::Blocked`].
pub fn check_filter(filter: &str, max_len: usize) -> Result<()> {
    if filter.is_empty() {
        return Err(Error::EmptyFilter);
    }
    if filter.chars().count() > max_len {
        return Err(Error::FilterTooLong { max: max_len });
    }
    if let Some(construct) = blocked_construct(filter) {
        return Err(Error::Blocked {
            construct: construct.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
