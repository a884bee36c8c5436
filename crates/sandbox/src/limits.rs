// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resource bounds for one jq invocation.

use std::time::Duration;

/// Wall-clock limit applied to every invocation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
/// Output cap for a single playground evaluation.
pub const SINGLE_OUTPUT_BYTES: usize = 512 * 1024;
/// Output cap for each stage of a pipeline visualization.
pub const STEP_OUTPUT_BYTES: usize = 256 * 1024;

/// Bounds enforced on a single jq process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SandboxLimits {
    pub timeout: Duration,
    /// Applies to stdout and stderr separately.
    pub max_output_bytes: usize,
}

impl SandboxLimits {
    pub const fn new(timeout: Duration, max_output_bytes: usize) -> Self {
        SandboxLimits {
            timeout,
            max_output_bytes,
        }
    }

    /// Limits for a single evaluation.
    pub const fn single() -> Self {
        Self::new(DEFAULT_TIMEOUT, SINGLE_OUTPUT_BYTES)
    }

    /// Limits for one stage of a stepwise evaluation.
    pub const fn per_step() -> Self {
        Self::new(DEFAULT_TIMEOUT, STEP_OUTPUT_BYTES)
    }
}

impl Default for SandboxLimits {
    fn default() -> Self {
        Self::single()
    }
}
