// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lq-sandbox: Running untrusted jq filters
//!
//! Filters pass the admission checks from [`lq_core::policy`] and are then
//! handed to an [`Evaluator`]. The production evaluator, [`JqProcess`],
//! launches jq with no shell, an empty environment, a timeout and bounded
//! output. [`steps`] fans a pipeline out into concurrent per-stage runs.

pub mod error;
pub mod evaluator;
pub mod limits;
pub mod process;
pub mod request;
pub mod steps;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use evaluator::{Evaluation, Evaluator};
pub use limits::SandboxLimits;
pub use process::{resolve_program, JqProcess};
pub use request::RequestLimits;
pub use steps::{run_steps, StepsOutcome};
