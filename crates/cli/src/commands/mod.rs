// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod explain;
pub mod run;
pub mod split;
pub mod steps;

use std::time::Duration;

use lq_core::protocol::input_document;
use lq_sandbox::{resolve_program, JqProcess, SandboxLimits};

use crate::cli::{EngineArgs, InputArgs};
use crate::env;
use crate::error::{Error, Result};

/// The input document named by the arguments, `{}` when none is given.
pub(crate) fn read_input(args: &InputArgs) -> Result<String> {
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path).map_err(|source| Error::InputFile {
            path: path.display().to_string(),
            source,
        });
    }
    Ok(input_document(args.input.as_deref()).to_string())
}

/// The jq process to run, resolved against this process's `PATH`.
pub(crate) fn engine(args: &EngineArgs) -> JqProcess {
    JqProcess::new(resolve_program(&args.jq, env::search_path().as_deref()))
}

pub(crate) fn limits(args: &EngineArgs, max_output_bytes: usize) -> SandboxLimits {
    SandboxLimits::new(Duration::from_millis(args.timeout_ms), max_output_bytes)
}

/// Drive an async evaluation from the synchronous command layer.
pub(crate) fn block_on<F: std::future::Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
