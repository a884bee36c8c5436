// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lq_core::MAX_FILTER_LEN;
use lq_sandbox::limits::SINGLE_OUTPUT_BYTES;
use lq_sandbox::request::run_single;
use lq_sandbox::Evaluation;

use super::{block_on, engine, limits, read_input};
use crate::cli::{EngineArgs, InputArgs, JqFlags};
use crate::error::Result;

pub fn run(filter: &str, input: &InputArgs, flags: JqFlags, engine_args: &EngineArgs) -> Result<()> {
    let evaluation = evaluate(filter, input, flags, engine_args)?;
    print!("{}", evaluation.output);
    if let Some(stderr) = evaluation.stderr.as_deref() {
        eprint!("{stderr}");
    }
    Ok(())
}

pub(crate) fn evaluate(
    filter: &str,
    input: &InputArgs,
    flags: JqFlags,
    engine_args: &EngineArgs,
) -> Result<Evaluation> {
    let document = read_input(input)?;
    let jq = engine(engine_args);
    let evaluation = block_on(run_single(
        &jq,
        filter,
        &document,
        flags.into(),
        MAX_FILTER_LEN,
        limits(engine_args, SINGLE_OUTPUT_BYTES),
    ))??;
    Ok(evaluation)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
