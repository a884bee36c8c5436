// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lq_core::protocol::StepsResponse;
use lq_core::MAX_FILTER_LEN;
use lq_sandbox::limits::STEP_OUTPUT_BYTES;
use lq_sandbox::{run_steps, StepsOutcome};

use super::{block_on, engine, limits, read_input};
use crate::cli::{EngineArgs, InputArgs, OutputFormat};
use crate::colors;
use crate::display::format_steps;
use crate::error::Result;

pub fn run(
    filter: &str,
    input: &InputArgs,
    engine_args: &EngineArgs,
    output: OutputFormat,
) -> Result<()> {
    let outcome = evaluate(filter, input, engine_args)?;
    print!("{}", render(outcome, output, colors::should_colorize())?);
    Ok(())
}

pub(crate) fn evaluate(
    filter: &str,
    input: &InputArgs,
    engine_args: &EngineArgs,
) -> Result<StepsOutcome> {
    let document = read_input(input)?;
    let jq = engine(engine_args);
    let outcome = block_on(run_steps(
        &jq,
        filter,
        &document,
        MAX_FILTER_LEN,
        limits(engine_args, STEP_OUTPUT_BYTES),
    ))??;
    Ok(outcome)
}

pub(crate) fn render(outcome: StepsOutcome, output: OutputFormat, color: bool) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(format_steps(&outcome.steps, color)),
        OutputFormat::Json => {
            let response = StepsResponse::steps(outcome.steps, outcome.pipes);
            Ok(format!("{}\n", serde_json::to_string_pretty(&response)?))
        }
    }
}

#[cfg(test)]
#[path = "steps_tests.rs"]
mod tests;
