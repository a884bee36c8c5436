// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stepwise evaluation for the pipeline visualizer.
//!
//! Each progressive filter (`s1`, `s1 | s2`, ...) is evaluated concurrently
//! against the same input. Results are joined in stage order; a failing
//! stage never cancels or alters its siblings.

use futures_util::future::join_all;
use tracing::{debug, warn};

use lq_core::{check_filter, decompose, EvalOptions, Pipeline, StepResult};

use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::limits::SandboxLimits;

/// Per-stage results plus the stage texts they were built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepsOutcome {
    pub steps: Vec<StepResult>,
    pub pipes: Vec<String>,
}

/// Check, decompose and evaluate `filter` stage by stage.
///
/// Only the admission check can fail; per-stage failures are reported
/// inside the corresponding [`StepResult`].
pub async fn run_steps<E>(
    evaluator: &E,
    filter: &str,
    input: &str,
    max_filter_len: usize,
    limits: SandboxLimits,
) -> Result<StepsOutcome>
where
    E: Evaluator,
{
    check_filter(filter, max_filter_len)?;
    let pipeline = decompose(filter);
    if pipeline.is_empty() {
        return Ok(StepsOutcome::default());
    }
    debug!("evaluating {} progressive filters", pipeline.len());
    let steps = evaluate_pipeline(evaluator, &pipeline, input, limits).await;
    Ok(StepsOutcome {
        steps,
        pipes: pipeline.stage_texts(),
    })
}

/// Evaluate every progressive filter of an already decomposed pipeline.
pub async fn evaluate_pipeline<E>(
    evaluator: &E,
    pipeline: &Pipeline,
    input: &str,
    limits: SandboxLimits,
) -> Vec<StepResult>
where
    E: Evaluator,
{
    let runs = pipeline
        .fragments
        .iter()
        .zip(&pipeline.progressive)
        .map(|(fragment, progressive)| async move {
            let result = evaluator
                .evaluate(&progressive.text, input, EvalOptions::default(), limits)
                .await;
            let (output, error) = match result {
                Ok(eval) => (Some(eval.output.trim_end().to_string()), eval.stderr),
                Err(e) => {
                    if e.is_systemic() {
                        warn!("stage {} failed: {}", fragment.ordinal, e);
                    }
                    (None, Some(e.to_string()))
                }
            };
            StepResult {
                step: fragment.ordinal,
                fragment: fragment.text.clone(),
                full_filter: progressive.text.clone(),
                output,
                error,
            }
        });
    join_all(runs).await
}

#[cfg(test)]
#[path = "steps_tests.rs"]
mod tests;
