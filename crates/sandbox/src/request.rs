// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Turning wire requests into wire responses.
//!
//! Everything a caller can get wrong (and anything jq reports) becomes an
//! `{ "error": ... }` body. These functions never fail.

use tracing::{error, info};

use lq_core::protocol::{
    input_document, EvalRequest, EvalResponse, StepsRequest, StepsResponse,
};
use lq_core::check_filter;

use crate::error::{Error, Result};
use crate::evaluator::{Evaluation, Evaluator};
use crate::limits::SandboxLimits;
use crate::steps::run_steps;

/// Bounds applied to one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLimits {
    pub max_filter_len: usize,
    /// Limits for `/api/jq`.
    pub single: SandboxLimits,
    /// Limits for each stage of `/api/jq/steps`.
    pub per_step: SandboxLimits,
}

impl Default for RequestLimits {
    fn default() -> Self {
        RequestLimits {
            max_filter_len: lq_core::MAX_FILTER_LEN,
            single: SandboxLimits::single(),
            per_step: SandboxLimits::per_step(),
        }
    }
}

/// Check and evaluate a filter once.
pub async fn run_single<E>(
    evaluator: &E,
    filter: &str,
    input: &str,
    options: lq_core::EvalOptions,
    max_filter_len: usize,
    limits: SandboxLimits,
) -> Result<Evaluation>
where
    E: Evaluator,
{
    check_filter(filter, max_filter_len)?;
    evaluator.evaluate(filter, input, options, limits).await
}

pub async fn eval<E>(evaluator: &E, request: &EvalRequest, limits: RequestLimits) -> EvalResponse
where
    E: Evaluator,
{
    let filter = request.filter.as_deref().unwrap_or_default();
    let input = input_document(request.input.as_deref());
    match run_single(
        evaluator,
        filter,
        input,
        request.options,
        limits.max_filter_len,
        limits.single,
    )
    .await
    {
        Ok(eval) => EvalResponse::output(eval.output, eval.stderr),
        Err(e) => {
            log_failure(&e);
            EvalResponse::error(e.to_string())
        }
    }
}

pub async fn steps<E>(evaluator: &E, request: &StepsRequest, limits: RequestLimits) -> StepsResponse
where
    E: Evaluator,
{
    let filter = request.filter.as_deref().unwrap_or_default();
    let input = input_document(request.input.as_deref());
    match run_steps(evaluator, filter, input, limits.max_filter_len, limits.per_step).await {
        Ok(outcome) => StepsResponse::steps(outcome.steps, outcome.pipes),
        Err(e) => {
            log_failure(&e);
            StepsResponse::error(e.to_string())
        }
    }
}

fn log_failure(e: &Error) {
    match e {
        Error::Policy(lq_core::Error::Blocked { construct }) => {
            info!("refused filter using {}", construct);
        }
        e if e.is_systemic() => error!("evaluation failed: {}", e),
        e if e.is_timeout() => info!("evaluation timed out"),
        _ => {}
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
