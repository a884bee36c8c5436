// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::error::Error;
use crate::evaluator::Evaluation;
use crate::testing::FakeEvaluator;
use std::time::Duration;

const MAX: usize = lq_core::MAX_FILTER_LEN;

#[tokio::test]
async fn runs_every_progressive_filter() {
    let fake = FakeEvaluator::echo();
    let outcome = run_steps(&fake, ".a | .b | length", "{}", MAX, SandboxLimits::per_step())
        .await
        .unwrap();

    assert_eq!(outcome.pipes, vec![".a", ".b", "length"]);
    let filters: Vec<_> = outcome.steps.iter().map(|s| s.full_filter.as_str()).collect();
    assert_eq!(filters, vec![".a", ".a | .b", ".a | .b | length"]);
    let ordinals: Vec<_> = outcome.steps.iter().map(|s| s.step).collect();
    assert_eq!(ordinals, vec![1, 2, 3]);
    assert_eq!(outcome.steps[2].fragment, "length");
}

#[tokio::test]
async fn output_is_trimmed_at_the_end_only() {
    let fake = FakeEvaluator::new(|_, _| {
        Ok(Evaluation {
            output: "  1\n2\n\n".into(),
            stderr: None,
        })
    });
    let outcome = run_steps(&fake, ".", "{}", MAX, SandboxLimits::per_step())
        .await
        .unwrap();
    assert_eq!(outcome.steps[0].output.as_deref(), Some("  1\n2"));
    assert!(outcome.steps[0].is_ok());
}

#[tokio::test]
async fn stages_run_concurrently() {
    let fake = FakeEvaluator::echo();
    run_steps(&fake, ".a | .b | .c | .d", "{}", MAX, SandboxLimits::per_step())
        .await
        .unwrap();
    assert_eq!(fake.max_in_flight(), 4);
}

#[tokio::test]
async fn every_stage_sees_the_original_input_and_default_options() {
    let fake = FakeEvaluator::echo();
    let limits = SandboxLimits::per_step();
    run_steps(&fake, ".a | .b", "[1,2]", MAX, limits)
        .await
        .unwrap();
    for call in fake.calls() {
        assert_eq!(call.input, "[1,2]");
        assert_eq!(call.options, EvalOptions::default());
        assert_eq!(call.limits, limits);
    }
}

#[tokio::test]
async fn failing_stage_does_not_affect_siblings() {
    let fake = FakeEvaluator::new(|filter, _| {
        if filter.ends_with("bad") {
            Err(Error::Engine("jq: error: bad is not defined".into()))
        } else {
            Ok(Evaluation {
                output: "ok\n".into(),
                stderr: None,
            })
        }
    });
    let outcome = run_steps(&fake, ".a | bad", "{}", MAX, SandboxLimits::per_step())
        .await
        .unwrap();

    assert_eq!(outcome.steps[0].output.as_deref(), Some("ok"));
    assert_eq!(outcome.steps[0].error, None);
    assert_eq!(outcome.steps[1].output, None);
    assert_eq!(
        outcome.steps[1].error.as_deref(),
        Some("jq: error: bad is not defined")
    );
}

#[tokio::test]
async fn timeout_is_reported_per_stage() {
    let fake = FakeEvaluator::new(|filter, _| {
        if filter.contains("slow") {
            Err(Error::Timeout {
                limit: Duration::from_secs(5),
            })
        } else {
            Ok(Evaluation::default())
        }
    });
    let outcome = run_steps(&fake, ".a | slow", "{}", MAX, SandboxLimits::per_step())
        .await
        .unwrap();
    assert!(outcome.steps[0].is_ok());
    assert_eq!(
        outcome.steps[1].error.as_deref(),
        Some("Timeout: query took too long (5s limit)")
    );
}

#[tokio::test]
async fn stderr_on_success_becomes_the_stage_error() {
    let fake = FakeEvaluator::new(|_, _| {
        Ok(Evaluation {
            output: "1\n".into(),
            stderr: Some("warning".into()),
        })
    });
    let outcome = run_steps(&fake, ".", "{}", MAX, SandboxLimits::per_step())
        .await
        .unwrap();
    assert_eq!(outcome.steps[0].output.as_deref(), Some("1"));
    assert_eq!(outcome.steps[0].error.as_deref(), Some("warning"));
}

#[tokio::test]
async fn update_operator_is_a_single_stage() {
    let fake = FakeEvaluator::echo();
    let outcome = run_steps(&fake, ".a |= . + 1 | .b", "{}", MAX, SandboxLimits::per_step())
        .await
        .unwrap();
    assert_eq!(outcome.pipes, vec![".a |= . + 1", ".b"]);
}

#[tokio::test]
async fn only_separators_yields_no_steps() {
    let fake = FakeEvaluator::echo();
    let outcome = run_steps(&fake, " | | ", "{}", MAX, SandboxLimits::per_step())
        .await
        .unwrap();
    assert_eq!(outcome, StepsOutcome::default());
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn refused_filter_never_reaches_the_evaluator() {
    let fake = FakeEvaluator::echo();
    let err = run_steps(&fake, "$ENV | keys", "{}", MAX, SandboxLimits::per_step())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Policy(lq_core::Error::Blocked { .. })));
    assert!(fake.calls().is_empty());
}
