// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use lq_core::EvalOptions;

use crate::error::Result;
use crate::evaluator::{Evaluation, Evaluator};
use crate::limits::SandboxLimits;

type Responder = Box<dyn Fn(&str, &str) -> Result<Evaluation> + Send + Sync>;

/// A scripted [`Evaluator`] that records every call.
pub struct FakeEvaluator {
    respond: Responder,
    pub calls: Mutex<Vec<Call>>,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub filter: String,
    pub input: String,
    pub options: EvalOptions,
    pub limits: SandboxLimits,
}

impl FakeEvaluator {
    pub fn new(respond: impl Fn(&str, &str) -> Result<Evaluation> + Send + Sync + 'static) -> Self {
        FakeEvaluator {
            respond: Box::new(respond),
            calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Answers every filter with the filter text itself.
    pub fn echo() -> Self {
        Self::new(|filter, _| {
            Ok(Evaluation {
                output: format!("{filter}\n"),
                stderr: None,
            })
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl Evaluator for FakeEvaluator {
    fn evaluate(
        &self,
        filter: &str,
        input: &str,
        options: EvalOptions,
        limits: SandboxLimits,
    ) -> impl Future<Output = Result<Evaluation>> + Send {
        let filter = filter.to_string();
        let input = input.to_string();
        async move {
            self.calls.lock().unwrap().push(Call {
                filter: filter.clone(),
                input: input.clone(),
                options,
                limits,
            });
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            tokio::task::yield_now().await;
            let result = (self.respond)(&filter, &input);
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            result
        }
    }
}
