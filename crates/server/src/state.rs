// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared state handed to every request handler.

use std::sync::Arc;

use lq_sandbox::{Evaluator, RequestLimits};

use crate::rate_limit::RateLimiter;

/// Evaluator, limits and rate limiter shared by all connections.
pub struct ServerState<E> {
    inner: Arc<ServerStateInner<E>>,
}

struct ServerStateInner<E> {
    evaluator: E,
    limits: RequestLimits,
    limiter: Arc<RateLimiter>,
}

impl<E: Evaluator> ServerState<E> {
    pub fn new(evaluator: E, limits: RequestLimits, limiter: Arc<RateLimiter>) -> Self {
        ServerState {
            inner: Arc::new(ServerStateInner {
                evaluator,
                limits,
                limiter,
            }),
        }
    }

    pub fn evaluator(&self) -> &E {
        &self.inner.evaluator
    }

    pub fn limits(&self) -> RequestLimits {
        self.inner.limits
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.inner.limiter
    }
}

// Manual impl: cloning shares the state and must not require `E: Clone`.
impl<E> Clone for ServerState<E> {
    fn clone(&self) -> Self {
        ServerState {
            inner: Arc::clone(&self.inner),
        }
    }
}
