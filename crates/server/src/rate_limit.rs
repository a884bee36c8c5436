// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-window request quota per client address.
//!
//! A client's window starts with its first request and is reset lazily by
//! the first request after it expires. Expired entries are also dropped by a
//! periodic purge so idle clients do not accumulate.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tokio::time::interval;
use tracing::debug;

use crate::config::RateLimitConfig;

/// Body returned with HTTP 429.
pub const RATE_LIMITED_MESSAGE: &str = "Rate limited. Try again in a minute.";

/// Shortest period accepted by the purge task.
pub const MIN_PURGE_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

/// Per-client request counters.
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    clients: Mutex<HashMap<IpAddr, Window>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        RateLimiter {
            max_requests,
            window,
            clients: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.requests, config.window())
    }

    /// Records a request from `client` at `now`.
    ///
    /// Returns false when the client is over quota for its current window.
    pub async fn check(&self, client: IpAddr, now: Instant) -> bool {
        let mut clients = self.clients.lock().await;
        let entry = clients.entry(client).or_insert(Window {
            started: now,
            count: 0,
        });
        if now.saturating_duration_since(entry.started) > self.window {
            *entry = Window {
                started: now,
                count: 0,
            };
        }
        entry.count = entry.count.saturating_add(1);
        entry.count <= self.max_requests
    }

    /// Drops clients whose window has expired at `now`.
    ///
    /// Returns the number of entries removed.
    pub async fn purge(&self, now: Instant) -> usize {
        let mut clients = self.clients.lock().await;
        let before = clients.len();
        clients.retain(|_, w| now.saturating_duration_since(w.started) <= self.window);
        before - clients.len()
    }

    #[cfg(test)]
    pub async fn tracked(&self) -> usize {
        self.clients.lock().await.len()
    }

    /// Spawns the periodic purge task, ticking at least every [`MIN_PURGE_INTERVAL`].
    pub fn start_purge_task(self: Arc<Self>, every: Duration) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval(every.max(MIN_PURGE_INTERVAL));
            loop {
                ticker.tick().await;
                let removed = self.purge(Instant::now()).await;
                if removed > 0 {
                    debug!("purged {} expired rate limit entries", removed);
                }
            }
        })
    }
}

#[cfg(test)]
#[path = "rate_limit_tests.rs"]
mod tests;
