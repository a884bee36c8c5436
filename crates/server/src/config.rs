// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Server configuration.
//!
//! Settings come from an optional TOML file; every field has a default, so
//! an empty file (or no file) is a valid configuration. Command-line flags
//! and the `PORT` environment variable are applied on top by `main`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lq_sandbox::{RequestLimits, SandboxLimits};

use crate::error::{Error, Result};

/// Settings for `lq-server`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to listen on.
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
    /// jq executable. Bare names are looked up on `PATH` at startup.
    #[serde(default = "default_jq_path")]
    pub jq_path: PathBuf,
    /// Wall-clock limit for each jq process, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Output cap for `/api/jq`.
    #[serde(default = "default_max_output_bytes")]
    pub max_output_bytes: usize,
    /// Output cap for each stage of `/api/jq/steps`.
    #[serde(default = "default_max_step_output_bytes")]
    pub max_step_output_bytes: usize,
    /// Maximum filter length, in characters.
    #[serde(default = "default_max_filter_len")]
    pub max_filter_len: usize,
    /// Largest accepted request body.
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
}

/// Fixed-window, per-client request quota.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Requests allowed per client per window.
    #[serde(default = "default_requests")]
    pub requests: u32,
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
    /// How often expired client entries are dropped.
    #[serde(default = "default_purge_interval_secs")]
    pub purge_interval_secs: u64,
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3210))
}

fn default_jq_path() -> PathBuf {
    PathBuf::from(lq_sandbox::process::DEFAULT_PROGRAM)
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_max_output_bytes() -> usize {
    lq_sandbox::limits::SINGLE_OUTPUT_BYTES
}

fn default_max_step_output_bytes() -> usize {
    lq_sandbox::limits::STEP_OUTPUT_BYTES
}

fn default_max_filter_len() -> usize {
    lq_core::MAX_FILTER_LEN
}

fn default_body_limit_bytes() -> usize {
    100 * 1024
}

fn default_requests() -> u32 {
    60
}

fn default_window_secs() -> u64 {
    60
}

fn default_purge_interval_secs() -> u64 {
    300
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: default_bind(),
            jq_path: default_jq_path(),
            timeout_ms: default_timeout_ms(),
            max_output_bytes: default_max_output_bytes(),
            max_step_output_bytes: default_max_step_output_bytes(),
            max_filter_len: default_max_filter_len(),
            body_limit_bytes: default_body_limit_bytes(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        RateLimitConfig {
            requests: default_requests(),
            window_secs: default_window_secs(),
            purge_interval_secs: default_purge_interval_secs(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| match e {
            Error::Config { message, .. } => Error::Config {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: ServerConfig = toml::from_str(content).map_err(|e| Error::Config {
            path: PathBuf::new(),
            message: e.to_string(),
        })?;
        config.rate_limit.validate()?;
        Ok(config)
    }

    /// Replaces the port of the bind address.
    pub fn with_port(mut self, port: u16) -> Self {
        self.bind.set_port(port);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn request_limits(&self) -> RequestLimits {
        RequestLimits {
            max_filter_len: self.max_filter_len,
            single: SandboxLimits::new(self.timeout(), self.max_output_bytes),
            per_step: SandboxLimits::new(self.timeout(), self.max_step_output_bytes),
        }
    }
}

impl RateLimitConfig {
    /// Window and purge interval must be at least one second.
    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("window_secs", self.window_secs),
            ("purge_interval_secs", self.purge_interval_secs),
        ] {
            if value == 0 {
                return Err(Error::Config {
                    path: PathBuf::new(),
                    message: format!("rate_limit.{name} must be greater than zero"),
                });
            }
        }
        Ok(())
    }

    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }

    pub fn purge_interval(&self) -> Duration {
        Duration::from_secs(self.purge_interval_secs)
    }
}

/// Parses a `PORT` value, ignoring anything that is not a port number.
pub fn port_from_env(value: Option<&str>) -> Option<u16> {
    value.and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
