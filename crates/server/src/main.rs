// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lq-server: HTTP backend for the learnjq playground.
//!
//! Evaluates jq filters in a sandboxed child process, runs pipelines stage
//! by stage for the visualizer and annotates filter tokens.

mod config;
mod error;
mod rate_limit;
mod server;
mod state;

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lq_sandbox::{resolve_program, JqProcess};

use config::{port_from_env, ServerConfig};
use error::Error;
use rate_limit::RateLimiter;
use state::ServerState;

/// lq-server: learnjq playground backend
#[derive(Parser, Debug)]
#[command(name = "lq-server")]
#[command(about = "HTTP backend that evaluates jq filters in a sandbox")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind the server to (overrides config and PORT)
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// jq executable to run
    #[arg(long)]
    jq: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) -> Result<(), Error> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

fn load_config(args: &Args) -> Result<ServerConfig, Error> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(port) = port_from_env(std::env::var("PORT").ok().as_deref()) {
        config = config.with_port(port);
    }
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    if let Some(jq) = &args.jq {
        config.jq_path = jq.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let config = load_config(&args)?;
    let program = resolve_program(&config.jq_path, std::env::var_os("PATH").as_deref());

    info!("Starting lq-server");
    info!("  Bind address: {}", config.bind);
    info!("  jq: {}", program.display());
    info!("  Timeout: {}ms", config.timeout_ms);
    info!(
        "  Rate limit: {} requests per {}s",
        config.rate_limit.requests, config.rate_limit.window_secs
    );

    let limiter = Arc::new(RateLimiter::from_config(&config.rate_limit));
    let _purge = Arc::clone(&limiter).start_purge_task(config.rate_limit.purge_interval());

    let state = ServerState::new(JqProcess::new(program), config.request_limits(), limiter);
    server::run(config.bind, state, config.body_limit_bytes).await?;

    Ok(())
}
