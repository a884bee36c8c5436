// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use lqrs::env::vars;
use lqrs::Cli;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr, filtered by `LQ_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_env(vars::LQ_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(e) = lqrs::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
