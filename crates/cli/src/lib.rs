// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lqrs - the library behind the `lq` command.
//!
//! `lq` is a terminal companion for learning jq. It annotates filters
//! token by token, splits them into pipeline stages and runs each stage
//! through a sandboxed jq so the data can be followed as it changes.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - argument parsing
//! - [`run`] - command dispatch
//! - [`Error`] - errors shown to the user as `error: <message>`

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod error;
pub mod help;

pub use cli::{Cli, Command, EngineArgs, InputArgs, JqFlags, OutputFormat};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Run a parsed command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Explain {
            filter,
            docs,
            output,
        } => commands::explain::run(&filter, docs, output),
        Command::Split { filter, output } => commands::split::run(&filter, output),
        Command::Run {
            filter,
            input,
            flags,
            engine,
        } => commands::run::run(&filter, &input, flags, &engine),
        Command::Steps {
            filter,
            input,
            engine,
            output,
        } => commands::steps::run(&filter, &input, &engine, output),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "lq", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
