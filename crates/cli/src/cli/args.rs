// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` by the commands that
//! evaluate filters.

use std::path::PathBuf;

use clap::Args;

use lq_core::EvalOptions;

/// Where the input document comes from. Defaults to `{}`.
#[derive(Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// Input document as text
    #[arg(long, short, conflicts_with = "file")]
    pub input: Option<String>,

    /// Read the input document from a file
    #[arg(long, short, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Which jq to run and how long to let it run.
#[derive(Args, Clone, Debug)]
pub struct EngineArgs {
    /// jq executable (bare names are looked up on PATH)
    #[arg(long, default_value = "jq", value_name = "PATH")]
    pub jq: PathBuf,

    /// Per-invocation time limit in milliseconds
    #[arg(long, default_value_t = 5000, value_name = "MS")]
    pub timeout_ms: u64,
}

impl Default for EngineArgs {
    fn default() -> Self {
        EngineArgs {
            jq: PathBuf::from("jq"),
            timeout_ms: 5000,
        }
    }
}

/// jq switches passed through to the evaluation.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct JqFlags {
    /// Output raw strings, not JSON texts
    #[arg(short = 'r', long)]
    pub raw_output: bool,

    /// Read all inputs into an array
    #[arg(short = 's', long)]
    pub slurp: bool,

    /// Read each line as a string
    #[arg(short = 'R', long)]
    pub raw_input: bool,

    /// Use null as the single input
    #[arg(short = 'n', long)]
    pub null_input: bool,
}

impl From<JqFlags> for EvalOptions {
    fn from(flags: JqFlags) -> Self {
        EvalOptions {
            raw_output: flags.raw_output,
            slurp: flags.slurp,
            raw_input: flags.raw_input,
            null_input: flags.null_input,
        }
    }
}
