// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{EngineArgs, InputArgs, JqFlags};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "lq")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Learn jq by taking filters apart")]
#[command(
    long_about = "Learn jq by taking filters apart.\n\n\
    Annotate every token of a filter, split it into pipeline stages and watch\n\
    the data change stage by stage."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Annotate every token of a filter
    #[command(after_help = colors::examples("\
Examples:
  lq explain '.users[0].name'        Field, index and field access
  lq explain 'map(select(.ok))'      Builtins and nesting
  lq explain '.a |= . + 1' --docs    Include longer documentation
  lq explain '@csv' -o json          Tokens as JSON"))]
    Explain {
        /// jq filter
        filter: String,

        /// Show extended documentation under each token
        #[arg(long)]
        docs: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Show the top-level pipeline stages of a filter
    #[command(after_help = colors::examples("\
Examples:
  lq split '.a | .b | length'        Three stages
  lq split '.a |= . + 1 | keys'      Update stays one stage
  lq split '[.[] | .x] | add'        Nested pipes stay inside"))]
    Split {
        /// jq filter
        filter: String,

        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Evaluate a filter with jq
    #[command(after_help = colors::examples("\
Examples:
  lq run '.a' -i '{\"a\":1}'           Inline input
  lq run '.[]' -f data.json -r       Input file, raw output
  lq run '[range(3)]' -n             No input"))]
    Run {
        /// jq filter
        filter: String,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        flags: JqFlags,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Evaluate every pipeline stage and show its output
    #[command(after_help = colors::examples("\
Examples:
  lq steps '.[] | .id' -i '[{\"id\":1}]'
  lq steps 'keys | length' -f data.json -o json"))]
    Steps {
        /// jq filter
        filter: String,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        engine: EngineArgs,

        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
