// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lq_core::decompose;

use crate::cli::OutputFormat;
use crate::colors;
use crate::display::format_pipeline;
use crate::error::Result;

pub fn run(filter: &str, output: OutputFormat) -> Result<()> {
    print!("{}", render(filter, output, colors::should_colorize())?);
    Ok(())
}

pub(crate) fn render(filter: &str, output: OutputFormat, color: bool) -> Result<String> {
    let pipeline = decompose(filter);
    match output {
        OutputFormat::Text => Ok(format_pipeline(&pipeline, color)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&pipeline)?)),
    }
}

#[cfg(test)]
#[path = "split_tests.rs"]
mod tests;
