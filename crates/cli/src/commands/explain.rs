// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lq_core::protocol::ExplainResponse;
use lq_core::tokenize;

use crate::cli::OutputFormat;
use crate::colors;
use crate::display::format_tokens;
use crate::error::Result;

pub fn run(filter: &str, docs: bool, output: OutputFormat) -> Result<()> {
    print!("{}", render(filter, docs, output, colors::should_colorize())?);
    Ok(())
}

/// Annotated tokens of `filter` as text rows or a JSON document.
pub(crate) fn render(filter: &str, docs: bool, output: OutputFormat, color: bool) -> Result<String> {
    let tokens = tokenize(filter);
    tracing::debug!("{} tokens", tokens.len());
    match output {
        OutputFormat::Text => Ok(format_tokens(&tokens, docs, color)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&ExplainResponse { tokens })?;
            Ok(format!("{json}\n"))
        }
    }
}

#[cfg(test)]
#[path = "explain_tests.rs"]
mod tests;
