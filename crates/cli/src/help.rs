// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let color = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = color(colors::codes::HEADER);
    let context = color(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(color(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
        .error(color(colors::codes::ERROR))
}

/// Main help template with the command list ahead of the options.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_learn}
  {explain}     Annotate every token of a filter
  {split}       Show the pipeline stages of a filter

{header_run}
  {run}         Evaluate a filter with jq
  {steps}       Evaluate a pipeline stage by stage

{header_setup}
  {completion}  Generate shell completions
",
        header_learn = colors::header("Learning:"),
        header_run = colors::header("Evaluation:"),
        header_setup = colors::header("Setup:"),
        explain = colors::literal("explain"),
        split = colors::literal("split"),
        run = colors::literal("run"),
        steps = colors::literal("steps"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  lq explain '.users[] | .name'      What each piece means
  lq split '.a | map(.b) | length'   Where the pipeline breaks
  lq steps '.[] | .id' -i '[{\"id\":1}]'  Watch data flow through it",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
