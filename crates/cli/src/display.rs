// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text rendering of tokens, pipelines and step results.
//!
//! Every renderer takes a `color` switch so output can be tested without
//! touching the terminal.

use lq_core::{Pipeline, StepResult, Token};

use crate::colors;

/// Maximum line width for wrapped documentation (excluding indent).
const WRAP_WIDTH: usize = 72;

/// Width of the category column.
const CATEGORY_WIDTH: usize = 9;

/// Wrap text at word boundaries if it's a single line.
///
/// Content that already contains newlines, or fits in `width` characters,
/// is returned as-is.
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.chars().count() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// Token text as shown in a single table cell.
fn cell_text(text: &str) -> String {
    text.replace('\n', "\\n").replace('\t', "\\t")
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

fn paint_if(color: bool, code: u8, text: &str) -> String {
    if color {
        colors::paint(code, text)
    } else {
        text.to_string()
    }
}

/// One row per non-space token: text, category and description.
///
/// With `docs`, the extended documentation follows each row, wrapped and
/// indented under the description column.
pub fn format_tokens(tokens: &[Token], docs: bool, color: bool) -> String {
    let visible: Vec<&Token> = tokens.iter().filter(|t| !t.is_space()).collect();
    let text_width = visible
        .iter()
        .map(|t| cell_text(&t.text).chars().count())
        .max()
        .unwrap_or(0);
    let indent = " ".repeat(text_width + 2 + CATEGORY_WIDTH + 2);

    let mut out = String::new();
    for token in visible {
        let text = pad(&cell_text(&token.text), text_width);
        let category = pad(token.category.as_str(), CATEGORY_WIDTH);
        out.push_str(&paint_if(color, colors::codes::LITERAL, &text));
        out.push_str("  ");
        out.push_str(&paint_if(
            color,
            colors::category_code(token.category),
            &category,
        ));
        out.push_str("  ");
        out.push_str(&token.description);
        out.push('\n');

        if let Some(documentation) = token.documentation.as_deref().filter(|_| docs) {
            for line in wrap_text(documentation, WRAP_WIDTH).lines() {
                out.push_str(&indent);
                out.push_str(&paint_if(color, colors::codes::CONTEXT, line));
                out.push('\n');
            }
        }
    }
    out
}

/// Stages followed by the progressive filters built from them.
pub fn format_pipeline(pipeline: &Pipeline, color: bool) -> String {
    if pipeline.is_empty() {
        return "No stages.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&paint_if(color, colors::codes::HEADER, "Stages:"));
    out.push('\n');
    for fragment in &pipeline.fragments {
        out.push_str(&format!("  {}  {}\n", fragment.ordinal, fragment.text));
    }
    out.push('\n');
    out.push_str(&paint_if(color, colors::codes::HEADER, "Progressive filters:"));
    out.push('\n');
    for progressive in &pipeline.progressive {
        out.push_str(&format!("  {}  {}\n", progressive.ordinal, progressive.text));
    }
    out
}

/// Each stage with its cumulative filter and the output (or error) it produced.
pub fn format_steps(steps: &[StepResult], color: bool) -> String {
    if steps.is_empty() {
        return "No stages.\n".to_string();
    }

    let mut out = String::new();
    for step in steps {
        let title = format!("Step {}", step.step);
        out.push_str(&paint_if(color, colors::codes::HEADER, &title));
        out.push_str("  ");
        out.push_str(&paint_if(color, colors::codes::LITERAL, &step.fragment));
        out.push('\n');
        out.push_str("  ");
        out.push_str(&paint_if(color, colors::codes::CONTEXT, "filter"));
        out.push_str("  ");
        out.push_str(&step.full_filter);
        out.push('\n');

        match step.output.as_deref() {
            Some("") => {
                out.push_str("    ");
                out.push_str(&paint_if(color, colors::codes::CONTEXT, "(no output)"));
                out.push('\n');
            }
            Some(output) => {
                for line in output.lines() {
                    out.push_str("    ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
            None => {}
        }
        if let Some(error) = step.error.as_deref() {
            out.push_str("  ");
            out.push_str(&paint_if(color, colors::codes::ERROR, "error"));
            out.push_str("   ");
            out.push_str(error);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
