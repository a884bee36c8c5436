// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Splitting a filter into top-level pipeline stages.
//!
//! A `|` separates stages only when it sits outside every `()`, `[]`, `{}`
//! and string literal, and is not the first half of the `|=` update operator.
//! Malformed nesting never fails: depth counters may go negative or stay
//! positive, and whatever text has accumulated is still returned.

use serde::{Deserialize, Serialize};

use crate::cursor::StringCursor;

/// Separator used to join stages back into a progressive filter.
pub const STAGE_SEPARATOR: &str = " | ";

/// The text of one top-level stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// 1-based position in the pipeline.
    pub ordinal: usize,
    /// Stage text, trimmed.
    pub text: String,
}

/// The stages `1..=ordinal` joined with [`STAGE_SEPARATOR`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressiveFilter {
    pub ordinal: usize,
    pub text: String,
}

/// Result of [`decompose`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    pub fragments: Vec<Fragment>,
    pub progressive: Vec<ProgressiveFilter>,
}

impl Pipeline {
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Fragment texts in order.
    pub fn stage_texts(&self) -> Vec<String> {
        self.fragments.iter().map(|f| f.text.clone()).collect()
    }
}

/// Nesting state tracked while scanning for stage boundaries.
#[derive(Debug, Default)]
struct Depths {
    paren: i64,
    bracket: i64,
    brace: i64,
}

impl Depths {
    fn update(&mut self, c: char) {
        match c {
            '(' => self.paren += 1,
            ')' => self.paren -= 1,
            '[' => self.bracket += 1,
            ']' => self.bracket -= 1,
            '{' => self.brace += 1,
            '}' => self.brace -= 1,
            _ => {}
        }
    }

    fn at_top_level(&self) -> bool {
        self.paren == 0 && self.bracket == 0 && self.brace == 0
    }
}

/// Split `filter` on top-level pipes, returning trimmed stage texts.
///
/// Empty stages (for example around a leading or trailing `|`) are dropped.
pub fn split_stages(filter: &str) -> Vec<String> {
    let mut stages = Vec::new();
    let mut current = String::new();
    let mut depths = Depths::default();
    let mut cursor = StringCursor::new();
    let mut chars = filter.chars().peekable();

    while let Some(c) = chars.next() {
        if cursor.advance(c).is_literal() {
            current.push(c);
            continue;
        }

        if c == '|' {
            if chars.peek() == Some(&'=') {
                // `|=` is an operator, never a boundary.
                current.push(c);
                if let Some(eq) = chars.next() {
                    current.push(eq);
                }
                continue;
            }
            if depths.at_top_level() {
                flush(&mut stages, &mut current);
                continue;
            }
        }

        depths.update(c);
        current.push(c);
    }

    flush(&mut stages, &mut current);
    stages
}

fn flush(stages: &mut Vec<String>, current: &mut String) {
    let text = current.trim();
    if !text.is_empty() {
        stages.push(text.to_string());
    }
    current.clear();
}

/// Decompose a filter into fragments and cumulative progressive filters.
///
/// For fragments `[f1, f2, f3]` the progressive filters are
/// `[f1, f1 | f2, f1 | f2 | f3]`.
pub fn decompose(filter: &str) -> Pipeline {
    let stages = split_stages(filter);

    let mut progressive = Vec::with_capacity(stages.len());
    let mut joined = String::new();
    for (i, stage) in stages.iter().enumerate() {
        if i > 0 {
            joined.push_str(STAGE_SEPARATOR);
        }
        joined.push_str(stage);
        progressive.push(ProgressiveFilter {
            ordinal: i + 1,
            text: joined.clone(),
        });
    }

    let fragments = stages
        .into_iter()
        .enumerate()
        .map(|(i, text)| Fragment {
            ordinal: i + 1,
            text,
        })
        .collect();

    Pipeline {
        fragments,
        progressive,
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
