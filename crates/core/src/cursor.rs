// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! String-literal awareness shared by the lexer and the pipeline decomposer.
//!
//! Both scanners must agree on what counts as "inside a string", so the
//! quote/escape rules live here and nowhere else:
//!
//! - `"` opens a string literal outside of one, and closes it inside of one.
//! - Inside a string, `\` makes the following character verbatim.
//! - Outside a string, `\` has no special meaning.

/// Classification of a single character fed through a [`StringCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The character is ordinary filter code.
    Code,
    /// The character is the quote opening a string literal.
    Open,
    /// The character is part of a string literal's body.
    Inside,
    /// The character is the quote closing a string literal.
    Close,
}

impl Step {
    /// True for every character belonging to a string literal, quotes included.
    pub fn is_literal(self) -> bool {
        !matches!(self, Step::Code)
    }
}

/// Incremental quote/escape state for a left-to-right scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringCursor {
    in_string: bool,
    escaped: bool,
}

impl StringCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the scan is between an opening and a closing quote.
    pub fn in_string(&self) -> bool {
        self.in_string
    }

    /// Feed the next character and classify it.
    pub fn advance(&mut self, ch: char) -> Step {
        if !self.in_string {
            if ch == '"' {
                self.in_string = true;
                return Step::Open;
            }
            return Step::Code;
        }

        if self.escaped {
            self.escaped = false;
            return Step::Inside;
        }

        match ch {
            '\\' => {
                self.escaped = true;
                Step::Inside
            }
            '"' => {
                self.in_string = false;
                Step::Close
            }
            _ => Step::Inside,
        }
    }
}

/// Length in characters of the string literal starting at `chars[0]`.
///
/// `chars[0]` must be the opening quote. The count includes the closing quote
/// when one is found; an unterminated literal runs to the end of `chars`.
pub fn string_literal_len(chars: &[char]) -> usize {
    let mut cursor = StringCursor::new();
    for (i, &ch) in chars.iter().enumerate() {
        if cursor.advance(ch) == Step::Close {
            return i + 1;
        }
        if !cursor.in_string() {
            // First character was not a quote.
            return i + 1;
        }
    }
    chars.len()
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod tests;
