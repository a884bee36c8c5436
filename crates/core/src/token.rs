// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Token types produced by the lexer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification tag attached to every token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Path access: identity, iteration, indexing, slicing, recursion.
    Access,
    Operator,
    Keyword,
    Builtin,
    /// `null`, `true`, `false`.
    Literal,
    /// `@base64`, `@csv`, ...
    Format,
    String,
    Number,
    Variable,
    /// Field access or object shorthand key.
    Field,
    /// Syntax the lexer does not recognize.
    Unknown,
    /// A run of whitespace.
    Space,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Access,
        Category::Operator,
        Category::Keyword,
        Category::Builtin,
        Category::Literal,
        Category::Format,
        Category::String,
        Category::Number,
        Category::Variable,
        Category::Field,
        Category::Unknown,
        Category::Space,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Access => "access",
            Category::Operator => "operator",
            Category::Keyword => "keyword",
            Category::Builtin => "builtin",
            Category::Literal => "literal",
            Category::Format => "format",
            Category::String => "string",
            Category::Number => "number",
            Category::Variable => "variable",
            Category::Field => "field",
            Category::Unknown => "unknown",
            Category::Space => "space",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The shape of a dot-prefixed access token.
///
/// `suppressed` records a trailing `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum DotForm {
    /// `.`
    Identity,
    /// `..`
    RecursiveDescent,
    /// `.[]` / `.[]?`
    Iterate { suppressed: bool },
    /// `.[0]` / `.["key"]`
    Index { suppressed: bool },
    /// `.[1:3]`
    Slice { suppressed: bool },
    /// `.foo` / `.foo?`
    Field { suppressed: bool },
    /// `.foo[]` / `.foo[]?`
    FieldIterate { suppressed: bool },
}

/// A classified substring of a filter expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub category: Category,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<DotForm>,
}

impl Token {
    pub fn new(text: impl Into<String>, category: Category, description: impl Into<String>) -> Self {
        Token {
            text: text.into(),
            category,
            description: description.into(),
            documentation: None,
            form: None,
        }
    }

    /// Attach extended documentation; empty text leaves it unset.
    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        let doc = doc.into();
        if !doc.is_empty() {
            self.documentation = Some(doc);
        }
        self
    }

    pub fn with_form(mut self, form: DotForm) -> Self {
        self.form = Some(form);
        self
    }

    pub fn is_space(&self) -> bool {
        self.category == Category::Space
    }
}

/// Rebuild the scanned text by concatenating token texts in order.
pub fn reconstruct(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
