// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer for jq filter expressions.
//!
//! A single left-to-right pass that never fails: every character of the input
//! ends up in exactly one token, whitespace included, so concatenating the
//! token texts reproduces the input. Anything the lexer cannot classify
//! becomes an [`Category::Unknown`] token.
//!
//! Dispatch order at each position:
//!
//! 1. whitespace run
//! 2. string literal
//! 3. number (a digit not preceded by a word character)
//! 4. `$variable`
//! 5. `@format`
//! 6. multi-character operators (`|=`, `//`, `==`, ...)
//! 7. dot forms (`.`, `..`, `.[]`, `.[1:3]`, `.foo`, `.foo[]`, `.foo?`)
//! 8. structural characters `| , ; ( ) [ ] { } : ?`
//! 9. arithmetic and comparison characters `+ - * / % < > =`
//! 10. words (keywords, builtins, shorthand keys, user identifiers)
//! 11. any other single character

use crate::annotations;
use crate::cursor::{string_literal_len, StringCursor};
use crate::token::{Category, DotForm, Token};

/// Operators spanning more than one character, longest first so that a
/// prefix never shadows a longer match.
const MULTI_CHAR_OPERATORS: &[&str] = &[
    "?//", "//=", "|=", "+=", "-=", "*=", "/=", "%=", "//", "==", "!=", "<=", ">=",
];

const STRUCTURAL: &str = "|,;()[]{}:?";
const ARITHMETIC: &str = "+-*/%<>=";

/// Split a filter expression into annotated tokens.
///
/// Total over arbitrary input: the result always covers the whole string.
///
/// # Examples
///
/// ```ignore
/// let tokens = tokenize(".users[] | select(.age > 30)");
/// assert_eq!(tokens[0].text, ".users[]");
/// ```
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).run()
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')
}

/// Build a token from the annotation table, falling back to `category` with
/// the text itself as description.
fn annotated(text: String, category: Category) -> Token {
    match annotations::lookup(&text) {
        Some(a) => Token::new(text, a.category, a.description).with_documentation(a.documentation),
        None => {
            let description = text.clone();
            Token::new(text, category, description)
        }
    }
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    tokens: Vec<Token>,
    /// Open `{` minus closed `}` over the tokens emitted so far.
    brace_depth: i64,
}

impl Lexer {
    fn new(input: &str) -> Self {
        Lexer {
            chars: input.chars().collect(),
            pos: 0,
            tokens: Vec::new(),
            brace_depth: 0,
        }
    }

    fn run(mut self) -> Vec<Token> {
        while let Some(c) = self.peek(0) {
            let token = self.next_token(c);
            self.push(token);
        }
        self.tokens
    }

    fn push(&mut self, token: Token) {
        if token.category == Category::Operator {
            match token.text.as_str() {
                "{" => self.brace_depth += 1,
                "}" => self.brace_depth -= 1,
                _ => {}
            }
        }
        self.tokens.push(token);
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn prev_is_word(&self) -> bool {
        self.pos
            .checked_sub(1)
            .and_then(|p| self.chars.get(p))
            .is_some_and(|&c| is_word(c))
    }

    fn text_from(&self, start: usize) -> String {
        self.chars[start..self.pos].iter().collect()
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek(0).is_some_and(&pred) {
            self.pos += 1;
        }
    }

    /// Consume `c` if it is next; report whether it was.
    fn eat(&mut self, c: char) -> bool {
        if self.peek(0) == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Produce the token starting at the current position. Always advances.
    fn next_token(&mut self, c: char) -> Token {
        if c.is_whitespace() {
            return self.whitespace();
        }
        if c == '"' {
            return self.string();
        }
        if c.is_ascii_digit() && !self.prev_is_word() {
            return self.number();
        }
        if c == '$' {
            return self.variable();
        }
        if c == '@' {
            return self.format();
        }
        if let Some(token) = self.multi_char_operator() {
            return token;
        }
        if c == '.' {
            return self.dot();
        }
        if STRUCTURAL.contains(c) || ARITHMETIC.contains(c) {
            self.pos += 1;
            return annotated(c.to_string(), Category::Operator);
        }
        if is_ident_start(c) {
            return self.word();
        }

        self.pos += 1;
        Token::new(
            c.to_string(),
            Category::Unknown,
            format!("Unrecognized character '{c}'"),
        )
    }

    fn whitespace(&mut self) -> Token {
        let start = self.pos;
        self.take_while(char::is_whitespace);
        Token::new(self.text_from(start), Category::Space, "")
    }

    fn string(&mut self) -> Token {
        let start = self.pos;
        self.pos += string_literal_len(&self.chars[start..]);
        let text = self.text_from(start);
        let description = if ends_inside_string(&text) {
            "Unterminated string literal"
        } else {
            "String literal"
        };
        Token::new(text, Category::String, description)
            .with_documentation("Supports escapes like \\n and \\t, and interpolation with \\(expr).")
    }

    fn number(&mut self) -> Token {
        let start = self.pos;
        self.take_while(is_number_char);
        let text = self.text_from(start);
        let description = format!("Number literal: {text}");
        Token::new(text, Category::Number, description)
    }

    fn variable(&mut self) -> Token {
        let start = self.pos;
        self.pos += 1;
        self.take_while(is_word);
        let text = self.text_from(start);
        if annotations::lookup(&text).is_some() {
            return annotated(text, Category::Variable);
        }
        let description = format!("Variable {text}: bound with \"as {text}\" or a function parameter");
        Token::new(text, Category::Variable, description)
            .with_documentation("Variables are immutable; rebinding creates a new scope.")
    }

    fn format(&mut self) -> Token {
        let start = self.pos;
        self.pos += 1;
        self.take_while(is_word);
        let text = self.text_from(start);
        match annotations::lookup(&text) {
            Some(a) => Token::new(text, Category::Format, a.description)
                .with_documentation(a.documentation),
            None => {
                let description = format!("Format: {text}");
                Token::new(text, Category::Format, description)
            }
        }
    }

    fn multi_char_operator(&mut self) -> Option<Token> {
        let op = MULTI_CHAR_OPERATORS.iter().find(|op| {
            op.chars()
                .enumerate()
                .all(|(k, c)| self.peek(k) == Some(c))
        })?;
        self.pos += op.chars().count();
        Some(annotated((*op).to_string(), Category::Operator))
    }

    fn dot(&mut self) -> Token {
        let start = self.pos;
        self.pos += 1;

        match (self.peek(0), self.peek(1)) {
            (Some('['), Some(']')) => {
                self.pos += 2;
                let suppressed = self.eat('?');
                let text = self.text_from(start);
                annotated(text, Category::Access).with_form(DotForm::Iterate { suppressed })
            }
            (Some('['), _) => self.bracket_access(start),
            (Some(c), _) if is_ident_start(c) => self.field_access(start),
            (Some('.'), _) => {
                self.pos += 1;
                annotated(self.text_from(start), Category::Access)
                    .with_form(DotForm::RecursiveDescent)
            }
            _ => annotated(self.text_from(start), Category::Access).with_form(DotForm::Identity),
        }
    }

    /// `.[` ... `]` with an optional trailing `?`.
    ///
    /// Consumes up to the bracket matching the opening one, skipping brackets
    /// inside string literals. A `:` outside string literals at the outermost
    /// level makes it a slice.
    fn bracket_access(&mut self, start: usize) -> Token {
        let mut depth = 0usize;
        let mut is_slice = false;
        let mut cursor = StringCursor::new();

        while let Some(c) = self.peek(0) {
            self.pos += 1;
            if cursor.advance(c).is_literal() {
                continue;
            }
            match c {
                '[' => depth += 1,
                ']' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        break;
                    }
                }
                ':' if depth == 1 => is_slice = true,
                _ => {}
            }
        }

        let suppressed = self.eat('?');
        let text = self.text_from(start);
        if is_slice {
            let description = format!("Array slice: {text}");
            Token::new(text, Category::Access, description)
                .with_documentation("Slice [start:end], end exclusive. Works on strings too.")
                .with_form(DotForm::Slice { suppressed })
        } else {
            let description = format!("Index access: {text}");
            Token::new(text, Category::Access, description)
                .with_documentation(
                    "Zero-based index, negative values count from the end. A string key looks up an object field.",
                )
                .with_form(DotForm::Index { suppressed })
        }
    }

    /// `.name`, `.name?`, `.name[]` and `.name[]?`.
    fn field_access(&mut self, start: usize) -> Token {
        self.take_while(is_word);
        let name: String = self.chars[start + 1..self.pos].iter().collect();

        if self.peek(0) == Some('[') && self.peek(1) == Some(']') {
            self.pos += 2;
            let suppressed = self.eat('?');
            let text = self.text_from(start);
            return Token::new(
                text,
                Category::Access,
                format!("Access field \"{name}\" then iterate all its elements"),
            )
            .with_documentation(format!(
                "Same as .{name} | .[]: extracts the container and outputs each element."
            ))
            .with_form(DotForm::FieldIterate { suppressed });
        }

        let suppressed = self.eat('?');
        let text = self.text_from(start);
        let documentation = if suppressed {
            "The ? suppresses the error when the input is not an object.".to_string()
        } else {
            format!("Fails when the input is not an object; use .{name}? to suppress.")
        };
        Token::new(
            text,
            Category::Field,
            format!("Access field \"{name}\" from the input object"),
        )
        .with_documentation(documentation)
        .with_form(DotForm::Field { suppressed })
    }

    fn word(&mut self) -> Token {
        let start = self.pos;
        self.take_while(is_word);
        let text = self.text_from(start);

        if annotations::lookup(&text).is_some() {
            return annotated(text, Category::Unknown);
        }

        if self.brace_depth > 0 {
            let description =
                format!("Object shorthand: outputs the \"{text}\" field as \"{text}\": .{text}");
            let documentation = format!("{{{text}}} is equivalent to {{\"{text}\": .{text}}}");
            return Token::new(text, Category::Field, description).with_documentation(documentation);
        }

        let description = format!("\"{text}\": user-defined function or unknown builtin");
        Token::new(text, Category::Unknown, description)
    }
}

/// True when scanning `literal` leaves the cursor inside a string.
fn ends_inside_string(literal: &str) -> bool {
    let mut cursor = StringCursor::new();
    for c in literal.chars() {
        cursor.advance(c);
    }
    cursor.in_string()
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
