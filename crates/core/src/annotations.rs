// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Static reference data describing jq tokens.
//!
//! The table is keyed by canonical token text (`"map"`, `"|="`, `"@csv"`,
//! `"$ENV"`, ...). It is read-only and consulted by the lexer; dynamic forms
//! such as `.foo` or `.[1:3]` synthesize their descriptions instead.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::token::Category;

/// Descriptive entry for a canonical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation {
    pub category: Category,
    pub description: &'static str,
    pub documentation: &'static str,
}

const fn entry(
    key: &'static str,
    category: Category,
    description: &'static str,
    documentation: &'static str,
) -> (&'static str, Annotation) {
    (
        key,
        Annotation {
            category,
            description,
            documentation,
        },
    )
}

use Category::{Access, Builtin, Format, Keyword, Literal, Operator, Variable};

static ENTRIES: &[(&str, Annotation)] = &[
    // Identity & access
    entry(".", Access, "Identity: returns the input unchanged", "The simplest filter. Whatever comes in goes out."),
    entry("..", Access, "Recursive descent: every value at every depth", "Handy for searching deeply nested documents, e.g. `.. | numbers`."),
    entry(".[]", Access, "Iterate: each element of an array or each value of an object", "Given [1,2,3] this outputs 1, 2 and 3 as separate results."),
    entry(".[]?", Access, "Iterate (safe): like .[] but silent on non-iterable input", "Produces nothing instead of an error for null, strings or numbers."),
    // Structure
    entry("|", Operator, "Pipe: stage separator, feeds the left output into the right filter", "Works like a Unix pipe. `.foo | .bar` is the same as `.foo.bar`."),
    entry(",", Operator, "Comma: multiple outputs, runs both expressions", "`.a, .b` outputs .a and then .b."),
    entry(";", Operator, "Argument separator for function calls", "jq separates function arguments with `;`, not commas."),
    entry("(", Operator, "Open group or function arguments", ""),
    entry(")", Operator, "Close group or function arguments", ""),
    entry("[", Operator, "Start array construction", "`[expr]` collects every output of expr into one array."),
    entry("]", Operator, "End array construction", "`[expr]` collects every output of expr into one array."),
    entry("{", Operator, "Start object construction", "`{key: expr}` builds an object; `{name}` is short for `{name: .name}`."),
    entry("}", Operator, "End object construction", "`{key: expr}` builds an object; `{name}` is short for `{name: .name}`."),
    entry(":", Operator, "Key/value separator in object construction", ""),
    entry("?", Operator, "Error suppression: drop errors from the preceding expression", "`.foo?` is `.foo` that never fails."),
    // Comparison
    entry("==", Operator, "Equal: true when both sides are identical", "Compares any types, objects and arrays included."),
    entry("!=", Operator, "Not equal: true when the values differ", "The negation of ==."),
    entry("<", Operator, "Less than", "Ordering across types: null < false < true < numbers < strings < arrays < objects."),
    entry(">", Operator, "Greater than", "Uses the same cross-type ordering as <."),
    entry("<=", Operator, "Less than or equal", ""),
    entry(">=", Operator, "Greater than or equal", ""),
    // Arithmetic
    entry("+", Operator, "Add: sums numbers, concatenates strings and arrays, merges objects", "null + x is x."),
    entry("-", Operator, "Subtract: numbers, or remove elements from an array", "[1,2,3] - [2] is [1,3]."),
    entry("*", Operator, "Multiply: numbers, or deep-merge objects", "Multiplying two objects merges them recursively."),
    entry("/", Operator, "Divide: numbers, or split a string", "\"a,b,c\" / \",\" is [\"a\",\"b\",\"c\"]."),
    entry("%", Operator, "Modulo: remainder after division", ""),
    // Assignment & update
    entry("=", Operator, "Assign: set the selected path to a value computed from the input", "`.a = .b` copies .b into .a."),
    entry("|=", Operator, "Update: apply a filter to the selected value in place", "`.a |= . + 1` increments .a."),
    entry("+=", Operator, "Add-update: shorthand for |= . + value", "`.a += 1` is `.a |= . + 1`."),
    entry("-=", Operator, "Subtract-update", "`.a -= 1`"),
    entry("*=", Operator, "Multiply-update", ""),
    entry("/=", Operator, "Divide-update", ""),
    entry("%=", Operator, "Modulo-update", ""),
    entry("//=", Operator, "Alternative-update: set only when the value is null or false", "`.a //= 0` fills in a default."),
    entry("//", Operator, "Alternative: use the right side when the left is null or false", "`.foo // \"default\"` behaves like null coalescing."),
    entry("?//", Operator, "Destructuring alternative: try the next pattern on failure", "`. as [$a] ?// $a | ...`"),
    // Logic
    entry("and", Keyword, "Logical AND: true when both operands are truthy", "Only null and false are falsy."),
    entry("or", Keyword, "Logical OR: true when either operand is truthy", ""),
    entry("not", Keyword, "Logical NOT: inverts truthiness", "`null | not` is true, `0 | not` is false."),
    // Control flow
    entry("if", Keyword, "Start a conditional: if COND then A elif COND then B else C end", "elif is optional."),
    entry("then", Keyword, "Then branch of a conditional", ""),
    entry("elif", Keyword, "Else-if branch", "Any number of elif branches may be chained."),
    entry("else", Keyword, "Else branch", "Optional since jq 1.7; required before that."),
    entry("end", Keyword, "End of an if or try block", ""),
    entry("try", Keyword, "Suppress errors: a failing expression produces no output", "`try .foo` swallows errors from .foo."),
    entry("catch", Keyword, "Handle errors: `.` inside catch is the error message", "`try .foo catch \"fallback\"`"),
    entry("as", Keyword, "Bind to a variable: EXPR as $name | ...", "`.foo as $x | ...` makes $x available downstream."),
    entry("def", Keyword, "Define a function: def name(args): body;", "Parameters are separated by `;`."),
    entry("reduce", Keyword, "Fold: reduce EXPR as $var (init; update)", "Loops over EXPR and accumulates a single result."),
    entry("foreach", Keyword, "Running fold: foreach EXPR as $var (init; update; extract)", "Like reduce but emits each intermediate state."),
    entry("label", Keyword, "Label for break: label $name | ...", "Pairs with break for early exit."),
    entry("break", Keyword, "Break out of a labeled expression", "`break $name` leaves the `label $name` scope."),
    entry("import", Keyword, "Import a module", ""),
    entry("include", Keyword, "Include a module's definitions", ""),
    // Literals
    entry("null", Literal, "JSON null", ""),
    entry("true", Literal, "JSON true", ""),
    entry("false", Literal, "JSON false", ""),
    // Core builtins
    entry("length", Builtin, "Length: characters, elements, keys; null is 0", "\"hi\" gives 2, [1,2,3] gives 3, {} gives 0."),
    entry("utf8bytelength", Builtin, "Byte length of a string in UTF-8", ""),
    entry("keys", Builtin, "Sorted object keys, or array indices", "{\"b\":1,\"a\":2} gives [\"a\",\"b\"]."),
    entry("keys_unsorted", Builtin, "Object keys in insertion order", ""),
    entry("values", Builtin, "Select non-null values", ""),
    entry("type", Builtin, "Type name: null, boolean, number, string, array or object", ""),
    entry("empty", Builtin, "Produce no output at all", "`if .x then . else empty end`"),
    entry("error", Builtin, "Raise an error with the input as message", ""),
    // Conversion
    entry("tostring", Builtin, "Convert to a string", "42 gives \"42\"."),
    entry("tonumber", Builtin, "Parse a string as a number", "Fails on non-numeric strings."),
    entry("tojson", Builtin, "Serialize a value to a JSON string", ""),
    entry("fromjson", Builtin, "Parse a JSON string into a value", ""),
    entry("ascii_downcase", Builtin, "Lowercase ASCII letters", ""),
    entry("ascii_upcase", Builtin, "Uppercase ASCII letters", ""),
    entry("ascii", Builtin, "Codepoint to single-character string", ""),
    // Strings
    entry("ltrimstr", Builtin, "Remove a prefix if present", "\"hello\" | ltrimstr(\"hel\") gives \"lo\"."),
    entry("rtrimstr", Builtin, "Remove a suffix if present", "\"hello\" | rtrimstr(\"lo\") gives \"hel\"."),
    entry("trim", Builtin, "Strip surrounding whitespace", ""),
    entry("ltrim", Builtin, "Strip leading whitespace", ""),
    entry("rtrim", Builtin, "Strip trailing whitespace", ""),
    entry("startswith", Builtin, "Test whether a string starts with the argument", ""),
    entry("endswith", Builtin, "Test whether a string ends with the argument", ""),
    entry("split", Builtin, "Split a string on a separator", "\"a,b\" | split(\",\") gives [\"a\",\"b\"]."),
    entry("join", Builtin, "Join array elements with a separator", "[\"a\",\"b\"] | join(\"-\") gives \"a-b\"."),
    entry("test", Builtin, "Test a string against a regex", "Pass flags as a second argument: test(\"re\"; \"i\")."),
    entry("match", Builtin, "Regex match details: offset, length, string, captures", ""),
    entry("capture", Builtin, "Named regex captures as an object", ""),
    entry("scan", Builtin, "Every regex match in a string", ""),
    entry("splits", Builtin, "Split a string on a regex, one output per piece", ""),
    entry("sub", Builtin, "Replace the first regex match", ""),
    entry("gsub", Builtin, "Replace every regex match", ""),
    entry("explode", Builtin, "String to array of codepoints", ""),
    entry("implode", Builtin, "Array of codepoints to string", ""),
    // Arrays
    entry("map", Builtin, "Apply a filter to every element: [.[] | f]", "[1,2,3] | map(. * 2) gives [2,4,6]."),
    entry("map_values", Builtin, "Apply a filter to every value, objects included", ""),
    entry("select", Builtin, "Keep the input only when the condition is true", "`.[] | select(.age > 30)`"),
    entry("sort", Builtin, "Sort an array ascending", ""),
    entry("sort_by", Builtin, "Sort an array by an expression", "`sort_by(.age)`"),
    entry("reverse", Builtin, "Reverse an array or string", ""),
    entry("group_by", Builtin, "Group elements sharing the same expression value", ""),
    entry("unique", Builtin, "Sorted array without duplicates", ""),
    entry("unique_by", Builtin, "Keep one element per expression value", ""),
    entry("flatten", Builtin, "Flatten nested arrays", "flatten(1) flattens a single level."),
    entry("min", Builtin, "Smallest element", ""),
    entry("max", Builtin, "Largest element", ""),
    entry("min_by", Builtin, "Element with the smallest expression value", ""),
    entry("max_by", Builtin, "Element with the largest expression value", ""),
    entry("add", Builtin, "Add all elements together", "[1,2,3] | add gives 6."),
    entry("any", Builtin, "True if any element is truthy or matches", ""),
    entry("all", Builtin, "True if every element is truthy or matches", ""),
    entry("first", Builtin, "First output of an expression", ""),
    entry("last", Builtin, "Last output of an expression", ""),
    entry("nth", Builtin, "Nth output of an expression (0-based)", ""),
    entry("limit", Builtin, "Take the first N outputs", "`[limit(2; .[])]`"),
    entry("range", Builtin, "Generate a sequence of numbers", "range(2; 5) gives 2, 3, 4."),
    entry("indices", Builtin, "Every index where a value occurs", ""),
    entry("index", Builtin, "First index of a value", ""),
    entry("rindex", Builtin, "Last index of a value", ""),
    entry("transpose", Builtin, "Swap rows and columns of a 2D array", ""),
    entry("until", Builtin, "Loop until a condition holds", ""),
    entry("while", Builtin, "Loop while a condition holds, emitting each step", ""),
    entry("repeat", Builtin, "Apply a filter forever; pair with limit or first", ""),
    entry("recurse", Builtin, "Recursive descent with a custom step", ""),
    entry("walk", Builtin, "Apply a filter to every value, bottom-up", ""),
    entry("isnan", Builtin, "True for NaN", ""),
    entry("isinfinite", Builtin, "True for infinite numbers", ""),
    entry("nan", Builtin, "The NaN value", ""),
    entry("infinite", Builtin, "Positive infinity", ""),
    entry("isempty", Builtin, "True if an expression produces no output", ""),
    entry("builtins", Builtin, "Names of all builtin functions", ""),
    entry("floor", Builtin, "Round down", ""),
    entry("ceil", Builtin, "Round up", ""),
    entry("round", Builtin, "Round to the nearest integer", ""),
    entry("sqrt", Builtin, "Square root", ""),
    entry("abs", Builtin, "Absolute value", ""),
    entry("tostream", Builtin, "Value as a stream of [path, leaf] events", ""),
    entry("fromstream", Builtin, "Rebuild a value from stream events", ""),
    entry("input", Builtin, "Read the next input document", "Disabled in the sandbox."),
    entry("inputs", Builtin, "Read every remaining input document", "Disabled in the sandbox."),
    entry("debug", Builtin, "Print to stderr and pass the value through", "Disabled in the sandbox."),
    entry("stderr", Builtin, "Print to stderr without a newline", "Disabled in the sandbox."),
    entry("env", Builtin, "Environment variables as an object", "Disabled in the sandbox."),
    // Objects & paths
    entry("has", Builtin, "True if the object has the key", ""),
    entry("in", Builtin, "True if the input key exists in the argument", ""),
    entry("contains", Builtin, "True if the input contains the argument", ""),
    entry("inside", Builtin, "True if the input is contained in the argument", ""),
    entry("to_entries", Builtin, "Object to an array of {key, value}", ""),
    entry("from_entries", Builtin, "Array of {key, value} to an object", ""),
    entry("with_entries", Builtin, "to_entries | map(f) | from_entries", "`with_entries(select(.value > 1))`"),
    entry("del", Builtin, "Delete a path", "{\"a\":1,\"b\":2} | del(.a) gives {\"b\":2}."),
    entry("getpath", Builtin, "Value at a path array", ""),
    entry("setpath", Builtin, "Set the value at a path array", ""),
    entry("delpaths", Builtin, "Delete several paths", ""),
    entry("path", Builtin, "Path to a value as an array of keys and indices", ""),
    entry("paths", Builtin, "Every path in the value", ""),
    entry("leaf_paths", Builtin, "Paths to non-container values", ""),
    entry("objects", Builtin, "Select objects", ""),
    entry("arrays", Builtin, "Select arrays", ""),
    entry("strings", Builtin, "Select strings", ""),
    entry("numbers", Builtin, "Select numbers", ""),
    entry("booleans", Builtin, "Select booleans", ""),
    entry("nulls", Builtin, "Select nulls", ""),
    entry("scalars", Builtin, "Select non-containers", ""),
    entry("iterables", Builtin, "Select arrays and objects", ""),
    entry("INDEX", Builtin, "Build a lookup object keyed by an expression", ""),
    entry("IN", Builtin, "True if the input is among the outputs of an expression", ""),
    entry("now", Builtin, "Current Unix time in seconds", ""),
    entry("todate", Builtin, "Unix time to ISO 8601 string", ""),
    entry("fromdate", Builtin, "ISO 8601 string to Unix time", ""),
    // Formats
    entry("@base64", Format, "Base64-encode a string", "\"hello\" | @base64 gives \"aGVsbG8=\"."),
    entry("@base64d", Format, "Base64-decode a string", ""),
    entry("@csv", Format, "Format an array as a CSV row", ""),
    entry("@tsv", Format, "Format an array as a tab-separated row", ""),
    entry("@html", Format, "Escape HTML entities", "\"<b>\" | @html gives \"&lt;b&gt;\"."),
    entry("@uri", Format, "Percent-encode for URLs", ""),
    entry("@sh", Format, "Quote for a POSIX shell", ""),
    entry("@json", Format, "JSON-encode as a string", "Same as tojson."),
    entry("@text", Format, "Plain text, same as tostring", ""),
    // Special variables
    entry("$ENV", Variable, "Environment variables object", "Disabled in the sandbox."),
    entry("$__loc__", Variable, "Current source location {file, line}", ""),
];

static TABLE: LazyLock<HashMap<&'static str, Annotation>> =
    LazyLock::new(|| ENTRIES.iter().copied().collect());

/// Look up the annotation for canonical token text.
pub fn lookup(key: &str) -> Option<&'static Annotation> {
    TABLE.get(key)
}

/// Iterate over every entry in declaration order.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static Annotation)> {
    ENTRIES.iter().map(|(k, a)| (*k, a))
}

#[cfg(test)]
#[path = "annotations_tests.rs"]
mod tests;
