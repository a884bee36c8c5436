// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lq-core: Syntax tooling for jq filter expressions
//!
//! This crate provides the pieces of learnjq that understand filter text
//! without evaluating it, shared by the `lq` CLI and the `lq-server` service:
//!
//! - [`tokenize`] - a total, lossless lexer producing annotated [`Token`]s
//! - [`decompose`] - splitting a filter into top-level pipeline stages
//! - [`policy`] - admission checks run before a filter reaches jq
//! - [`protocol`] - JSON bodies exchanged with the evaluation endpoints

pub mod annotations;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod pipeline;
pub mod policy;
pub mod protocol;
pub mod token;

pub use annotations::Annotation;
pub use cursor::StringCursor;
pub use error::{Error, Result};
pub use lexer::tokenize;
pub use pipeline::{decompose, split_stages, Fragment, Pipeline, ProgressiveFilter};
pub use policy::{check_filter, MAX_FILTER_LEN};
pub use protocol::{EvalOptions, StepResult};
pub use token::{Category, DotForm, Token};
