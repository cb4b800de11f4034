//! # deutschcode
//!
//! deutschcode is an interpreter for a small teaching language with German
//! keywords. A program declares variables, prints values, and defines and
//! calls simple procedures:
//!
//! ```text
//! sei summe = 2 + 3 * 4.
//! gib summe aus.
//!
//! funktion zeige(a)
//!     gib a aus.
//! ende.
//!
//! zeige(summe / 2).
//! ```
//!
//! Source text is tokenized in full, then the token sequence is interpreted
//! statement by statement. The first error aborts the run.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::Context, lexer::tokenize},
};

/// Provides unified error types for lexing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing or
/// running a program. Every error carries the line it was detected on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, grammar, runtime).
/// - Wraps them in a single [`Error`](error::Error) for callers.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, the token cursor, the environment and
/// the evaluator.
pub mod interpreter;

pub use crate::error::Error;

/// Runs a program and prints its output to standard output.
///
/// # Errors
/// Returns the first lexing, syntax or runtime error. Lines printed before
/// the error remain printed.
///
/// # Examples
/// ```
/// use deutschcode::run;
///
/// assert!(run("sei x = 1 + 1. gib x aus.").is_ok());
///
/// // `y` was never declared.
/// assert!(run("gib y aus.").is_err());
/// ```
pub fn run(source: &str) -> Result<(), Error> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(source, &mut out)
}

/// Runs a program and writes its output to `out`.
///
/// # Errors
/// Returns the first lexing, syntax or runtime error. Lines written before
/// the error remain in `out`.
///
/// # Examples
/// ```
/// use deutschcode::run_with_output;
///
/// let mut out = Vec::new();
/// run_with_output("gib 2 + 3 * 4 aus. gib 'fertig' aus.", &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "14\nfertig\n");
/// ```
pub fn run_with_output<W: Write>(source: &str, out: &mut W) -> Result<(), Error> {
    let tokens = tokenize(source)?;
    debug!(tokens = tokens.len(), "tokenized source");

    let mut context = Context::new(out);
    context.interpret(&tokens)?;

    let end_line = tokens.last().map_or(1, |(_, line)| *line);
    out.flush().map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                   line:    end_line, })?;
    Ok(())
}
