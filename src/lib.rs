//! # wordcalc
//!
//! wordcalc evaluates one line of arithmetic written in digits (`12 + 3`),
//! in English number words (`twelve plus three`), or in any mix of the two
//! (`one hundred and seven minus 4`).
//!
//! A line goes through three phases: the lexer turns the text into tokens,
//! the parser builds a syntax tree, and the evaluator computes the result
//! with checked arithmetic bounded to `[-9 999 999, 9 999 999]`. Any phase
//! can fail; the first error aborts the line.

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

use tracing::debug;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::Context, lexer::tokenize, number_table::NumberTable, parser::core::parse,
    },
};

/// Defines the syntax tree.
///
/// This module declares the `Expr` enum built by the parser and consumed by
/// the evaluator, and the `BinaryOperator` enum.
pub mod ast;
/// Provides the error types of every phase.
///
/// This module defines the errors raised while tokenizing, parsing and
/// evaluating, plus the umbrella `EvalError` returned by [`evaluate`].
///
/// # Responsibilities
/// - Defines one error enum per phase, with the offending word, token or
///   value attached.
/// - Classifies every failure into a flat `ErrorKind`.
pub mod error;
/// Ties the lexer, parser and evaluator together.
///
/// This module contains the three phases of evaluation and the number table
/// they share.
pub mod interpreter;
/// Line-by-line evaluation of an input stream.
///
/// Reads lines until a blank line or the end of input and writes one result
/// or error marker per line.
pub mod repl;
/// General numeric helpers.
pub mod util;

/// Evaluates lines of arithmetic against an injected number table.
///
/// The calculator keeps no state between lines; a failed line has no effect
/// on the next one.
#[derive(Debug, Clone, Copy)]
pub struct Calculator<'t> {
    table:   &'t NumberTable,
    context: Context,
}

impl Default for Calculator<'static> {
    fn default() -> Self {
        Self::new(NumberTable::shared())
    }
}

impl<'t> Calculator<'t> {
    /// Creates a calculator that reads number words from `table`.
    #[must_use]
    pub const fn new(table: &'t NumberTable) -> Self {
        Self { table,
               context: Context::new() }
    }

    /// Replaces the evaluation context, e.g. to use different bounds.
    #[must_use]
    pub const fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Tokenizes, parses and evaluates one line.
    ///
    /// # Errors
    /// Returns the first error raised by any phase.
    pub fn evaluate(&self, line: &str) -> Result<f64, EvalError> {
        let tokens = tokenize(line, self.table)?;
        let expr = parse(&tokens, self.table)?;
        let value = self.context.eval(&expr)?;
        debug!(line, value, "evaluated line");
        Ok(value)
    }
}

/// Evaluates one line of arithmetic using the shared number table.
///
/// This is the main entry point of the library. It tokenizes, parses and
/// evaluates `line`, returning either the numeric result or the first error
/// encountered, without partial output.
///
/// # Errors
/// Returns an error if the line contains an unknown word, violates the
/// grammar, or its evaluation leaves the allowed bounds or divides by zero.
///
/// # Examples
/// ```
/// use wordcalc::{error::ErrorKind, evaluate};
///
/// assert_eq!(evaluate("twelve plus three").unwrap(), 15.0);
/// assert_eq!(evaluate("one hundred and seven minus 4").unwrap(), 103.0);
/// assert_eq!(evaluate("10 divided by 4").unwrap(), 2.5);
///
/// let err = evaluate("five banana").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Tokenize);
/// ```
pub fn evaluate(line: &str) -> Result<f64, EvalError> {
    Calculator::default().evaluate(line)
}
