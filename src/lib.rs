//! # precisa
//!
//! precisa is a precision-aware expression evaluation engine written in
//! Rust. It preprocesses, splits, parses, and tree-walk-evaluates
//! `;`-separated statement sequences with variables, builtin functions, and
//! a lightweight string subtype, under one of two numeric regimes: standard
//! double precision, or arbitrary-precision decimal literals with
//! 50-digit fixed-point rendering.

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

use crate::{
    error::Error,
    interpreter::{evaluator::core::Evaluator, format::format_result, preprocess},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent
/// the syntactic structure of statements as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression, statement, and operator types.
/// - Keeps numeric literals as raw text for mode-dependent parsing.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing,
/// parsing, or evaluating statements, plus the top-level error that tags a
/// failure with the offending statement text.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches statement text and detailed messages for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together preprocessing, lexing, parsing, evaluation,
/// value representations, error handling, and result formatting to provide
/// a complete runtime for expression evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: preprocessor, lexer, parser,
///   evaluator, and formatter.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities shared across phases.
///
/// This module provides reusable helpers that are used by more than one
/// phase, currently the string escape/unescape routines shared by the
/// preprocessor and the lexer.
pub mod util;

/// Evaluates an expression and returns its result text.
///
/// The input may be a single expression or a `;`-separated sequence of
/// statements (assignments, `return`, bare expressions). Statements share
/// one variable environment created empty for this call; a `return`
/// statement ends the sequence early, otherwise the last statement's value
/// is the result. The final value is rendered according to the active
/// mode: shortest round-trip double notation in standard mode, 50 fixed
/// fractional digits in high-precision mode.
///
/// # Parameters
/// - `expression`: The raw expression text.
/// - `high_precision`: Whether numeric literals parse with unbounded
///   significant digits and the result renders with 50 fractional digits.
///
/// # Returns
/// The rendered result text of the session's final value.
///
/// # Errors
/// Returns an [`Error`] if preprocessing leaves no statements, or if any
/// statement fails to lex, parse, or evaluate. Evaluation is all-or-nothing:
/// no partial results accompany an error.
///
/// # Examples
/// ```
/// use precisa::evaluate;
///
/// // Multiplication binds tighter than addition.
/// assert_eq!(evaluate("2 + 3 * 4", false).unwrap(), "14");
///
/// // Assignments bind across statements.
/// assert_eq!(evaluate("x := 3; x * x", false).unwrap(), "9");
///
/// // An unassigned variable is an error.
/// assert!(evaluate("y + 1", false).is_err());
/// ```
pub fn evaluate(expression: &str, high_precision: bool) -> Result<String, Error> {
    let prepared = preprocess::normalize_string_calls(expression);
    let statements = preprocess::split_statements(&prepared);

    let mut evaluator = Evaluator::new(high_precision);
    let value = evaluator.run(&statements)?;

    Ok(format_result(&value, high_precision))
}
