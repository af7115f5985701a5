/// Core evaluation logic and session management.
///
/// Contains the evaluator, its per-session variable environment, expression
/// dispatch, and the statement loop with early-return handling.
pub mod core;

/// Binary operator evaluation.
///
/// Implements string concatenation and the mode-aware numeric arithmetic,
/// including the uniform double-precision normalization of results.
pub mod binary;

/// Builtin function evaluation.
///
/// Holds the immutable registry of builtin functions, argument-count
/// checking, and the individual implementations.
pub mod function;
