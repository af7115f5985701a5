/// Core parsing logic for expressions.
///
/// Contains the parse result type and the expression entry point that the
/// other parser modules descend from.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence levels of the grammar and the token-to-operator
/// mapping.
pub mod binary;

/// Primary expression parsing.
///
/// Handles literals, sign folding, identifiers, function calls and
/// parenthesized groups.
pub mod primary;

/// Statement parsing.
///
/// Dispatches one statement source into an assignment, a `return`, or a
/// bare expression statement.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides helpers shared by the parsing routines.
pub mod utils;
