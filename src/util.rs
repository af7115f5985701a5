/// String escaping helpers.
///
/// This module provides the escape and unescape routines shared by the
/// preprocessor and the lexer, so quoted literals round-trip through both
/// with one set of recognized escape sequences.
pub mod escape;
