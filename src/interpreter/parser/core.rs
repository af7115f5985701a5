use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_exponent},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, exponentiation, and recursively
/// descends through the precedence hierarchy. Exponentiation sits below
/// addition on purpose: the `^` token keeps the precedence slot of the
/// bitwise operator it is shaped like, even though it means "raise to
/// power".
///
/// Grammar: `expression := exponent`
///
/// # Parameters
/// - `tokens`: Token iterator for one statement.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_exponent(tokens)
}
