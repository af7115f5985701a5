use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// The grammar has no unary operators beyond sign folding: a leading `-` is
/// only valid immediately before a numeric literal, where it is folded into
/// the literal text. Anything else after `-` is a parse error.
///
/// Grammar:
/// ```text
///     unary := "-" numeric_literal
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A literal with the sign folded in, or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(Token::Minus) = tokens.peek() {
        tokens.next();
        return match tokens.next() {
            Some(Token::Integer(text)) => Ok(Expr::Literal { value: LiteralValue::Number { text:   format!("-{text}"),
                                                                                           is_int: true, } }),
            Some(Token::Real(text)) => Ok(Expr::Literal { value: LiteralValue::Number { text:   format!("-{text}"),
                                                                                        is_int: false, } }),
            Some(token) => Err(ParseError::UnexpectedToken { token: format!("Expected numeric literal after '-', found {token:?}") }),
            None => Err(ParseError::UnexpectedEndOfInput),
        };
    }
    parse_primary(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - string literals
/// - identifiers
/// - function calls
/// - parenthesized expressions
///
/// This function dispatches to specialized parsing functions depending on
/// the leading token.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier_or_call
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let peeked = tokens.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    match peeked {
        Token::Integer(..) | Token::Real(..) | Token::Str(..) => parse_literal(tokens),
        Token::LParen => parse_grouping(tokens),
        Token::Identifier(_) => parse_identifier_or_call(tokens),
        token => Err(ParseError::UnexpectedToken { token: format!("{token:?}") }),
    }
}

/// Parses a numeric or string literal.
///
/// Numeric literals are carried as raw text together with a flag recording
/// whether they looked like integers; the evaluator parses the text at the
/// precision of the active mode. String literals were already decoded by
/// the lexer.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a literal.
///
/// # Returns
/// An [`Expr::Literal`] containing the value.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.next() {
        Some(Token::Integer(text)) => Ok(Expr::Literal { value: LiteralValue::Number { text:   text.clone(),
                                                                                       is_int: true, } }),
        Some(Token::Real(text)) => Ok(Expr::Literal { value: LiteralValue::Number { text:   text.clone(),
                                                                                    is_int: false, } }),
        Some(Token::Str(text)) => Ok(Expr::Literal { value: LiteralValue::Str(text.clone()) }),
        _ => unreachable!(),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// An [`Expr::Grouping`] wrapping the inner expression.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.next();
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some(Token::RParen) => Ok(Expr::Grouping { expr: Box::new(expr) }),
        _ => Err(ParseError::ExpectedClosingParen),
    }
}

/// Parses an identifier or a function call.
///
/// Supported forms:
///
/// - `identifier`
/// - `identifier(arg1, arg2, ...)`
///
/// The function first consumes the identifier token.
/// If the next token is `(`, a function-call expression is parsed.
/// Otherwise, it is parsed as a variable reference.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// - [`Expr::FunctionCall`] if followed by parentheses,
/// - [`Expr::Variable`] otherwise.
///
/// # Errors
/// Returns a `ParseError` if function-call arguments fail to parse or the
/// closing `)` is missing.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let name = match tokens.next() {
        Some(Token::Identifier(n)) => n.clone(),
        _ => unreachable!(),
    };

    match tokens.peek() {
        Some(Token::LParen) => {
            tokens.next();
            let args = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
            Ok(Expr::FunctionCall { name,
                                    arguments: args, })
        },
        _ => Ok(Expr::Variable { name }),
    }
}
