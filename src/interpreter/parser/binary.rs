use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, primary::parse_unary},
    },
};

/// Parses exponentiation expressions.
///
/// This is the lowest-precedence level of the grammar: the `^` token binds
/// looser than `+` and `-`, so `2^1+1` parses as `2 ^ (1+1)`. Chained
/// exponents are left-associative.
///
/// The rule is: `exponent := additive ("^" additive)*`
///
/// # Parameters
/// - `tokens`: Token stream with lookahead.
///
/// # Returns
/// An `Expr::BinaryOp` tree combining additive-level nodes.
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_additive(tokens)?;
    loop {
        if let Some(token) = tokens.peek() {
            if let Some(op) = token_to_binary_operator(token) {
                if matches!(op, BinaryOperator::Pow) {
                    tokens.next();
                    let right = parse_additive(tokens)?;
                    left = Expr::BinaryOp { left: Box::new(left),
                                            op,
                                            right: Box::new(right), };
                    continue;
                }
            }
        }
        break;
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with lookahead.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some(token) = tokens.peek() {
            if let Some(op) = token_to_binary_operator(token) {
                if matches!(op, BinaryOperator::Add | BinaryOperator::Sub) {
                    tokens.next();
                    let right = parse_multiplicative(tokens)?;
                    left = Expr::BinaryOp { left: Box::new(left),
                                            op,
                                            right: Box::new(right), };
                    continue;
                }
            }
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with lookahead.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_unary(tokens)?;
    loop {
        if let Some(token) = tokens.peek() {
            if let Some(op) = token_to_binary_operator(token) {
                if matches!(op,
                            BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
                {
                    tokens.next();
                    let right = parse_unary(tokens)?;
                    left = Expr::BinaryOp { left: Box::new(left),
                                            op,
                                            right: Box::new(right), };
                    continue;
                }
            }
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary
/// operator (`+`, `-`, `*`, `/`, `%`, `^`). Returns `None` for all other
/// tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use precisa::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
