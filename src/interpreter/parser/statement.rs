use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a single statement from its token stream.
///
/// A statement may be one of:
/// - a `return` statement: `return <expression>`,
/// - an assignment: `<identifier> := <expression>` or `<identifier> =
///   <expression>`,
/// - a bare expression used as a statement.
///
/// Parsing is attempted in that order; the first matching construct wins.
/// The whole token stream must be consumed: leftovers after the statement
/// are `UnexpectedTrailingTokens`.
///
/// # Parameters
/// - `tokens`: Token iterator for one statement source.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let statement = if let Some(Token::Return) = tokens.peek() {
        tokens.next();
        Statement::Return { value: parse_expression(tokens)? }
    } else if let Some(statement) = parse_assignment(tokens)? {
        statement
    } else {
        Statement::Expression { expr: parse_expression(tokens)? }
    };

    match tokens.next() {
        None => Ok(statement),
        Some(token) => {
            Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}") })
        },
    }
}

/// Parses an assignment statement.
///
/// Supported forms:
///
/// - `<identifier> := <expression>`
/// - `<identifier> = <expression>`
///
/// The function performs a limited lookahead: if the next token is an
/// identifier and the following token is `:=` or `=`, an assignment is
/// parsed. If no assignment pattern matches, the function returns
/// `Ok(None)` and does not consume tokens.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a potential identifier.
///
/// # Returns
/// - `Ok(Some(Statement::Assignment))` if an assignment is parsed,
/// - `Ok(None)` if no assignment is present.
///
/// # Errors
/// Returns a `ParseError` if the assigned expression fails to parse.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(Token::Identifier(_)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some(Token::ColonEquals | Token::Equals) = lookahead.peek() {
            let name = if let Some(Token::Identifier(n)) = tokens.next() {
                n.clone()
            } else {
                unreachable!()
            };
            tokens.next();

            let value = parse_expression(tokens)?;
            return Ok(Some(Statement::Assignment { name, value }));
        }
    }
    Ok(None)
}
