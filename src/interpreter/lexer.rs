use logos::Logos;

use crate::{error::ParseError, util::escape};

/// Represents a lexical token in a statement source.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Real literal tokens, such as `3.14`, `.5` or `2.1e-10`.
    ///
    /// The slice is kept as text; the evaluator parses it at the precision
    /// the active mode calls for.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", |lex| lex.slice().to_string())]
    Real(String),
    /// Integer literal tokens, such as `42`, also kept as text.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// String literal tokens; the body is escape-decoded here.
    #[regex(r#""([^"\\]|\\.)*""#, decode_string)]
    Str(String),
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; variable or function names such as `x` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `:=`
    #[token(":=")]
    ColonEquals,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`, the power operator.
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,

    /// Whitespace of any kind.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Decodes the body of a string literal at the current token slice.
///
/// The surrounding quotes are stripped and the recognized escape sequences
/// are replaced by the characters they denote.
fn decode_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    escape::unescape(&slice[1..slice.len() - 1])
}

/// Tokenizes one statement source.
///
/// # Parameters
/// - `source`: The statement text.
///
/// # Returns
/// The token sequence in source order, whitespace dropped.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the source contains a
/// character sequence that is not part of the language.
///
/// # Example
/// ```
/// use precisa::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("1 + x").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Integer("1".to_string()),
///                 Token::Plus,
///                 Token::Identifier("x".to_string())]);
/// ```
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(token) = token {
            tokens.push(token);
        } else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string() });
        }
    }

    Ok(tokens)
}
