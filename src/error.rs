/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of a
/// statement. Parse errors include syntax mistakes, unexpected tokens, and
/// any other issues detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include things like division by zero, type mismatches, undefined
/// variables, or failed numeric conversions.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Top-level error returned by an evaluation call.
///
/// Evaluation is all-or-nothing: the first failing statement aborts the
/// whole call, and the error names the statement that failed. Bindings made
/// by earlier statements are discarded together with the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A statement failed to lex or parse.
    Parse {
        /// The offending statement text.
        statement: String,
        /// The underlying parse failure.
        source:    ParseError,
    },
    /// A statement failed during evaluation.
    Runtime {
        /// The offending statement text.
        statement: String,
        /// The underlying evaluation failure.
        source:    RuntimeError,
    },
    /// The input contained no statements to evaluate.
    EmptyExpression,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { statement, source } => {
                write!(f, "parse error in statement '{statement}': {source}")
            },
            Self::Runtime { statement, source } => {
                write!(f, "evaluation error in statement '{statement}': {source}")
            },
            Self::EmptyExpression => write!(f, "empty expression: nothing to evaluate"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
            Self::Runtime { source, .. } => Some(source),
            Self::EmptyExpression => None,
        }
    }
}
