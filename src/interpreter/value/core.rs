use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::number::Number},
};

/// Represents a runtime value in the interpreter.
///
/// A value is either numeric or a string, never both: string values carry
/// no numeric payload, and numeric values carry no characters. Operators
/// and builtins check the variant explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (arbitrary-precision real, optional imaginary part).
    Number(Number),
    /// A string value.
    Str(String),
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl Value {
    /// Builds a numeric value from a 64-bit float.
    ///
    /// # Errors
    /// Returns `RuntimeError::NonFiniteResult` for NaN or infinite inputs.
    pub fn from_f64(value: f64) -> EvalResult<Self> {
        Ok(Self::Number(Number::from_f64(value)?))
    }

    /// Borrows the numeric payload, or fails if the value is a string.
    ///
    /// # Parameters
    /// - `context`: The function or operation name used in the error.
    ///
    /// # Returns
    /// - `Ok(&Number)`: If the value is numeric.
    /// - `Err(RuntimeError::TypeMismatch)`: If the value is a string.
    ///
    /// # Example
    /// ```
    /// use precisa::interpreter::value::{core::Value, number::Number};
    ///
    /// let x = Value::Number(Number::integer(10));
    /// assert!(x.as_number("sqrt").is_ok());
    ///
    /// let s = Value::Str("hi".to_string());
    /// assert!(s.as_number("sqrt").is_err());
    /// ```
    pub fn as_number(&self, context: &str) -> EvalResult<&Number> {
        match self {
            Self::Number(number) => Ok(number),
            Self::Str(_) => Err(RuntimeError::TypeMismatch { details: format!("{context} expects a numeric argument"), }),
        }
    }

    /// Returns `true` if the value is a string.
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Self::Str(..))
    }

    /// Returns the string payload of the value.
    ///
    /// Numeric values contribute no characters; only string payloads take
    /// part in concatenation.
    #[must_use]
    pub fn str_part(&self) -> &str {
        match self {
            Self::Str(text) => text,
            Self::Number(_) => "",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{}", number.real),
            Self::Str(text) => write!(f, "{text}"),
        }
    }
}
