use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// The numeric payload of a value.
///
/// The real component is an arbitrary-precision decimal. The imaginary
/// component is present only on values built by the `complex()` builtin;
/// ordinary arithmetic reads and produces real components exclusively.
/// `is_int` records whether the value originated from an integer-looking
/// literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    /// The real component.
    pub real:   BigDecimal,
    /// The imaginary component, set only by `complex()`.
    pub imag:   Option<BigDecimal>,
    /// Whether the value originated from an integer-looking literal.
    pub is_int: bool,
}

impl Number {
    /// Wraps a real component into a `Number` with no imaginary part.
    #[must_use]
    pub const fn from_real(real: BigDecimal) -> Self {
        Self { real,
               imag: None,
               is_int: false }
    }

    /// Builds an integer-flagged `Number` from an `i64`.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Self { real:   BigDecimal::from(value),
               imag:   None,
               is_int: true, }
    }

    /// Builds a `Number` from a 64-bit float.
    ///
    /// The float is expanded to its exact decimal form. Non-finite inputs
    /// have no decimal representation and fail with `NonFiniteResult`.
    ///
    /// # Errors
    /// Returns `RuntimeError::NonFiniteResult` for NaN or infinite inputs.
    pub fn from_f64(value: f64) -> EvalResult<Self> {
        Ok(Self::from_real(decimal_from_f64(value)?))
    }

    /// Parses a numeric literal at the precision of the active mode.
    ///
    /// In high-precision mode the literal text becomes an exact decimal
    /// with as many significant digits as were written. In standard mode
    /// the text is parsed as a 64-bit float first, so the stored decimal is
    /// the exact expansion of that double.
    ///
    /// # Parameters
    /// - `text`: The literal text, sign included.
    /// - `is_int`: Whether the literal had no fractional or exponent part.
    /// - `high_precision`: The active precision mode.
    ///
    /// # Errors
    /// Returns `RuntimeError::LiteralOutOfRange` when the text does not fit
    /// the mode's representation (e.g. `1e999` as a double).
    pub fn parse(text: &str, is_int: bool, high_precision: bool) -> EvalResult<Self> {
        let real = if high_precision {
            // BigDecimal's parser wants a digit before the decimal point.
            let padded = pad_leading_dot(text);
            BigDecimal::from_str(&padded).map_err(|_| {
                                             RuntimeError::LiteralOutOfRange { literal:
                                                                                   text.to_string(), }
                                         })?
        } else {
            let value: f64 = text.parse().map_err(|_| {
                                              RuntimeError::LiteralOutOfRange { literal:
                                                                                    text.to_string(), }
                                          })?;
            decimal_from_f64(value).map_err(|_| {
                                       RuntimeError::LiteralOutOfRange { literal:
                                                                             text.to_string(), }
                                   })?
        };

        Ok(Self { real,
                  imag: None,
                  is_int })
    }

    /// Converts the real component to a 64-bit float.
    ///
    /// # Errors
    /// Returns `RuntimeError::NonFiniteResult` when the component overflows
    /// the double range.
    pub fn to_f64(&self) -> EvalResult<f64> {
        let value = to_f64_nearest(&self.real);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(RuntimeError::NonFiniteResult)
        }
    }
}

/// Converts a decimal to the nearest 64-bit float.
///
/// The conversion goes through `f64`'s own parser, which rounds to nearest
/// with ties to even. Values beyond the double range come back infinite.
#[must_use]
pub fn to_f64_nearest(value: &BigDecimal) -> f64 {
    value.to_string().parse().unwrap_or(f64::INFINITY)
}

/// Rounds a working-precision decimal down to double precision.
///
/// The decimal is converted to the nearest 64-bit float (ties to even) and
/// expanded back to the exact decimal form of that float. This is the
/// uniform normalization applied to every binary-operator result,
/// independent of the active mode.
///
/// # Errors
/// Returns `RuntimeError::NonFiniteResult` when the value overflows the
/// double range.
pub fn round_to_double(value: &BigDecimal) -> EvalResult<BigDecimal> {
    let float = to_f64_nearest(value);
    if float.is_finite() {
        decimal_from_f64(float)
    } else {
        Err(RuntimeError::NonFiniteResult)
    }
}

/// Expands a finite 64-bit float to its exact decimal form.
///
/// # Errors
/// Returns `RuntimeError::NonFiniteResult` for NaN or infinite inputs.
pub fn decimal_from_f64(value: f64) -> EvalResult<BigDecimal> {
    BigDecimal::try_from(value).map_err(|_| RuntimeError::NonFiniteResult)
}

/// Prefixes a `0` when a literal starts with `.` or `-.`.
fn pad_leading_dot(text: &str) -> String {
    if let Some(rest) = text.strip_prefix("-.") {
        return format!("-0.{rest}");
    }
    if let Some(rest) = text.strip_prefix('.') {
        return format!("0.{rest}");
    }
    text.to_string()
}
