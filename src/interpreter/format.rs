use bigdecimal::RoundingMode;

use crate::interpreter::value::{core::Value, number::to_f64_nearest};

/// Renders the session's final value as the caller-visible string.
///
/// - String values render their characters verbatim; escapes were decoded
///   at lex time, so nothing is re-escaped here.
/// - Numeric values in high-precision mode render the real component in
///   fixed-point notation with exactly 50 fractional digits, rounded half
///   to even.
/// - Numeric values in standard mode convert the real component to a
///   64-bit float and render its shortest round-trip representation.
///
/// Trailing-zero trimming or fixed-digit truncation is a caller concern;
/// this function's contract is exactly the two renderings above.
///
/// # Parameters
/// - `value`: The session's final value.
/// - `high_precision`: The active mode.
///
/// # Returns
/// The rendered result text.
///
/// # Example
/// ```
/// use precisa::interpreter::{format::format_result, value::{core::Value, number::Number}};
///
/// let value = Value::Number(Number::integer(14));
/// assert_eq!(format_result(&value, false), "14");
/// assert_eq!(format_result(&value, true).len(), 53);
/// ```
#[must_use]
pub fn format_result(value: &Value, high_precision: bool) -> String {
    match value {
        Value::Str(text) => text.clone(),
        Value::Number(number) => {
            if high_precision {
                number.real
                      .with_scale_round(50, RoundingMode::HalfEven)
                      .to_string()
            } else {
                let float = to_f64_nearest(&number.real);
                format!("{float}")
            }
        },
    }
}
