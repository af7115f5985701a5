use bigdecimal::Zero;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, number::Number},
    },
};

/// Computes the square root of a numeric value.
///
/// In high-precision mode the root is taken directly on the decimal real
/// component at its native working precision; in standard mode the
/// component is converted to a 64-bit float first. Negative arguments fail
/// in both modes, and the result is never rounded down to double precision
/// in high-precision mode — the extra digits are the point of the mode.
///
/// # Parameters
/// - `args`: Slice containing one numeric argument.
/// - `high_precision`: The active mode.
///
/// # Returns
/// The square root as a numeric value.
///
/// # Errors
/// - `TypeMismatch` for a string argument.
/// - `InvalidArgument` for a negative argument.
pub fn sqrt(args: &[Value], high_precision: bool) -> EvalResult<Value> {
    let number = args[0].as_number("sqrt")?;

    if number.real < bigdecimal::BigDecimal::zero() {
        return Err(RuntimeError::InvalidArgument { details:
                                                       "square root of a negative number".to_string(), });
    }

    if high_precision {
        number.real
              .sqrt()
              .map(|root| Value::Number(Number::from_real(root)))
              .ok_or(RuntimeError::InvalidArgument { details:
                                                         "square root of a negative number".to_string(), })
    } else {
        Value::from_f64(number.to_f64()?.sqrt())
    }
}
