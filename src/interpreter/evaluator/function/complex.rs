use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, number::Number},
    },
};

/// Constructs a value carrying real and imaginary components.
///
/// The two arguments contribute their real components; any imaginary parts
/// they themselves carry are ignored. The result is the only way a value
/// acquires an imaginary component.
///
/// # Parameters
/// - `args`: Slice of two numeric arguments (real, imaginary).
///
/// # Returns
/// The constructed numeric value.
pub fn complex(args: &[Value], _high_precision: bool) -> EvalResult<Value> {
    let real = args[0].as_number("complex")?;
    let imag = args[1].as_number("complex")?;

    Ok(Value::Number(Number { real:   real.real.clone(),
                              imag:   Some(imag.real.clone()),
                              is_int: false, }))
}

/// Projects the real component of a numeric value.
pub fn re(args: &[Value], _high_precision: bool) -> EvalResult<Value> {
    let number = args[0].as_number("re")?;
    Ok(Value::Number(Number::from_real(number.real.clone())))
}

/// Projects the imaginary component of a numeric value.
///
/// Only values built by `complex()` carry an imaginary component; anything
/// else fails with `TypeMismatch`.
pub fn im(args: &[Value], _high_precision: bool) -> EvalResult<Value> {
    let number = args[0].as_number("im")?;
    number.imag
          .clone()
          .map(|imag| Value::Number(Number::from_real(imag)))
          .ok_or(RuntimeError::TypeMismatch { details: "im expects a complex value".to_string(), })
}
