use rand::Rng;

use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Raises a base to an exponent in 64-bit float arithmetic.
///
/// Both arguments are converted to doubles first, in every mode; `pow`
/// does not gain extra digits under high precision. This matches the `^`
/// operator exactly.
///
/// # Parameters
/// - `args`: Slice of two numeric arguments (base, exponent).
/// - `_high_precision`: The active mode, unused here.
///
/// # Returns
/// The power as a numeric value.
pub fn pow(args: &[Value], _high_precision: bool) -> EvalResult<Value> {
    let base = args[0].as_number("pow")?.to_f64()?;
    let exponent = args[1].as_number("pow")?.to_f64()?;
    Value::from_f64(base.powf(exponent))
}

/// Draws a uniform value in `[0, 1)` from the process-wide source.
///
/// # Parameters
/// - `_args`: Empty argument slice.
/// - `_high_precision`: The active mode, unused here.
///
/// # Returns
/// The drawn value as a numeric value.
pub fn rand(_args: &[Value], _high_precision: bool) -> EvalResult<Value> {
    let mut rng = rand::thread_rng();
    Value::from_f64(rng.gen::<f64>())
}

/// Applies a unary 64-bit float function to a numeric argument.
///
/// Shared by `sin`, `cos`, `tan`, `log` (natural logarithm) and `exp`: the
/// argument's real component is converted to a double, the function is
/// applied, and the result is re-wrapped as the real component of a numeric
/// value.
///
/// # Parameters
/// - `name`: The builtin name, used in error messages.
/// - `op`: The float function to apply.
/// - `args`: Slice containing one argument.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed value.
///
/// # Example
/// ```
/// use precisa::interpreter::{
///     evaluator::function::builtin::unary_math,
///     value::{core::Value, number::Number},
/// };
///
/// let x = Value::Number(Number::integer(0));
/// let r = unary_math("exp", f64::exp, &[x]).unwrap();
/// assert!(matches!(r, Value::Number(_)));
/// ```
pub fn unary_math(name: &str, op: fn(f64) -> f64, args: &[Value]) -> EvalResult<Value> {
    let x = args[0].as_number(name)?.to_f64()?;
    Value::from_f64(op(x))
}
