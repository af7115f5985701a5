use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, number::Number},
    },
};

/// Folds a string argument into a numeric value.
///
/// This is a hash, not a general string-to-number coercion: the result is
/// `result * 31 + codepoint` over the argument's Unicode scalar values, in
/// wrapping signed 64-bit arithmetic. Numeric arguments fail with
/// `TypeMismatch`.
///
/// # Parameters
/// - `args`: Slice containing one string argument.
///
/// # Returns
/// The hash as an integer-flagged numeric value.
///
/// # Example
/// ```
/// use precisa::interpreter::{
///     evaluator::function::hash::string_hash,
///     value::{core::Value, number::Number},
/// };
///
/// let r = string_hash(&[Value::Str("a".to_string())], false).unwrap();
/// assert_eq!(r, Value::Number(Number::integer(97)));
/// ```
pub fn string_hash(args: &[Value], _high_precision: bool) -> EvalResult<Value> {
    match &args[0] {
        Value::Str(text) => {
            let mut result: i64 = 0;
            for ch in text.chars() {
                result = result.wrapping_mul(31).wrapping_add(i64::from(u32::from(ch)));
            }
            Ok(Value::Number(Number::integer(result)))
        },
        Value::Number(_) => Err(RuntimeError::TypeMismatch { details:
                                                                 "string expects a string argument".to_string(), }),
    }
}
