use bigdecimal::{BigDecimal, RoundingMode, Zero};

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::{
            core::Value,
            number::{Number, decimal_from_f64, round_to_double},
        },
    },
};

impl Evaluator {
    /// Evaluates a binary operation.
    ///
    /// Both operands are evaluated left to right; no operator
    /// short-circuits. If either operand is a string, the operation is
    /// routed to string handling, where only `+` (concatenation) is legal.
    /// Numeric operands are routed to the mode-aware arithmetic.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The operator.
    /// - `right`: Right operand expression.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed value.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr)
                                 -> EvalResult<Value> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;

        match (&left, &right) {
            (Value::Str(_), _) | (_, Value::Str(_)) => eval_string_op(op, &left, &right),
            (Value::Number(lhs), Value::Number(rhs)) => {
                eval_numeric_op(op, lhs, rhs, self.high_precision())
            },
        }
    }
}

/// Evaluates a binary operation with at least one string operand.
///
/// Only `+` is defined for strings: the string payloads of the operands are
/// concatenated. A numeric operand contributes no characters. Every other
/// operator fails with `UnsupportedStringOp`.
fn eval_string_op(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => {
            Ok(Value::Str(format!("{}{}", left.str_part(), right.str_part())))
        },
        _ => Err(RuntimeError::UnsupportedStringOp { op: op.to_string() }),
    }
}

/// Evaluates a binary operation on two numeric operands.
///
/// `+`, `-` and `*` are exact decimal operations; `/` divides at the
/// decimal working precision after an exact-zero check on the divisor. `%`
/// is mode-dependent: the floored-quotient identity over decimals in
/// high-precision mode, 64-bit float remainder otherwise. `^` is always
/// computed in 64-bit float arithmetic, independent of the mode.
///
/// The working-precision result is then rounded down to double precision
/// (round to nearest, ties to even) in both modes; the extra digits of
/// high-precision mode come from literal parsing and final rendering, not
/// from this step.
fn eval_numeric_op(op: BinaryOperator,
                   left: &Number,
                   right: &Number,
                   high_precision: bool)
                   -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

    let result: BigDecimal = match op {
        Add => &left.real + &right.real,
        Sub => &left.real - &right.real,
        Mul => &left.real * &right.real,
        Div => {
            if right.real.is_zero() {
                return Err(RuntimeError::DivisionByZero);
            }
            &left.real / &right.real
        },
        Mod => {
            if high_precision {
                if right.real.is_zero() {
                    return Err(RuntimeError::DivisionByZero);
                }
                let quotient = &left.real / &right.real;
                let floored = quotient.with_scale_round(0, RoundingMode::Floor);
                &left.real - &(floored * &right.real)
            } else {
                decimal_from_f64(left.to_f64()? % right.to_f64()?)?
            }
        },
        Pow => decimal_from_f64(left.to_f64()?.powf(right.to_f64()?))?,
    };

    let result = round_to_double(&result)?;
    Ok(Value::Number(Number::from_real(result)))
}
