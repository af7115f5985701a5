use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            function::{builtin, complex, hash, sqrt},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the active
/// precision mode. It returns a value wrapped in `EvalResult`.
type BuiltinFn = fn(&[Value], bool) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments the builtin takes,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sqrt"    => { arity: 1, func: sqrt::sqrt },
    "pow"     => { arity: 2, func: builtin::pow },
    "rand"    => { arity: 0, func: builtin::rand },
    "sin"     => { arity: 1, func: |args, _mode| builtin::unary_math("sin", f64::sin, args) },
    "cos"     => { arity: 1, func: |args, _mode| builtin::unary_math("cos", f64::cos, args) },
    "tan"     => { arity: 1, func: |args, _mode| builtin::unary_math("tan", f64::tan, args) },
    "log"     => { arity: 1, func: |args, _mode| builtin::unary_math("log", f64::ln, args) },
    "exp"     => { arity: 1, func: |args, _mode| builtin::unary_math("exp", f64::exp, args) },
    "complex" => { arity: 2, func: complex::complex },
    "re"      => { arity: 1, func: complex::re },
    "im"      => { arity: 1, func: complex::im },
    "string"  => { arity: 1, func: hash::string_hash },
}

impl Evaluator {
    /// Evaluates a builtin function call.
    ///
    /// The callee name is resolved in the static builtin table, the
    /// argument count is checked against the builtin's arity, and the
    /// argument expressions are then evaluated left to right before
    /// invocation. The builtin receives the active precision mode.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Argument expressions in source order.
    ///
    /// # Returns
    /// The function result or an error if lookup or arity checking fails.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     arguments: &[Expr])
                                     -> EvalResult<Value> {
        let builtin = BUILTIN_TABLE.iter()
                                   .find(|b| b.name == name)
                                   .ok_or_else(|| {
                                       RuntimeError::UnknownFunction { name: name.to_string() }
                                   })?;

        if arguments.len() != builtin.arity {
            return Err(RuntimeError::ArityMismatch { name:     name.to_string(),
                                                     expected: builtin.arity,
                                                     got:      arguments.len(), });
        }

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval(argument)?);
        }

        (builtin.func)(&args, self.high_precision())
    }
}
