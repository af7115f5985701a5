use std::collections::HashMap;

use crate::{
    ast::{Expr, LiteralValue, Statement},
    error::{Error, RuntimeError},
    interpreter::{
        lexer::lex,
        parser::statement::parse_statement,
        value::{core::Value, number::Number},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Outcome of evaluating one statement.
pub enum StatementOutcome {
    /// The statement produced a value; evaluation continues.
    Value(Value),
    /// A `return` statement produced the final value; evaluation stops.
    Return(Value),
}

/// Tree-walking evaluator for one session.
///
/// The evaluator owns the variable environment of a single evaluation call
/// and the active precision mode. It is created empty, threaded through the
/// statement sequence, and dropped when the call completes; nothing is
/// shared between calls except the immutable builtin registry.
pub struct Evaluator {
    /// The per-session variable environment.
    vars:           HashMap<String, Value>,
    /// Whether literals parse with unbounded significant digits.
    high_precision: bool,
}

impl Evaluator {
    /// Creates a new evaluator with an empty environment.
    #[must_use]
    pub fn new(high_precision: bool) -> Self {
        Self { vars: HashMap::new(),
               high_precision }
    }

    /// Returns the active precision mode.
    #[must_use]
    pub const fn high_precision(&self) -> bool {
        self.high_precision
    }

    /// Runs a full statement session and produces its final value.
    ///
    /// Each statement source is lexed, parsed and evaluated in order,
    /// sharing this evaluator's environment. A `return` statement ends the
    /// session immediately with its value; otherwise the last statement's
    /// value is the result. The first failing statement aborts the whole
    /// session.
    ///
    /// # Parameters
    /// - `statements`: The trimmed, non-empty statement sources.
    ///
    /// # Returns
    /// The session's final value.
    ///
    /// # Errors
    /// Returns `Error::EmptyExpression` for an empty sequence, or the first
    /// parse/runtime failure tagged with its statement text.
    pub fn run(&mut self, statements: &[String]) -> Result<Value, Error> {
        let mut last = None;

        for (index, source) in statements.iter().enumerate() {
            let tokens = lex(source).map_err(|e| {
                                        Error::Parse { statement: source.clone(),
                                                       source:    e, }
                                    })?;
            let statement =
                parse_statement(&mut tokens.iter().peekable()).map_err(|e| {
                                                                  Error::Parse { statement:
                                                                                     source.clone(),
                                                                                 source:    e, }
                                                              })?;

            match self.eval_statement(&statement, index)
                      .map_err(|e| {
                          Error::Runtime { statement: source.clone(),
                                           source:    e, }
                      })? {
                StatementOutcome::Return(value) => return Ok(value),
                StatementOutcome::Value(value) => last = Some(value),
            }
        }

        last.ok_or(Error::EmptyExpression)
    }

    /// Evaluates a single statement.
    ///
    /// Assignments bind their value in the environment and propagate it.
    /// `return` yields its value and stops the session. A bare expression
    /// statement is bound to a synthetic statement-local name, read back
    /// through ordinary variable lookup, and the binding is discarded once
    /// the value has been recovered.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    /// - `index`: Position of the statement in the session, used to form
    ///   the synthetic name.
    ///
    /// # Returns
    /// The statement outcome: an ordinary value or an early return.
    pub fn eval_statement(&mut self,
                          statement: &Statement,
                          index: usize)
                          -> EvalResult<StatementOutcome> {
        match statement {
            Statement::Assignment { name, value } => {
                let value = self.eval(value)?;
                self.vars.insert(name.clone(), value.clone());
                Ok(StatementOutcome::Value(value))
            },
            Statement::Return { value } => Ok(StatementOutcome::Return(self.eval(value)?)),
            Statement::Expression { expr } => {
                let name = format!("__expr{index}");
                let value = self.eval(expr)?;
                self.vars.insert(name.clone(), value);

                let value = self.eval_variable(&name)?;
                self.vars.remove(&name);
                Ok(StatementOutcome::Value(value))
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches based on expression variant: literals, variable
    /// references, parenthesized groups, binary operations, and builtin
    /// calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`].
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => self.eval_literal(value),
            Expr::Variable { name } => self.eval_variable(name),
            Expr::Grouping { expr } => self.eval(expr),
            Expr::BinaryOp { left, op, right } => self.eval_binary_op(left, *op, right),
            Expr::FunctionCall { name, arguments } => self.eval_function_call(name, arguments),
        }
    }

    /// Evaluates a literal.
    ///
    /// Numeric literal text is parsed at the precision of the active mode;
    /// string literals become string values directly.
    fn eval_literal(&self, value: &LiteralValue) -> EvalResult<Value> {
        match value {
            LiteralValue::Number { text, is_int } => {
                Ok(Value::Number(Number::parse(text, *is_int, self.high_precision)?))
            },
            LiteralValue::Str(text) => Ok(Value::Str(text.clone())),
        }
    }

    /// Looks up a variable in the environment.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` for a name with no
    /// binding.
    pub(crate) fn eval_variable(&self, name: &str) -> EvalResult<Value> {
        self.vars
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }
}
