/// Represents a literal value in an expression.
///
/// `LiteralValue` covers the raw constants that can appear directly in
/// source text: numeric literals and string literals. Numeric literals keep
/// their original text so the evaluator can parse them at the precision the
/// active mode calls for; the lexer only records whether the literal looked
/// like an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    /// A numeric literal, stored as its raw source text.
    Number {
        /// The literal text exactly as written (sign included when folded).
        text:   String,
        /// Whether the literal had no fractional or exponent part.
        is_int: bool,
    },
    /// A string literal, escape-decoded at lex time.
    Str(String),
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every expression form of the language: literals, variable
/// references, parenthesized groups, binary operations, and builtin function
/// calls. A tree is built once per statement by the parser and is immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number or string).
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A parenthesized expression.
    Grouping {
        /// The wrapped expression.
        expr: Box<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Builtin function call expression (e.g. `sin(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
    },
}

/// Represents a single statement of an input session.
///
/// Statements are the units produced by splitting the input on top-level
/// `;` separators and parsing each segment.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable assignment binding a name to an expression.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
    },
    /// A `return` statement ending the session with its value.
    Return {
        /// The expression whose value becomes the session result.
        value: Expr,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}

/// Represents a binary operator.
///
/// `Pow` is written `^` in source text. The token shape is borrowed from
/// bitwise XOR but the operator always means "raise to power"; there is no
/// bitwise arithmetic in the language.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition, or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "^",
        };
        write!(f, "{operator}")
    }
}
