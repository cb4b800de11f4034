use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::Token,
        value::Value,
    },
};

/// The four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Maps an operator token to its operator, or `None` for other tokens.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            _ => None,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
        }
    }
}

impl Context<'_> {
    /// Evaluates an arithmetic operation between two values.
    ///
    /// Both operands must be numbers; text on either side is a type error. Division by zero is checked
    /// explicitly, and any result that is not finite is rejected instead of
    /// propagating infinities.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use deutschcode::interpreter::{
    ///     evaluator::{binary::BinaryOperator, core::Context},
    ///     value::Value,
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Div,
    ///                                   &Value::Number(7.0),
    ///                                   &Value::Number(2.0),
    ///                                   1).unwrap();
    /// assert_eq!(result, Value::Number(3.5));
    ///
    /// assert!(Context::eval_binary(BinaryOperator::Div,
    ///                              &Value::Number(1.0),
    ///                              &Value::Number(0.0),
    ///                              1).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let a = left.as_number(line)?;
        let b = right.as_number(line)?;

        let result = match op {
            Add => a + b,
            Sub => a - b,
            Mul => a * b,
            Div => {
                if b == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line }.into());
                }
                a / b
            },
        };

        if !result.is_finite() {
            return Err(RuntimeError::Overflow { line }.into());
        }

        Ok(Value::Number(result))
    }
}
