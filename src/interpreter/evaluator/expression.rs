use crate::{
    error::{RuntimeError, SyntaxError},
    interpreter::{
        cursor::TokenCursor,
        evaluator::{
            binary::BinaryOperator,
            core::{Context, EvalResult},
        },
        lexer::Token,
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates an expression starting at the cursor.
    ///
    /// This is the entry point for expression evaluation. It begins at the
    /// lowest-precedence level, addition, and descends through the
    /// precedence hierarchy. Operators are left-associative.
    ///
    /// Grammar:
    /// ```text
    ///     expression := term (("+" | "-") term)*
    ///     term       := factor (("*" | "/") factor)*
    ///     factor     := NUMBER | IDENTIFIER | STRING
    /// ```
    /// There is no unary minus and no grouping with parentheses.
    ///
    /// # Example
    /// ```
    /// use deutschcode::interpreter::{
    ///     cursor::TokenCursor, evaluator::core::Context, lexer::tokenize, value::Value,
    /// };
    ///
    /// let tokens = tokenize("2 + 3 * 4").unwrap();
    /// let mut sink = std::io::sink();
    /// let context = Context::new(&mut sink);
    ///
    /// let value = context.eval_expression(&mut TokenCursor::new(&tokens)).unwrap();
    /// assert_eq!(value, Value::Number(14.0));
    /// ```
    pub fn eval_expression(&self, cursor: &mut TokenCursor<'_>) -> EvalResult<Value> {
        let mut left = self.eval_term(cursor)?;
        loop {
            let (token, line) = cursor.peek();
            if let Some(op) = BinaryOperator::from_token(token)
               && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            {
                cursor.advance();
                let right = self.eval_term(cursor)?;
                left = Self::eval_binary(op, &left, &right, *line)?;
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Evaluates multiplication-level expressions.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    fn eval_term(&self, cursor: &mut TokenCursor<'_>) -> EvalResult<Value> {
        let mut left = self.eval_factor(cursor)?;
        loop {
            let (token, line) = cursor.peek();
            if let Some(op) = BinaryOperator::from_token(token)
               && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
            {
                cursor.advance();
                let right = self.eval_factor(cursor)?;
                left = Self::eval_binary(op, &left, &right, *line)?;
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Evaluates a single operand: a number literal, a variable or a string
    /// literal.
    ///
    /// # Errors
    /// - `UnknownVariable` if an identifier is not defined.
    /// - `NumberOutOfRange` if a literal does not fit a finite `f64`.
    /// - `UnexpectedToken` for any other token.
    fn eval_factor(&self, cursor: &mut TokenCursor<'_>) -> EvalResult<Value> {
        let (token, line) = cursor.peek();
        let value = match token {
            Token::Number(digits) => Value::Number(parse_number(digits, *line)?),
            Token::Identifier(name) => {
                self.variables
                    .get(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                   line: *line, })?
            },
            Token::Text(text) => Value::Text(text.clone()),
            _ => {
                return Err(SyntaxError::UnexpectedToken { expected: "a number, a variable or a string".to_string(),
                                                          found:    token.to_string(),
                                                          line:     *line, }.into());
            },
        };

        cursor.advance();
        Ok(value)
    }
}

/// Widens a digit run to `f64`.
///
/// Digit runs always parse, but very long ones overflow to infinity, which
/// is rejected.
fn parse_number(digits: &str, line: usize) -> Result<f64, RuntimeError> {
    digits.parse::<f64>()
          .ok()
          .filter(|n| n.is_finite())
          .ok_or_else(|| RuntimeError::NumberOutOfRange { literal: digits.to_string(),
                                                          line })
}
