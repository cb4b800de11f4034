use tracing::debug;

use crate::{
    error::{RuntimeError, SyntaxError},
    interpreter::{
        cursor::TokenCursor,
        evaluator::core::{Context, EvalResult},
        lexer::Token,
        value::Value,
    },
};

impl Context<'_> {
    /// Executes a variable declaration.
    ///
    /// Two forms are accepted:
    /// ```text
    ///     sei <name> = <expression>.
    ///     sei <name> vom Typ <type>.
    /// ```
    /// The first stores the evaluated expression. The second stores `0`
    /// whatever type is named. An existing variable of the same name is
    /// overwritten.
    ///
    /// # Errors
    /// - `UnexpectedToken` if the name, the `=`/`vom Typ` clause, the type
    ///   name or the terminating `.` is missing.
    /// - Propagates any errors from evaluating the expression.
    pub(crate) fn exec_declaration(&mut self, cursor: &mut TokenCursor<'_>) -> EvalResult<()> {
        cursor.expect(&Token::Sei)?;
        let name = cursor.expect_identifier("a variable name after 'sei'")?;

        match cursor.peek() {
            (Token::Equals, _) => {
                cursor.advance();
                let value = self.eval_expression(cursor)?;
                debug!(name, value = %value, "assigned variable");
                self.variables.define(name, value);
            },
            (Token::Vom, _) => {
                cursor.advance();
                cursor.expect(&Token::Typ)?;
                let type_name = match cursor.advance() {
                    (Token::Zahl, _) => "Zahl",
                    (Token::Identifier(type_name), _) => type_name.as_str(),
                    (token, line) => {
                        return Err(SyntaxError::UnexpectedToken { expected: "a type name after 'vom Typ'".to_string(),
                                                                  found:    token.to_string(),
                                                                  line:     *line, }.into());
                    },
                };
                debug!(name, type_name, "declared variable");
                self.variables.define(name, Value::Number(0.0));
            },
            (token, line) => {
                return Err(SyntaxError::UnexpectedToken { expected: format!("'=' or 'vom Typ' after '{name}'"),
                                                          found:    token.to_string(),
                                                          line:     *line, }.into());
            },
        }

        cursor.expect(&Token::Dot)?;
        Ok(())
    }

    /// Executes a print statement: `gib <expression> aus.`
    ///
    /// The value is written to the output sink, followed by a line break,
    /// before the closing `aus .` is checked, so a malformed ending still
    /// prints.
    ///
    /// # Errors
    /// - `UnexpectedToken` if `aus` or `.` is missing.
    /// - `RuntimeError::Output` if the sink rejects the write.
    /// - Propagates any errors from evaluating the expression.
    pub(crate) fn exec_print(&mut self, cursor: &mut TokenCursor<'_>) -> EvalResult<()> {
        let (_, line) = cursor.expect(&Token::Gib)?;
        let value = self.eval_expression(cursor)?;

        writeln!(self.out, "{value}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                                         line:    *line, })?;

        cursor.expect(&Token::Aus)?;
        cursor.expect(&Token::Dot)?;
        Ok(())
    }
}
