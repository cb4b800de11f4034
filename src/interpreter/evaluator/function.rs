use tracing::debug;

use crate::{
    error::{RuntimeError, SyntaxError},
    interpreter::{
        cursor::TokenCursor,
        environment::FunctionDef,
        evaluator::core::{Context, EvalResult},
        lexer::{Lexeme, Token},
        value::Value,
    },
};

impl Context<'_> {
    /// Executes a function definition.
    ///
    /// Syntax:
    /// ```text
    ///     funktion <name>(<p1>, <p2>, ...) <statements> ende.
    /// ```
    /// The body is not run here. Its tokens are stored and interpreted anew
    /// on every call. A later definition with the same name replaces this
    /// one. The `.` after `ende` is optional.
    ///
    /// # Errors
    /// - `UnexpectedToken` if the name or parameter list is malformed.
    /// - `UnexpectedEndOfInput` if no matching `ende` follows.
    pub(crate) fn exec_function_definition(&mut self,
                                           cursor: &mut TokenCursor<'_>)
                                           -> EvalResult<()> {
        let (_, line) = cursor.expect(&Token::Funktion)?;
        let name = cursor.expect_identifier("a function name after 'funktion'")?;

        cursor.expect(&Token::LParen)?;
        let params = self.parse_comma_separated(cursor, |_, cursor| {
                             Ok(cursor.expect_identifier("a parameter name")?.to_string())
                         })?;

        let body = capture_body(cursor, name)?;
        cursor.consume_if(&Token::Dot);

        debug!(name, params = ?params, body_tokens = body.len() - 1, "defined function");
        self.functions.define(FunctionDef { name: name.to_string(),
                                            params,
                                            body,
                                            line: *line });
        Ok(())
    }

    /// Executes a call statement: `<name>(<arg1>, <arg2>, ...).`
    ///
    /// Arguments are evaluated left to right in the caller's environment
    /// before the function is looked up. The trailing `.` is optional.
    pub(crate) fn exec_call(&mut self, cursor: &mut TokenCursor<'_>) -> EvalResult<()> {
        let line = cursor.line();
        let name = cursor.expect_identifier("a function name")?;

        cursor.expect(&Token::LParen)?;
        let arguments = self.parse_comma_separated(cursor, |context, cursor| {
                                context.eval_expression(cursor)
                            })?;
        cursor.consume_if(&Token::Dot);

        self.call_function(name, arguments, line)
    }

    /// Runs a user-defined function.
    ///
    /// The body runs in a fresh context whose environment is a copy of the
    /// caller's with the parameters bound to `arguments`, and whose registry
    /// is a copy of the caller's. Nothing the body does to either copy is
    /// visible to the caller afterwards. Output goes to the caller's sink.
    ///
    /// # Errors
    /// - `UnknownFunction` if no function has this name.
    /// - `ArgumentCountMismatch` if the argument count differs from the
    ///   parameter count.
    /// - `CallDepthExceeded` if the call would nest deeper than
    ///   `max_call_depth`.
    /// - Any error raised by the body.
    #[tracing::instrument(level = "debug", skip(self, arguments), fields(argc = arguments.len()))]
    pub fn call_function(&mut self,
                         name: &str,
                         arguments: Vec<Value>,
                         line: usize)
                         -> EvalResult<()> {
        let function =
            self.functions
                .get(name)
                .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                               line })?;

        if arguments.len() != function.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: function.params.len(),
                                                             found: arguments.len(),
                                                             line }.into());
        }

        if self.depth >= self.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded { limit: self.max_call_depth,
                                                         line }.into());
        }

        let mut callee = Context { variables:      self.variables
                                                       .bind_parameters(&function.params,
                                                                        arguments),
                                   functions:      self.functions.clone(),
                                   max_call_depth: self.max_call_depth,
                                   depth:          self.depth + 1,
                                   out:            &mut *self.out, };
        debug!(depth = callee.depth,
               defined_on = function.line,
               variables = callee.variables.len(),
               "calling function");

        callee.interpret(&function.body)
    }

    /// Parses a parenthesised, comma-separated list after its `(`.
    ///
    /// Shared by parameter lists and argument lists. An immediate `)` yields
    /// an empty list; otherwise `parse_item` is called for each element,
    /// which must be followed by `,` or `)`.
    ///
    /// Grammar (simplified): `list := ")" | item ("," item)* ")"`
    ///
    /// # Errors
    /// - `UnexpectedToken` for anything other than `,` or `)` after an item.
    /// - Propagates errors from `parse_item`.
    fn parse_comma_separated<'t, T>(&mut self,
                                    cursor: &mut TokenCursor<'t>,
                                    mut parse_item: impl FnMut(&mut Self,
                                                 &mut TokenCursor<'t>)
                                                 -> EvalResult<T>)
                                    -> EvalResult<Vec<T>> {
        let mut items = Vec::new();
        if cursor.consume_if(&Token::RParen) {
            return Ok(items);
        }

        loop {
            items.push(parse_item(self, cursor)?);
            match cursor.advance() {
                (Token::Comma, _) => {},
                (Token::RParen, _) => break,
                (token, line) => {
                    return Err(SyntaxError::UnexpectedToken { expected: "',' or ')'".to_string(),
                                                              found:    token.to_string(),
                                                              line:     *line, }.into());
                },
            }
        }

        Ok(items)
    }
}

/// Collects the tokens of a function body up to its matching `ende`.
///
/// Nested `funktion ... ende` pairs are kept inside the body. The `ende`
/// itself is consumed but not stored; an `Eof` is appended instead so the
/// body can be interpreted on its own.
///
/// # Errors
/// `UnexpectedEndOfInput` if the input ends before the matching `ende`.
fn capture_body(cursor: &mut TokenCursor<'_>, name: &str) -> EvalResult<Vec<Lexeme>> {
    let mut body = Vec::new();
    let mut nesting = 0usize;

    loop {
        let (token, line) = cursor.peek();
        match token {
            Token::Eof => {
                return Err(SyntaxError::UnexpectedEndOfInput { expected: format!("'ende' closing function '{name}'"),
                                                               line:     *line, }.into());
            },
            Token::Ende if nesting == 0 => {
                cursor.advance();
                body.push((Token::Eof, *line));
                return Ok(body);
            },
            Token::Ende => nesting -= 1,
            Token::Funktion => nesting += 1,
            _ => {},
        }
        body.push(cursor.advance().clone());
    }
}
