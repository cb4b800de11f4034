use std::io::Write;

use tracing::trace;

use crate::{
    error::{Error, SyntaxError},
    interpreter::{
        cursor::TokenCursor,
        environment::{Environment, FunctionRegistry},
        lexer::{Lexeme, Token},
    },
};

/// Result type used by the evaluator.
///
/// Evaluation runs in a single pass over the tokens, so any function may
/// fail with either a syntax or a runtime error.
pub type EvalResult<T> = Result<T, Error>;

/// Default limit for nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 256;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the variable environment, the
/// user-defined functions and the sink that `gib` statements write to.
///
/// ## Usage
///
/// A `Context` is created once per run and fed the complete token sequence
/// through [`interpret`](Self::interpret). Every function call builds a new
/// `Context` for the body that shares the sink but owns copies of the
/// environment and registry.
pub struct Context<'out> {
    /// Variables visible to the statements being run.
    pub variables:      Environment,
    /// Functions callable from the statements being run.
    pub functions:      FunctionRegistry,
    /// Maximum nesting of function calls before a run is aborted.
    pub max_call_depth: usize,
    pub(crate) depth:   usize,
    pub(crate) out:     &'out mut dyn Write,
}

impl<'out> Context<'out> {
    /// Creates a new evaluation context with an empty environment and no
    /// user-defined functions, writing printed lines to `out`.
    #[must_use]
    pub fn new(out: &'out mut dyn Write) -> Self {
        Self { variables: Environment::new(),
               functions: FunctionRegistry::new(),
               max_call_depth: DEFAULT_MAX_CALL_DEPTH,
               depth: 0,
               out }
    }

    /// Replaces the nested call limit.
    #[must_use]
    pub fn with_max_call_depth(mut self, limit: usize) -> Self {
        self.max_call_depth = limit;
        self
    }

    /// Runs every statement in `tokens` until the end marker.
    ///
    /// The first error stops the run; lines already printed stay printed.
    ///
    /// # Example
    /// ```
    /// use deutschcode::interpreter::{evaluator::core::Context, lexer::tokenize};
    ///
    /// let tokens = tokenize("sei x = 2 + 3 * 4. gib x aus.").unwrap();
    /// let mut out = Vec::new();
    ///
    /// Context::new(&mut out).interpret(&tokens).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "14\n");
    /// ```
    pub fn interpret(&mut self, tokens: &[Lexeme]) -> EvalResult<()> {
        let mut cursor = TokenCursor::new(tokens);

        while !cursor.is_at_end() {
            self.exec_statement(&mut cursor)?;
        }

        Ok(())
    }

    /// Executes the statement starting at the cursor.
    ///
    /// Dispatch looks only at the leading token (and, for calls, the one
    /// after it):
    /// - `sei` declares a variable,
    /// - `gib` prints,
    /// - `funktion` defines a function,
    /// - an identifier followed by `(` calls a function.
    ///
    /// # Errors
    /// `SyntaxError::UnrecognizedStatement` for any other leading token, plus
    /// whatever the statement handler reports.
    pub fn exec_statement(&mut self, cursor: &mut TokenCursor<'_>) -> EvalResult<()> {
        let (token, line) = cursor.peek();
        trace!(line, token = %token, position = cursor.position(), "statement");

        match token {
            Token::Sei => self.exec_declaration(cursor),
            Token::Gib => self.exec_print(cursor),
            Token::Funktion => self.exec_function_definition(cursor),
            Token::Identifier(_) if matches!(cursor.peek_nth(1), (Token::LParen, _)) => {
                self.exec_call(cursor)
            },
            _ => Err(SyntaxError::UnrecognizedStatement { token: token.to_string(),
                                                          line:  *line, }.into()),
        }
    }
}
