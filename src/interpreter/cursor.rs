use std::mem::discriminant;

use crate::{
    error::SyntaxError,
    interpreter::lexer::{Lexeme, Token},
};

/// Returned by the cursor whenever it reads past the end of its tokens.
static END_OF_INPUT: Lexeme = (Token::Eof, 0);

/// A read position inside a token sequence.
///
/// The cursor only moves forward and never moves past `Eof`: once it sits on
/// the end marker, [`advance`](Self::advance) keeps returning it.
#[derive(Debug, Clone)]
pub struct TokenCursor<'t> {
    tokens:   &'t [Lexeme],
    position: usize,
}

impl<'t> TokenCursor<'t> {
    /// Creates a cursor positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'t [Lexeme]) -> Self {
        Self { tokens,
               position: 0 }
    }

    /// The index of the current token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub fn peek(&self) -> &'t Lexeme {
        self.peek_nth(0)
    }

    /// Returns the token `n` positions ahead of the current one.
    #[must_use]
    pub fn peek_nth(&self, n: usize) -> &'t Lexeme {
        self.tokens.get(self.position + n).unwrap_or(&END_OF_INPUT)
    }

    /// The line of the current token.
    #[must_use]
    pub fn line(&self) -> usize {
        self.peek().1
    }

    /// Whether the cursor sits on the end marker.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        matches!(self.peek(), (Token::Eof, _))
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> &'t Lexeme {
        let lexeme = self.peek();
        if lexeme.0 != Token::Eof {
            self.position += 1;
        }
        lexeme
    }

    /// Consumes the current token if it has the same kind as `expected`.
    pub fn consume_if(&mut self, expected: &Token) -> bool {
        if discriminant(&self.peek().0) == discriminant(expected) {
            self.advance();
            return true;
        }
        false
    }

    /// Consumes the current token, which must have the same kind as
    /// `expected`.
    ///
    /// Only the kind is compared, so any identifier satisfies
    /// `Token::Identifier(String::new())`.
    ///
    /// # Errors
    /// `SyntaxError::UnexpectedToken` naming both tokens when the kinds
    /// differ. The cursor does not move in that case.
    pub fn expect(&mut self, expected: &Token) -> Result<&'t Lexeme, SyntaxError> {
        let (token, line) = self.peek();
        if discriminant(token) != discriminant(expected) {
            return Err(SyntaxError::UnexpectedToken { expected: format!("'{expected}'"),
                                                      found:    token.to_string(),
                                                      line:     *line, });
        }
        Ok(self.advance())
    }

    /// Consumes an identifier and returns its name.
    ///
    /// # Parameters
    /// - `what`: Describes the identifier's role for the error message, e.g.
    ///   `"a variable name"`.
    ///
    /// # Errors
    /// `SyntaxError::UnexpectedToken` if the current token is not an
    /// identifier.
    pub fn expect_identifier(&mut self, what: &str) -> Result<&'t str, SyntaxError> {
        match self.peek() {
            (Token::Identifier(name), _) => {
                self.advance();
                Ok(name.as_str())
            },
            (token, line) => Err(SyntaxError::UnexpectedToken { expected: what.to_string(),
                                                                found:    token.to_string(),
                                                                line:     *line, }),
        }
    }
}
