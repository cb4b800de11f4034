/// Lexing errors.
///
/// Raised while turning source text into tokens: characters that start no
/// token, and string literals that never close.
pub mod lex_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing statements:
/// unknown names, argument count mismatches, arithmetic failures and type
/// mismatches.
pub mod runtime_error;
/// Syntax errors.
///
/// Raised when a token does not fit the grammar at the current position,
/// including missing terminators and keywords.
pub mod syntax_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Any failure that aborts a run.
///
/// Every error is fatal: the first one stops interpretation, and output
/// written before it stays written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source could not be tokenized.
    Lex(LexError),
    /// A token did not match what the grammar requires.
    Syntax(SyntaxError),
    /// A well-formed statement failed while executing.
    Runtime(RuntimeError),
}

impl Error {
    /// The source line the error was detected on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line(),
            Self::Syntax(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
