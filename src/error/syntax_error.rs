#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors where the token stream does not fit the grammar.
pub enum SyntaxError {
    /// Found a token other than the one the grammar requires here.
    UnexpectedToken {
        /// What the grammar expected, e.g. `'.'` or `a variable name`.
        expected: String,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A statement starts with a token that begins no statement.
    UnrecognizedStatement {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input in the middle of a construct.
    UnexpectedEndOfInput {
        /// What was still missing.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl SyntaxError {
    /// The source line the error was detected on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnrecognizedStatement { line, .. }
            | Self::UnexpectedEndOfInput { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, line } => {
                write!(f, "Error on line {line}: Expected {expected}, found '{found}'.")
            },
            Self::UnrecognizedStatement { token, line } => write!(f,
                                                                  "Error on line {line}: Unrecognized statement starting with '{token}'."),
            Self::UnexpectedEndOfInput { expected, line } => write!(f,
                                                                    "Error on line {line}: Unexpected end of input, expected {expected}."),
        }
    }
}

impl std::error::Error for SyntaxError {}
