use logos::Logos;

use crate::error::LexError;

/// A token paired with the source line it starts on.
///
/// The interpreter consumes a slice of these through a
/// [`TokenCursor`](crate::interpreter::cursor::TokenCursor).
pub type Lexeme = (Token, usize);

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `gib`, starts a print statement.
    #[token("gib")]
    Gib,
    /// `aus`, closes a print statement.
    #[token("aus")]
    Aus,
    /// `sei`, starts a variable declaration.
    #[token("sei")]
    Sei,
    /// `vom`
    #[token("vom")]
    Vom,
    /// `Typ`
    #[token("Typ")]
    Typ,
    /// `Zahl`, the only type name.
    #[token("Zahl")]
    Zahl,
    /// `funktion`, starts a function definition.
    #[token("funktion")]
    Funktion,
    /// `ende`, closes a function body.
    #[token("ende")]
    Ende,
    /// Identifier tokens; variable or function names such as `summe` or
    /// `größe`. Any run of letters that is not a keyword.
    #[regex(r"\p{L}+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Numeric literal tokens such as `42`. The decimal text is kept as
    /// written; the evaluator widens it to a floating-point value.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// String literal tokens such as `'Hallo Welt'`, without the quotes.
    #[regex(r"'[^']*'", lex_text)]
    Text(String),
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`, the statement terminator.
    #[token(".")]
    Dot,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,

    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Any whitespace other than a line break, including no-break spaces.
    #[regex(r"[\p{White_Space}--\n]+", logos::skip)]
    Ignored,

    /// End of input. Never produced by the scanner itself; [`tokenize`]
    /// appends exactly one after the last real token.
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Extracts the body of a string literal and keeps the line counter in step
/// with any line breaks inside it.
fn lex_text(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.chars().filter(|&c| c == '\n').count();
    slice[1..slice.len() - 1].to_string()
}

/// Converts source text into the token sequence consumed by the interpreter.
///
/// Whitespace is skipped. Every produced token is paired with its line
/// number, and the sequence always ends with exactly one [`Token::Eof`].
///
/// # Errors
/// - [`LexError::UnterminatedString`] if a `'` has no closing partner.
/// - [`LexError::UnexpectedCharacter`] for any character that starts none
///   of the known token categories.
///
/// # Example
/// ```
/// use deutschcode::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("gib 42 aus.").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Gib,
///                 Token::Number("42".to_string()),
///                 Token::Aus,
///                 Token::Dot,
///                 Token::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Lexeme>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => {
                // String literals have already counted their own line breaks.
                let line = lexer.extras.line - lexer.slice().matches('\n').count();
                tokens.push((tok, line));
            },
            Err(()) => return Err(lex_error(lexer.slice(), lexer.extras.line)),
        }
    }

    tokens.push((Token::Eof, lexer.extras.line));
    Ok(tokens)
}

/// Classifies a slice the scanner could not match.
fn lex_error(slice: &str, line: usize) -> LexError {
    match slice.chars().next() {
        Some(character) if character != '\'' => {
            LexError::UnexpectedCharacter { character, line }
        },
        _ => LexError::UnterminatedString { line },
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gib => write!(f, "gib"),
            Self::Aus => write!(f, "aus"),
            Self::Sei => write!(f, "sei"),
            Self::Vom => write!(f, "vom"),
            Self::Typ => write!(f, "Typ"),
            Self::Zahl => write!(f, "Zahl"),
            Self::Funktion => write!(f, "funktion"),
            Self::Ende => write!(f, "ende"),
            Self::Identifier(text) | Self::Number(text) => write!(f, "{text}"),
            Self::Text(text) => write!(f, "'{text}'"),
            Self::Equals => write!(f, "="),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Dot => write!(f, "."),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::NewLine => writeln!(f),
            Self::Ignored => write!(f, " "),
            Self::Eof => write!(f, "end of input"),
        }
    }
}
