use deutschcode::{
    error::LexError,
    interpreter::lexer::{Token, tokenize},
};
use proptest::prelude::*;

fn toks(src: &str) -> Vec<Token> {
    tokenize(src).unwrap().into_iter().map(|(t, _)| t).collect()
}

const KEYWORDS: &[&str] = &["gib", "aus", "sei", "vom", "Typ", "Zahl", "funktion", "ende"];

#[test]
fn keywords() {
    assert_eq!(toks("gib aus sei vom Typ Zahl funktion ende"),
               vec![Token::Gib,
                    Token::Aus,
                    Token::Sei,
                    Token::Vom,
                    Token::Typ,
                    Token::Zahl,
                    Token::Funktion,
                    Token::Ende,
                    Token::Eof]);
}

#[test]
fn keywords_match_whole_words_only() {
    assert_eq!(toks("gibt Gib typ ausgabe"),
               vec![Token::Identifier("gibt".to_string()),
                    Token::Identifier("Gib".to_string()),
                    Token::Identifier("typ".to_string()),
                    Token::Identifier("ausgabe".to_string()),
                    Token::Eof]);
}

#[test]
fn punctuation() {
    assert_eq!(toks("= ( ) , . + - * /"),
               vec![Token::Equals,
                    Token::LParen,
                    Token::RParen,
                    Token::Comma,
                    Token::Dot,
                    Token::Plus,
                    Token::Minus,
                    Token::Star,
                    Token::Slash,
                    Token::Eof]);
}

#[test]
fn declaration_statement() {
    assert_eq!(toks("sei x = 2+3*4."),
               vec![Token::Sei,
                    Token::Identifier("x".to_string()),
                    Token::Equals,
                    Token::Number("2".to_string()),
                    Token::Plus,
                    Token::Number("3".to_string()),
                    Token::Star,
                    Token::Number("4".to_string()),
                    Token::Dot,
                    Token::Eof]);
}

#[test]
fn numbers_keep_their_text() {
    assert_eq!(toks("007"), vec![Token::Number("007".to_string()), Token::Eof]);
}

#[test]
fn fractions_are_not_numbers() {
    assert_eq!(toks("3.5"),
               vec![Token::Number("3".to_string()),
                    Token::Dot,
                    Token::Number("5".to_string()),
                    Token::Eof]);
}

#[test]
fn letters_and_digits_split() {
    assert_eq!(toks("x1"),
               vec![Token::Identifier("x".to_string()),
                    Token::Number("1".to_string()),
                    Token::Eof]);
}

#[test]
fn umlauts_are_letters() {
    assert_eq!(toks("größe Übermaß"),
               vec![Token::Identifier("größe".to_string()),
                    Token::Identifier("Übermaß".to_string()),
                    Token::Eof]);
}

#[test]
fn string_literals() {
    assert_eq!(toks("gib 'Hallo, Welt + 1' aus."),
               vec![Token::Gib,
                    Token::Text("Hallo, Welt + 1".to_string()),
                    Token::Aus,
                    Token::Dot,
                    Token::Eof]);
    assert_eq!(toks("''"), vec![Token::Text(String::new()), Token::Eof]);
}

#[test]
fn line_numbers() {
    let tokens = tokenize("sei x = 1.\n\ngib x aus.").unwrap();
    let lines: Vec<usize> = tokens.iter().map(|(_, line)| *line).collect();

    assert_eq!(lines, vec![1, 1, 1, 1, 1, 3, 3, 3, 3, 3]);
}

#[test]
fn multi_line_string_advances_line_counter() {
    let tokens = tokenize("gib 'eins\nzwei' aus.\nende").unwrap();
    let (last_real, line) = &tokens[tokens.len() - 2];

    assert_eq!(*last_real, Token::Ende);
    assert_eq!(*line, 3);
}

#[test]
fn multi_line_string_keeps_its_starting_line() {
    let tokens = tokenize("gib 'a\nb' aus.").unwrap();

    assert_eq!(tokens[1], (Token::Text("a\nb".to_string()), 1));
    assert_eq!(tokens[2], (Token::Aus, 2));
}

#[test]
fn unicode_whitespace_is_skipped() {
    assert_eq!(toks("gib\u{a0}1\u{2003}aus."),
               vec![Token::Gib, Token::Number("1".to_string()), Token::Aus, Token::Dot, Token::Eof]);
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(toks(""), vec![Token::Eof]);
    assert_eq!(toks(" \t\r\n "), vec![Token::Eof]);
}

#[test]
fn exactly_one_eof() {
    let tokens = toks("gib 1 aus.");
    assert_eq!(tokens.iter().filter(|t| **t == Token::Eof).count(), 1);
    assert_eq!(tokens.last(), Some(&Token::Eof));
}

#[test]
fn unterminated_string_is_error() {
    assert_eq!(tokenize("gib 'hello aus."),
               Err(LexError::UnterminatedString { line: 1 }));
}

#[test]
fn unexpected_character_is_error() {
    assert_eq!(tokenize("gib 1 aus.\nsei x = 2 # 3."),
               Err(LexError::UnexpectedCharacter { character: '#',
                                                   line:      2, }));
    assert!(matches!(tokenize("gib \"x\" aus."),
                     Err(LexError::UnexpectedCharacter { character: '"', .. })));
}

#[test]
fn token_display_matches_source() {
    assert_eq!(Token::Typ.to_string(), "Typ");
    assert_eq!(Token::Text("a b".to_string()).to_string(), "'a b'");
    assert_eq!(Token::Eof.to_string(), "end of input");
}

proptest! {
    #[test]
    fn digit_runs_are_single_numbers(digits in "[0-9]{1,40}") {
        prop_assert_eq!(toks(&digits), vec![Token::Number(digits.clone()), Token::Eof]);
    }

    #[test]
    fn non_keywords_are_single_identifiers(word in "[a-zA-Zäöüß]{1,16}") {
        prop_assume!(!KEYWORDS.contains(&word.as_str()));
        prop_assert_eq!(toks(&word), vec![Token::Identifier(word.clone()), Token::Eof]);
    }
}
