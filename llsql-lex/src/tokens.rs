use llsql_symbol::{Terminal, Token};

use crate::{Lexeme, LexemeKind, Lexer};

/// Maps lexemes to the terminal stream.
///
/// Comments are dropped. Keywords and symbols without a terminal of their
/// own become [`Terminal::Unrecognized`], keeping their position so the
/// parser can point at them. The stream always ends with one end-of-input
/// token placed right after the last kept lexeme.
pub fn to_tokens(lexemes: &[Lexeme]) -> Vec<Token> {
    let mut tokens: Vec<Token> = lexemes
        .iter()
        .filter(|lexeme| lexeme.kind != LexemeKind::Comment)
        .map(to_token)
        .collect();
    let eof = match tokens.last() {
        Some(last) => Token::eof(last.line, last.column + last.text.chars().count() as u32),
        None => Token::eof(1, 1),
    };
    tokens.push(eof);
    tokens
}

/// Lexes `input` and maps the result with [`to_tokens`].
pub fn tokenize(input: &str) -> Vec<Token> {
    to_tokens(&Lexer::tokenize(input))
}

fn to_token(lexeme: &Lexeme) -> Token {
    let (terminal, text) = match lexeme.kind {
        LexemeKind::Keyword => (
            Terminal::from_keyword(&lexeme.text).unwrap_or(Terminal::Unrecognized),
            lexeme.text.to_ascii_uppercase(),
        ),
        LexemeKind::Ident => (Terminal::Id, lexeme.text.clone()),
        LexemeKind::Number => (Terminal::Num, lexeme.text.clone()),
        LexemeKind::String => (Terminal::Str, lexeme.text.clone()),
        LexemeKind::Punct | LexemeKind::Operator => (
            Terminal::from_literal(&lexeme.text).unwrap_or(Terminal::Unrecognized),
            lexeme.text.clone(),
        ),
        LexemeKind::Comment | LexemeKind::Unknown => {
            (Terminal::Unrecognized, lexeme.text.clone())
        }
    };
    Token::new(terminal, text, lexeme.line, lexeme.column)
}
