use std::str::Chars;

use log::debug;

use crate::{is_keyword, Lexeme, LexemeKind};

/// Splits SQL text into lexemes.
///
/// Whitespace is skipped. Every other character belongs to exactly one
/// lexeme, so lexing never fails.
pub struct Lexer<'a> {
    chars: Chars<'a>,
    line_no: u32,
    col_no: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            chars: input.chars(),
            line_no: 1,
            col_no: 1,
        }
    }

    /// Lexes all of `input`.
    pub fn tokenize(input: &str) -> Vec<Lexeme> {
        let lexemes: Vec<Lexeme> = Lexer::new(input).collect();
        debug!("lexed {} lexemes", lexemes.len());
        lexemes
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r' | '\n') = self.peek() {
            self.advance();
        }
    }

    fn eat(&mut self, ch: char) -> LexemeKind {
        match ch {
            ch if ch.is_alphabetic() || ch == '_' => {
                let start = self.chars.as_str();
                while self.peek().is_some_and(|ch| ch.is_alphanumeric() || ch == '_') {
                    self.advance();
                }
                if is_keyword(self.since(start)) {
                    LexemeKind::Keyword
                } else {
                    LexemeKind::Ident
                }
            }
            '0'..='9' => {
                self.eat_digits();
                if self.peek() == Some('.') && self.peek_second().is_some_and(|ch| ch.is_ascii_digit())
                {
                    self.advance();
                    self.eat_digits();
                }
                LexemeKind::Number
            }
            '\'' => {
                self.advance();
                loop {
                    match self.peek() {
                        None => break,
                        Some('\'') => {
                            self.advance();
                            if self.peek() == Some('\'') {
                                self.advance();
                            } else {
                                break;
                            }
                        }
                        Some(_) => self.advance(),
                    }
                }
                LexemeKind::String
            }
            '/' if self.peek_second() == Some('*') => {
                self.advance();
                self.advance();
                while let Some(ch) = self.peek() {
                    self.advance();
                    if ch == '*' && self.peek() == Some('/') {
                        self.advance();
                        break;
                    }
                }
                LexemeKind::Comment
            }
            '-' if self.peek_second() == Some('-') => {
                while self.peek().is_some_and(|ch| ch != '\n') {
                    self.advance();
                }
                LexemeKind::Comment
            }
            '<' | '>' | '!' | '=' if self.starts_with_compound_operator() => {
                self.advance();
                self.advance();
                LexemeKind::Operator
            }
            ',' | ';' | '(' | ')' => {
                self.advance();
                LexemeKind::Punct
            }
            '+' | '-' | '*' | '/' | '%' | '<' | '>' | '!' | '=' | '.' => {
                self.advance();
                LexemeKind::Operator
            }
            _ => {
                self.advance();
                LexemeKind::Unknown
            }
        }
    }

    fn starts_with_compound_operator(&self) -> bool {
        let rest = self.chars.as_str();
        ["<>", "<=", ">=", "!=", "=="]
            .iter()
            .any(|op| rest.starts_with(op))
    }

    fn eat_digits(&mut self) {
        while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            self.advance();
        }
    }

    fn since(&self, start: &'a str) -> &'a str {
        &start[..start.len() - self.chars.as_str().len()]
    }

    fn advance(&mut self) {
        match self.chars.next() {
            Some('\n') => {
                self.line_no += 1;
                self.col_no = 1;
            }
            Some(_) => {
                self.col_no += 1;
            }
            None => {}
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.as_str().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.chars.as_str().chars();
        chars.next();
        chars.next()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Lexeme> {
        self.skip_whitespace();
        let ch = self.peek()?;
        let (line, column) = (self.line_no, self.col_no);
        let start = self.chars.as_str();
        let kind = self.eat(ch);
        Some(Lexeme::new(kind, self.since(start), line, column))
    }
}
