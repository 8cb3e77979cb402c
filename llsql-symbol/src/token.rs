//! The terminal stream consumed by the analyzers.

use std::fmt;

use crate::Terminal;

/// One element of the terminal stream, as produced by a tokenizer.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    /// The terminal kind of this token.
    pub terminal: Terminal,
    /// Literal text, kept for diagnostics and syntax tree leaves.
    pub text: String,
    /// Line where the token starts.
    ///
    /// One-indexed.
    pub line: u32,
    /// Column where the token starts.
    ///
    /// One-indexed.
    pub column: u32,
}

impl Token {
    pub fn new(terminal: Terminal, text: impl Into<String>, line: u32, column: u32) -> Self {
        Token {
            terminal,
            text: text.into(),
            line,
            column,
        }
    }

    /// Creates an end-of-input marker at the given position.
    pub fn eof(line: u32, column: u32) -> Self {
        Token::new(Terminal::Eof, "$", line, column)
    }

    pub fn is_eof(&self) -> bool {
        self.terminal == Terminal::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.terminal, self.text)
    }
}
