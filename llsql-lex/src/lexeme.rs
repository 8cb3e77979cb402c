use std::fmt;

/// Lexical class of a [`Lexeme`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum LexemeKind {
    /// A reserved word, in any case.
    Keyword,
    /// An identifier.
    Ident,
    /// An integer or decimal number.
    Number,
    /// A single-quoted string, quotes included.
    String,
    /// One of `, ; ( )`.
    Punct,
    /// An arithmetic or comparison operator, or `.`.
    Operator,
    /// A `/* */` or `--` comment.
    Comment,
    /// A single character that starts no other lexeme.
    Unknown,
}

impl LexemeKind {
    /// Name used when printing lexemes.
    pub fn name(self) -> &'static str {
        match self {
            LexemeKind::Keyword => "KEYWORD",
            LexemeKind::Ident => "ID",
            LexemeKind::Number => "NUM",
            LexemeKind::String => "STRING",
            LexemeKind::Punct => "PUNCT",
            LexemeKind::Operator => "OP",
            LexemeKind::Comment => "COMMENT",
            LexemeKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for LexemeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A piece of source text together with its class and starting position.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lexeme {
    /// Lexical class.
    pub kind: LexemeKind,
    /// Source text, verbatim.
    pub text: String,
    /// One-indexed line.
    pub line: u32,
    /// One-indexed column, counted in characters.
    pub column: u32,
}

impl Lexeme {
    /// Creates a lexeme.
    pub fn new(kind: LexemeKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Lexeme {
            kind,
            text: text.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.kind, self.text, self.line, self.column
        )
    }
}
