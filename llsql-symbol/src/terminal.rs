//! Terminal symbols.

use std::fmt;

/// A terminal symbol, matched directly against input.
///
/// The order of variants is significant: it is the column order of the
/// prediction table.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum Terminal {
    /// `SELECT`
    Select,
    /// `FROM`
    From,
    /// `WHERE`
    Where,
    /// `INSERT`
    Insert,
    /// `INTO`
    Into,
    /// `VALUES`
    Values,
    /// `UPDATE`
    Update,
    /// `SET`
    Set,
    /// `DELETE`
    Delete,
    /// `CREATE`
    Create,
    /// `AND`
    And,
    /// `OR`
    Or,
    /// Identifier class.
    Id,
    /// Number class.
    Num,
    /// String class.
    Str,
    /// `*`
    Star,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `=`
    Eq,
    /// `<>`
    LtGt,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `!=`
    BangEq,
    /// End of input.
    Eof,
    /// Any lexeme without a terminal of its own. No production mentions it.
    Unrecognized,
}

use self::Terminal::*;

impl Terminal {
    /// The number of terminals.
    pub const COUNT: usize = 29;

    /// All terminals, in index order.
    pub const ALL: [Terminal; Terminal::COUNT] = [
        Select,
        From,
        Where,
        Insert,
        Into,
        Values,
        Update,
        Set,
        Delete,
        Create,
        And,
        Or,
        Id,
        Num,
        Str,
        Star,
        Comma,
        Semicolon,
        LParen,
        RParen,
        Eq,
        LtGt,
        Lt,
        Gt,
        LtEq,
        GtEq,
        BangEq,
        Eof,
        Unrecognized,
    ];

    const KEYWORDS: [Terminal; 12] = [
        Select, From, Where, Insert, Into, Values, Update, Set, Delete, Create, And, Or,
    ];

    const LITERALS: [Terminal; 12] = [
        Star, Comma, Semicolon, LParen, RParen, Eq, LtGt, Lt, Gt, LtEq, GtEq, BangEq,
    ];

    /// Position of this terminal in [`Terminal::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Terminal::index`].
    pub fn from_index(index: usize) -> Option<Terminal> {
        Self::ALL.get(index).copied()
    }

    /// The name used in diagnostics: the keyword in upper case, the class name,
    /// or the punctuation literal.
    pub fn name(self) -> &'static str {
        match self {
            Select => "SELECT",
            From => "FROM",
            Where => "WHERE",
            Insert => "INSERT",
            Into => "INTO",
            Values => "VALUES",
            Update => "UPDATE",
            Set => "SET",
            Delete => "DELETE",
            Create => "CREATE",
            And => "AND",
            Or => "OR",
            Id => "ID",
            Num => "NUM",
            Str => "STRING",
            Star => "*",
            Comma => ",",
            Semicolon => ";",
            LParen => "(",
            RParen => ")",
            Eq => "=",
            LtGt => "<>",
            Lt => "<",
            Gt => ">",
            LtEq => "<=",
            GtEq => ">=",
            BangEq => "!=",
            Eof => "EOF",
            Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Looks up a keyword terminal. Matching ignores ASCII case.
    pub fn from_keyword(word: &str) -> Option<Terminal> {
        Self::KEYWORDS
            .iter()
            .copied()
            .find(|keyword| keyword.name().eq_ignore_ascii_case(word))
    }

    /// Looks up a punctuation or operator terminal by its literal text.
    pub fn from_literal(literal: &str) -> Option<Terminal> {
        Self::LITERALS
            .iter()
            .copied()
            .find(|terminal| terminal.name() == literal)
    }

    /// Whether this terminal is a keyword.
    pub fn is_keyword(self) -> bool {
        Self::KEYWORDS.contains(&self)
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
