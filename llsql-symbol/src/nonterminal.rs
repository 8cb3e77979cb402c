//! Nonterminal symbols.

use std::fmt;

/// A nonterminal symbol, expanded via productions.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum NonTerminal {
    Prog,
    Query,
    SelList,
    SelListRest,
    Tbl,
    WhereOpt,
    Cond,
    CondTail,
    Expr,
    RelOp,
    ValList,
    ValListRest,
    Val,
    SetList,
    SetListRest,
}

use self::NonTerminal::*;

impl NonTerminal {
    /// The number of nonterminals.
    pub const COUNT: usize = 15;

    /// All nonterminals, in index order.
    pub const ALL: [NonTerminal; NonTerminal::COUNT] = [
        Prog,
        Query,
        SelList,
        SelListRest,
        Tbl,
        WhereOpt,
        Cond,
        CondTail,
        Expr,
        RelOp,
        ValList,
        ValListRest,
        Val,
        SetList,
        SetListRest,
    ];

    /// Position of this nonterminal in [`NonTerminal::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`NonTerminal::index`].
    pub fn from_index(index: usize) -> Option<NonTerminal> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Prog => "Prog",
            Query => "Query",
            SelList => "SelList",
            SelListRest => "SelListRest",
            Tbl => "Tbl",
            WhereOpt => "WhereOpt",
            Cond => "Cond",
            CondTail => "CondTail",
            Expr => "Expr",
            RelOp => "RelOp",
            ValList => "ValList",
            ValListRest => "ValListRest",
            Val => "Val",
            SetList => "SetList",
            SetListRest => "SetListRest",
        }
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
