use std::fmt;

use crate::{NonTerminal, Terminal};

/// A grammar symbol: either a terminal or a nonterminal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum Symbol {
    Terminal(Terminal),
    NonTerminal(NonTerminal),
}

impl Symbol {
    pub fn terminal(self) -> Option<Terminal> {
        match self {
            Symbol::Terminal(terminal) => Some(terminal),
            Symbol::NonTerminal(_) => None,
        }
    }

    pub fn nonterminal(self) -> Option<NonTerminal> {
        match self {
            Symbol::Terminal(_) => None,
            Symbol::NonTerminal(nonterminal) => Some(nonterminal),
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }
}

impl From<Terminal> for Symbol {
    fn from(terminal: Terminal) -> Self {
        Symbol::Terminal(terminal)
    }
}

impl From<NonTerminal> for Symbol {
    fn from(nonterminal: NonTerminal) -> Self {
        Symbol::NonTerminal(nonterminal)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Symbol::Terminal(terminal) => fmt::Display::fmt(terminal, f),
            Symbol::NonTerminal(nonterminal) => fmt::Display::fmt(nonterminal, f),
        }
    }
}
