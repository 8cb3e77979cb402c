//! Definitions of the grammar type and its productions.

use std::fmt;

use crate::rule_builder::RuleBuilder;
use crate::{NonTerminal, Symbol, Terminal};

/// Context-free grammar over the SQL symbols.
///
/// Productions keep their insertion order, which is also the order of
/// alternatives for each nonterminal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grammar {
    /// The start symbol.
    start: NonTerminal,
    /// The array of productions.
    productions: Vec<Production>,
}

/// A production: one right-hand side alternative for a nonterminal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Production {
    /// The production's left-hand side symbol.
    pub lhs: NonTerminal,
    /// The production's right-hand side symbols. Empty for epsilon.
    pub rhs: Box<[Symbol]>,
}

/// Index of a production within its grammar.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct ProductionId(usize);

impl ProductionId {
    pub fn new(index: usize) -> Self {
        ProductionId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ProductionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

impl Production {
    /// Whether this is an epsilon production.
    pub fn is_epsilon(&self) -> bool {
        self.rhs.is_empty()
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ->", self.lhs)?;
        if self.rhs.is_empty() {
            return f.write_str(" ε");
        }
        for sym in &self.rhs[..] {
            write!(f, " {}", sym)?;
        }
        Ok(())
    }
}

impl Grammar {
    /// Creates an empty grammar with the given start symbol.
    pub fn new(start: NonTerminal) -> Self {
        Grammar {
            start,
            productions: vec![],
        }
    }

    /// Starts building productions for `lhs`.
    pub fn rule(&mut self, lhs: NonTerminal) -> RuleBuilder<'_> {
        RuleBuilder::new(self, lhs)
    }

    /// Adds a production and returns its id.
    pub fn add_production<S>(&mut self, lhs: NonTerminal, rhs: S) -> ProductionId
    where
        S: AsRef<[Symbol]>,
    {
        let id = ProductionId(self.productions.len());
        self.productions.push(Production {
            lhs,
            rhs: rhs.as_ref().into(),
        });
        id
    }

    /// Returns the start symbol.
    pub fn start(&self) -> NonTerminal {
        self.start
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }

    /// Returns the production with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id does not belong to this grammar.
    pub fn production(&self, id: ProductionId) -> &Production {
        &self.productions[id.0]
    }

    /// Iterates over all productions in insertion order.
    pub fn productions(&self) -> impl Iterator<Item = (ProductionId, &Production)> {
        self.productions
            .iter()
            .enumerate()
            .map(|(i, production)| (ProductionId(i), production))
    }

    /// Iterates over the alternatives of one nonterminal, in order.
    pub fn alternatives(
        &self,
        lhs: NonTerminal,
    ) -> impl Iterator<Item = (ProductionId, &Production)> {
        self.productions()
            .filter(move |(_, production)| production.lhs == lhs)
    }

    /// Terminals that begin some alternative of `lhs`, in order of
    /// alternatives.
    pub fn leading_terminals(&self, lhs: NonTerminal) -> impl Iterator<Item = Terminal> {
        self.alternatives(lhs)
            .filter_map(|(_, production)| production.rhs.first().and_then(|sym| sym.terminal()))
    }

    /// Nonterminals that are referenced, or are the start symbol, but have no
    /// productions.
    pub fn undefined_nonterminals(&self) -> Vec<NonTerminal> {
        let mut defined = [false; NonTerminal::COUNT];
        let mut used = [false; NonTerminal::COUNT];
        used[self.start.index()] = true;
        for production in &self.productions {
            defined[production.lhs.index()] = true;
            for nonterminal in production.rhs.iter().filter_map(|sym| sym.nonterminal()) {
                used[nonterminal.index()] = true;
            }
        }
        NonTerminal::ALL
            .iter()
            .copied()
            .filter(|nt| used[nt.index()] && !defined[nt.index()])
            .collect()
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for production in &self.productions {
            writeln!(f, "{}", production)?;
        }
        Ok(())
    }
}
