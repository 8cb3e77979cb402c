//! Grammar rules can be built with the builder pattern.

use crate::{Grammar, NonTerminal, Symbol};

/// The rule builder.
pub struct RuleBuilder<'a> {
    lhs: NonTerminal,
    grammar: &'a mut Grammar,
}

impl<'a> RuleBuilder<'a> {
    /// Creates a rule builder.
    pub fn new(grammar: &'a mut Grammar, lhs: NonTerminal) -> Self {
        RuleBuilder { lhs, grammar }
    }

    /// Starts building a new rule with the given LHS.
    pub fn rule(mut self, lhs: NonTerminal) -> Self {
        self.lhs = lhs;
        self
    }

    /// Adds a rule alternative to the grammar.
    pub fn rhs<S>(self, syms: S) -> Self
    where
        S: AsRef<[Symbol]>,
    {
        self.grammar.add_production(self.lhs, syms);
        self
    }

    /// Adds an epsilon alternative to the grammar.
    pub fn epsilon(self) -> Self {
        self.rhs(rhs![])
    }
}
