//! FOLLOW sets.

use std::fmt;

use llsql_grammar::{Grammar, NonTerminal, Symbol, Terminal, TerminalSet};
use log::debug;

use crate::FirstSets;

/// FOLLOW sets.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FollowSets {
    /// Mapping from nonterminals to FOLLOW sets, indexed by nonterminal.
    map: Vec<TerminalSet>,
}

impl FollowSets {
    /// Compute all FOLLOW sets of the grammar.
    ///
    /// FOLLOW of the start symbol contains the end of input. For every
    /// occurrence `A ⸬= α B β`, FOLLOW(B) gains FIRST(β), and also FOLLOW(A)
    /// when β is nullable. Each production is walked right to left while
    /// carrying the set of terminals that may follow the current position.
    pub fn new(grammar: &Grammar, first_sets: &FirstSets) -> Self {
        let mut this = FollowSets {
            map: vec![TerminalSet::new(); NonTerminal::COUNT],
        };
        this.map[grammar.start().index()].insert(Terminal::Eof);

        let mut changed = true;
        let mut passes = 0;
        while changed {
            changed = false;
            passes += 1;
            for (_, production) in grammar.productions() {
                let mut follow_set = this.map[production.lhs.index()].clone();

                for &sym in production.rhs.iter().rev() {
                    match sym {
                        Symbol::Terminal(terminal) => {
                            follow_set = TerminalSet::new();
                            follow_set.insert(terminal);
                        }
                        Symbol::NonTerminal(nonterminal) => {
                            changed |= this.map[nonterminal.index()].union(&follow_set);

                            let first_set = first_sets.get(nonterminal);
                            if !first_set.nullable {
                                follow_set = TerminalSet::new();
                            }
                            follow_set.union(&first_set.terminals);
                        }
                    }
                }
            }
        }
        debug!("FOLLOW sets converged after {} passes", passes);

        this
    }

    /// Returns the FOLLOW set of a nonterminal.
    pub fn get(&self, nonterminal: NonTerminal) -> &TerminalSet {
        &self.map[nonterminal.index()]
    }

    /// Iterates over all nonterminals with their FOLLOW sets.
    pub fn iter(&self) -> impl Iterator<Item = (NonTerminal, &TerminalSet)> {
        NonTerminal::ALL.into_iter().zip(self.map.iter())
    }
}

impl fmt::Display for FollowSets {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (nonterminal, follow_set) in self.iter() {
            writeln!(f, "FOLLOW({}) = {}", nonterminal, follow_set)?;
        }
        Ok(())
    }
}
