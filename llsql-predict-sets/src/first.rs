//! FIRST sets.

use std::fmt;

use llsql_grammar::{Grammar, NonTerminal, Symbol, Terminal, TerminalSet};
use log::debug;

/// The FIRST set of a nonterminal or of a string of symbols.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct FirstSet {
    /// Terminals that can begin a derivation.
    pub terminals: TerminalSet,
    /// Whether the empty string can be derived.
    pub nullable: bool,
}

impl FirstSet {
    /// Constructs an empty, non-nullable set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the terminal can begin a derivation.
    pub fn contains(&self, terminal: Terminal) -> bool {
        self.terminals.contains(terminal)
    }
}

impl fmt::Display for FirstSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut terminals = self.terminals.iter().map(|t| t.name()).collect::<Vec<_>>();
        if self.nullable {
            terminals.push("ε");
        }
        write!(f, "{{{}}}", terminals.join(", "))
    }
}

/// FIRST sets of all nonterminals.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FirstSets {
    /// Indexed by nonterminal.
    map: Vec<FirstSet>,
}

impl FirstSets {
    /// Compute all FIRST sets of the grammar.
    ///
    /// For every production `A ⸬= α`, FIRST(A) gains the FIRST set of the
    /// string α. We repeat over all productions until no set grows. Sets only
    /// grow over a finite alphabet, so this terminates.
    pub fn new(grammar: &Grammar) -> Self {
        let mut this = FirstSets {
            map: vec![FirstSet::new(); NonTerminal::COUNT],
        };
        this.collect_from(grammar);
        this
    }

    /// Returns the FIRST set of a nonterminal.
    pub fn get(&self, nonterminal: NonTerminal) -> &FirstSet {
        &self.map[nonterminal.index()]
    }

    /// Whether the nonterminal derives the empty string.
    pub fn is_nullable(&self, nonterminal: NonTerminal) -> bool {
        self.get(nonterminal).nullable
    }

    /// Iterates over all nonterminals with their FIRST sets.
    pub fn iter(&self) -> impl Iterator<Item = (NonTerminal, &FirstSet)> {
        NonTerminal::ALL.into_iter().zip(self.map.iter())
    }

    /// Calculates a FIRST set for a string of symbols.
    ///
    /// Scans left to right. A terminal is added and stops the scan. A
    /// nonterminal adds its FIRST set, and the scan continues past it only
    /// if it is nullable. The string is nullable if the scan runs off its end.
    pub fn first_of_sequence(&self, string: &[Symbol]) -> FirstSet {
        let mut result = FirstSet::new();
        for &sym in string {
            match sym {
                Symbol::Terminal(terminal) => {
                    result.terminals.insert(terminal);
                    return result;
                }
                Symbol::NonTerminal(nonterminal) => {
                    let first_set = self.get(nonterminal);
                    result.terminals.union(&first_set.terminals);
                    if !first_set.nullable {
                        return result;
                    }
                }
            }
        }
        result.nullable = true;
        result
    }

    fn collect_from(&mut self, grammar: &Grammar) {
        let mut changed = true;
        let mut passes = 0;
        while changed {
            changed = false;
            passes += 1;
            for (_, production) in grammar.productions() {
                changed |= self.process_rule(production.lhs, &production.rhs[..]);
            }
        }
        debug!("FIRST sets converged after {} passes", passes);
    }

    fn process_rule(&mut self, lhs: NonTerminal, rhs: &[Symbol]) -> bool {
        let lookahead = self.first_of_sequence(rhs);
        let first_set = &mut self.map[lhs.index()];
        let mut changed = first_set.terminals.union(&lookahead.terminals);
        if lookahead.nullable && !first_set.nullable {
            first_set.nullable = true;
            changed = true;
        }
        changed
    }
}

impl fmt::Display for FirstSets {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (nonterminal, first_set) in self.iter() {
            writeln!(f, "FIRST({}) = {}", nonterminal, first_set)?;
        }
        Ok(())
    }
}
