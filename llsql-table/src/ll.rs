//! The LL grammar class.

use std::collections::BTreeMap;

use llsql_grammar::{Grammar, NonTerminal};

use crate::PredictionTable;

/// Container for classifying nonterminals as LL(1) or context-free.
#[derive(Debug, Eq, PartialEq)]
pub struct LlClassification {
    classes: BTreeMap<NonTerminal, LlNonterminalClass>,
}

/// A nonterminal class.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LlNonterminalClass {
    /// LL(1) class.
    Ll1,
    /// Context-free class.
    ContextFree,
}

impl PredictionTable {
    /// Classifies nonterminals as LL(1) or context-free.
    ///
    /// A nonterminal with a conflict in its row is context-free, and so is any
    /// nonterminal with an alternative that mentions a context-free one.
    pub fn classify(&self, grammar: &Grammar) -> LlClassification {
        let mut result = LlClassification {
            classes: BTreeMap::new(),
        };
        for (_, production) in grammar.productions() {
            result
                .classes
                .entry(production.lhs)
                .or_insert(LlNonterminalClass::Ll1);
        }
        for conflict in self.conflicts() {
            result
                .classes
                .insert(conflict.nonterminal, LlNonterminalClass::ContextFree);
        }
        let mut changed = true;
        while changed {
            changed = false;
            for (_, production) in grammar.productions() {
                if result.is_context_free(production.lhs) {
                    continue;
                }
                let inherits = production
                    .rhs
                    .iter()
                    .filter_map(|sym| sym.nonterminal())
                    .any(|nonterminal| result.is_context_free(nonterminal));
                if inherits {
                    result
                        .classes
                        .insert(production.lhs, LlNonterminalClass::ContextFree);
                    changed = true;
                }
            }
        }
        result
    }
}

impl LlClassification {
    /// Access classes.
    pub fn classes(&self) -> &BTreeMap<NonTerminal, LlNonterminalClass> {
        &self.classes
    }

    /// Whether the nonterminal is classified as context-free.
    pub fn is_context_free(&self, nonterminal: NonTerminal) -> bool {
        self.classes.get(&nonterminal) == Some(&LlNonterminalClass::ContextFree)
    }
}
