//! Trace records.

use std::fmt;

use llsql_grammar::{Production, ProductionId};
use llsql_symbol::{Symbol, SyntaxError, Terminal, Token};

/// What the parser did in one step.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// The terminal on top of the stack matched the current token.
    Match(Terminal),
    /// The nonterminal on top of the stack was replaced with a right-hand side.
    Expand {
        /// The production used.
        id: ProductionId,
        /// A copy of the production, for display.
        production: Production,
    },
    /// The input was accepted.
    Accept,
    /// The run stopped at this error.
    Error(SyntaxError),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::Match(terminal) => write!(f, "match {}", terminal),
            Action::Expand { production, .. } => write!(f, "expand {}", production),
            Action::Accept => f.write_str("accept"),
            Action::Error(error) => write!(f, "error: {}", error),
        }
    }
}

/// One logged step of a parse run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TraceRecord {
    /// Step index, starting at 1.
    pub step: usize,
    /// The stack before this step, bottom first.
    pub stack: Vec<Symbol>,
    /// The next few tokens of remaining input before this step.
    pub input: Vec<Token>,
    /// The action taken.
    pub action: Action,
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, [", self.step)?;
        for (i, sym) in self.stack.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", sym)?;
        }
        f.write_str("], [")?;
        for (i, token) in self.input.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", token)?;
        }
        write!(f, "], {}]", self.action)
    }
}

/// The ordered records of one parse run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Trace {
    records: Vec<TraceRecord>,
}

impl Trace {
    pub(crate) fn push(&mut self, record: TraceRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TraceRecord] {
        &self.records[..]
    }

    pub fn into_records(self) -> Vec<TraceRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&TraceRecord> {
        self.records.last()
    }

    /// Whether the run ended in acceptance.
    pub fn is_accepted(&self) -> bool {
        matches!(self.last(), Some(TraceRecord { action: Action::Accept, .. }))
    }

    /// The error that ended the run, if any.
    pub fn error(&self) -> Option<&SyntaxError> {
        match self.last() {
            Some(TraceRecord {
                action: Action::Error(error),
                ..
            }) => Some(error),
            _ => None,
        }
    }

    /// Productions in the order they were expanded. For an accepted run, this
    /// is the leftmost derivation of the input.
    pub fn derivation(&self) -> impl Iterator<Item = ProductionId> + '_ {
        self.records.iter().filter_map(|record| match record.action {
            Action::Expand { id, .. } => Some(id),
            _ => None,
        })
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}
