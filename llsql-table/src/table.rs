//! Prediction table construction.

use std::fmt;

use llsql_grammar::{Grammar, NonTerminal, ProductionId, Terminal};
use llsql_predict_sets::{FirstSets, FollowSets, GrammarSetsExt};
use log::{debug, warn};

/// LL(1) prediction table.
///
/// A dense matrix of nonterminals by terminals. Every cell is either empty or
/// holds exactly one production, so the table is total once built.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PredictionTable {
    cells: Vec<Option<ProductionId>>,
    conflicts: Vec<TableConflict>,
}

/// Two productions compete for one cell, which means the grammar is not LL(1).
///
/// The production assigned first stays in the table.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TableConflict {
    /// Row of the cell.
    pub nonterminal: NonTerminal,
    /// Column of the cell.
    pub terminal: Terminal,
    /// The production that occupies the cell.
    pub kept: ProductionId,
    /// The production that was refused.
    pub rejected: ProductionId,
}

impl fmt::Display for TableConflict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "conflict at M[{}, {}]: kept {}, rejected {}",
            self.nonterminal, self.terminal, self.kept, self.rejected
        )
    }
}

impl PredictionTable {
    /// Creates a prediction table from precomputed predict sets.
    ///
    /// M[A, a] holds the production A → α if and only if
    /// a is in FIRST(α), or
    /// α is nullable and a is in FOLLOW(A).
    ///
    /// Productions are assigned in grammar order. When a cell is already
    /// taken by another production, the conflict is recorded and the
    /// earlier production is kept. Construction never fails.
    pub fn new(grammar: &Grammar, first_sets: &FirstSets, follow_sets: &FollowSets) -> Self {
        let mut this = PredictionTable {
            cells: vec![None; NonTerminal::COUNT * Terminal::COUNT],
            conflicts: vec![],
        };
        for (id, production) in grammar.productions() {
            let rhs_first_set = first_sets.first_of_sequence(&production.rhs[..]);
            for terminal in rhs_first_set.terminals.iter() {
                this.assign(production.lhs, terminal, id);
            }
            if rhs_first_set.nullable {
                for terminal in follow_sets.get(production.lhs).iter() {
                    this.assign(production.lhs, terminal, id);
                }
            }
        }
        debug!(
            "prediction table built: {} entries, {} conflicts",
            this.num_entries(),
            this.conflicts.len()
        );
        this
    }

    /// Creates a prediction table, computing predict sets along the way.
    pub fn from_grammar(grammar: &Grammar) -> Self {
        let first_sets = grammar.first_sets();
        let follow_sets = grammar.follow_sets_with_first(&first_sets);
        Self::new(grammar, &first_sets, &follow_sets)
    }

    fn cell_index(nonterminal: NonTerminal, terminal: Terminal) -> usize {
        nonterminal.index() * Terminal::COUNT + terminal.index()
    }

    fn assign(&mut self, nonterminal: NonTerminal, terminal: Terminal, id: ProductionId) {
        let cell = &mut self.cells[Self::cell_index(nonterminal, terminal)];
        match *cell {
            None => *cell = Some(id),
            Some(kept) if kept == id => {}
            Some(kept) => {
                let conflict = TableConflict {
                    nonterminal,
                    terminal,
                    kept,
                    rejected: id,
                };
                warn!("{}", conflict);
                self.conflicts.push(conflict);
            }
        }
    }

    /// Looks up the production predicted for `nonterminal` at `terminal`.
    pub fn get(&self, nonterminal: NonTerminal, terminal: Terminal) -> Option<ProductionId> {
        self.cells[Self::cell_index(nonterminal, terminal)]
    }

    /// Conflicts found during construction, in the order they were found.
    pub fn conflicts(&self) -> &[TableConflict] {
        &self.conflicts[..]
    }

    /// Whether construction found no conflicts.
    pub fn is_ll1(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Iterates over the filled cells of one row.
    pub fn row(&self, nonterminal: NonTerminal) -> impl Iterator<Item = (Terminal, ProductionId)> {
        let start = Self::cell_index(nonterminal, Terminal::ALL[0]);
        Terminal::ALL
            .into_iter()
            .zip(self.cells[start..start + Terminal::COUNT].iter())
            .filter_map(|(terminal, cell)| cell.map(|id| (terminal, id)))
    }

    /// The number of filled cells.
    pub fn num_entries(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Displays the filled cells with their productions.
    pub fn display<'a>(&'a self, grammar: &'a Grammar) -> TableDisplay<'a> {
        TableDisplay {
            table: self,
            grammar,
            row: None,
        }
    }

    /// Displays the filled cells of one row with their productions.
    pub fn display_row<'a>(&'a self, grammar: &'a Grammar, nonterminal: NonTerminal) -> TableDisplay<'a> {
        TableDisplay {
            table: self,
            grammar,
            row: Some(nonterminal),
        }
    }
}

/// Formats table cells as `M[A, a] = A -> α`, one per line.
pub struct TableDisplay<'a> {
    table: &'a PredictionTable,
    grammar: &'a Grammar,
    row: Option<NonTerminal>,
}

impl fmt::Display for TableDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = match self.row {
            Some(nonterminal) => vec![nonterminal],
            None => NonTerminal::ALL.to_vec(),
        };
        for nonterminal in rows {
            for (terminal, id) in self.table.row(nonterminal) {
                writeln!(
                    f,
                    "M[{}, {}] = {}",
                    nonterminal,
                    terminal,
                    self.grammar.production(id)
                )?;
            }
        }
        Ok(())
    }
}
