//! The grammar of the SQL subset: productions over closed symbol sets, a rule
//! builder, and sets of terminals.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces
)]

/// Builds a right-hand side from terminals and nonterminals.
///
/// ```
/// use llsql_grammar::{rhs, NonTerminal, Terminal};
///
/// let syms = rhs![Terminal::Where, NonTerminal::Cond];
/// assert_eq!(syms.len(), 2);
/// let epsilon = rhs![];
/// assert!(epsilon.is_empty());
/// ```
#[macro_export]
macro_rules! rhs {
    () => {{
        let empty: [$crate::Symbol; 0] = [];
        empty
    }};
    ($($sym:expr),+ $(,)?) => {
        [$($crate::Symbol::from($sym)),+]
    };
}

pub mod grammar;
pub mod rule_builder;
pub mod sql;
pub mod terminal_set;

pub use crate::grammar::{Grammar, Production, ProductionId};
pub use crate::rule_builder::RuleBuilder;
pub use crate::sql::sql_grammar;
pub use crate::terminal_set::TerminalSet;
pub use llsql_symbol::{NonTerminal, Symbol, Terminal};
