//! Table-driven predictive parsing.
//!
//! [`TraceParser`] drives an explicit stack of grammar symbols against a
//! [`PredictionTable`] and a stream of [`Token`]s. Every step of the run is
//! recorded, so the result is either a derivation trace that ends in
//! acceptance, or the first syntax error together with the partial trace that
//! led to it.
//!
//! ```
//! use llsql_grammar::{sql_grammar, Terminal};
//! use llsql_predict_sets::GrammarSetsExt;
//! use llsql_symbol::Token;
//! use llsql_table::PredictionTable;
//! use llsql_trace::TraceParser;
//!
//! let grammar = sql_grammar();
//! let first = grammar.first_sets();
//! let follow = grammar.follow_sets_with_first(&first);
//! let table = PredictionTable::new(&grammar, &first, &follow);
//! let parser = TraceParser::new(&grammar, &first, &follow, &table);
//!
//! let tokens = [
//!     Token::new(Terminal::Delete, "DELETE", 1, 1),
//!     Token::new(Terminal::From, "FROM", 1, 8),
//!     Token::new(Terminal::Id, "t", 1, 13),
//!     Token::new(Terminal::Semicolon, ";", 1, 14),
//! ];
//! let trace = parser.parse(&tokens).unwrap();
//! assert!(trace.is_accepted());
//! ```
//!
//! [`PredictionTable`]: llsql_table::PredictionTable
//! [`Token`]: llsql_symbol::Token

#![deny(unsafe_code)]

mod error;
mod parser;
mod record;

pub use self::error::ParseError;
pub use self::parser::TraceParser;
pub use self::record::{Action, Trace, TraceRecord};
