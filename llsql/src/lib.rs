//! LL(1) analysis of a small SQL subset.
//!
//! An [`Analyzer`] computes FIRST and FOLLOW sets and a prediction table for
//! the SQL grammar once. Afterwards it can be shared between threads, and
//! each statement is either traced step by step through the table-driven
//! parser, or built into a syntax tree.
//!
//! ```
//! use llsql::Analyzer;
//!
//! let analyzer = Analyzer::new();
//! let trace = analyzer.trace_str("UPDATE t SET a = 1;").unwrap();
//! assert!(trace.is_accepted());
//!
//! let program = analyzer.build_tree_str("SELECT * FROM t;").unwrap();
//! assert_eq!(program.to_string(), "Program(Select(columns=Columns(true, []), table=Table(t)))");
//! ```

#![deny(unsafe_code)]

mod analyzer;

pub use self::analyzer::{Analyzer, AnalyzerOptions};

pub use llsql_ast as ast;
pub use llsql_grammar::*;
#[cfg(feature = "llsql-lex")]
pub use llsql_lex as lex;
pub use llsql_predict_sets as predict_sets;
pub use llsql_symbol::*;
pub use llsql_table as table;
pub use llsql_trace as trace;
