//! Symbols of the SQL grammar. Terminals and nonterminals are closed enumerations,
//! distinguished by type and joined in [`Symbol`].
//!
//! This crate also holds the input contract of the analyzers, [`Token`], and the
//! error type they share, [`SyntaxError`].

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

mod error;
mod nonterminal;
mod symbol;
mod terminal;
mod token;

pub use self::error::SyntaxError;
pub use self::nonterminal::NonTerminal;
pub use self::symbol::Symbol;
pub use self::terminal::Terminal;
pub use self::token::Token;
