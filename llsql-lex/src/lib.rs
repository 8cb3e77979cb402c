//! Tokenizer for the SQL subset.
//!
//! [`Lexer`] splits text into [`Lexeme`]s, keeping comments and characters it
//! does not know. [`to_tokens`] then maps lexemes to the terminal stream the
//! analyzers consume.
//!
//! ```
//! use llsql_lex::tokenize;
//! use llsql_symbol::Terminal;
//!
//! let tokens = tokenize("select * from t; -- all");
//! let terminals: Vec<_> = tokens.iter().map(|token| token.terminal).collect();
//! assert_eq!(
//!     terminals,
//!     [Terminal::Select, Terminal::Star, Terminal::From, Terminal::Id, Terminal::Semicolon, Terminal::Eof]
//! );
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]

mod keyword;
mod lexeme;
mod lexer;
mod tokens;

pub use self::keyword::is_keyword;
pub use self::lexeme::{Lexeme, LexemeKind};
pub use self::lexer::Lexer;
pub use self::tokens::{to_tokens, tokenize};
