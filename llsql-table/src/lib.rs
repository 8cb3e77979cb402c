//! The LL(1) prediction table and the classification of nonterminals it
//! allows.

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod ll;
pub mod table;

pub use self::ll::{LlClassification, LlNonterminalClass};
pub use self::table::{PredictionTable, TableConflict, TableDisplay};
