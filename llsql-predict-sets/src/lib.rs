//! Predict sets: FIRST and FOLLOW set computation.

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod first;
pub mod follow;
pub mod grammar_sets_ext;

pub use self::first::{FirstSet, FirstSets};
pub use self::follow::FollowSets;
pub use self::grammar_sets_ext::GrammarSetsExt;
