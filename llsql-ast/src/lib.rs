//! Typed syntax trees for the SQL subset.
//!
//! [`TreeBuilder`] recognizes `SELECT` statements and builds a [`Program`].
//! The other statement forms of the grammar are recognized and refused with
//! [`AstError::Unsupported`].
//!
//! Chains of `AND` and `OR` lean right, following the right-recursive
//! `CondTail` rule, so `a = 1 AND b = 2 OR c = 3` becomes
//! `BinaryOp(a = 1, AND, BinaryOp(b = 2, OR, c = 3))`. There is no precedence
//! between the two combinators.

#![deny(unsafe_code)]

mod builder;
mod error;
mod node;

pub use self::builder::TreeBuilder;
pub use self::error::AstError;
pub use self::node::{BinaryOp, Columns, Expr, Operator, Program, Select, Statement, Table};
