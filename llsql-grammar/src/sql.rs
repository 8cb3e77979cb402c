//! The canonical grammar of the SQL subset. Both the prediction table and the
//! syntax tree builder are derived from it.

use llsql_symbol::{NonTerminal as N, Terminal as T};
use log::debug;

use crate::Grammar;

/// Builds the SQL grammar, rooted at `Prog`.
///
/// Every statement ends with `;`. List-like constructs (`SelListRest`,
/// `ValListRest`, `SetListRest`) and chained conditions (`CondTail`) are
/// right-recursive with an epsilon alternative, which keeps the grammar LL(1).
pub fn sql_grammar() -> Grammar {
    let mut grammar = Grammar::new(N::Prog);

    // Prog ::= Query ';'
    // Query ::=
    //      SELECT SelList FROM Tbl WhereOpt
    //   |  INSERT INTO Tbl VALUES '(' ValList ')'
    //   |  UPDATE Tbl SET SetList
    //   |  DELETE FROM Tbl
    grammar
        .rule(N::Prog)
        .rhs(rhs![N::Query, T::Semicolon])
        .rule(N::Query)
        .rhs(rhs![T::Select, N::SelList, T::From, N::Tbl, N::WhereOpt])
        .rhs(rhs![
            T::Insert,
            T::Into,
            N::Tbl,
            T::Values,
            T::LParen,
            N::ValList,
            T::RParen
        ])
        .rhs(rhs![T::Update, N::Tbl, T::Set, N::SetList])
        .rhs(rhs![T::Delete, T::From, N::Tbl])
        .rule(N::SelList)
        .rhs(rhs![T::Star])
        .rhs(rhs![T::Id, N::SelListRest])
        .rule(N::SelListRest)
        .epsilon()
        .rhs(rhs![T::Comma, T::Id, N::SelListRest])
        .rule(N::Tbl)
        .rhs(rhs![T::Id])
        .rule(N::WhereOpt)
        .epsilon()
        .rhs(rhs![T::Where, N::Cond])
        .rule(N::Cond)
        .rhs(rhs![N::Expr, N::RelOp, N::Expr, N::CondTail])
        .rule(N::CondTail)
        .epsilon()
        .rhs(rhs![T::And, N::Cond])
        .rhs(rhs![T::Or, N::Cond])
        .rule(N::Expr)
        .rhs(rhs![T::Id])
        .rhs(rhs![T::Num])
        .rhs(rhs![T::Str])
        .rule(N::RelOp)
        .rhs(rhs![T::Eq])
        .rhs(rhs![T::LtGt])
        .rhs(rhs![T::Lt])
        .rhs(rhs![T::Gt])
        .rhs(rhs![T::LtEq])
        .rhs(rhs![T::GtEq])
        .rhs(rhs![T::BangEq])
        .rule(N::ValList)
        .rhs(rhs![N::Val, N::ValListRest])
        .rule(N::ValListRest)
        .epsilon()
        .rhs(rhs![T::Comma, N::Val, N::ValListRest])
        .rule(N::Val)
        .rhs(rhs![T::Id])
        .rhs(rhs![T::Num])
        .rhs(rhs![T::Str])
        .rule(N::SetList)
        .rhs(rhs![T::Id, T::Eq, N::Val, N::SetListRest])
        .rule(N::SetListRest)
        .epsilon()
        .rhs(rhs![T::Comma, T::Id, T::Eq, N::Val, N::SetListRest]);

    debug!("built SQL grammar with {} productions", grammar.len());
    grammar
}
