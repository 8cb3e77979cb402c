use llsql_grammar::{rhs, sql_grammar, Grammar, NonTerminal, Terminal, TerminalSet};
use llsql_predict_sets::{FirstSets, FollowSets, GrammarSetsExt};
use test_case::test_case;

fn set(terminals: &[Terminal]) -> TerminalSet {
    terminals.iter().copied().collect()
}

#[test]
fn test_start_follow_contains_eof() {
    let follow = sql_grammar().follow_sets();
    assert!(follow.get(NonTerminal::Prog).contains(Terminal::Eof));
    assert_eq!(follow.get(NonTerminal::Prog), &set(&[Terminal::Eof]));
}

#[test_case(NonTerminal::Query, &[Terminal::Semicolon])]
#[test_case(NonTerminal::SelList, &[Terminal::From])]
#[test_case(NonTerminal::SelListRest, &[Terminal::From])]
#[test_case(NonTerminal::Tbl, &[Terminal::Where, Terminal::Values, Terminal::Set, Terminal::Semicolon])]
#[test_case(NonTerminal::WhereOpt, &[Terminal::Semicolon])]
#[test_case(NonTerminal::Cond, &[Terminal::Semicolon])]
#[test_case(NonTerminal::CondTail, &[Terminal::Semicolon])]
#[test_case(NonTerminal::RelOp, &[Terminal::Id, Terminal::Num, Terminal::Str])]
#[test_case(NonTerminal::ValListRest, &[Terminal::RParen])]
#[test_case(NonTerminal::Val, &[Terminal::Comma, Terminal::Semicolon, Terminal::RParen])]
fn test_sql_follow_sets(nonterminal: NonTerminal, terminals: &[Terminal]) {
    let follow = sql_grammar().follow_sets();
    assert_eq!(follow.get(nonterminal), &set(terminals));
}

#[test]
fn test_expr_follow_includes_condition_continuations() {
    let follow = sql_grammar().follow_sets();
    let expr = follow.get(NonTerminal::Expr);
    for terminal in [
        Terminal::Eq,
        Terminal::LtGt,
        Terminal::BangEq,
        Terminal::And,
        Terminal::Or,
        Terminal::Semicolon,
    ] {
        assert!(expr.contains(terminal), "FOLLOW(Expr) lacks {}", terminal);
    }
    assert!(!expr.contains(Terminal::Eof));
}

#[test]
fn test_follow_through_nullable_suffix() {
    // Prog ⸬= Cond WhereOpt    Cond ⸬= ID    WhereOpt ⸬= ε | WHERE
    let mut grammar = Grammar::new(NonTerminal::Prog);
    grammar
        .rule(NonTerminal::Prog)
        .rhs(rhs![NonTerminal::Cond, NonTerminal::WhereOpt])
        .rule(NonTerminal::Cond)
        .rhs(rhs![Terminal::Id])
        .rule(NonTerminal::WhereOpt)
        .epsilon()
        .rhs(rhs![Terminal::Where]);

    let first = FirstSets::new(&grammar);
    let follow = FollowSets::new(&grammar, &first);
    assert_eq!(
        follow.get(NonTerminal::Cond),
        &set(&[Terminal::Where, Terminal::Eof])
    );
    assert_eq!(follow.get(NonTerminal::WhereOpt), &set(&[Terminal::Eof]));
}

#[test]
fn test_rebuilding_is_idempotent() {
    let grammar = sql_grammar();
    let first = grammar.first_sets();
    let follow = grammar.follow_sets_with_first(&first);
    for _ in 0..5 {
        assert_eq!(grammar.first_sets(), first);
        assert_eq!(grammar.follow_sets(), follow);
    }
}
