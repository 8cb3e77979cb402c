use llsql_grammar::{rhs, sql_grammar, Grammar, NonTerminal, Terminal, TerminalSet};
use llsql_predict_sets::{FirstSet, FirstSets, GrammarSetsExt};
use test_case::test_case;

fn set(terminals: &[Terminal], nullable: bool) -> FirstSet {
    FirstSet {
        terminals: terminals.iter().copied().collect::<TerminalSet>(),
        nullable,
    }
}

#[test]
fn test_simple_first_sets() {
    let (start, a, b, c) = (
        NonTerminal::Prog,
        NonTerminal::SelListRest,
        NonTerminal::Cond,
        NonTerminal::Expr,
    );
    let (x, y) = (Terminal::Id, Terminal::Num);

    let mut grammar = Grammar::new(start);
    grammar
        .rule(start)
        .rhs(rhs![a, x, b])
        .rhs(rhs![c])
        .rule(b)
        .rhs(rhs![a, a])
        .rhs(rhs![a, c])
        .rule(c)
        .rhs(rhs![x])
        .rhs(rhs![y])
        .rule(a)
        .epsilon();

    let sets = FirstSets::new(&grammar);

    assert_eq!(sets.get(start), &set(&[x, y], false));
    assert_eq!(sets.get(a), &set(&[], true));
    assert_eq!(sets.get(b), &set(&[x, y], true));
    assert_eq!(sets.get(c), &set(&[x, y], false));
}

#[test]
fn test_first_set_of_expr() {
    let first = sql_grammar().first_sets();
    assert_eq!(
        first.get(NonTerminal::Expr),
        &set(&[Terminal::Id, Terminal::Num, Terminal::Str], false)
    );
}

#[test_case(NonTerminal::Prog, &[Terminal::Select, Terminal::Insert, Terminal::Update, Terminal::Delete], false)]
#[test_case(NonTerminal::SelList, &[Terminal::Id, Terminal::Star], false)]
#[test_case(NonTerminal::SelListRest, &[Terminal::Comma], true)]
#[test_case(NonTerminal::WhereOpt, &[Terminal::Where], true)]
#[test_case(NonTerminal::Cond, &[Terminal::Id, Terminal::Num, Terminal::Str], false)]
#[test_case(NonTerminal::CondTail, &[Terminal::And, Terminal::Or], true)]
#[test_case(NonTerminal::ValList, &[Terminal::Id, Terminal::Num, Terminal::Str], false)]
#[test_case(NonTerminal::SetList, &[Terminal::Id], false)]
fn test_sql_first_sets(nonterminal: NonTerminal, terminals: &[Terminal], nullable: bool) {
    let first = sql_grammar().first_sets();
    assert_eq!(first.get(nonterminal), &set(terminals, nullable));
}

#[test]
fn test_first_of_sequence() {
    let first = sql_grammar().first_sets();
    let through_nullable = first.first_of_sequence(&rhs![NonTerminal::CondTail, Terminal::Semicolon]);
    assert_eq!(
        through_nullable,
        set(&[Terminal::And, Terminal::Or, Terminal::Semicolon], false)
    );
    let all_nullable = first.first_of_sequence(&rhs![NonTerminal::WhereOpt, NonTerminal::CondTail]);
    assert_eq!(
        all_nullable,
        set(&[Terminal::Where, Terminal::And, Terminal::Or], true)
    );
    assert_eq!(first.first_of_sequence(&rhs![]), set(&[], true));
}

#[test]
fn test_first_sets_display() {
    let first = sql_grammar().first_sets();
    let dump = first.to_string();
    assert!(dump.contains("FIRST(CondTail) = {AND, OR, ε}\n"));
    assert!(dump.contains("FIRST(Expr) = {ID, NUM, STRING}\n"));
}
