use llsql_ast::{AstError, Columns, Expr, Operator, Program, Select, Statement, Table, TreeBuilder};
use llsql_grammar::{sql_grammar, Grammar, NonTerminal, Symbol, Terminal};
use llsql_lex::tokenize;
use llsql_symbol::{SyntaxError, Token};
use test_case::test_case;

fn build(input: &str) -> Result<Program, AstError> {
    let _ = env_logger::builder().is_test(true).try_init();
    let grammar = sql_grammar();
    TreeBuilder::new(&grammar).build(&tokenize(input))
}

fn select(input: &str) -> Select {
    match build(input).unwrap().statement {
        Statement::Select(select) => select,
    }
}

fn id(name: &str) -> Expr {
    Expr::Identifier(name.to_string())
}

fn num(text: &str) -> Expr {
    Expr::NumberLiteral(text.to_string())
}

#[test]
fn test_select_with_condition() {
    let program = build("SELECT a, b FROM t WHERE a = 1 AND b <> 2;").unwrap();
    let expected = Program {
        statement: Statement::Select(Select {
            columns: Columns::named(["a", "b"]),
            table: Table {
                name: "t".to_string(),
            },
            condition: Some(Expr::binary(
                Expr::binary(id("a"), Operator::Eq, num("1")),
                Operator::And,
                Expr::binary(id("b"), Operator::LtGt, num("2")),
            )),
        }),
    };
    assert_eq!(program, expected);
    assert_eq!(
        program.to_string(),
        "Program(Select(columns=Columns(false, [a, b]), table=Table(t), \
         where=BinaryOp(BinaryOp(Identifier(a)=NumberLiteral(1)), AND, \
         BinaryOp(Identifier(b)<>NumberLiteral(2)))))"
    );
}

#[test]
fn test_wildcard() {
    let select = select("SELECT * FROM t;");
    assert_eq!(select.columns, Columns::wildcard());
    assert!(select.columns.is_wildcard);
    assert!(select.columns.names.is_empty());
    assert_eq!(select.condition, None);
}

#[test]
fn test_chain_leans_right() {
    let select = select("SELECT x FROM t WHERE a = 1 AND b = 2 OR c = 'z';");
    let expected = Expr::binary(
        Expr::binary(id("a"), Operator::Eq, num("1")),
        Operator::And,
        Expr::binary(
            Expr::binary(id("b"), Operator::Eq, num("2")),
            Operator::Or,
            Expr::binary(id("c"), Operator::Eq, Expr::StringLiteral("'z'".to_string())),
        ),
    );
    assert_eq!(select.condition, Some(expected));
}

#[test]
fn test_long_chain() {
    let conditions: Vec<String> = (0..200).map(|i| format!("c{} < {}", i, i)).collect();
    let input = format!("SELECT x FROM t WHERE {};", conditions.join(" OR "));
    let mut expr = select(&input).condition.unwrap();
    let mut depth = 1;
    while let Expr::BinaryOp(op) = expr {
        if op.operator != Operator::Or {
            break;
        }
        depth += 1;
        expr = op.right;
    }
    assert_eq!(depth, 200);
}

#[test_case("<", Operator::Lt)]
#[test_case(">", Operator::Gt)]
#[test_case("<=", Operator::LtEq)]
#[test_case(">=", Operator::GtEq)]
#[test_case("!=", Operator::BangEq)]
fn test_relations(op: &str, operator: Operator) {
    let select = select(&format!("SELECT * FROM t WHERE a {} b;", op));
    assert_eq!(select.condition, Some(Expr::binary(id("a"), operator, id("b"))));
}

#[test_case("INSERT INTO t VALUES (1);", Terminal::Insert)]
#[test_case("UPDATE t SET a = 1;", Terminal::Update)]
#[test_case("DELETE FROM t;", Terminal::Delete)]
#[test_case("CREATE TABLE t (a INT);", Terminal::Create)]
fn test_unsupported(input: &str, statement: Terminal) {
    assert_eq!(
        build(input),
        Err(AstError::Unsupported {
            statement,
            line: 1,
            column: 1,
        })
    );
}

#[test]
fn test_unsupported_is_reported_before_syntax_errors() {
    let err = build("DELETE oops").unwrap_err();
    assert!(matches!(err, AstError::Unsupported { statement: Terminal::Delete, .. }));
    assert_eq!(err.to_string(), "unsupported statement DELETE at line 1 column 1");
}

#[test]
fn test_missing_semicolon() {
    assert_eq!(
        build("SELECT a FROM t"),
        Err(AstError::Syntax(SyntaxError::Mismatch {
            expected: Terminal::Semicolon,
            found: Token::eof(1, 16),
        }))
    );
}

#[test]
fn test_trailing_tokens() {
    let err = build("SELECT a FROM t; SELECT").unwrap_err();
    match err {
        AstError::Syntax(SyntaxError::Mismatch { expected, found }) => {
            assert_eq!(expected, Terminal::Eof);
            assert_eq!(found.terminal, Terminal::Select);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_missing_operand() {
    let err = build("SELECT a FROM t WHERE a = ;").unwrap_err();
    assert_eq!(
        err.to_string(),
        "syntax error: no production for Expr at ; ';' at line 1 column 27; \
         FIRST(Expr) = {ID, NUM, STRING}"
    );
}

#[test]
fn test_missing_select_list() {
    let err = build("SELECT FROM t;").unwrap_err();
    assert_eq!(
        err,
        AstError::Syntax(SyntaxError::Mismatch {
            expected: Terminal::Id,
            found: Token::new(Terminal::From, "FROM", 1, 8),
        })
    );
    assert_eq!(
        err.to_string(),
        "syntax error: expected ID, found FROM 'FROM' at line 1 column 8"
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(build(""), Err(AstError::Syntax(SyntaxError::EmptyInput)));
}

#[test]
fn test_alternatives_come_from_grammar() {
    // Without the OR alternative of CondTail, OR no longer continues a condition.
    let full = sql_grammar();
    let mut grammar = Grammar::new(full.start());
    for (_, production) in full.productions() {
        let is_or = production.lhs == NonTerminal::CondTail
            && production.rhs.first() == Some(&Symbol::Terminal(Terminal::Or));
        if !is_or {
            grammar.add_production(production.lhs, &production.rhs[..]);
        }
    }

    let tokens = tokenize("SELECT x FROM t WHERE a = 1 OR b = 2;");
    let err = TreeBuilder::new(&grammar).build(&tokens).unwrap_err();
    match err {
        AstError::Syntax(SyntaxError::Mismatch { expected, found }) => {
            assert_eq!(expected, Terminal::Semicolon);
            assert_eq!(found.terminal, Terminal::Or);
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert!(TreeBuilder::new(&full).build(&tokens).is_ok());
}
