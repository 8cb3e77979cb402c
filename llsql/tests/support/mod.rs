#![allow(dead_code)]

use llsql::trace::Action;
use llsql::{Analyzer, Terminal};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn analyzer() -> Analyzer {
    init_logger();
    Analyzer::new()
}

/// Statements of every form the grammar knows.
pub const VALID: &[&str] = &[
    "SELECT * FROM t;",
    "SELECT a FROM t;",
    "SELECT a, b, c FROM users WHERE age >= 18;",
    "SELECT a FROM t WHERE a = 1 AND b <> 'x' OR c != d;",
    "select name from users where name = 'O''Reilly';",
    "INSERT INTO t VALUES (1);",
    "INSERT INTO t VALUES (1, 'two', three, 4.5);",
    "UPDATE t SET a = 1;",
    "UPDATE t SET a = 1, b = 'x', c = d;",
    "DELETE FROM t;",
    "/* leading comment */ DELETE FROM t; -- trailing comment",
];

/// Statements that fail on their first error.
pub const INVALID: &[&str] = &[
    "SELECT FROM t;",
    "SELECT a FROM t",
    "SELECT a FROM t WHERE;",
    "SELECT a FROM t WHERE a = 1 AND;",
    "SELECT a FROM t WHERE a == 1;",
    "INSERT INTO t VALUES ();",
    "INSERT t VALUES (1);",
    "UPDATE t SET a;",
    "DELETE t;",
    "DROP TABLE t;",
    "CREATE TABLE t (a INT);",
    "SELECT a FROM t; DELETE FROM t;",
];

pub fn count_actions(analyzer: &Analyzer, input: &str, pred: impl Fn(&Action) -> bool) -> usize {
    let trace = match analyzer.trace_str(input) {
        Ok(trace) => trace,
        Err(err) => err.trace,
    };
    trace.records().iter().filter(|record| pred(&record.action)).count()
}

pub fn terminals(input: &str) -> Vec<Terminal> {
    llsql::lex::tokenize(input)
        .into_iter()
        .map(|token| token.terminal)
        .collect()
}
