/// Reserved words, including column type names. Only some of them are
/// terminals of the grammar; the rest are still never identifiers.
const KEYWORDS: [&str; 45] = [
    "SELECT", "FROM", "WHERE", "INSERT", "INTO", "VALUES", "UPDATE", "SET", "DELETE", "CREATE",
    "TABLE", "DROP", "ALTER", "ADD", "AND", "OR", "NOT", "NULL", "AS", "JOIN", "ON", "ORDER",
    "BY", "GROUP", "HAVING", "DISTINCT", "LIMIT", "INT", "INTEGER", "SMALLINT", "BIGINT",
    "TINYINT", "FLOAT", "REAL", "DOUBLE", "DECIMAL", "NUMERIC", "CHAR", "VARCHAR", "TEXT", "DATE",
    "TIME", "TIMESTAMP", "BOOLEAN", "BLOB",
];

/// Whether `word` is a reserved word. Matching ignores ASCII case.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(word))
}
