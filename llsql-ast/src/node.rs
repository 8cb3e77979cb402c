//! Syntax tree nodes.

use std::fmt;

use llsql_symbol::Terminal;

/// Root of a syntax tree. Holds exactly one statement.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Program {
    pub statement: Statement,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Statement {
    Select(Select),
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Select {
    pub columns: Columns,
    pub table: Table,
    /// The `WHERE` condition, if present.
    pub condition: Option<Expr>,
}

/// The select list.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Columns {
    /// Set for `*`. The list of names is then empty.
    pub is_wildcard: bool,
    /// Column names, in source order.
    pub names: Vec<String>,
}

impl Columns {
    pub fn wildcard() -> Self {
        Columns {
            is_wildcard: true,
            names: vec![],
        }
    }

    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Columns {
            is_wildcard: false,
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Table {
    pub name: String,
}

/// A condition or one of its operands.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expr {
    BinaryOp(Box<BinaryOp>),
    Identifier(String),
    /// Number text as written.
    NumberLiteral(String),
    /// String text as written, quotes included.
    StringLiteral(String),
}

impl Expr {
    pub fn binary(left: Expr, operator: Operator, right: Expr) -> Self {
        Expr::BinaryOp(Box::new(BinaryOp {
            left,
            operator,
            right,
        }))
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub operator: Operator,
    pub right: Expr,
}

/// Relational operators and condition combinators.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Operator {
    Eq,
    LtGt,
    Lt,
    Gt,
    LtEq,
    GtEq,
    BangEq,
    And,
    Or,
}

impl Operator {
    /// The operator spelled by a terminal, if any.
    pub fn from_terminal(terminal: Terminal) -> Option<Operator> {
        let operator = match terminal {
            Terminal::Eq => Operator::Eq,
            Terminal::LtGt => Operator::LtGt,
            Terminal::Lt => Operator::Lt,
            Terminal::Gt => Operator::Gt,
            Terminal::LtEq => Operator::LtEq,
            Terminal::GtEq => Operator::GtEq,
            Terminal::BangEq => Operator::BangEq,
            Terminal::And => Operator::And,
            Terminal::Or => Operator::Or,
            _ => return None,
        };
        Some(operator)
    }

    pub fn terminal(self) -> Terminal {
        match self {
            Operator::Eq => Terminal::Eq,
            Operator::LtGt => Terminal::LtGt,
            Operator::Lt => Terminal::Lt,
            Operator::Gt => Terminal::Gt,
            Operator::LtEq => Terminal::LtEq,
            Operator::GtEq => Terminal::GtEq,
            Operator::BangEq => Terminal::BangEq,
            Operator::And => Terminal::And,
            Operator::Or => Terminal::Or,
        }
    }

    /// Whether this is `AND` or `OR`.
    pub fn is_combinator(self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.terminal().name())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Program({})", self.statement)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Statement::Select(select) => write!(f, "{}", select),
        }
    }
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Select(columns={}, table={}", self.columns, self.table)?;
        if let Some(condition) = &self.condition {
            write!(f, ", where={}", condition)?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Columns {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Columns({}, [{}])", self.is_wildcard, self.names.join(", "))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Table({})", self.name)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::BinaryOp(op) => write!(f, "{}", op),
            Expr::Identifier(name) => write!(f, "Identifier({})", name),
            Expr::NumberLiteral(text) => write!(f, "NumberLiteral({})", text),
            Expr::StringLiteral(text) => write!(f, "StringLiteral({})", text),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.operator.is_combinator() {
            write!(f, "BinaryOp({}, {}, {})", self.left, self.operator, self.right)
        } else {
            write!(f, "BinaryOp({}{}{})", self.left, self.operator, self.right)
        }
    }
}
