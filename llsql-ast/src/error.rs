use std::error::Error;
use std::fmt;

use llsql_symbol::{SyntaxError, Terminal};

/// Failure to build a syntax tree.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AstError {
    /// The statement is not well-formed.
    Syntax(SyntaxError),
    /// The statement is well-formed as far as its first keyword goes, but has
    /// no tree form.
    Unsupported {
        /// The keyword that starts the statement.
        statement: Terminal,
        /// Line of the keyword.
        line: u32,
        /// Column of the keyword.
        column: u32,
    },
}

impl From<SyntaxError> for AstError {
    fn from(error: SyntaxError) -> Self {
        AstError::Syntax(error)
    }
}

impl fmt::Display for AstError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AstError::Syntax(error) => write!(f, "syntax error: {}", error),
            AstError::Unsupported {
                statement,
                line,
                column,
            } => write!(
                f,
                "unsupported statement {} at line {} column {}",
                statement, line, column
            ),
        }
    }
}

impl Error for AstError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AstError::Syntax(error) => Some(error),
            AstError::Unsupported { .. } => None,
        }
    }
}
