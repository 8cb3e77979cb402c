use std::error::Error;
use std::fmt;

use llsql_symbol::SyntaxError;

use crate::Trace;

/// A failed parse run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    /// The first error found.
    pub error: SyntaxError,
    /// The step at which it was found. Zero when the run never started.
    pub step: usize,
    /// Records up to and including the error record.
    pub trace: Trace,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.step == 0 {
            write!(f, "syntax error: {}", self.error)
        } else {
            write!(f, "syntax error at step {}: {}", self.step, self.error)
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}
