use std::fmt;

use crate::{NonTerminal, Terminal, Token};

/// The first syntax error found in a statement. Fatal to the run that
/// produced it, and to nothing else.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SyntaxError {
    /// The stream holds nothing but the end-of-input marker.
    EmptyInput,
    /// A terminal was expected and another one was found.
    Mismatch {
        /// The terminal that was expected.
        expected: Terminal,
        /// The token that was found instead.
        found: Token,
    },
    /// No alternative of a nonterminal can start with the token found.
    NoProduction {
        /// The nonterminal being expanded.
        nonterminal: NonTerminal,
        /// The token at which expansion failed.
        found: Token,
        /// FIRST set of the nonterminal.
        first: Vec<Terminal>,
        /// Whether the nonterminal derives the empty string.
        nullable: bool,
        /// FOLLOW set of the nonterminal. Empty when not computed.
        follow: Vec<Terminal>,
    },
    /// A nonterminal was predicted again at the same token while its own
    /// expansion was still on the stack, so the parse could never advance.
    /// Left-recursive grammars end this way.
    Cycle {
        /// The nonterminal that derives itself.
        nonterminal: NonTerminal,
        /// The token at which no input was consumed.
        found: Token,
    },
}

impl SyntaxError {
    /// The offending token, if any.
    pub fn token(&self) -> Option<&Token> {
        match self {
            SyntaxError::EmptyInput => None,
            SyntaxError::Mismatch { found, .. }
            | SyntaxError::NoProduction { found, .. }
            | SyntaxError::Cycle { found, .. } => Some(found),
        }
    }
}

struct TerminalList<'a>(&'a [Terminal], bool);

impl fmt::Display for TerminalList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("{")?;
        let mut first = true;
        for terminal in self.0 {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{}", terminal)?;
        }
        if self.1 {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str("ε")?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SyntaxError::EmptyInput => write!(f, "empty input"),
            SyntaxError::Mismatch { expected, found } => write!(
                f,
                "expected {}, found {} '{}' at line {} column {}",
                expected, found.terminal, found.text, found.line, found.column
            ),
            SyntaxError::NoProduction {
                nonterminal,
                found,
                first,
                nullable,
                follow,
            } => {
                write!(
                    f,
                    "no production for {} at {} '{}' at line {} column {}; FIRST({}) = {}",
                    nonterminal,
                    found.terminal,
                    found.text,
                    found.line,
                    found.column,
                    nonterminal,
                    TerminalList(first, *nullable)
                )?;
                if !follow.is_empty() {
                    write!(f, ", FOLLOW({}) = {}", nonterminal, TerminalList(follow, false))?;
                }
                Ok(())
            }
            SyntaxError::Cycle { nonterminal, found } => write!(
                f,
                "{} derives itself without consuming {} '{}' at line {} column {}",
                nonterminal, found.terminal, found.text, found.line, found.column
            ),
        }
    }
}

impl std::error::Error for SyntaxError {}
