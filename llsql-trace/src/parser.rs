//! The predictive parsing engine.

use std::borrow::Cow;

use llsql_grammar::Grammar;
use llsql_predict_sets::{FirstSets, FollowSets};
use llsql_symbol::{NonTerminal, Symbol, SyntaxError, Terminal, Token};
use llsql_table::PredictionTable;
use log::{debug, trace};

use crate::{Action, ParseError, Trace, TraceRecord};

/// Drives a parse stack against a prediction table.
///
/// Borrows the grammar, its predict sets and its table, all of which stay
/// untouched. The parser itself holds no state between runs, so one parser may
/// be shared by any number of threads.
#[derive(Clone, Copy, Debug)]
pub struct TraceParser<'g> {
    grammar: &'g Grammar,
    first_sets: &'g FirstSets,
    follow_sets: &'g FollowSets,
    table: &'g PredictionTable,
    preview_len: usize,
}

/// State of a single run. Never shared between runs.
struct ParseState<'t> {
    stack: Vec<Symbol>,
    tokens: &'t [Token],
    end: &'t Token,
    pos: usize,
    /// Nonterminals expanded since the last match, with the stack depth
    /// below each. An entry lives until the stack shrinks under its depth.
    expanding: Vec<(NonTerminal, usize)>,
}

impl<'t> ParseState<'t> {
    fn new(start: NonTerminal, tokens: &'t [Token], end: &'t Token) -> Self {
        ParseState {
            stack: vec![Terminal::Eof.into(), start.into()],
            tokens,
            end,
            pos: 0,
            expanding: vec![],
        }
    }

    fn current(&self) -> &'t Token {
        self.tokens.get(self.pos).unwrap_or(self.end)
    }

    fn advance(&mut self) {
        self.pos = (self.pos + 1).min(self.tokens.len());
        self.expanding.clear();
    }

    /// Records the expansion of the nonterminal on top of the stack. Returns
    /// `false` if the same nonterminal is already being expanded at this
    /// token, with the stack beneath it unchanged.
    fn enter(&mut self, nonterminal: NonTerminal) -> bool {
        let depth = self.stack.len().saturating_sub(1);
        self.expanding.retain(|&(_, below)| below <= depth);
        if self.expanding.iter().any(|&(other, _)| other == nonterminal) {
            return false;
        }
        self.expanding.push((nonterminal, depth));
        true
    }

    fn preview(&self, len: usize) -> Vec<Token> {
        self.tokens[self.pos..].iter().take(len).cloned().collect()
    }
}

impl<'g> TraceParser<'g> {
    /// Number of upcoming tokens kept in each trace record, unless configured
    /// otherwise.
    pub const DEFAULT_PREVIEW_LEN: usize = 3;

    /// Creates a parser over precomputed analysis results. The table must have
    /// been built from the same grammar and sets.
    pub fn new(
        grammar: &'g Grammar,
        first_sets: &'g FirstSets,
        follow_sets: &'g FollowSets,
        table: &'g PredictionTable,
    ) -> Self {
        TraceParser {
            grammar,
            first_sets,
            follow_sets,
            table,
            preview_len: Self::DEFAULT_PREVIEW_LEN,
        }
    }

    /// Sets how many upcoming tokens each trace record keeps.
    pub fn with_preview_len(mut self, preview_len: usize) -> Self {
        self.preview_len = preview_len;
        self
    }

    /// Parses one statement.
    ///
    /// If the stream does not end with an end-of-input token, one is added
    /// right after the last token.
    pub fn parse(&self, tokens: &[Token]) -> Result<Trace, ParseError> {
        if tokens.iter().all(Token::is_eof) {
            return Err(ParseError {
                error: SyntaxError::EmptyInput,
                step: 0,
                trace: Trace::default(),
            });
        }
        let tokens = with_end_of_input(tokens);
        let Some(end) = tokens.last() else {
            return Err(ParseError {
                error: SyntaxError::EmptyInput,
                step: 0,
                trace: Trace::default(),
            });
        };

        let mut state = ParseState::new(self.grammar.start(), &tokens[..], end);
        let mut records = Trace::default();
        let mut step = 0;
        loop {
            step += 1;
            let stack = state.stack.clone();
            let input = state.preview(self.preview_len);
            let outcome = self.step(&mut state);
            let action = match &outcome {
                Ok(action) => action.clone(),
                Err(error) => Action::Error(error.clone()),
            };
            trace!("step {}: {}", step, action);
            records.push(TraceRecord {
                step,
                stack,
                input,
                action,
            });
            match outcome {
                Ok(Action::Accept) => return Ok(records),
                Ok(_) => {}
                Err(error) => {
                    return Err(ParseError {
                        error,
                        step,
                        trace: records,
                    });
                }
            }
        }
    }

    fn step(&self, state: &mut ParseState) -> Result<Action, SyntaxError> {
        let cur = state.current();
        let top = match state.stack.last() {
            Some(&top) => top,
            None if cur.is_eof() => return Ok(Action::Accept),
            None => {
                return Err(SyntaxError::Mismatch {
                    expected: Terminal::Eof,
                    found: cur.clone(),
                });
            }
        };
        match top {
            Symbol::Terminal(Terminal::Eof) if cur.is_eof() => {
                state.stack.pop();
                Ok(Action::Accept)
            }
            Symbol::Terminal(expected) => {
                if expected != cur.terminal {
                    return Err(SyntaxError::Mismatch {
                        expected,
                        found: cur.clone(),
                    });
                }
                state.stack.pop();
                state.advance();
                Ok(Action::Match(expected))
            }
            Symbol::NonTerminal(nonterminal) => {
                let Some(id) = self.table.get(nonterminal, cur.terminal) else {
                    return Err(self.no_production(nonterminal, cur));
                };
                if !state.enter(nonterminal) {
                    return Err(SyntaxError::Cycle {
                        nonterminal,
                        found: cur.clone(),
                    });
                }
                let production = self.grammar.production(id);
                state.stack.pop();
                state.stack.extend(production.rhs.iter().rev().copied());
                Ok(Action::Expand {
                    id,
                    production: production.clone(),
                })
            }
        }
    }

    fn no_production(&self, nonterminal: NonTerminal, found: &Token) -> SyntaxError {
        let first_set = self.first_sets.get(nonterminal);
        let follow_set = self.follow_sets.get(nonterminal);
        debug!(
            "table miss at M[{}, {}]; FIRST = {}, FOLLOW = {}\n{}",
            nonterminal,
            found.terminal,
            first_set,
            follow_set,
            self.table.display_row(self.grammar, nonterminal)
        );
        SyntaxError::NoProduction {
            nonterminal,
            found: found.clone(),
            first: first_set.terminals.to_vec(),
            nullable: first_set.nullable,
            follow: follow_set.to_vec(),
        }
    }
}

fn with_end_of_input(tokens: &[Token]) -> Cow<'_, [Token]> {
    match tokens.last() {
        Some(last) if last.is_eof() => Cow::Borrowed(tokens),
        Some(last) => {
            let column = last.column + last.text.chars().count() as u32;
            let mut owned = tokens.to_vec();
            owned.push(Token::eof(last.line, column));
            Cow::Owned(owned)
        }
        None => Cow::Borrowed(tokens),
    }
}
