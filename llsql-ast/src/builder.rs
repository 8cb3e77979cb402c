//! Syntax tree construction.

use llsql_grammar::{Grammar, NonTerminal, Terminal};
use llsql_symbol::{SyntaxError, Token};
use log::trace;

use crate::{AstError, Columns, Expr, Operator, Program, Select, Statement, Table};

/// Builds syntax trees for `SELECT` statements.
///
/// The choices between operands, between relational operators and between
/// `AND` and `OR` are taken from the grammar, from alternatives that begin
/// with a terminal. The rest of the walk follows the shape of `Query`
/// directly.
#[derive(Clone, Debug)]
pub struct TreeBuilder<'g> {
    grammar: &'g Grammar,
    statements: Vec<Terminal>,
    operands: Vec<Terminal>,
    relations: Vec<Terminal>,
    combinators: Vec<Terminal>,
}

/// Position in a token stream. Owned by a single build.
struct Cursor<'t> {
    tokens: &'t [Token],
    pos: usize,
    end: Token,
}

impl<'t> Cursor<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        let end = match tokens.last() {
            Some(last) if last.is_eof() => last.clone(),
            Some(last) => Token::eof(last.line, last.column + last.text.chars().count() as u32),
            None => Token::eof(1, 1),
        };
        Cursor {
            tokens,
            pos: 0,
            end,
        }
    }

    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.end)
    }

    fn at(&self, terminal: Terminal) -> bool {
        self.current().terminal == terminal
    }

    fn bump(&mut self) -> Token {
        let token = self.current().clone();
        trace!("consume {}", token);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: Terminal) -> Result<Token, SyntaxError> {
        if self.at(expected) {
            Ok(self.bump())
        } else {
            Err(SyntaxError::Mismatch {
                expected,
                found: self.current().clone(),
            })
        }
    }
}

impl<'g> TreeBuilder<'g> {
    /// Creates a builder over the given grammar.
    pub fn new(grammar: &'g Grammar) -> Self {
        TreeBuilder {
            grammar,
            statements: grammar.leading_terminals(NonTerminal::Query).collect(),
            operands: grammar.leading_terminals(NonTerminal::Expr).collect(),
            relations: grammar.leading_terminals(NonTerminal::RelOp).collect(),
            combinators: grammar.leading_terminals(NonTerminal::CondTail).collect(),
        }
    }

    /// The grammar this builder reads its alternatives from.
    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Builds the tree of one statement, which must end with `;` followed by
    /// the end of input. The end-of-input token may be left out.
    pub fn build(&self, tokens: &[Token]) -> Result<Program, AstError> {
        if tokens.iter().all(Token::is_eof) {
            return Err(SyntaxError::EmptyInput.into());
        }
        let mut cursor = Cursor::new(tokens);
        let statement = self.statement(&mut cursor)?;
        cursor.expect(Terminal::Semicolon)?;
        cursor.expect(Terminal::Eof)?;
        Ok(Program { statement })
    }

    fn statement(&self, cursor: &mut Cursor) -> Result<Statement, AstError> {
        let terminal = cursor.current().terminal;
        if terminal == Terminal::Select {
            return Ok(Statement::Select(self.select(cursor)?));
        }
        let cur = cursor.current();
        if terminal == Terminal::Create || self.statements.contains(&terminal) {
            Err(AstError::Unsupported {
                statement: terminal,
                line: cur.line,
                column: cur.column,
            })
        } else {
            Err(self.no_alternative(NonTerminal::Query, &self.statements, cur).into())
        }
    }

    fn select(&self, cursor: &mut Cursor) -> Result<Select, SyntaxError> {
        cursor.expect(Terminal::Select)?;
        let columns = self.columns(cursor)?;
        cursor.expect(Terminal::From)?;
        let table = Table {
            name: cursor.expect(Terminal::Id)?.text,
        };
        let condition = if cursor.at(Terminal::Where) {
            cursor.bump();
            Some(self.condition(cursor)?)
        } else {
            None
        };
        Ok(Select {
            columns,
            table,
            condition,
        })
    }

    fn columns(&self, cursor: &mut Cursor) -> Result<Columns, SyntaxError> {
        if cursor.at(Terminal::Star) {
            cursor.bump();
            return Ok(Columns::wildcard());
        }
        let mut names = vec![cursor.expect(Terminal::Id)?.text];
        while cursor.at(Terminal::Comma) {
            cursor.bump();
            names.push(cursor.expect(Terminal::Id)?.text);
        }
        Ok(Columns {
            is_wildcard: false,
            names,
        })
    }

    /// Parses comparisons joined by combinators, then folds them from the
    /// right.
    fn condition(&self, cursor: &mut Cursor) -> Result<Expr, SyntaxError> {
        let mut pending = self.comparison(cursor)?;
        let mut lefts = vec![];
        while let Some(combinator) = self.choose(cursor, &self.combinators) {
            lefts.push((pending, combinator));
            pending = self.comparison(cursor)?;
        }
        Ok(lefts
            .into_iter()
            .rev()
            .fold(pending, |right, (left, combinator)| {
                Expr::binary(left, combinator, right)
            }))
    }

    fn comparison(&self, cursor: &mut Cursor) -> Result<Expr, SyntaxError> {
        let left = self.operand(cursor)?;
        let Some(operator) = self.choose(cursor, &self.relations) else {
            return Err(self.no_alternative(NonTerminal::RelOp, &self.relations, cursor.current()));
        };
        let right = self.operand(cursor)?;
        Ok(Expr::binary(left, operator, right))
    }

    fn operand(&self, cursor: &mut Cursor) -> Result<Expr, SyntaxError> {
        let terminal = cursor.current().terminal;
        if self.operands.contains(&terminal) {
            match terminal {
                Terminal::Id => return Ok(Expr::Identifier(cursor.bump().text)),
                Terminal::Num => return Ok(Expr::NumberLiteral(cursor.bump().text)),
                Terminal::Str => return Ok(Expr::StringLiteral(cursor.bump().text)),
                _ => {}
            }
        }
        Err(self.no_alternative(NonTerminal::Expr, &self.operands, cursor.current()))
    }

    /// Consumes the current token if it is one of `alternatives` and spells an
    /// operator.
    fn choose(&self, cursor: &mut Cursor, alternatives: &[Terminal]) -> Option<Operator> {
        let terminal = cursor.current().terminal;
        if !alternatives.contains(&terminal) {
            return None;
        }
        let operator = Operator::from_terminal(terminal)?;
        cursor.bump();
        Some(operator)
    }

    fn no_alternative(
        &self,
        nonterminal: NonTerminal,
        alternatives: &[Terminal],
        found: &Token,
    ) -> SyntaxError {
        let mut first = alternatives.to_vec();
        first.sort();
        SyntaxError::NoProduction {
            nonterminal,
            found: found.clone(),
            first,
            nullable: false,
            follow: vec![],
        }
    }
}
