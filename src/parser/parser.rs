//! Parser state and entry points.
//!
//! The parser pulls tokens from the lexer one at a time. It holds the
//! current (lookahead) token and the most recently consumed one; grammar
//! rules in `stmt` and `expr` inspect the former and consume with `eat`.

use tracing::debug;

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::stmt::parse_statement_sequence;

/// Deepest expression nesting (parentheses and call arguments) accepted.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Token source, read lazily
    lexer: Lexer,
    /// Lookahead token
    current_token: Token,
    /// Most recently consumed token
    prev_token: Token,
    /// Expressions currently open
    depth: usize,
}

impl Parser {
    /// Creates a parser over `lexer`, reading the first token immediately.
    ///
    /// # Returns
    ///
    /// An error if the first token cannot be lexed.
    pub fn new(mut lexer: Lexer) -> Result<Self, Error> {
        let current_token = lexer.next_token()?;

        Ok(Parser {
            lexer,
            prev_token: current_token.clone(),
            current_token,
            depth: 0,
        })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Returns the most recently consumed token.
    pub fn prev_token(&self) -> &Token {
        &self.prev_token
    }

    /// Consumes the current token if it is of `expected_kind`.
    ///
    /// # Returns
    ///
    /// The consumed token, or an `UnexpectedToken` error naming what was
    /// expected and what was found. Nothing is consumed on error.
    pub fn eat(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token.kind != expected_kind {
            return Err(self.unexpected(&expected_kind.to_string()));
        }

        let next = self.lexer.next_token()?;
        self.prev_token = std::mem::replace(&mut self.current_token, next);
        Ok(self.prev_token.clone())
    }

    /// Opens one more level of expression nesting.
    ///
    /// # Returns
    ///
    /// A `NestingTooDeep` error once `MAX_NESTING_DEPTH` levels are open.
    pub fn enter_nested(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Builds an `UnexpectedToken` error for the current token.
    pub fn unexpected(&self, expected: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected.to_string(),
                found: self.current_token.kind.to_string(),
                token: self.current_token.value.clone(),
            },
            self.get_position(),
        )
    }

    /// Text of the current token for diagnostics; the kind name when the
    /// token has no text (end of input).
    pub fn current_token_text(&self) -> String {
        if self.current_token.value.is_empty() {
            self.current_token.kind.to_string()
        } else {
            self.current_token.value.clone()
        }
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token.span.start.clone()
    }

    /// Parses a whole program: a statement sequence followed by end of input.
    pub fn parse(&mut self) -> Result<Node, Error> {
        let program = parse_statement_sequence(self)?;
        self.eat(TokenKind::EOF)?;

        debug!(
            file = %self.get_position().1,
            nodes = program.node_count(),
            "parsed program"
        );

        Ok(program)
    }
}

/// Parses `source` into a `StatementSequence` root.
///
/// # Arguments
///
/// * `source` - Program text
/// * `file` - Name used in positions; `shell` when absent
pub fn parse(source: String, file: Option<String>) -> Result<Node, Error> {
    let lexer = Lexer::new(source, file);
    debug!(file = %lexer.file(), "parsing");

    let mut parser = Parser::new(lexer)?;
    parser.parse()
}
