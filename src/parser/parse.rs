//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser is a recursive descent parser over a token vector with an
//! explicit cursor:
//! - This module: Parser struct, error types, helper methods
//! - `expressions`: one method per precedence level
//!
//! # Implementation
//!
//! Parser methods are split across files using `impl Parser` blocks, allowing
//! each module to extend the Parser while sharing the cursor state.

use crate::parser::ast::*;
use crate::parser::lexer::{Lexer, Token, TokenKind};
use thiserror::Error;

/// What went wrong while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("Unexpected {found}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
    },

    #[error("Unsupported operator '{operator}'")]
    UnsupportedOperator { operator: char },

    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("Unexpected {found} after complete expression")]
    TrailingInput { found: String },

    #[error("Expression nests deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parse error at line {}, column {}: {}", .location.line, .location.column, .kind)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub location: SourceLocation,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }
}

/// Operator set accepted by the [`Parser`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Grammar {
    /// `+` and `*` only; `-` and `/` are rejected as unsupported.
    #[default]
    Basic,
    /// All four arithmetic operators.
    Full,
}

impl Grammar {
    pub fn accepts(self, op: BinOp) -> bool {
        match self {
            Grammar::Basic => matches!(op, BinOp::Add | BinOp::Mul),
            Grammar::Full => true,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Grammar::Basic => Grammar::Full,
            Grammar::Full => Grammar::Basic,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Grammar::Basic => "basic",
            Grammar::Full => "full",
        }
    }
}

/// Recursive descent parser for arithmetic expressions
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    pub(crate) end: SourceLocation,
    pub(crate) grammar: Grammar,
    /// Parentheses currently open around the cursor.
    pub(crate) nesting: usize,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize();
        Self::from_tokens(tokens, lexer.end_location())
    }

    /// Parser over already scanned tokens. `end` is reported as the location
    /// of unexpected end-of-input errors.
    pub fn from_tokens(tokens: Vec<Token>, end: SourceLocation) -> Self {
        Self {
            tokens,
            position: 0,
            end,
            grammar: Grammar::default(),
            nesting: 0,
        }
    }

    pub fn with_grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = grammar;
        self
    }

    /// Parse the whole token stream as one expression.
    ///
    /// Empty input is not an error and yields `None`.
    pub fn parse(&mut self) -> Result<Option<Node>, ParseError> {
        if self.is_at_end() {
            return Ok(None);
        }

        let (expr, _) = self.parse_expression()?;

        if let Some(token) = self.peek() {
            return Err(ParseError::new(
                ParseErrorKind::TrailingInput {
                    found: token.to_string(),
                },
                token.location,
            ));
        }

        log::trace!("parsed {} token(s) with {:?} grammar", self.tokens.len(), self.grammar);
        Ok(Some(expr))
    }

    // ===== Helper methods =====

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|token| token.is(kind))
    }

    pub(crate) fn advance(&mut self) -> Option<&Token> {
        if self.is_at_end() {
            return None;
        }
        self.position += 1;
        self.tokens.get(self.position - 1)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().map_or(self.end, |token| token.location)
    }

    pub(crate) fn expect_token(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
    ) -> Result<(), ParseError> {
        if self.match_token(kind) {
            return Ok(());
        }
        Err(self.unexpected(expected))
    }

    /// Error for the current token (or end of input) not being `expected`.
    pub(crate) fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    found: token.to_string(),
                    expected,
                },
                token.location,
            ),
            None => ParseError::new(ParseErrorKind::UnexpectedEnd { expected }, self.end),
        }
    }

    /// Height of a new node over a child of `height`, or `TooDeep` once it
    /// passes [`MAX_DEPTH`].
    pub(crate) fn grow(&self, height: usize, location: SourceLocation) -> Result<usize, ParseError> {
        if height >= MAX_DEPTH {
            return Err(ParseError::new(
                ParseErrorKind::TooDeep { limit: MAX_DEPTH },
                location,
            ));
        }
        Ok(height + 1)
    }
}
