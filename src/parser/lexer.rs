//! Lexer (tokenizer) for arithmetic expressions
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the tree
//! builders. Whitespace is skipped and characters outside the expression
//! alphabet are dropped rather than reported, so tokenizing never fails.
//! Dropped characters are remembered in [`Lexer::ignored`] for callers that
//! want to warn about them.
//!
//! Numbers are runs of ASCII digits only. Other Unicode digits (`٣`, `５`)
//! are dropped like any other unrecognized character.

use super::ast::SourceLocation;
use std::fmt;

/// Lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Plus,   // +
    Minus,  // -
    Star,   // *
    Slash,  // /
    LParen, // (
    RParen, // )
}

impl TokenKind {
    /// Kind of a single-character operator or parenthesis.
    fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            _ => None,
        }
    }

    /// Upper-case name used by token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
        }
    }
}

/// A scanned token: its kind, the exact text it came from, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Number => write!(f, "number {}", self.text),
            kind => write!(f, "{}", kind),
        }
    }
}

/// Lexer for arithmetic expressions
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    ignored: Vec<(char, SourceLocation)>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            ignored: Vec::new(),
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            let loc = self.current_location();

            if ch.is_whitespace() {
                self.advance();
                continue;
            }

            if ch.is_ascii_digit() {
                tokens.push(self.number_literal());
                continue;
            }

            self.advance();
            match TokenKind::from_symbol(ch) {
                Some(kind) => tokens.push(Token::new(kind, ch, loc)),
                None => {
                    log::trace!("ignoring {:?} at {}", ch, loc);
                    self.ignored.push((ch, loc));
                }
            }
        }

        log::trace!("tokenized {} token(s)", tokens.len());
        tokens
    }

    /// Characters dropped by [`Lexer::tokenize`], in input order.
    pub fn ignored(&self) -> &[(char, SourceLocation)] {
        &self.ignored
    }

    /// Location just past the last consumed character.
    pub fn end_location(&self) -> SourceLocation {
        self.current_location()
    }

    /// Scan a maximal run of digits
    fn number_literal(&mut self) -> Token {
        let loc = self.current_location();
        let mut digits = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::new(TokenKind::Number, digits, loc)
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Tokenize `source` in one call, discarding the ignored-character record.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_text(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
        tokens.iter().map(|t| (t.kind, t.text.as_str())).collect()
    }

    #[test]
    fn test_simple_tokens() {
        let tokens = tokenize("(1 + 2) * 3 / 4 - 5");

        assert!(tokens[0].is(TokenKind::LParen));
        assert!(matches!(&tokens[1], Token { kind: TokenKind::Number, text, .. } if text == "1"));
        assert!(tokens[2].is(TokenKind::Plus));
        assert!(tokens[3].is(TokenKind::Number));
        assert!(tokens[4].is(TokenKind::RParen));
        assert!(tokens[5].is(TokenKind::Star));
        assert!(tokens[7].is(TokenKind::Slash));
        assert!(tokens[9].is(TokenKind::Minus));
        assert_eq!(tokens.len(), 11);
    }

    #[test]
    fn test_multi_digit_number() {
        let tokens = tokenize("123");
        assert_eq!(kinds_and_text(&tokens), vec![(TokenKind::Number, "123")]);
    }

    #[test]
    fn test_whitespace_insensitive() {
        let tight = tokenize("1+2");
        let spaced = tokenize("  1 +\t2 ");
        assert_eq!(kinds_and_text(&tight), kinds_and_text(&spaced));
        assert_eq!(
            kinds_and_text(&tight),
            vec![
                (TokenKind::Number, "1"),
                (TokenKind::Plus, "+"),
                (TokenKind::Number, "2"),
            ]
        );
    }

    #[test]
    fn test_unknown_characters_are_dropped() {
        let mut lexer = Lexer::new("1 $ 2x");
        let tokens = lexer.tokenize();

        assert_eq!(
            kinds_and_text(&tokens),
            vec![(TokenKind::Number, "1"), (TokenKind::Number, "2")]
        );
        assert_eq!(
            lexer.ignored(),
            &[('$', SourceLocation::new(1, 3)), ('x', SourceLocation::new(1, 6))]
        );
    }

    #[test]
    fn test_locations() {
        let tokens = tokenize("12 +\n (3)");
        assert_eq!(tokens[0].location, SourceLocation::new(1, 1));
        assert_eq!(tokens[1].location, SourceLocation::new(1, 4));
        assert_eq!(tokens[2].location, SourceLocation::new(2, 2));
        assert_eq!(tokens[3].location, SourceLocation::new(2, 3));
    }

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("   ");
        assert!(lexer.tokenize().is_empty());
        assert_eq!(lexer.end_location(), SourceLocation::new(1, 4));
    }

    #[test]
    fn test_non_ascii_digits_are_ignored() {
        let mut lexer = Lexer::new("١+2");
        let tokens = lexer.tokenize();

        assert_eq!(tokens.len(), 2);
        assert!(tokens[0].is(TokenKind::Plus));
        assert_eq!(lexer.ignored(), &[('١', SourceLocation::new(1, 1))]);
    }
}
