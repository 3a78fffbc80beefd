//! Expression parsing implementation
//!
//! One method per precedence level, lowest first:
//!
//! ```text
//! expression := term   (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := atom
//! atom       := NUMBER | '(' expression ')'
//! ```
//!
//! Both binary levels fold to the left, so `1 + 2 + 3` parses as
//! `(1 + 2) + 3`. Whether `-` and `/` are accepted depends on the parser's
//! [`Grammar`](crate::parser::parse::Grammar).
//!
//! Every level also returns the height of the subtree it built. Trees taller
//! than [`MAX_DEPTH`] are rejected with `TooDeep` while they are being built.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, ParseErrorKind, Parser};

const ATOM_EXPECTED: &str = "a number or '('";

/// A parsed subtree and its height in nodes.
pub(crate) type Subtree = (Node, usize);

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Subtree, ParseError> {
        self.parse_additive()
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Result<Subtree, ParseError> {
        let (mut left, mut height) = self.parse_term()?;

        while let Some((op, loc)) =
            self.binary_operator(&[(TokenKind::Plus, BinOp::Add), (TokenKind::Minus, BinOp::Sub)])?
        {
            let (right, right_height) = self.parse_term()?;
            height = self.grow(height.max(right_height), loc)?;
            left = Node::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        Ok((left, height))
    }

    /// Parse multiplicative (* /)
    fn parse_term(&mut self) -> Result<Subtree, ParseError> {
        let (mut left, mut height) = self.parse_factor()?;

        while let Some((op, loc)) =
            self.binary_operator(&[(TokenKind::Star, BinOp::Mul), (TokenKind::Slash, BinOp::Div)])?
        {
            let (right, right_height) = self.parse_factor()?;
            height = self.grow(height.max(right_height), loc)?;
            left = Node::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location: loc,
            };
        }

        Ok((left, height))
    }

    /// No prefix operators exist, so a factor is an atom.
    fn parse_factor(&mut self) -> Result<Subtree, ParseError> {
        self.parse_atom()
    }

    /// Parse a number literal or a parenthesized expression
    fn parse_atom(&mut self) -> Result<Subtree, ParseError> {
        let loc = self.current_location();

        if self.check(TokenKind::Number) {
            let text = self
                .advance()
                .map(|token| token.text.clone())
                .unwrap_or_default();
            return Ok((Node::Number(text, loc), 1));
        }

        if self.match_token(TokenKind::LParen) {
            // Checked before recursing, the height check only runs on return
            if self.nesting >= MAX_DEPTH {
                return Err(ParseError::new(
                    ParseErrorKind::TooDeep { limit: MAX_DEPTH },
                    loc,
                ));
            }
            self.nesting += 1;
            let (inner, inner_height) = self.parse_expression()?;
            self.nesting -= 1;

            self.expect_token(TokenKind::RParen, "')'")?;
            let height = self.grow(inner_height, loc)?;
            return Ok((
                Node::Grouping {
                    inner: Box::new(inner),
                    location: loc,
                },
                height,
            ));
        }

        Err(self.unexpected(ATOM_EXPECTED))
    }

    /// Consume the next token if it is one of `candidates` and return its
    /// operator. Operators the grammar does not accept are an error rather
    /// than the end of the level.
    fn binary_operator(
        &mut self,
        candidates: &[(TokenKind, BinOp)],
    ) -> Result<Option<(BinOp, SourceLocation)>, ParseError> {
        let loc = self.current_location();
        let Some(&(_, op)) = candidates.iter().find(|(kind, _)| self.check(*kind)) else {
            return Ok(None);
        };

        if !self.grammar.accepts(op) {
            return Err(ParseError::new(
                ParseErrorKind::UnsupportedOperator {
                    operator: op.symbol(),
                },
                loc,
            ));
        }

        self.advance();
        Ok(Some((op, loc)))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::{Grammar, ParseErrorKind, Parser};

    fn parse(source: &str, grammar: Grammar) -> Node {
        Parser::new(source)
            .with_grammar(grammar)
            .parse()
            .unwrap()
            .expect("expected a tree")
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        let tree = parse("1 + 2 * 3", Grammar::Basic);

        match tree {
            Node::BinaryOp {
                op: BinOp::Add,
                left,
                right,
                ..
            } => {
                assert!(matches!(*left, Node::Number(ref n, _) if n == "1"));
                assert!(matches!(*right, Node::BinaryOp { op: BinOp::Mul, .. }));
            }
            other => panic!("Expected addition at the root, got {:?}", other),
        }
    }

    #[test]
    fn test_left_associative() {
        let tree = parse("8 / 4 / 2", Grammar::Full);

        match tree {
            Node::BinaryOp {
                op: BinOp::Div,
                left,
                right,
                ..
            } => {
                assert!(matches!(*left, Node::BinaryOp { op: BinOp::Div, .. }));
                assert!(matches!(*right, Node::Number(ref n, _) if n == "2"));
            }
            other => panic!("Expected division at the root, got {:?}", other),
        }
    }

    #[test]
    fn test_grouping_overrides_precedence() {
        let tree = parse("(1 + 2) * 3", Grammar::Basic);

        match tree {
            Node::BinaryOp {
                op: BinOp::Mul,
                left,
                location,
                ..
            } => {
                assert_eq!(location, SourceLocation::new(1, 9));
                assert!(matches!(*left, Node::Grouping { .. }));
            }
            other => panic!("Expected multiplication at the root, got {:?}", other),
        }
    }

    #[test]
    fn test_basic_grammar_rejects_minus() {
        let err = Parser::new("12 + (3 * 4) - 5").parse().unwrap_err();

        assert_eq!(err.kind, ParseErrorKind::UnsupportedOperator { operator: '-' });
        assert_eq!(err.location, SourceLocation::new(1, 14));
    }

    #[test]
    fn test_basic_grammar_rejects_slash() {
        let err = Parser::new("6 / 2").parse().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnsupportedOperator { operator: '/' });
        assert_eq!(err.location, SourceLocation::new(1, 3));
    }

    #[test]
    fn test_no_unary_minus() {
        let err = Parser::new("-1")
            .with_grammar(Grammar::Full)
            .parse()
            .unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                found: "'-'".to_string(),
                expected: "a number or '('",
            }
        );
    }

    #[test]
    fn test_missing_operand() {
        let err = Parser::new("1 +").parse().unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedEnd {
                expected: "a number or '('"
            }
        );
        assert_eq!(err.location, SourceLocation::new(1, 4));
    }

    #[test]
    fn test_empty_parentheses() {
        let err = Parser::new("()").parse().unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));
        assert_eq!(err.location, SourceLocation::new(1, 2));
    }

    #[test]
    fn test_nesting_limit() {
        let depth = MAX_DEPTH - 1;
        let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert!(Parser::new(&source).parse().is_ok());

        let source = format!("{}1{}", "(".repeat(3000), ")".repeat(3000));
        let err = Parser::new(&source).parse().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::TooDeep { limit: MAX_DEPTH });
    }

    #[test]
    fn test_long_chain_is_too_deep() {
        let source = vec!["1"; 3000].join(" + ");
        let err = Parser::new(&source).parse().unwrap_err();

        assert_eq!(err.kind, ParseErrorKind::TooDeep { limit: MAX_DEPTH });
        // The operator that would have pushed the tree past the limit
        assert_eq!(err.location, SourceLocation::new(1, 4 * MAX_DEPTH - 1));
    }
}
