//! Window-scanning tree builder
//!
//! Builds a tree by repeatedly re-scanning token windows instead of walking
//! them with a cursor:
//!
//! 1. split on the last `+` in the window,
//! 2. otherwise split on the last `*`,
//! 3. otherwise wrap the region after the last `(` in a grouping,
//! 4. otherwise a lone number becomes a leaf,
//! 5. anything else is absent.
//!
//! The `+`/`*` splits look at the whole window and ignore parentheses, and
//! `-`/`/` are never matched. Failures are silent: an unmatched child window
//! becomes [`Node::Unparsed`] and the caller gets a partial tree, never an
//! error. Windows more than [`MAX_DEPTH`] levels down are treated the same
//! way, so long chains give a truncated partial tree.

use crate::parser::ast::{BinOp, Node, MAX_DEPTH};
use crate::parser::lexer::{Token, TokenKind};

/// Result of scanning a token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// `None` when nothing in the input matched, including empty input.
    pub root: Option<Node>,
    /// Tokens a grouping left outside its parentheses, in input order.
    ///
    /// Tokens of a fragment that scanned to absence are in neither the tree
    /// nor the remainder.
    pub remainder: Vec<Token>,
}

/// Scan `tokens` into a tree.
pub fn build(tokens: &[Token]) -> ScanOutcome {
    let (root, remainder) = scan(tokens, 0);
    log::trace!(
        "scanned {} token(s), {} left over",
        tokens.len(),
        remainder.len()
    );
    ScanOutcome { root, remainder }
}

const SPLIT_OPERATORS: [(TokenKind, BinOp); 2] =
    [(TokenKind::Plus, BinOp::Add), (TokenKind::Star, BinOp::Mul)];

fn scan(window: &[Token], depth: usize) -> (Option<Node>, Vec<Token>) {
    if window.is_empty() {
        return (None, Vec::new());
    }
    if depth == MAX_DEPTH {
        log::debug!("{} token(s) below depth {} left unscanned", window.len(), depth);
        return (None, Vec::new());
    }

    for (kind, op) in SPLIT_OPERATORS {
        if let Some(split) = last_index_of(window, kind) {
            let (left, mut remainder) = scan(&window[..split], depth + 1);
            let (right, right_remainder) = scan(&window[split + 1..], depth + 1);
            remainder.extend(right_remainder);

            let node = Node::BinaryOp {
                op,
                left: Box::new(left.unwrap_or(Node::Unparsed)),
                right: Box::new(right.unwrap_or(Node::Unparsed)),
                location: window[split].location,
            };
            return (Some(node), remainder);
        }
    }

    if let Some(open) = last_index_of(window, TokenKind::LParen) {
        let close = window[open + 1..]
            .iter()
            .position(|token| token.is(TokenKind::RParen))
            .map(|offset| open + 1 + offset);
        let inner_end = close.unwrap_or(window.len());

        let (inner, inner_remainder) = scan(&window[open + 1..inner_end], depth + 1);

        let mut remainder = window[..open].to_vec();
        if let Some(close) = close {
            remainder.extend_from_slice(&window[close + 1..]);
        }
        remainder.extend(inner_remainder);

        let node = Node::Grouping {
            inner: Box::new(inner.unwrap_or(Node::Unparsed)),
            location: window[open].location,
        };
        return (Some(node), remainder);
    }

    if let [token] = window {
        if token.is(TokenKind::Number) {
            return (
                Some(Node::Number(token.text.clone(), token.location)),
                Vec::new(),
            );
        }
    }

    (None, Vec::new())
}

fn last_index_of(window: &[Token], kind: TokenKind) -> Option<usize> {
    window.iter().rposition(|token| token.is(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::tokenize;

    fn scan_str(source: &str) -> ScanOutcome {
        build(&tokenize(source))
    }

    #[test]
    fn test_single_number() {
        let outcome = scan_str("42");
        assert!(matches!(outcome.root, Some(Node::Number(ref n, _)) if n == "42"));
        assert!(outcome.remainder.is_empty());
    }

    #[test]
    fn test_empty_input_is_absent() {
        let outcome = scan_str("");
        assert_eq!(outcome.root, None);
        assert!(outcome.remainder.is_empty());
    }

    #[test]
    fn test_splits_on_last_plus() {
        let outcome = scan_str("1 + 2 + 3");
        match outcome.root {
            Some(Node::BinaryOp {
                op: BinOp::Add,
                left,
                right,
                ..
            }) => {
                assert!(matches!(*left, Node::BinaryOp { op: BinOp::Add, .. }));
                assert!(matches!(*right, Node::Number(ref n, _) if n == "3"));
            }
            other => panic!("Expected addition at the root, got {:?}", other),
        }
    }

    #[test]
    fn test_plus_scan_ignores_parentheses() {
        let outcome = scan_str("(1 + 2) * 3");
        assert!(matches!(
            outcome.root,
            Some(Node::BinaryOp { op: BinOp::Add, .. })
        ));
        assert!(outcome.root.as_ref().is_some_and(Node::is_partial));
    }

    #[test]
    fn test_minus_is_never_matched() {
        assert_eq!(scan_str("4 - 2").root, None);
        assert_eq!(scan_str("8 / 2").root, None);
    }

    #[test]
    fn test_grouping_leaves_outside_tokens_in_remainder() {
        let outcome = scan_str("5 (6) 7");

        assert!(matches!(outcome.root, Some(Node::Grouping { .. })));
        let remainder: Vec<&str> = outcome.remainder.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(remainder, vec!["5", "7"]);
    }

    #[test]
    fn test_unclosed_grouping_runs_to_window_end() {
        let outcome = scan_str("(9");
        match outcome.root {
            Some(Node::Grouping { inner, .. }) => {
                assert!(matches!(*inner, Node::Number(ref n, _) if n == "9"));
            }
            other => panic!("Expected grouping, got {:?}", other),
        }
        assert!(outcome.remainder.is_empty());
    }

    #[test]
    fn test_long_chain_is_truncated() {
        let outcome = scan_str(&vec!["1"; 3000].join(" + "));
        let root = outcome.root.expect("expected a tree");
        assert!(root.is_partial());

        // Follow the left spine down to the cut
        let mut height = 1;
        let mut node = &root;
        while let Node::BinaryOp { left, .. } = node {
            node = left;
            height += 1;
        }
        assert!(matches!(node, Node::Unparsed));
        assert_eq!(height, MAX_DEPTH + 1);
    }
}
