//! Indented text rendering of expression trees and token dumps

use crate::parser::ast::Node;
use crate::parser::lexer::Token;
use std::io::{self, Write};

const INDENT: &str = "  ";

/// Render `node` as one line per node: its tag indented two spaces per depth
/// level, followed by its children one level deeper.
///
/// Absent trees and [`Node::Unparsed`] fragments produce no lines.
pub fn render_lines(node: Option<&Node>) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(node) = node {
        render_into(node, 0, &mut lines);
    }
    lines
}

fn render_into(node: &Node, depth: usize, lines: &mut Vec<String>) {
    let Some(tag) = node.tag() else {
        return;
    };
    lines.push(format!("{}{}", INDENT.repeat(depth), tag));
    for child in node.children() {
        render_into(child, depth + 1, lines);
    }
}

/// Write the rendering of `node` to `out`, one line per node.
pub fn write_tree<W: Write>(out: &mut W, node: Option<&Node>) -> io::Result<()> {
    for line in render_lines(node) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Write one `KIND 'text' @line:col` line per token.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{}", describe_token(token))?;
    }
    Ok(())
}

pub fn describe_token(token: &Token) -> String {
    format!("{} '{}' @{}", token.kind.name(), token.text, token.location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::{BinOp, SourceLocation};
    use crate::parser::lexer::tokenize;

    fn num(text: &str) -> Node {
        Node::Number(text.to_string(), SourceLocation::new(1, 1))
    }

    #[test]
    fn test_leaf_prints_text_only() {
        assert_eq!(render_lines(Some(&num("42"))), vec!["42"]);
    }

    #[test]
    fn test_absent_prints_nothing() {
        assert!(render_lines(None).is_empty());
        assert!(render_lines(Some(&Node::Unparsed)).is_empty());
    }

    #[test]
    fn test_nested_indentation() {
        let tree = Node::Grouping {
            inner: Box::new(Node::BinaryOp {
                op: BinOp::Mul,
                left: Box::new(Node::Unparsed),
                right: Box::new(num("3")),
                location: SourceLocation::new(1, 4),
            }),
            location: SourceLocation::new(1, 1),
        };

        assert_eq!(render_lines(Some(&tree)), vec!["(", "  *", "    3"]);
    }

    #[test]
    fn test_write_tree_to_buffer() {
        let mut out = Vec::new();
        write_tree(&mut out, Some(&num("7"))).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "7\n");
    }

    #[test]
    fn test_write_tokens() {
        let mut out = Vec::new();
        write_tokens(&mut out, &tokenize("12+(")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "NUMBER '12' @1:1\nPLUS '+' @1:3\nLPAREN '(' @1:4\n"
        );
    }
}
