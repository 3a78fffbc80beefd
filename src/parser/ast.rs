// AST (Abstract Syntax Tree) definitions for arithmetic expressions

use std::fmt;

/// Height limit, in printed nodes, of any tree either builder produces.
pub const MAX_DEPTH: usize = 256;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// The symbol printed as this operator's tree tag.
    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of the expression tree.
///
/// Children are owned exclusively by their parent, so every tree is a strict
/// tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Integer literal, kept as the digits it was scanned from.
    Number(String, SourceLocation),

    BinaryOp {
        op: BinOp,
        left: Box<Node>,
        right: Box<Node>,
        location: SourceLocation,
    },

    /// Parenthesized sub-expression.
    Grouping {
        inner: Box<Node>,
        location: SourceLocation,
    },

    /// A fragment the scanning builder could not match. Renders as nothing.
    Unparsed,
}

impl Node {
    /// The label printed for this node, or `None` for [`Node::Unparsed`].
    pub fn tag(&self) -> Option<String> {
        match self {
            Node::Number(text, _) => Some(text.clone()),
            Node::BinaryOp { op, .. } => Some(op.symbol().to_string()),
            Node::Grouping { .. } => Some("(".to_string()),
            Node::Unparsed => None,
        }
    }

    /// Children in print order.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Number(..) | Node::Unparsed => Vec::new(),
            Node::BinaryOp { left, right, .. } => vec![&**left, &**right],
            Node::Grouping { inner, .. } => vec![&**inner],
        }
    }

    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            Node::Number(_, loc) => Some(*loc),
            Node::BinaryOp { location, .. } | Node::Grouping { location, .. } => {
                Some(*location)
            }
            Node::Unparsed => None,
        }
    }

    /// True when some fragment of this tree failed to parse.
    pub fn is_partial(&self) -> bool {
        match self {
            Node::Unparsed => true,
            _ => self.children().iter().any(|child| child.is_partial()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(text: &str, column: usize) -> Node {
        Node::Number(text.to_string(), SourceLocation::new(1, column))
    }

    #[test]
    fn test_tags() {
        let loc = SourceLocation::new(1, 1);
        let sum = Node::BinaryOp {
            op: BinOp::Add,
            left: Box::new(num("1", 1)),
            right: Box::new(num("2", 5)),
            location: loc,
        };
        assert_eq!(sum.tag().as_deref(), Some("+"));
        assert_eq!(num("42", 1).tag().as_deref(), Some("42"));
        assert_eq!(Node::Unparsed.tag(), None);

        let group = Node::Grouping {
            inner: Box::new(sum),
            location: loc,
        };
        assert_eq!(group.tag().as_deref(), Some("("));
        assert_eq!(group.children().len(), 1);
    }

    #[test]
    fn test_partial_detection() {
        let loc = SourceLocation::new(1, 3);
        let partial = Node::BinaryOp {
            op: BinOp::Mul,
            left: Box::new(Node::Unparsed),
            right: Box::new(num("3", 5)),
            location: loc,
        };
        assert!(partial.is_partial());
        assert!(!num("3", 1).is_partial());
    }
}
