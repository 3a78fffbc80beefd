//! Source text → tokens → tree → printed lines

use crate::parser::ast::{Node, SourceLocation};
use crate::parser::lexer::{Lexer, Token};
use crate::parser::parse::{Grammar, ParseError, Parser};
use crate::parser::scan;
use crate::printer;
use std::io::{self, Write};
use thiserror::Error;

/// Which tree builder turns tokens into a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Builder {
    /// Recursive descent parser with diagnosed errors.
    Descent,
    /// Window-scanning builder; silently produces partial trees.
    #[default]
    Scan,
}

impl Builder {
    pub fn toggled(self) -> Self {
        match self {
            Builder::Descent => Builder::Scan,
            Builder::Scan => Builder::Descent,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Builder::Descent => "descent",
            Builder::Scan => "scan",
        }
    }
}

/// Settings for one run of the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub builder: Builder,
    /// Operator set for the descent parser. The scanning builder has a
    /// fixed operator set and ignores it.
    pub grammar: Grammar,
}

/// Everything the pipeline learned about one expression.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    /// Characters the lexer dropped.
    pub ignored: Vec<(char, SourceLocation)>,
    pub tree: Result<Option<Node>, ParseError>,
    /// Tokens the scanning builder left outside the tree. See
    /// [`scan::ScanOutcome::remainder`] for what is not counted.
    pub remainder: Vec<Token>,
}

impl Analysis {
    /// Write the tree, preceded by the token dump when `with_tokens` is set.
    ///
    /// On a parse error the tokens are still written, the tree is not.
    pub fn write<W: Write>(&self, out: &mut W, with_tokens: bool) -> Result<(), GenerateError> {
        if with_tokens {
            printer::write_tokens(out, &self.tokens)?;
        }
        let root = self.tree.as_ref().map_err(Clone::clone)?;
        printer::write_tree(out, root.as_ref())?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Tokenize and build the tree for `source`.
pub fn analyze(source: &str, options: &Options) -> Analysis {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize();
    let ignored = lexer.ignored().to_vec();
    for (ch, location) in &ignored {
        log::warn!("ignoring unrecognized character {:?} at {}", ch, location);
    }

    let (tree, remainder) = match options.builder {
        Builder::Descent => {
            let tree = Parser::from_tokens(tokens.clone(), lexer.end_location())
                .with_grammar(options.grammar)
                .parse();
            (tree, Vec::new())
        }
        Builder::Scan => {
            let outcome = scan::build(&tokens);
            (Ok(outcome.root), outcome.remainder)
        }
    };

    match &tree {
        Ok(Some(root)) if root.is_partial() => log::debug!("partial tree for {:?}", source),
        Ok(None) => log::debug!("no tree for {:?}", source),
        Err(err) => log::debug!("{}", err),
        Ok(Some(_)) => {}
    }
    if !remainder.is_empty() {
        log::debug!("{} token(s) left outside the tree", remainder.len());
    }

    Analysis {
        tokens,
        ignored,
        tree,
        remainder,
    }
}

/// Write the rendered tree of `source` to `out`.
///
/// Absent trees write nothing. Parse errors (descent builder only) are
/// returned without writing anything.
pub fn generate_ast<W: Write>(
    source: &str,
    options: &Options,
    out: &mut W,
) -> Result<(), GenerateError> {
    analyze(source, options).write(out, false)
}
