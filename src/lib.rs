//! # Introduction
//!
//! astview tokenizes small arithmetic expressions and prints their parse
//! trees as indented text, one node per line.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tree builder → Printer
//! ```
//!
//! 1. [`parser`]: tokenizes the source and builds the tree, either with the
//!    recursive descent [`parser::parse::Parser`] or the window-scanning
//!    [`parser::scan`] builder.
//! 2. [`printer`]: renders a tree (or a token list) as lines of text.
//! 3. [`pipeline`]: runs the stages for one expression under a set of
//!    [`pipeline::Options`].
//! 4. [`ui`]: ratatui-based interactive viewer; not part of the stable
//!    library API.
//!
//! ## Example
//!
//! ```
//! use astview::pipeline::{generate_ast, Options};
//!
//! let mut out = Vec::new();
//! generate_ast("1 + 2 * 3", &Options::default(), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "+\n  1\n  *\n    2\n    3\n");
//! ```

pub mod parser;
pub mod pipeline;
pub mod printer;
pub mod ui;

pub use pipeline::{generate_ast, Builder, Options};
