//! Arithmetic expression parser
//!
//! This module transforms expression text into a tree:
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Recursive descent parser (tokens → tree), with
//!   `expressions` holding one method per precedence level
//! - [`scan`]: Window-scanning builder that reproduces the older
//!   split-on-operator behavior, partial trees included
//! - [`ast`]: Tree node definitions
//!
//! # Supported Grammar
//!
//! Integer literals, parentheses and the binary operators `+ - * /`.
//! No unary operators, no floating point.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
pub mod scan;
