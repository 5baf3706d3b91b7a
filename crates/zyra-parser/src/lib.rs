//! Zyra Parser
//!
//! Parses the token sequence produced by `zyra-lexer` into a `Program`:
//! one `Component` tree per `component` declaration, each holding its
//! `state`, `style`, `interface` and `eventos` blocks.
//!
//! Parsing stops at the first error; there is no recovery.

pub mod ast;
pub mod parser;

pub use ast::{Component, Node, Program};
pub use parser::Parser;

/// Parser error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Parse error at line {line}, column {column}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}
