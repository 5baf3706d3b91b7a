//! Zyra Lexer
//!
//! Tokenizes `.zy` source files into a flat sequence of tokens.
//! Handles keywords, identifiers (including hyphenated ones), strings,
//! numbers with CSS units, hex colors, symbols, and `//` comments.
//!
//! # Example
//!
//! ```
//! use zyra_lexer::Scanner;
//!
//! let tokens = Scanner::tokenize("").unwrap();
//! assert_eq!(tokens.len(), 1); // Just EOF
//! ```

pub mod scanner;
pub mod token;

pub use scanner::Scanner;
pub use token::{Span, Token, TokenKind};

/// Lexer error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Lexer error at line {line}, column {column}: {message}")]
pub struct LexerError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}
