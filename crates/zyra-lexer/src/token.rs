use std::fmt;

/// A position in source text, tracking line and column for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

/// Token classification for Zyra source.
///
/// Kinds are plain tags; the matched source text lives in `Token::lexeme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Component,
    State,
    Style,
    Interface,
    Eventos,
    If,
    Else,

    // Literals
    Identifier,
    String,
    Number,
    Color,
    Unit,

    // Symbols
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    Equals,
    PlusEquals,
    MinusEquals,
    Bang,
    Colon,
    Arrow,
    Dot,
    Comma,

    // End of input
    Eof,
}

impl TokenKind {
    /// Look up a keyword by its source spelling.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        match text {
            "component" => Some(TokenKind::Component),
            "state" => Some(TokenKind::State),
            "style" => Some(TokenKind::Style),
            "interface" => Some(TokenKind::Interface),
            "eventos" => Some(TokenKind::Eventos),
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Component => "COMPONENT",
            TokenKind::State => "STATE",
            TokenKind::Style => "STYLE",
            TokenKind::Interface => "INTERFACE",
            TokenKind::Eventos => "EVENTOS",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Color => "COLOR",
            TokenKind::Unit => "UNIT",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::Equals => "EQUALS",
            TokenKind::PlusEquals => "PLUS_EQUALS",
            TokenKind::MinusEquals => "MINUS_EQUALS",
            TokenKind::Bang => "BANG",
            TokenKind::Colon => "COLON",
            TokenKind::Arrow => "ARROW",
            TokenKind::Dot => "DOT",
            TokenKind::Comma => "COMMA",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token produced by the Zyra scanner.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Matched source text. Strings keep their quotes; colors drop the `#`.
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    pub fn line(&self) -> usize {
        self.span.line
    }

    /// The token as it was written in the source.
    pub fn source_text(&self) -> String {
        match self.kind {
            TokenKind::Color => format!("#{}", self.lexeme),
            _ => self.lexeme.clone(),
        }
    }

    /// Short description used in error messages: `IDENTIFIER 'nome'`, `EOF`.
    pub fn describe(&self) -> String {
        if self.kind == TokenKind::Eof {
            "end of input".to_string()
        } else {
            format!("{} '{}'", self.kind, self.source_text())
        }
    }
}

/// Unit suffixes folded into a preceding number.
pub const UNITS: &[&str] = &["%", "px", "rem", "em", "vh", "vw", "s", "ms"];

/// Check if a suffix belongs to the unit vocabulary.
pub fn is_unit(suffix: &str) -> bool {
    UNITS.contains(&suffix)
}
