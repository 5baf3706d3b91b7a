//! Component parser for Zyra.
//!
//! Consumes the flat token sequence from `zyra-lexer` and builds a `Program`
//! using recursive descent. Every block keyword introduces exactly one
//! `{ ... }` body:
//!
//! ```text
//! component Contador {
//!   state { contador: 0 }
//!   style { cor: #333 tamanho: 18px }
//!   interface {
//!     Texto { texto: contador }
//!     Botao { texto: "+1" acao: incrementar }
//!   }
//!   eventos {
//!     incrementar -> { contador += 1 }
//!   }
//! }
//! ```
//!
//! Unknown tokens at the top level and inside a component body are skipped.
//! Everything else that does not match the grammar is a fatal error.

use crate::ast::{
    Component, Element, ElementText, EventHandler, InterfaceBlock, Node, Program, StateBlock,
    StateVariable, StyleBlock, StyleProperty,
};
use crate::ParseError;
use zyra_lexer::{Token, TokenKind};

/// Words a component name cannot take, since it becomes a script class name.
const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Names a class cannot bind: illegal in strict code, or non-configurable globals.
const RESTRICTED_NAMES: &[&str] = &["arguments", "eval", "Infinity", "NaN", "undefined"];

/// Zyra component parser.
///
/// Reads tokens by monotonically increasing position with one token of
/// lookahead.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a new parser for the given tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Scan and parse source code into a program.
    ///
    /// Lexer errors are reported as `ParseError`s with the same position.
    pub fn parse(source: &str) -> Result<Program, ParseError> {
        let tokens = zyra_lexer::Scanner::tokenize(source).map_err(|e| ParseError {
            message: e.message,
            line: e.line,
            column: e.column,
        })?;

        let mut parser = Parser::new(tokens);
        parser.parse_program()
    }

    /// Parse every top-level `component` declaration.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut components = Vec::new();

        while !self.is_at_end() {
            if self.match_kind(TokenKind::Component) {
                let name = self.peek().clone();
                let component = self.parse_component()?;
                if components.iter().any(|c: &Component| c.name == component.name) {
                    return Err(ParseError {
                        message: format!("Duplicate component '{}'", component.name),
                        line: name.span.line,
                        column: name.span.column,
                    });
                }
                log::debug!(
                    "parsed component '{}' with {} blocks",
                    component.name,
                    component.children.len()
                );
                components.push(component);
            } else {
                log::trace!("skipping top-level {}", self.peek().describe());
                self.advance();
            }
        }

        Ok(Program { components })
    }

    // =========================================================================
    // Components
    // =========================================================================

    /// Parse `Name { block* }` after the `component` keyword.
    fn parse_component(&mut self) -> Result<Component, ParseError> {
        let name = self.expect(TokenKind::Identifier, "component name")?;
        validate_component_name(&name)?;
        self.expect(TokenKind::LeftBrace, "'{' after component name")?;

        let mut children: Vec<Node> = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            let kind = self.peek().kind;
            match kind {
                TokenKind::State => {
                    self.reject_duplicate(&children, "state")?;
                    self.advance();
                    children.push(Node::State(self.parse_state_block()?));
                }
                TokenKind::Style => {
                    self.reject_duplicate(&children, "style")?;
                    self.advance();
                    children.push(Node::Style(self.parse_style_block()?));
                }
                TokenKind::Interface => {
                    self.reject_duplicate(&children, "interface")?;
                    self.advance();
                    children.push(Node::Interface(self.parse_interface_block()?));
                }
                TokenKind::Eventos => {
                    self.advance();
                    if let Some(event) = self.parse_events_block()? {
                        children.push(Node::Event(event));
                    }
                }
                _ => {
                    log::trace!(
                        "skipping {} in component '{}'",
                        self.peek().describe(),
                        name.lexeme
                    );
                    self.advance();
                }
            }
        }

        self.expect(TokenKind::RightBrace, "'}' after component body")?;

        Ok(Component {
            name: name.lexeme,
            children,
        })
    }

    fn reject_duplicate(&self, children: &[Node], keyword: &str) -> Result<(), ParseError> {
        if children.iter().any(|node| node.keyword() == keyword) {
            return Err(self.error(format!("Duplicate '{keyword}' block in component")));
        }
        Ok(())
    }

    // =========================================================================
    // State and style blocks
    // =========================================================================

    /// Parse `{ name: literal ... }` after `state`.
    fn parse_state_block(&mut self) -> Result<StateBlock, ParseError> {
        self.expect(TokenKind::LeftBrace, "'{' after 'state'")?;

        let mut variables = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            let name = self.expect(TokenKind::Identifier, "state variable name")?;
            self.expect(TokenKind::Colon, "':' after state variable name")?;
            let value = self.parse_literal(&name.lexeme)?;

            variables.push(StateVariable {
                name: name.lexeme,
                value: value.source_text(),
            });
        }

        self.expect(TokenKind::RightBrace, "'}' after state declarations")?;
        Ok(StateBlock { variables })
    }

    /// Parse `{ property: literal ... }` after `style`.
    fn parse_style_block(&mut self) -> Result<StyleBlock, ParseError> {
        self.expect(TokenKind::LeftBrace, "'{' after 'style'")?;

        let mut properties = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            let name = self.expect(TokenKind::Identifier, "style property name")?;
            self.expect(TokenKind::Colon, "':' after style property name")?;
            let value = self.parse_literal(&name.lexeme)?;

            properties.push(StyleProperty {
                name: name.lexeme,
                value: value.source_text(),
            });
        }

        self.expect(TokenKind::RightBrace, "'}' after style declarations")?;
        Ok(StyleBlock { properties })
    }

    // =========================================================================
    // Interface block
    // =========================================================================

    /// Parse `{ Element { ... } ... }` after `interface`.
    fn parse_interface_block(&mut self) -> Result<InterfaceBlock, ParseError> {
        self.expect(TokenKind::LeftBrace, "'{' after 'interface'")?;

        let mut elements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            elements.push(self.parse_element()?);
        }

        self.expect(TokenKind::RightBrace, "'}' after interface")?;
        Ok(InterfaceBlock { elements })
    }

    /// Parse `Name { property: literal ... }`.
    ///
    /// `texto` sets the display text (bound when the value is an identifier),
    /// `acao` names the click action. Other properties are consumed and dropped.
    fn parse_element(&mut self) -> Result<Element, ParseError> {
        let name = self.expect(TokenKind::Identifier, "element name")?;
        self.expect(TokenKind::LeftBrace, "'{' after element name")?;

        let mut text = None;
        let mut action = None;

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            let property = self.expect(TokenKind::Identifier, "element property name")?;
            self.expect(TokenKind::Colon, "':' after element property name")?;
            let value = self.parse_literal(&property.lexeme)?;

            match property.lexeme.as_str() {
                "texto" => {
                    text = Some(if value.kind == TokenKind::Identifier {
                        ElementText::Bound(value.lexeme)
                    } else {
                        ElementText::Literal(unquote(&value))
                    });
                }
                "acao" => action = Some(unquote(&value)),
                other => {
                    log::trace!("ignoring property '{other}' on element '{}'", name.lexeme);
                }
            }
        }

        self.expect(TokenKind::RightBrace, "'}' after element")?;

        Ok(Element {
            name: name.lexeme,
            text,
            action,
        })
    }

    // =========================================================================
    // Events block
    // =========================================================================

    /// Parse `{ name -> { tokens } ... }` after `eventos`.
    ///
    /// Only the first handler of a block is kept. Later handlers are still
    /// parsed, so their syntax errors are reported.
    fn parse_events_block(&mut self) -> Result<Option<EventHandler>, ParseError> {
        self.expect(TokenKind::LeftBrace, "'{' after 'eventos'")?;

        let mut events = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            let name = self.expect(TokenKind::Identifier, "event name")?;
            self.expect(TokenKind::Arrow, "'->' after event name")?;
            self.expect(TokenKind::LeftBrace, "'{' after '->'")?;
            let body = self.parse_event_body();
            self.expect(TokenKind::RightBrace, "'}' after event body")?;

            events.push(EventHandler {
                name: name.lexeme,
                body,
            });
        }

        self.expect(TokenKind::RightBrace, "'}' after eventos")?;

        if events.len() > 1 {
            let dropped: Vec<&str> = events[1..].iter().map(|e| e.name.as_str()).collect();
            log::warn!(
                "only the first handler of an 'eventos' block is kept; dropping {}",
                dropped.join(", ")
            );
        }

        Ok(events.into_iter().next())
    }

    /// Collect an event body up to its closing brace. Identifiers become
    /// `this.<name>`, every other token keeps its text, and tokens are joined
    /// by single spaces. Nested brace pairs stay inside the body.
    fn parse_event_body(&mut self) -> String {
        let mut parts = Vec::new();
        let mut depth = 0usize;

        while !self.is_at_end() {
            let kind = self.peek().kind;
            match kind {
                TokenKind::RightBrace if depth == 0 => break,
                TokenKind::RightBrace => depth -= 1,
                TokenKind::LeftBrace => depth += 1,
                _ => {}
            }

            let token = self.advance();
            if token.kind == TokenKind::Identifier {
                parts.push(format!("this.{}", token.lexeme));
            } else {
                parts.push(token.source_text());
            }
        }

        parts.join(" ")
    }

    // =========================================================================
    // Literal helpers
    // =========================================================================

    /// Take the token after `name:` verbatim. Braces and end of input are
    /// not literals.
    fn parse_literal(&mut self, name: &str) -> Result<Token, ParseError> {
        let kind = self.peek().kind;
        match kind {
            TokenKind::Eof | TokenKind::LeftBrace | TokenKind::RightBrace => {
                Err(self.error(format!(
                    "Expected value for '{name}', found {}",
                    self.peek().describe()
                )))
            }
            _ => Ok(self.advance()),
        }
    }

    // =========================================================================
    // Token navigation helpers
    // =========================================================================

    fn peek(&self) -> &Token {
        static EOF: std::sync::LazyLock<Token> = std::sync::LazyLock::new(|| {
            Token::new(TokenKind::Eof, "", zyra_lexer::Span::new(0, 0, 0, 0))
        });
        self.tokens.get(self.pos).unwrap_or(&EOF)
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail. End of input never matches.
    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(format!(
                "Expected {what}, found {}",
                self.peek().describe()
            )))
        }
    }

    fn error(&self, message: String) -> ParseError {
        let token = self.peek();
        ParseError {
            message,
            line: token.span.line,
            column: token.span.column,
        }
    }
}

/// Reject component names that cannot serve as a script class name.
fn validate_component_name(name: &Token) -> Result<(), ParseError> {
    let lexeme = name.lexeme.as_str();
    let invalid = lexeme.contains('-')
        || RESERVED_WORDS.contains(&lexeme)
        || RESTRICTED_NAMES.contains(&lexeme);
    if invalid {
        return Err(ParseError {
            message: format!(
                "Invalid component name '{}': must be a valid script identifier",
                name.lexeme
            ),
            line: name.span.line,
            column: name.span.column,
        });
    }
    Ok(())
}

/// Literal text of a value token, without the quotes of a string.
fn unquote(token: &Token) -> String {
    if token.kind == TokenKind::String {
        let lexeme = &token.lexeme;
        lexeme[1..lexeme.len() - 1].to_string()
    } else {
        token.source_text()
    }
}
