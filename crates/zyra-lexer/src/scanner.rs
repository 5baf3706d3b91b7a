use crate::token::{is_unit, Span, Token, TokenKind};
use crate::LexerError;

/// Zyra source scanner.
///
/// Converts source text into an ordered token sequence terminated by a
/// single `Eof` token. Scanning is a pure function of the input: the same
/// text always yields the same tokens.
///
/// - `Vec<char>` source for index-based navigation
/// - Line and column tracked on every token
/// - One character of lookahead, plus a rewind when a number's letter
///   suffix turns out not to be a unit
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    start: usize,
    start_line: usize,
    start_column: usize,
    tokens: Vec<Token>,
}

impl Scanner {
    /// Create a new scanner for the given source.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            start: 0,
            start_line: 1,
            start_column: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source into a vector of tokens.
    pub fn tokenize(source: &str) -> Result<Vec<Token>, LexerError> {
        let mut scanner = Scanner::new(source);
        scanner.scan_tokens()?;
        log::debug!(
            "scanned {} tokens over {} lines",
            scanner.tokens.len(),
            scanner.line
        );
        Ok(scanner.tokens)
    }

    /// Scan all tokens from the source.
    fn scan_tokens(&mut self) -> Result<(), LexerError> {
        while !self.is_at_end() {
            self.start = self.pos;
            self.start_line = self.line;
            self.start_column = self.column;
            self.scan_token()?;
        }

        let span = Span::new(self.pos, self.pos, self.line, self.column);
        self.tokens.push(Token::new(TokenKind::Eof, "", span));
        Ok(())
    }

    /// Scan the next token.
    fn scan_token(&mut self) -> Result<(), LexerError> {
        let ch = self.advance();

        match ch {
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '!' => self.add_token(TokenKind::Bang),
            ':' => self.add_token(TokenKind::Colon),
            '.' => self.add_token(TokenKind::Dot),
            ',' => self.add_token(TokenKind::Comma),

            '=' => {
                if self.match_char('>') {
                    self.add_token(TokenKind::Arrow);
                } else {
                    self.add_token(TokenKind::Equals);
                }
            }
            '+' => {
                if !self.match_char('=') {
                    return Err(self.error("Unexpected character: '+'".into()));
                }
                self.add_token(TokenKind::PlusEquals);
            }
            '-' => {
                if self.match_char('>') {
                    self.add_token(TokenKind::Arrow);
                } else if self.match_char('=') {
                    self.add_token(TokenKind::MinusEquals);
                } else if self.peek().is_ascii_digit() {
                    self.scan_number();
                } else if is_alpha(self.peek()) {
                    // The hyphen stays part of the identifier
                    self.scan_identifier();
                } else {
                    return Err(self.error("Unexpected character: '-'".into()));
                }
            }

            '#' => self.scan_color(),
            '"' => self.scan_string()?,
            '%' => self.add_token(TokenKind::Unit),

            // Comments
            '/' => {
                if !self.match_char('/') {
                    return Err(self.error("Unexpected character: '/'".into()));
                }
                while !self.is_at_end() && self.peek() != '\n' {
                    self.advance();
                }
            }

            // Whitespace (newlines are counted by `advance`)
            ' ' | '\t' | '\r' | '\n' => {}

            c if c.is_ascii_digit() => self.scan_number(),
            c if is_alpha(c) => self.scan_identifier(),

            c => return Err(self.error(format!("Unexpected character: '{c}'"))),
        }

        Ok(())
    }

    // --- Scanners ---

    /// Scan a string literal. The lexeme keeps both quotes; embedded
    /// newlines are kept verbatim and counted.
    fn scan_string(&mut self) -> Result<(), LexerError> {
        while !self.is_at_end() && self.peek() != '"' {
            self.advance();
        }

        if self.is_at_end() {
            return Err(self.error("Unterminated string".into()));
        }

        self.advance(); // consume closing quote
        self.add_token(TokenKind::String);
        Ok(())
    }

    /// Scan a number, folding a `%` or known unit suffix into a `Unit` token.
    /// `10px` is one unit; `10xyz` is the number `10` followed by `xyz`.
    fn scan_number(&mut self) {
        self.consume_digits();

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // consume .
            self.consume_digits();
        }

        if self.peek() == '%' {
            self.advance();
            self.add_token(TokenKind::Unit);
            return;
        }

        if is_alpha(self.peek()) {
            let (number_end, number_column) = (self.pos, self.column);
            while is_alpha(self.peek()) {
                self.advance();
            }

            let suffix: String = self.chars[number_end..self.pos].iter().collect();
            if is_unit(&suffix) {
                self.add_token(TokenKind::Unit);
                return;
            }

            // Not a unit: give the letters back to the next token
            self.pos = number_end;
            self.column = number_column;
        }

        self.add_token(TokenKind::Number);
    }

    /// Scan an identifier or keyword. Hyphens and underscores are allowed
    /// after the first character (`font-size`, `meu_estado`).
    fn scan_identifier(&mut self) {
        while is_alpha(self.peek()) || self.peek().is_ascii_digit() || self.peek() == '-' {
            self.advance();
        }

        let text = self.current_text();
        let kind = TokenKind::keyword(&text).unwrap_or(TokenKind::Identifier);
        self.add_token_with(kind, text);
    }

    /// Scan a hex color after `#`. The lexeme is the digits only and may be empty.
    fn scan_color(&mut self) {
        while self.peek().is_ascii_hexdigit() {
            self.advance();
        }

        let digits: String = self.chars[self.start + 1..self.pos].iter().collect();
        self.add_token_with(TokenKind::Color, digits);
    }

    // --- Helpers ---

    fn consume_digits(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }
    }

    fn current_text(&self) -> String {
        self.chars[self.start..self.pos].iter().collect()
    }

    fn add_token(&mut self, kind: TokenKind) {
        let text = self.current_text();
        self.add_token_with(kind, text);
    }

    fn add_token_with(&mut self, kind: TokenKind, lexeme: String) {
        let span = Span::new(self.start, self.pos, self.start_line, self.start_column);
        self.tokens.push(Token::new(kind, lexeme, span));
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.pos]
        }
    }

    fn peek_next(&self) -> char {
        if self.pos + 1 >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.pos + 1]
        }
    }

    fn advance(&mut self) -> char {
        let ch = self.peek();
        if !self.is_at_end() {
            self.pos += 1;
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        ch
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Errors point at the start of the token being scanned.
    fn error(&self, message: String) -> LexerError {
        LexerError {
            message,
            line: self.start_line,
            column: self.start_column,
        }
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}
