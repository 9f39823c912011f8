//! Lexer for C declarations
//!
//! Handles tokenization including:
//! - Keywords (registry-backed, including GNU double-underscore aliases)
//! - Identifiers, numeric literals, string and character literals
//! - Declaration punctuation (`( ) [ ] { } , ; * = : ...`)
//! - `/* */` and `//` comments
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::CompileError;
use mockify_core::lang::punctuation::PunctuationId;

/// Multi-character operators that must not be split (longest match first).
const COMPOUND_SYMBOLS: &[&str] = &[
    "<<=", ">>=", "->", "++", "--", "<<", ">>", "<=", ">=", "==", "!=", "&&", "||", "+=", "-=", "*=", "/=", "%=",
    "&=", "|=", "^=", "##",
];

/// Lexer for C source text.
///
/// Whitespace (including newlines) is insignificant; the token stream always ends with an `Eof` token.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
    errors: Vec<CompileError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// Returns a vector of tokens on success, or a vector of errors on failure.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<CompileError>> {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(self.current_pos, self.current_pos),
        ));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            c if c.is_ascii_whitespace() => {}

            '/' if self.peek() == Some('/') => self.skip_line_comment(),
            '/' if self.peek() == Some('*') => self.skip_block_comment(start),

            ',' => self.add_punct(PunctuationId::Comma, start),
            ';' => self.add_punct(PunctuationId::Semicolon, start),
            '(' => self.add_punct(PunctuationId::LParen, start),
            ')' => self.add_punct(PunctuationId::RParen, start),
            '[' => self.add_punct(PunctuationId::LBracket, start),
            ']' => self.add_punct(PunctuationId::RBracket, start),
            '{' => self.add_punct(PunctuationId::LBrace, start),
            '}' => self.add_punct(PunctuationId::RBrace, start),
            ':' => self.add_punct(PunctuationId::Colon, start),
            '*' if self.peek() != Some('=') => self.add_punct(PunctuationId::Star, start),
            '=' if self.peek() != Some('=') => self.add_punct(PunctuationId::Eq, start),
            '.' if self.peek() == Some('.') && self.peek_next() == Some('.') => {
                self.advance();
                self.advance();
                self.add_punct(PunctuationId::Ellipsis, start);
            }
            '.' if self.peek().is_some_and(|n| n.is_ascii_digit()) => self.scan_number(start),

            '"' => self.scan_quoted(start, '"'),
            '\'' => self.scan_quoted(start, '\''),

            '0'..='9' => self.scan_number(start),

            _ if is_ident_start(c) => self.scan_identifier(start),

            '+' | '-' | '*' | '/' | '%' | '&' | '|' | '^' | '!' | '~' | '<' | '>' | '?' | '.' | '#' | '=' => {
                self.scan_symbol(start)
            }

            _ => {
                self.errors.push(CompileError::new(
                    format!("Unexpected character '{}'", c),
                    Span::new(start, self.current_pos),
                ));
            }
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize) {
        self.add_token(TokenKind::Punctuation(id), start);
    }

    // ========================================================================
    // Comments
    // ========================================================================

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self, start: usize) {
        self.advance(); // '*'
        loop {
            match self.advance() {
                Some('*') if self.match_char('/') => return,
                Some(_) => {}
                None => {
                    self.errors.push(CompileError::new(
                        "Unterminated comment".to_string(),
                        Span::new(start, self.current_pos),
                    ));
                    return;
                }
            }
        }
    }

    // ========================================================================
    // Literals, identifiers, symbols
    // ========================================================================

    /// Scan a string or character literal; the token keeps its quotes.
    fn scan_quoted(&mut self, start: usize, quote: char) {
        loop {
            match self.advance() {
                Some('\\') => {
                    self.advance();
                }
                Some(c) if c == quote => break,
                Some('\n') | None => {
                    self.errors.push(CompileError::new(
                        format!("Unterminated literal starting with {}", quote),
                        Span::new(start, self.current_pos),
                    ));
                    return;
                }
                Some(_) => {}
            }
        }

        let text = self.source[start..self.current_pos].to_string();
        let kind = if quote == '"' {
            TokenKind::String(text)
        } else {
            TokenKind::Char(text)
        };
        self.add_token(kind, start);
    }

    /// Scan a C "preprocessing number": digits, letters, `_`, `.`, and exponent signs.
    fn scan_number(&mut self, start: usize) {
        let mut prev = ' ';
        while let Some(c) = self.peek() {
            let exponent_sign = (c == '+' || c == '-') && matches!(prev, 'e' | 'E' | 'p' | 'P');
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' || exponent_sign {
                prev = c;
                self.advance();
            } else {
                break;
            }
        }
        let text = self.source[start..self.current_pos].to_string();
        self.add_token(TokenKind::Number(text), start);
    }

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];

        if let Some(id) = keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id), start);
        } else {
            self.add_token(TokenKind::Ident(spelling.to_string()), start);
        }
    }

    fn scan_symbol(&mut self, start: usize) {
        let rest = &self.source[start..];
        if let Some(sym) = COMPOUND_SYMBOLS.iter().find(|s| rest.starts_with(**s)) {
            for _ in 1..sym.len() {
                self.advance();
            }
        }
        let text = self.source[start..self.current_pos].to_string();
        self.add_token(TokenKind::Symbol(text), start);
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
