//! Token types for the C lexer.
//!
//! The lexer uses **registry-backed IDs** for vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Punctuation(PunctuationId)` for the punctuators the declaration grammar understands
//!
//! ## Notes
//! - Operators the grammar never inspects (`+`, `<<`, `->`, ...) are kept as opaque `Symbol` tokens so that array
//!   dimensions and skipped function bodies still tokenize.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::ast::Span;
use mockify_core::lang::keywords::{self, KeywordId};
use mockify_core::lang::punctuation::PunctuationId;

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident(String),
    /// Numeric literal, kept as written (`10`, `0x1Fu`, `1.5e3f`).
    Number(String),
    /// String literal including its quotes.
    String(String),
    /// Character literal including its quotes.
    Char(String),

    /// Any other operator spelling.
    Symbol(String),

    Eof,
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
