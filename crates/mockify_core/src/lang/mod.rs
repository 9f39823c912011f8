//! C vocabulary registries.
//!
//! This module is the "front door" for declaration-level vocabulary: reserved keywords, punctuation, and the
//! return-value accessor table of the mock facility.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer, parser, and generator.
//! Callers work with **stable IDs** (e.g. `KeywordId`, `PunctuationId`) and look up spellings/metadata via the tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries only provide spellings and metadata.
//!
//! ## Examples
//! ```rust
//! use mockify_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("static"), Some(KeywordId::Static));
//! assert_eq!(keywords::as_str(KeywordId::Static), "static");
//! ```

pub mod accessors;
pub mod keywords;
pub mod punctuation;
pub mod registry;
