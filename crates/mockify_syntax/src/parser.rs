//! Parser for C declarations
//!
//! Converts a token stream into a [`TranslationUnit`]. The grammar covers what appears at file scope in a header:
//! declarations (with any number of declarators), typedefs, and function definitions whose bodies are skipped.
//!
//! ## Examples
//!
//! ```rust
//! use mockify_syntax::ast::{DeclType, ExternalDecl};
//! use mockify_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("char* f(int i);").unwrap();
//! let unit = parser::parse(&tokens).unwrap();
//! match &unit.ext[0].node {
//!     ExternalDecl::Decl(decl) => assert!(matches!(decl.ty, DeclType::Function(_))),
//!     other => panic!("unexpected entry: {other:?}"),
//! }
//! ```

use std::collections::HashSet;

use crate::ast::*;
use crate::diagnostics::CompileError;
use crate::lexer::{Token, TokenKind};
use mockify_core::lang::keywords::{self, KeywordCategory, KeywordId};
use mockify_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/declarator.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
