//! mockify frontend
//!
//! This module contains all frontend components:
//! - `lexer`: tokenization of C source text
//! - `parser`: parsing tokens into a declaration tree
//! - `ast`: declaration tree definitions
//! - `diagnostics`: error reporting
//! - `render`: spelling declarators back into C
//! - `classifier`: deciding whether a declaration can be mocked, and how

// Syntax components are provided by the shared mockify_syntax crate.
pub use mockify_syntax::{ast, diagnostics, lexer, parser, render};

// Mock-specific pieces remain local.
pub mod classifier;
