//! C declaration frontend for mockify: lexer, parser, AST, diagnostics.
//!
//! The crate understands the declaration subset of C that shows up in header files: declaration specifiers,
//! pointer/array/function declarators, parameter lists, typedefs, and tagged type references. Function definitions
//! are accepted but their bodies are skipped.
//!
//! ## Notes
//! - This crate is "syntax-only": it does not resolve typedefs or check types.
//! - Vocabulary identity (keywords/punctuation) comes from `mockify_core::lang` registries.
//! - Input is expected to be preprocessed; `#` directives are not understood.
//!
//! ## Examples
//! ```rust
//! use mockify_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("int f(int i);").unwrap();
//! let unit = parser::parse(&tokens).unwrap();
//! assert_eq!(unit.ext.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod token_helpers;
