#![forbid(unsafe_code)]
//! mockify: CppUTest mock generation from C prototypes
//!
//! Given a C function prototype such as `char* f(int i, double j);`, mockify produces a mock function body that
//! records the call (and each argument) through CppUTest's `mock()` facility and returns the configured return value.
//! The crate is split into a frontend (lexing, parsing, classifying the declaration), a backend (emitting the body
//! and assembling the mock file), and the CLI.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//!
//! ```rust
//! use mockify::backend::{MockConfig, generate_mock_boilerplate};
//!
//! let body = generate_mock_boilerplate("void f(int i);", &MockConfig::default()).unwrap();
//! assert!(body.contains(r#".withParameter("i", i);"#));
//! ```

pub mod backend;
pub mod cli;
pub mod errors;
pub mod frontend;
pub mod version;

pub use frontend::ast;
pub use frontend::classifier;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;

pub use backend::{MockConfig, generate_mock_boilerplate};
pub use errors::MockError;
