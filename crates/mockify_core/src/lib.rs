//! Provide the canonical C vocabulary and mock-facility tables shared by the mockify tools.
//!
//! This crate is intentionally small and dependency-free. It holds the pieces of "knowledge" that both the syntax
//! frontend and the mock generator rely on:
//! - which C spellings are reserved words (and what role each plays in a declaration),
//! - which punctuation the declaration grammar understands,
//! - which CppUTest accessor retrieves a recorded return value of a given C type.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global mutable state, no AST types.
//! - Every table is a `const` slice; lookups are linear scans over a handful of entries.

pub mod lang;
