//! mockify backend
//!
//! This module turns a classified prototype into mock source and writes it out.
//!
//! The pipeline is:
//! 1. Prototype text → lexer → parser → classifier (frontend)
//! 2. Classified function → emitter → mock body
//! 3. Mock body → appended to the mock file (banner written on creation)
//!
//! ## Module Organization
//!
//! - `config.rs` - `MockConfig` builder
//! - `writer.rs` - Indentation-aware output buffer
//! - `emitter.rs` - Template selection, accessor lookup, body layout
//! - `mock_file.rs` - Mock file paths, banner, create-or-append

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod emitter;
pub mod mock_file;
pub mod writer;

pub use config::MockConfig;
pub use emitter::{emit, emit_with_config};
pub use mock_file::{AddedMock, FileState, MockFilePaths, add_mock};

use crate::errors::MockError;
use crate::frontend::ast::TranslationUnit;
use crate::frontend::classifier::classify;
use crate::frontend::diagnostics::{self, CompileError};
use crate::frontend::{lexer, parser};

/// Generate the mock body for one C prototype.
///
/// ## Errors
/// [`MockError::Parse`] for malformed input, otherwise whatever classification or emission reports.
#[tracing::instrument(skip_all, fields(prototype_len = prototype.len()))]
pub fn generate_mock_boilerplate(prototype: &str, config: &MockConfig) -> Result<String, MockError> {
    let unit = parse_prototype(prototype, &config.typedefs)?;
    let func = classify(&unit)?;
    emit_with_config(&func, config)
}

/// Lex and parse `prototype`, reporting the first error as `<line>:<col>: <message>`.
pub fn parse_prototype(prototype: &str, typedefs: &[String]) -> Result<TranslationUnit, MockError> {
    let tokens = lexer::lex(prototype).map_err(|errs| first_error(prototype, &errs))?;
    parser::parse_with_typedefs(&tokens, typedefs).map_err(|errs| first_error(prototype, &errs))
}

/// Render every syntax error in `prototype` as a `miette` report (empty if it parses).
pub fn syntax_reports(prototype: &str, typedefs: &[String]) -> Vec<miette::Report> {
    let errors = match lexer::lex(prototype) {
        Err(errs) => errs,
        Ok(tokens) => parser::parse_with_typedefs(&tokens, typedefs).err().unwrap_or_default(),
    };
    errors
        .iter()
        .map(|e| diagnostics::to_report("<prototype>", prototype, e))
        .collect()
}

fn first_error(source: &str, errors: &[CompileError]) -> MockError {
    match errors.first() {
        Some(e) => MockError::Parse(diagnostics::format_error(source, e)),
        None => MockError::Parse("unknown syntax error".to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_carries_location() {
        let err = generate_mock_boilerplate("void f()", &MockConfig::default()).unwrap_err();
        match err {
            MockError::Parse(msg) => assert!(msg.starts_with("1:9: "), "got {msg}"),
            other => panic!("Expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_lex_error_is_a_parse_error() {
        let err = generate_mock_boilerplate("void f(int @);", &MockConfig::default()).unwrap_err();
        assert!(matches!(err, MockError::Parse(_)));
    }

    #[test]
    fn test_configured_typedefs_are_known() {
        let config = MockConfig::new().with_typedefs(["handle_t"]);
        let body = generate_mock_boilerplate("void close_handle(handle_t h);", &config).unwrap();
        assert!(body.starts_with("void close_handle(handle_t h) {"));
    }

    #[test]
    fn test_bool_return_uses_bool_accessor() {
        let body = generate_mock_boilerplate("bool ready(void);", &MockConfig::default()).unwrap();
        assert!(body.contains("return mock().boolReturnValue();"));
    }

    #[test]
    fn test_syntax_reports() {
        assert!(syntax_reports("void f();", &[]).is_empty());
        assert_eq!(syntax_reports("foo", &[]).len(), 1);
    }
}
