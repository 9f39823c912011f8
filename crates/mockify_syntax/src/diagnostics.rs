//! Diagnostics and error reporting for the C declaration frontend.
//!
//! Errors carry a byte-offset [`Span`]; [`line_col`] turns that into the `line:col` pair users expect, and
//! [`to_report`] renders a `miette` report with the offending source labelled.

use miette::{LabeledSpan, MietteDiagnostic, NamedSource, Report};
use thiserror::Error;

use crate::ast::Span;

/// A frontend error with location information
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}")]
pub struct CompileError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Lexical,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn syntax(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Syntax,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

/// Get the 1-based line and column for a byte offset.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    (line_num, offset - line_start + 1)
}

/// Format an error as a single `line:col: message` line.
pub fn format_error(source: &str, error: &CompileError) -> String {
    let (line, col) = line_col(source, error.span.start);
    format!("{line}:{col}: {}", error.message)
}

/// Build a `miette` report with the error's span labelled in `source`.
///
/// Notes and hints are folded into the report's help text.
pub fn to_report(file_name: &str, source: &str, error: &CompileError) -> Report {
    let label = LabeledSpan::at(error.span.start..error.span.end.max(error.span.start), error.kind.to_string());
    let mut diag = MietteDiagnostic::new(error.message.clone()).with_label(label);

    let help: Vec<&str> = error.notes.iter().chain(error.hints.iter()).map(String::as_str).collect();
    if !help.is_empty() {
        diag = diag.with_help(help.join("\n"));
    }

    Report::new(diag).with_source_code(NamedSource::new(file_name, source.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_col_counts_from_one() {
        assert_eq!(line_col("int f();", 0), (1, 1));
        assert_eq!(line_col("int f();", 4), (1, 5));
        assert_eq!(line_col("int i;\nint f();", 11), (2, 5));
    }

    #[test]
    fn line_col_clamps_past_end() {
        assert_eq!(line_col("foo", 99), (1, 4));
    }

    #[test]
    fn format_error_prefixes_position() {
        let err = CompileError::syntax("Expected ';'".to_string(), Span::new(8, 8));
        assert_eq!(format_error("void f()", &err), "1:9: Expected ';'");
    }

    #[test]
    fn display_includes_kind() {
        let err = CompileError::syntax("boom".to_string(), Span::new(0, 1));
        assert_eq!(err.to_string(), "syntax error: boom");
    }
}
