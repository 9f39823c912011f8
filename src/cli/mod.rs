//! CLI module for mockify
//!
//! This module provides the command-line interface:
//!
//! ```text
//! mockify [OPTIONS] <MOCK_FILE> <PROTOTYPE>
//! ```
//!
//! `MOCK_FILE` is a base name: the mock is appended to `MOCK_FILE_mock.cpp`, which includes `MOCK_FILE.h`.
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;

use crate::backend::MockConfig;
use crate::version::MOCKIFY_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate a CppUTest mock function from a C prototype
#[derive(Parser, Debug)]
#[command(name = "mockify")]
#[command(version = MOCKIFY_VERSION)]
#[command(about = "Generate a CppUTest mock function from a C prototype", long_about = None)]
pub struct Cli {
    /// Base name of the mock: the body goes to MOCK_FILE_mock.cpp, which includes MOCK_FILE.h
    #[arg(value_name = "MOCK_FILE")]
    pub mock_file: String,

    /// C prototype to mock, terminated by ';' (e.g. "int f(int i);")
    #[arg(value_name = "PROTOTYPE")]
    pub prototype: String,

    /// Directory containing the mock file
    #[arg(short = 'd', long = "dir", value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Print the mock body instead of writing the mock file
    #[arg(long)]
    pub stdout: bool,

    /// Spaces per indentation level in the generated body
    #[arg(long, value_name = "N", default_value_t = 4)]
    pub indent: usize,

    /// Expression returned when the mock has no configured return value
    #[arg(long, value_name = "TOKEN", default_value = "WRITEME")]
    pub placeholder: String,

    /// Treat NAME as a type declared elsewhere (repeatable)
    #[arg(short = 't', long = "typedef", value_name = "NAME")]
    pub typedefs: Vec<String>,
}

impl Cli {
    /// Build the generation config from the parsed flags.
    pub fn config(&self) -> MockConfig {
        MockConfig::new()
            .with_output_dir(&self.dir)
            .with_indent_width(self.indent)
            .with_placeholder(self.placeholder.clone())
            .with_typedefs(self.typedefs.iter().cloned())
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // Help and version requests are not usage errors.
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
            process::exit(code.0);
        }
    };

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.config();
    if cli.stdout {
        commands::print_mock(&cli.prototype, &config)
    } else {
        commands::write_mock(&cli.mock_file, &cli.prototype, &config)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_positionals() {
        let cli = Cli::try_parse_from(["mockify", "foo", "void f();"]).unwrap();
        assert_eq!(cli.mock_file, "foo");
        assert_eq!(cli.prototype, "void f();");
        assert!(!cli.stdout);
        assert_eq!(cli.dir, PathBuf::from("."));
    }

    #[test]
    fn test_cli_missing_prototype_is_usage_error() {
        let err = Cli::try_parse_from(["mockify", "foo"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_cli_extra_argument_is_usage_error() {
        assert!(Cli::try_parse_from(["mockify", "foo", "void f();", "extra"]).is_err());
    }

    #[test]
    fn test_cli_options_flow_into_config() {
        let cli = Cli::try_parse_from([
            "mockify",
            "-d",
            "mocks",
            "--indent",
            "2",
            "--placeholder",
            "0",
            "-t",
            "handle_t",
            "--typedef",
            "event_t",
            "foo",
            "void f(handle_t h);",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.output_dir, PathBuf::from("mocks"));
        assert_eq!(config.indent_width, 2);
        assert_eq!(config.placeholder, "0");
        assert!(config.typedefs.iter().any(|t| t == "handle_t"));
        assert!(config.typedefs.iter().any(|t| t == "event_t"));
    }

    #[test]
    fn test_execute_stdout_touches_no_file() {
        let dir = std::env::temp_dir().join(format!("mockify_cli_stdout_{}", process::id()));
        let cli = Cli::try_parse_from([
            "mockify",
            "--stdout",
            "-d",
            dir.to_str().unwrap(),
            "foo",
            "int f(int i);",
        ])
        .unwrap();
        assert_eq!(execute(cli).unwrap(), ExitCode::SUCCESS);
        assert!(!dir.join("foo_mock.cpp").exists());
    }

    #[test]
    fn test_execute_generation_error_exits_zero() {
        let cli = Cli::try_parse_from(["mockify", "--stdout", "foo", "int i;"]).unwrap();
        assert_eq!(execute(cli).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_execute_writes_mock_file() {
        let dir = std::env::temp_dir().join(format!("mockify_cli_write_{}", process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let cli = Cli::try_parse_from(["mockify", "-d", dir.to_str().unwrap(), "foo", "void f(int i);"]).unwrap();
        assert_eq!(execute(cli).unwrap(), ExitCode::SUCCESS);

        let content = std::fs::read_to_string(dir.join("foo_mock.cpp")).unwrap();
        assert!(content.contains("#include \"foo.h\""));
        assert!(content.contains(".withParameter(\"i\", i);"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
