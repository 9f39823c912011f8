//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! Generation errors (a prototype that cannot be mocked) are reported on stdout as `Error: <message>` and still exit
//! successfully; only I/O failures are turned into a failing exit code.

use std::env;

use crate::backend::{self, MockConfig, MockFilePaths};
use crate::errors::MockError;

use super::{CliError, CliResult, ExitCode};

/// Generate the mock for `prototype` and append it to the mock file for `base`.
pub fn write_mock(base: &str, prototype: &str, config: &MockConfig) -> CliResult<ExitCode> {
    let cwd = env::current_dir().map_err(|e| CliError::failure(format!("Error reading working directory: {e}")))?;
    let paths = MockFilePaths::new(base, config);

    tracing::info!("working directory: {}", cwd.display());
    tracing::info!("mock_filename: {}", paths.mock_file.display());
    tracing::info!("include_filename: {}", paths.include);
    tracing::info!("mock_prototype: {}", prototype);

    match backend::add_mock(base, prototype, config) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => report(e, prototype, config),
    }
}

/// Generate the mock for `prototype` and print it without touching any file.
pub fn print_mock(prototype: &str, config: &MockConfig) -> CliResult<ExitCode> {
    tracing::info!("mock_prototype: {}", prototype);
    match backend::generate_mock_boilerplate(prototype, config) {
        Ok(body) => {
            println!("{body}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => report(e, prototype, config),
    }
}

fn report(err: MockError, prototype: &str, config: &MockConfig) -> CliResult<ExitCode> {
    if !err.is_generation_error() {
        return Err(CliError::failure(format!("Error: {err}")));
    }

    if matches!(err, MockError::Parse(_)) {
        for report in backend::syntax_reports(prototype, &config.typedefs) {
            eprintln!("{report:?}");
        }
    }
    tracing::warn!(error = %err, "prototype not mocked");
    println!("Error: {err}");
    Ok(ExitCode::SUCCESS)
}
