//! Mock source file assembly
//!
//! A mock file collects the mock bodies for one header. The first time it is created it gets a banner that pulls in
//! the header with C linkage; every later invocation only appends.
//!
//! Ordering matters: the file (and banner) is created first, then the body is generated, then appended. A prototype
//! that fails to generate therefore never leaves a partial body behind, though a freshly created file keeps its banner.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::config::MockConfig;
use super::generate_mock_boilerplate;
use crate::errors::MockError;

/// Where a mock for base name `B` goes, and which header it includes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockFilePaths {
    /// `<output_dir>/B_mock.cpp`
    pub mock_file: PathBuf,
    /// `B.h`, as written in the `#include`
    pub include: String,
}

impl MockFilePaths {
    pub fn new(base: &str, config: &MockConfig) -> Self {
        Self {
            mock_file: config.output_dir.join(format!("{base}{}", config.mock_suffix)),
            include: format!("{base}{}", config.header_suffix),
        }
    }
}

/// Whether the mock file had to be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    Created,
    Existing,
}

/// The banner written at the top of a newly created mock file.
pub fn file_header(include: &str) -> String {
    format!("\n// autogenerated by mockify\n\nextern \"C\" {{\n#include \"{include}\"\n}}\n\n")
}

/// Create `paths.mock_file` with its banner unless it already exists.
pub fn ensure_mock_file(paths: &MockFilePaths) -> Result<FileState, MockError> {
    match OpenOptions::new().write(true).create_new(true).open(&paths.mock_file) {
        Ok(mut file) => {
            tracing::info!("Creating mock file");
            tracing::info!("Adding file header");
            file.write_all(file_header(&paths.include).as_bytes())?;
            Ok(FileState::Created)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            tracing::info!("Mock file exists");
            Ok(FileState::Existing)
        }
        Err(e) => Err(e.into()),
    }
}

/// Append one mock body, separated from what precedes it by a blank line.
pub fn append_mock_function(path: &Path, body: &str) -> Result<(), MockError> {
    tracing::info!("Adding mock function");
    let mut file = OpenOptions::new().append(true).open(path)?;
    write!(file, "\n{body}\n")?;
    Ok(())
}

/// Result of [`add_mock`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedMock {
    pub paths: MockFilePaths,
    pub state: FileState,
    pub body: String,
}

/// Generate the mock for `prototype` and append it to the mock file for `base`.
///
/// ## Errors
/// Any generation error from [`generate_mock_boilerplate`] (the file may have been created with its banner), or
/// [`MockError::Io`] if the output directory or file cannot be written.
#[tracing::instrument(skip_all, fields(base = %base))]
pub fn add_mock(base: &str, prototype: &str, config: &MockConfig) -> Result<AddedMock, MockError> {
    let paths = MockFilePaths::new(base, config);
    if !config.output_dir.as_os_str().is_empty() {
        fs::create_dir_all(&config.output_dir)?;
    }

    let state = ensure_mock_file(&paths)?;
    let body = generate_mock_boilerplate(prototype, config)?;
    append_mock_function(&paths.mock_file, &body)?;

    Ok(AddedMock { paths, state, body })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    /// A fresh, empty directory under the system temp dir.
    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "mockify_unit_{}_{}_{}",
            tag,
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_paths_use_suffixes() {
        let config = MockConfig::new().with_output_dir("mocks");
        let paths = MockFilePaths::new("foo", &config);
        assert_eq!(paths.mock_file, PathBuf::from("mocks").join("foo_mock.cpp"));
        assert_eq!(paths.include, "foo.h");
    }

    #[test]
    fn test_file_header_layout() {
        assert_eq!(
            file_header("foo.h"),
            "\n// autogenerated by mockify\n\nextern \"C\" {\n#include \"foo.h\"\n}\n\n"
        );
    }

    #[test]
    fn test_header_written_once() {
        let dir = scratch_dir("once");
        let config = MockConfig::new().with_output_dir(&dir);

        let first = add_mock("foo", "void f();", &config).unwrap();
        assert_eq!(first.state, FileState::Created);
        let second = add_mock("foo", "int g(int x);", &config).unwrap();
        assert_eq!(second.state, FileState::Existing);

        let content = fs::read_to_string(dir.join("foo_mock.cpp")).unwrap();
        assert_eq!(content.matches("autogenerated by mockify").count(), 1);
        assert!(content.starts_with(&file_header("foo.h")));
        let f_at = content.find("void f() {").unwrap();
        let g_at = content.find("int g(int x) {").unwrap();
        assert!(f_at < g_at);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_failed_generation_leaves_only_header() {
        let dir = scratch_dir("failed");
        let config = MockConfig::new().with_output_dir(&dir);

        let err = add_mock("foo", "static void f();", &config).unwrap_err();
        assert!(matches!(err, MockError::StorageClass(_)));
        let content = fs::read_to_string(dir.join("foo_mock.cpp")).unwrap();
        assert_eq!(content, file_header("foo.h"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_existing_content_preserved() {
        let dir = scratch_dir("existing");
        let path = dir.join("foo_mock.cpp");
        fs::write(&path, "// hand written\n").unwrap();
        let config = MockConfig::new().with_output_dir(&dir);

        add_mock("foo", "void f();", &config).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "// hand written\n\nvoid f() {\n    mock().actualCall(\"f\");\n}\n");

        fs::remove_dir_all(&dir).unwrap();
    }
}
