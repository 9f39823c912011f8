//! Mock generation configuration
//!
//! Defaults follow the layout CppUTest projects conventionally use: four-space indentation, `foo_mock.cpp` next to
//! `foo.h`, and a `WRITEME` placeholder where the real return value has to be filled in by hand.

use std::path::PathBuf;

/// Type names from the C standard headers that prototypes commonly use without declaring.
pub const STANDARD_TYPEDEFS: &[&str] = &[
    "bool", "size_t", "ssize_t", "ptrdiff_t", "intptr_t", "uintptr_t", "int8_t", "int16_t", "int32_t", "int64_t",
    "uint8_t", "uint16_t", "uint32_t", "uint64_t",
];

/// Mock generation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Expression returned when no return value was configured on the mock
    pub placeholder: String,
    /// Appended to the base name to form the mock source file name
    pub mock_suffix: String,
    /// Appended to the base name to form the included header name
    pub header_suffix: String,
    /// Directory the mock source file lives in
    pub output_dir: PathBuf,
    /// Names treated as already-declared typedefs when parsing the prototype
    pub typedefs: Vec<String>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            placeholder: "WRITEME".to_string(),
            mock_suffix: "_mock.cpp".to_string(),
            header_suffix: ".h".to_string(),
            output_dir: PathBuf::from("."),
            typedefs: STANDARD_TYPEDEFS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MockConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the fallback return expression
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the mock source file suffix
    pub fn with_mock_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.mock_suffix = suffix.into();
        self
    }

    /// Set the header file suffix
    pub fn with_header_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.header_suffix = suffix.into();
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Add typedef names on top of the ones already known
    pub fn with_typedefs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.typedefs.contains(&name) {
                self.typedefs.push(name);
            }
        }
        self
    }
}
