//! Error type for mock generation.
//!
//! Every way a prototype can fail to become a mock is a variant of [`MockError`]; the CLI prints them all the same way
//! (`Error: <message>`). Only [`MockError::Io`] is treated as a hard failure.

use thiserror::Error;

/// Errors that occur while turning a prototype into a mock
#[derive(Debug, Error)]
pub enum MockError {
    /// Lexing or parsing failed; carries `<line>:<col>: <message>` of the first error.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("not a valid declaration")]
    NotADeclaration,

    #[error("not a function declaration")]
    NotAFunction,

    #[error("cannot mock a function with storage class {0}")]
    StorageClass(String),

    #[error("cannot mock a function with an unnamed argument")]
    UnnamedArgument,

    #[error("cannot mock a variadic function")]
    Variadic,

    /// The function returns something other than `T` or `T*` (e.g. `T**`, a function pointer).
    #[error("cannot handle the shape of the return type")]
    UnhandledReturnShape,

    /// The return type has no CppUTest return-value accessor.
    #[error("cannot handle return type {0}")]
    UnhandledReturnType(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MockError {
    /// `true` for errors caused by the prototype itself rather than the environment.
    pub fn is_generation_error(&self) -> bool {
        !matches!(self, MockError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            MockError::StorageClass("static".to_string()).to_string(),
            "cannot mock a function with storage class static"
        );
        assert_eq!(
            MockError::UnhandledReturnType("float".to_string()).to_string(),
            "cannot handle return type float"
        );
        assert_eq!(MockError::Parse("1:1: oops".to_string()).to_string(), "parse error: 1:1: oops");
    }

    #[test]
    fn test_io_is_not_a_generation_error() {
        let io = MockError::from(std::io::Error::other("disk full"));
        assert!(!io.is_generation_error());
        assert!(MockError::NotAFunction.is_generation_error());
    }
}
