//! Shareable metadata for `mockify_core::lang` registries.
//!
//! The `mockify_core::lang` module is a set of **registry-first** vocabularies: keywords, punctuation, and return-value
//! accessors. This submodule provides the small, dependency-free metadata types reused across all of them.
//!
//! ## Notes
//! - These types are `Copy`-friendly so registries can live in `const` tables.
//! - Metadata is meant for tooling and diagnostics; enforcement of syntax rules still lives in the lexer/parser.

/// The C language revision that introduced a vocabulary item.
///
/// ## Examples
/// ```rust
/// use mockify_core::lang::registry::Standard;
///
/// assert!(Standard::C89 < Standard::C99);
/// assert_eq!(Standard::C11.as_str(), "C11");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Standard {
    C89,
    C99,
    C11,
}

impl Standard {
    /// Return the conventional name of the revision.
    pub const fn as_str(self) -> &'static str {
        match self {
            Standard::C89 => "C89",
            Standard::C99 => "C99",
            Standard::C11 => "C11",
        }
    }
}

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Notes
/// - `Synthetic` marks entries that do not exist upstream but are accepted for convenience (for example `char*`
///   mapped onto the generic pointer accessor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Synthetic,
}
