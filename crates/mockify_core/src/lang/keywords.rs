//! Define the reserved keyword vocabulary of C declarations.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) recording canonical spellings, aliases, and the role each keyword plays inside a
//! declaration.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Only the roles matter to the declaration grammar; statement keywords are listed so that they are never mistaken
//!   for identifiers (they can only appear inside skipped function bodies).
//!
//! ## Examples
//! ```rust
//! use mockify_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("const"), Some(KeywordId::Const));
//! assert_eq!(keywords::from_str("__inline"), Some(KeywordId::Inline)); // alias
//! assert_eq!(keywords::category(KeywordId::Static), KeywordCategory::StorageClass);
//! ```

use super::registry::{Stability, Standard};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Storage classes
    Typedef,
    Extern,
    Static,
    Auto,
    Register,
    ThreadLocal,

    // Type qualifiers
    Const,
    Volatile,
    Restrict,
    Atomic,

    // Function specifiers
    Inline,
    Noreturn,

    // Type specifiers
    Void,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Signed,
    Unsigned,
    Bool,
    Complex,

    // Tagged types
    Struct,
    Union,
    Enum,

    // Everything else (only meaningful inside bodies/expressions)
    Sizeof,
    Return,
    If,
    Else,
    While,
    Do,
    For,
    Switch,
    Case,
    Default,
    Break,
    Continue,
    Goto,
}

/// Role of a keyword inside a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// `static`, `extern`, `typedef`, ...: controls linkage/storage of the declared name.
    StorageClass,
    /// `const`, `volatile`, ...
    TypeQualifier,
    /// `inline`, `_Noreturn`
    FunctionSpecifier,
    /// Builtin type names (`int`, `unsigned`, ...).
    TypeSpecifier,
    /// `struct`, `union`, `enum`
    Tag,
    /// Statement/expression keywords.
    Other,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub category: KeywordCategory,
    pub since: Standard,
    pub stability: Stability,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
/// - GNU double-underscore spellings are accepted as aliases where common headers use them.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Storage classes
    info(KeywordId::Typedef, "typedef", &[], KeywordCategory::StorageClass, Standard::C89),
    info(KeywordId::Extern, "extern", &[], KeywordCategory::StorageClass, Standard::C89),
    info(KeywordId::Static, "static", &[], KeywordCategory::StorageClass, Standard::C89),
    info(KeywordId::Auto, "auto", &[], KeywordCategory::StorageClass, Standard::C89),
    info(KeywordId::Register, "register", &[], KeywordCategory::StorageClass, Standard::C89),
    info(
        KeywordId::ThreadLocal,
        "_Thread_local",
        &["__thread"],
        KeywordCategory::StorageClass,
        Standard::C11,
    ),
    // Type qualifiers
    info(KeywordId::Const, "const", &["__const"], KeywordCategory::TypeQualifier, Standard::C89),
    info(
        KeywordId::Volatile,
        "volatile",
        &["__volatile__"],
        KeywordCategory::TypeQualifier,
        Standard::C89,
    ),
    info(
        KeywordId::Restrict,
        "restrict",
        &["__restrict", "__restrict__"],
        KeywordCategory::TypeQualifier,
        Standard::C99,
    ),
    info(KeywordId::Atomic, "_Atomic", &[], KeywordCategory::TypeQualifier, Standard::C11),
    // Function specifiers
    info(
        KeywordId::Inline,
        "inline",
        &["__inline", "__inline__"],
        KeywordCategory::FunctionSpecifier,
        Standard::C99,
    ),
    info(KeywordId::Noreturn, "_Noreturn", &[], KeywordCategory::FunctionSpecifier, Standard::C11),
    // Type specifiers
    info(KeywordId::Void, "void", &[], KeywordCategory::TypeSpecifier, Standard::C89),
    info(KeywordId::Char, "char", &[], KeywordCategory::TypeSpecifier, Standard::C89),
    info(KeywordId::Short, "short", &[], KeywordCategory::TypeSpecifier, Standard::C89),
    info(KeywordId::Int, "int", &[], KeywordCategory::TypeSpecifier, Standard::C89),
    info(KeywordId::Long, "long", &[], KeywordCategory::TypeSpecifier, Standard::C89),
    info(KeywordId::Float, "float", &[], KeywordCategory::TypeSpecifier, Standard::C89),
    info(KeywordId::Double, "double", &[], KeywordCategory::TypeSpecifier, Standard::C89),
    info(
        KeywordId::Signed,
        "signed",
        &["__signed__"],
        KeywordCategory::TypeSpecifier,
        Standard::C89,
    ),
    info(KeywordId::Unsigned, "unsigned", &[], KeywordCategory::TypeSpecifier, Standard::C89),
    info(KeywordId::Bool, "_Bool", &[], KeywordCategory::TypeSpecifier, Standard::C99),
    info(KeywordId::Complex, "_Complex", &[], KeywordCategory::TypeSpecifier, Standard::C99),
    // Tagged types
    info(KeywordId::Struct, "struct", &[], KeywordCategory::Tag, Standard::C89),
    info(KeywordId::Union, "union", &[], KeywordCategory::Tag, Standard::C89),
    info(KeywordId::Enum, "enum", &[], KeywordCategory::Tag, Standard::C89),
    // Other
    info(KeywordId::Sizeof, "sizeof", &[], KeywordCategory::Other, Standard::C89),
    info(KeywordId::Return, "return", &[], KeywordCategory::Other, Standard::C89),
    info(KeywordId::If, "if", &[], KeywordCategory::Other, Standard::C89),
    info(KeywordId::Else, "else", &[], KeywordCategory::Other, Standard::C89),
    info(KeywordId::While, "while", &[], KeywordCategory::Other, Standard::C89),
    info(KeywordId::Do, "do", &[], KeywordCategory::Other, Standard::C89),
    info(KeywordId::For, "for", &[], KeywordCategory::Other, Standard::C89),
    info(KeywordId::Switch, "switch", &[], KeywordCategory::Other, Standard::C89),
    info(KeywordId::Case, "case", &[], KeywordCategory::Other, Standard::C89),
    info(KeywordId::Default, "default", &[], KeywordCategory::Other, Standard::C89),
    info(KeywordId::Break, "break", &[], KeywordCategory::Other, Standard::C89),
    info(KeywordId::Continue, "continue", &[], KeywordCategory::Other, Standard::C89),
    info(KeywordId::Goto, "goto", &[], KeywordCategory::Other, Standard::C89),
];

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the accepted aliases for a keyword.
pub fn aliases(id: KeywordId) -> &'static [&'static str] {
    info_for(id).aliases
}

/// Return the declaration role of a keyword.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return the full metadata entry for a keyword.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling (canonical or alias).
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    if let Some(k) = KEYWORDS.iter().find(|k| k.canonical == s) {
        return Some(k.id);
    }
    KEYWORDS
        .iter()
        .find(|k| {
            let aliases: &[&str] = k.aliases;
            aliases.contains(&s)
        })
        .map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    category: KeywordCategory,
    since: Standard,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        aliases,
        category,
        since,
        stability: Stability::Stable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_classes_are_categorised() {
        for spelling in ["static", "extern", "typedef", "auto", "register"] {
            let id = from_str(spelling).unwrap();
            assert_eq!(category(id), KeywordCategory::StorageClass, "{spelling}");
        }
    }

    #[test]
    fn identifiers_are_not_keywords() {
        assert_eq!(from_str("foo_t"), None);
        assert_eq!(from_str("Int"), None, "lookup is case-sensitive");
        assert_eq!(from_str("bool"), None, "`bool` is a stdbool.h macro, not a keyword");
    }
}
