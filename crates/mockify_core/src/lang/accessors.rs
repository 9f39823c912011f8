//! Return-value accessors of the CppUTest mock facility.
//!
//! A generated mock returns whatever value the test author recorded with `andReturnValue(...)`. Reading that value
//! back requires the accessor matching the C return type (`mock().intReturnValue()`, `mock().stringReturnValue()`,
//! ...). This registry maps a **canonical return-type spelling** onto that accessor.
//!
//! ## Notes
//! - Keys are canonical: qualifiers the accessor does not care about are already stripped, integer specifier lists
//!   are in `[unsigned] [long [long]] int` order, and pointers are spelled `T*` without spaces. Normalisation is the
//!   caller's job; this table only matches exact keys.
//! - Keys are unique. The table is a `const` slice and is never mutated.
//!
//! ## Examples
//! ```rust
//! use mockify_core::lang::accessors;
//!
//! assert_eq!(accessors::accessor_for("unsigned long int"), Some("unsignedLongIntReturnValue"));
//! assert_eq!(accessors::accessor_for("const char*"), Some("stringReturnValue"));
//! assert_eq!(accessors::accessor_for("float"), None);
//! ```

use super::registry::Stability;

/// Metadata for one canonical return type.
#[derive(Debug, Clone, Copy)]
pub struct AccessorInfo {
    /// Canonical return-type spelling used as the lookup key.
    pub return_type: &'static str,
    /// Name of the `mock()` method that yields the recorded value.
    pub accessor: &'static str,
    pub stability: Stability,
}

/// Canonical spelling of the generic data pointer key.
pub const POINTER_KEY: &str = "void*";

/// Canonical spelling of the const data pointer key.
pub const CONST_POINTER_KEY: &str = "const void*";

/// Registry of every return type the mock facility can hand back.
pub const RETURN_VALUE_ACCESSORS: &[AccessorInfo] = &[
    stable("int", "intReturnValue"),
    stable("unsigned int", "unsignedIntReturnValue"),
    stable("long int", "longIntReturnValue"),
    stable("unsigned long int", "unsignedLongIntReturnValue"),
    stable("long long int", "longLongIntReturnValue"),
    stable("unsigned long long int", "unsignedLongLongIntReturnValue"),
    stable("_Bool", "boolReturnValue"),
    stable("double", "doubleReturnValue"),
    stable("const char*", "stringReturnValue"),
    stable(POINTER_KEY, "pointerReturnValue"),
    stable(CONST_POINTER_KEY, "constPointerReturnValue"),
    // `bool` only reaches the generator through a typedef (stdbool.h is not preprocessed).
    synthetic("bool", "boolReturnValue"),
    // A mutable string has no accessor of its own; hand it out as a plain pointer.
    synthetic("char*", "pointerReturnValue"),
];

/// Return the accessor method name for a canonical return-type spelling.
pub fn accessor_for(return_type: &str) -> Option<&'static str> {
    info_for(return_type).map(|a| a.accessor)
}

/// Return the full registry entry for a canonical return-type spelling.
pub fn info_for(return_type: &str) -> Option<&'static AccessorInfo> {
    RETURN_VALUE_ACCESSORS.iter().find(|a| a.return_type == return_type)
}

const fn stable(return_type: &'static str, accessor: &'static str) -> AccessorInfo {
    AccessorInfo {
        return_type,
        accessor,
        stability: Stability::Stable,
    }
}

const fn synthetic(return_type: &'static str, accessor: &'static str) -> AccessorInfo {
    AccessorInfo {
        return_type,
        accessor,
        stability: Stability::Synthetic,
    }
}
