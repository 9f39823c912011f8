// ============================================================================
// Free helpers shared by the parser chunks
// ============================================================================

/// GNU spellings that introduce an extension rather than a declarator name.
fn is_extension_keyword(name: &str) -> bool {
    matches!(
        name,
        "__attribute__" | "__attribute" | "__asm__" | "__asm" | "asm" | "__extension__"
    )
}

/// Re-spell the tokens of an array dimension, one space between tokens.
fn join_dimension(parts: &[String]) -> Option<String> {
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
