// ============================================================================
// Public API
// ============================================================================

/// Parse tokens into a translation unit.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<TranslationUnit, Vec<CompileError>> {
    Parser::new(tokens).parse()
}

/// Parse tokens with `typedefs` already known as type names.
///
/// Use this when the declaration refers to types declared in a header that is not part of the input.
#[tracing::instrument(skip_all, fields(token_count = tokens.len(), typedefs = typedefs.len()))]
pub fn parse_with_typedefs(tokens: &[Token], typedefs: &[String]) -> Result<TranslationUnit, Vec<CompileError>> {
    Parser::new(tokens).with_typedefs(typedefs.iter().cloned()).parse()
}
