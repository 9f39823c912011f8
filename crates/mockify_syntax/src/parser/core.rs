/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint, plus the
/// intermediate shapes the declaration chunks pass between each other.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single "god file".

/// Declaration specifiers collected before the first declarator.
#[derive(Debug, Clone)]
struct Specifiers {
    storage: Vec<KeywordId>,
    quals: Vec<KeywordId>,
    funcspec: Vec<KeywordId>,
    spec: TypeSpec,
}

/// One step of a declarator, outermost (closest to the declared name) first.
#[derive(Debug, Clone)]
enum Modifier {
    Pointer(Vec<KeywordId>),
    Array(Option<String>),
    Function(Vec<Param>),
}

/// A parsed declarator before it is folded around the specifiers' base type.
#[derive(Debug, Clone, Default)]
struct Declarator {
    name: Option<Ident>,
    modifiers: Vec<Modifier>,
}

/// Deepest declarator nesting (parenthesized declarators and parameter lists) and longest modifier chain accepted.
pub const MAX_DECLARATOR_DEPTH: usize = 128;

/// Parser state.
///
/// ## Notes
/// - C's grammar is not context-free: whether `foo_t x;` declares `x` depends on `foo_t` being a typedef name. The
///   parser therefore records every name introduced by `typedef` and consults that set while reading specifiers.
/// - After an error the parser synchronizes at the next `;` so one bad declaration does not hide later ones.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    typedefs: HashSet<String>,
    errors: Vec<CompileError>,
    /// Current declarator nesting depth.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `mockify_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            typedefs: HashSet::new(),
            errors: Vec::new(),
            depth: 0,
        }
    }

    /// Treat `names` as typedef names declared before the token stream starts.
    pub fn with_typedefs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.typedefs.extend(names.into_iter().map(Into::into));
        self
    }

    /// Parse the entire token stream into a [`TranslationUnit`].
    ///
    /// ## Errors
    /// Returns every [`CompileError`] found; the parser keeps going after an error to report
    /// later problems in the same pass.
    pub fn parse(mut self) -> Result<TranslationUnit, Vec<CompileError>> {
        if self.tokens.is_empty() {
            return Ok(TranslationUnit::default());
        }

        let mut ext = Vec::new();

        while !self.is_at_end() {
            // Stray `;` at file scope is harmless.
            if self.match_punct(PunctuationId::Semicolon) {
                continue;
            }
            match self.external_declaration() {
                Ok(entries) => ext.extend(entries),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize();
                }
            }
        }

        if self.errors.is_empty() {
            Ok(TranslationUnit { ext })
        } else {
            Err(self.errors)
        }
    }
}
