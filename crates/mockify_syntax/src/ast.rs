//! Abstract Syntax Tree definitions for C declarations.
//!
//! The tree mirrors how C actually nests declarators: the type of `const char* f(int i)` is a function declarator
//! whose result is a pointer declarator whose pointee is a plain `const char` type. Walking the tree from the root
//! therefore reads the declaration "from the name outwards".

use mockify_core::lang::keywords::KeywordId;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

pub type Ident = String;

/// A translation unit is the ordered sequence of top-level entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranslationUnit {
    pub ext: Vec<Spanned<ExternalDecl>>,
}

/// Top-level entries.
///
/// A declaration with several declarators (`int f(), g();`) produces one entry per declarator.
#[derive(Debug, Clone, PartialEq)]
pub enum ExternalDecl {
    /// Plain declaration: `int f(void);`, `int i;`
    Decl(Decl),
    /// `typedef int foo_t;` (the `typedef` keyword stays in `storage`)
    Typedef(Decl),
    /// Function definition; the body is skipped and only its span is kept.
    FunctionDef(FuncDef),
}

/// One declared name together with its specifiers and declarator tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Decl {
    /// `None` for abstract declarators (unnamed parameters).
    pub name: Option<Ident>,
    /// Storage-class keywords in source order (`static`, `extern`, ...).
    pub storage: Vec<KeywordId>,
    /// Function specifiers in source order (`inline`, `_Noreturn`).
    pub funcspec: Vec<KeywordId>,
    pub ty: DeclType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDef {
    pub decl: Decl,
    pub body: Span,
}

// ============================================================================
// Declarators
// ============================================================================

/// The declarator tree.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclType {
    Function(FuncDecl),
    Pointer(PtrDecl),
    Array(ArrayDecl),
    Plain(TypeDecl),
}

/// `<ret>(<params>)`
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    /// Empty both for `f()` and when the parser saw no parameter list at all; `f(void)` keeps its single `void`
    /// parameter here.
    pub params: Vec<Param>,
    pub ret: Box<DeclType>,
}

/// `*<quals> <pointee>`
#[derive(Debug, Clone, PartialEq)]
pub struct PtrDecl {
    pub quals: Vec<KeywordId>,
    pub pointee: Box<DeclType>,
}

/// `<elem>[<dim>]`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayDecl {
    /// Dimension expression as written; `None` for `[]`.
    pub dim: Option<String>,
    pub elem: Box<DeclType>,
}

/// Innermost node: the qualified type the declarator chain ends in.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub quals: Vec<KeywordId>,
    pub spec: TypeSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeSpec {
    Identifier(IdentifierType),
    Struct(Option<Ident>),
    Union(Option<Ident>),
    Enum(Option<Ident>),
}

/// Builtin or typedef type name, one token per entry (`["unsigned", "long", "int"]`).
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierType {
    pub names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Decl(Spanned<Decl>),
    /// `...`
    Ellipsis(Span),
}

impl DeclType {
    pub fn plain(quals: Vec<KeywordId>, spec: TypeSpec) -> Self {
        DeclType::Plain(TypeDecl { quals, spec })
    }

    pub fn is_function(&self) -> bool {
        matches!(self, DeclType::Function(_))
    }
}

impl TypeSpec {
    /// Spell the specifier the way it would appear in source (`unsigned int`, `struct point`).
    pub fn spelling(&self) -> String {
        match self {
            TypeSpec::Identifier(id) => id.names.join(" "),
            TypeSpec::Struct(tag) => tagged("struct", tag.as_deref()),
            TypeSpec::Union(tag) => tagged("union", tag.as_deref()),
            TypeSpec::Enum(tag) => tagged("enum", tag.as_deref()),
        }
    }
}

fn tagged(keyword: &str, tag: Option<&str>) -> String {
    match tag {
        Some(tag) => format!("{keyword} {tag}"),
        None => keyword.to_string(),
    }
}
