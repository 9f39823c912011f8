//! Spell declarator trees back into C source text.
//!
//! The output uses a fixed house style rather than the input's whitespace: pointer stars attach to the type
//! (`char* p`, `char** argv`), qualifiers follow the star they apply to (`char* const p`), and function or array
//! declarators under a pointer get the parentheses C requires (`int (*cb)(int x)`).
//!
//! ## Examples
//!
//! ```rust
//! use mockify_syntax::{lexer, parser, render};
//! use mockify_syntax::ast::ExternalDecl;
//!
//! let tokens = lexer::lex("const   char *name(void);").unwrap();
//! let unit = parser::parse(&tokens).unwrap();
//! let ExternalDecl::Decl(decl) = &unit.ext[0].node else { unreachable!() };
//! assert_eq!(render::render_decl(&decl.ty, decl.name.as_deref()), "const char* name(void)");
//! ```

use crate::ast::{DeclType, Param, PtrDecl, TypeDecl};
use mockify_core::lang::keywords::{self, KeywordId};

/// Spell `ty` declaring `name` (or an abstract declarator when `name` is `None`).
pub fn render_decl(ty: &DeclType, name: Option<&str>) -> String {
    declarator(ty, name.unwrap_or_default().to_string())
}

/// Spell one parameter as it appears inside a parameter list.
pub fn render_param(param: &Param) -> String {
    match param {
        Param::Decl(decl) => render_decl(&decl.node.ty, decl.node.name.as_deref()),
        Param::Ellipsis(_) => "...".to_string(),
    }
}

/// Spell a parameter list without the surrounding parentheses.
pub fn render_params(params: &[Param]) -> String {
    params.iter().map(render_param).collect::<Vec<_>>().join(", ")
}

/// Spell a list of qualifier keywords separated by single spaces.
pub fn render_quals(quals: &[KeywordId]) -> String {
    quals.iter().map(|q| keywords::as_str(*q)).collect::<Vec<_>>().join(" ")
}

/// Wrap `inner` (the part of the declarator already spelled) in the next tree level.
fn declarator(ty: &DeclType, inner: String) -> String {
    match ty {
        DeclType::Plain(td) => base(td, &inner),
        DeclType::Pointer(ptr) => {
            let spelled = pointer(ptr, &inner);
            declarator(&ptr.pointee, spelled)
        }
        DeclType::Array(arr) => {
            let dim = arr.dim.as_deref().unwrap_or_default();
            declarator(&arr.elem, format!("{inner}[{dim}]"))
        }
        DeclType::Function(f) => declarator(&f.ret, format!("{inner}({})", render_params(&f.params))),
    }
}

fn base(td: &TypeDecl, inner: &str) -> String {
    let mut out = render_quals(&td.quals);
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(&td.spec.spelling());

    if inner.is_empty() {
        out
    } else if inner.starts_with('*') {
        format!("{out}{inner}")
    } else {
        format!("{out} {inner}")
    }
}

fn pointer(ptr: &PtrDecl, inner: &str) -> String {
    let mut star = String::from("*");
    for q in &ptr.quals {
        star.push(' ');
        star.push_str(keywords::as_str(*q));
    }

    // A pointer to a function or array must be parenthesized, or the suffix would bind to the name.
    if matches!(ptr.pointee.as_ref(), DeclType::Function(_) | DeclType::Array(_)) {
        return if inner.is_empty() || ptr.quals.is_empty() {
            format!("({star}{inner})")
        } else {
            format!("({star} {inner})")
        };
    }

    if inner.is_empty() {
        star
    } else if inner.starts_with('*') && ptr.quals.is_empty() {
        format!("{star}{inner}")
    } else {
        format!("{star} {inner}")
    }
}

// ============================================================================
// TESTS
// ============================================================================
