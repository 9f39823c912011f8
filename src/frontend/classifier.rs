//! Decide whether a parsed declaration can be mocked, and extract what the emitter needs.
//!
//! The classifier looks only at the **last** top-level entry of the translation unit, so a prototype may be preceded
//! by the typedefs it relies on:
//!
//! ```rust
//! use mockify::frontend::{classifier, lexer, parser};
//!
//! let tokens = lexer::lex("typedef int foo_t; void f(foo_t x);").unwrap();
//! let unit = parser::parse(&tokens).unwrap();
//! let func = classifier::classify(&unit).unwrap();
//! assert_eq!(func.name, "f");
//! assert_eq!(func.arguments[0].type_spelling, "foo_t x");
//! ```

use mockify_core::lang::keywords::{self, KeywordId};

use crate::errors::MockError;
use crate::frontend::ast::{DeclType, ExternalDecl, Param, TranslationUnit, TypeDecl, TypeSpec};
use crate::frontend::render;

/// The return type of a mockable function: `T` or `T*` where `T` is a plain (possibly qualified) type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnTypeDescriptor {
    /// Type name tokens joined by a space (`unsigned long int`, `struct point`). Never empty.
    pub base_name: String,
    pub is_pointer: bool,
    /// The first qualifier declared on the plain (or pointed-to) type; later ones are dropped.
    pub qualifiers: Vec<KeywordId>,
}

impl ReturnTypeDescriptor {
    /// Spell the return type as it appears in the mock's signature (`const char*`).
    pub fn spelling(&self) -> String {
        let mut out = String::new();
        for q in &self.qualifiers {
            out.push_str(keywords::as_str(*q));
            out.push(' ');
        }
        out.push_str(&self.base_name);
        if self.is_pointer {
            out.push('*');
        }
        out
    }

    /// `true` only for an unqualified, non-pointer `void`.
    pub fn is_void(&self) -> bool {
        !self.is_pointer && self.qualifiers.is_empty() && self.base_name == "void"
    }

    pub fn is_const(&self) -> bool {
        self.qualifiers.contains(&KeywordId::Const)
    }
}

/// One named argument of a mockable function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    /// The declared type spelled around the name (`const char* m`, `int (*cb)(int)`).
    pub type_spelling: String,
}

/// Everything the emitter needs to write a mock body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockableFunction {
    pub name: String,
    pub return_type: ReturnTypeDescriptor,
    /// Arguments in declaration order; empty for both `f()` and `f(void)`.
    pub arguments: Vec<Argument>,
}

impl MockableFunction {
    /// Parameter list for the mock's signature, without parentheses.
    pub fn parameter_list(&self) -> String {
        self.arguments
            .iter()
            .map(|a| a.type_spelling.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Classify the last entry of `unit` as a mockable function.
///
/// ## Errors
/// - [`MockError::NotADeclaration`] if the unit is empty or its last entry is a typedef or function definition
/// - [`MockError::NotAFunction`] if the declaration is not a function declarator
/// - [`MockError::StorageClass`] if the declaration has a storage class (`static`, `extern`, ...)
/// - [`MockError::UnhandledReturnShape`] if the function returns something other than `T` or `T*`
/// - [`MockError::UnnamedArgument`] / [`MockError::Variadic`] for arguments that cannot be captured
#[tracing::instrument(skip_all, fields(entries = unit.ext.len()))]
pub fn classify(unit: &TranslationUnit) -> Result<MockableFunction, MockError> {
    let last = unit.ext.last().ok_or(MockError::NotADeclaration)?;
    let ExternalDecl::Decl(decl) = &last.node else {
        return Err(MockError::NotADeclaration);
    };
    let DeclType::Function(func) = &decl.ty else {
        return Err(MockError::NotAFunction);
    };

    if !decl.storage.is_empty() {
        let storage = decl
            .storage
            .iter()
            .map(|k| keywords::as_str(*k))
            .collect::<Vec<_>>()
            .join(" ");
        return Err(MockError::StorageClass(storage));
    }

    let name = decl.name.clone().ok_or(MockError::NotADeclaration)?;
    let return_type = describe_return(&func.ret)?;
    let arguments = describe_arguments(&func.params)?;

    tracing::debug!(
        function = %name,
        return_type = %return_type.spelling(),
        arguments = arguments.len(),
        "classified prototype"
    );

    Ok(MockableFunction {
        name,
        return_type,
        arguments,
    })
}

fn describe_return(ret: &DeclType) -> Result<ReturnTypeDescriptor, MockError> {
    match ret {
        DeclType::Plain(td) => Ok(descriptor(td, false)),
        DeclType::Pointer(ptr) => match ptr.pointee.as_ref() {
            DeclType::Plain(td) => Ok(descriptor(td, true)),
            _ => Err(MockError::UnhandledReturnShape),
        },
        DeclType::Function(_) | DeclType::Array(_) => Err(MockError::UnhandledReturnShape),
    }
}

fn descriptor(td: &TypeDecl, is_pointer: bool) -> ReturnTypeDescriptor {
    ReturnTypeDescriptor {
        base_name: td.spec.spelling(),
        is_pointer,
        qualifiers: td.quals.first().copied().into_iter().collect(),
    }
}

fn describe_arguments(params: &[Param]) -> Result<Vec<Argument>, MockError> {
    // `f(void)` means "no arguments".
    if let [Param::Decl(only)] = params {
        if only.node.name.is_none() && is_bare_void(&only.node.ty) {
            return Ok(Vec::new());
        }
    }

    params
        .iter()
        .map(|param| match param {
            Param::Ellipsis(_) => Err(MockError::Variadic),
            Param::Decl(decl) => {
                let name = decl.node.name.as_deref().ok_or(MockError::UnnamedArgument)?;
                Ok(Argument {
                    name: name.to_string(),
                    type_spelling: render::render_decl(&decl.node.ty, Some(name)),
                })
            }
        })
        .collect()
}

/// Exactly `void`: no qualifiers, no declarator.
fn is_bare_void(ty: &DeclType) -> bool {
    match ty {
        DeclType::Plain(TypeDecl {
            quals,
            spec: TypeSpec::Identifier(id),
        }) => quals.is_empty() && id.names.len() == 1 && id.names[0] == "void",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::{lexer, parser};

    fn classify_str(source: &str) -> Result<MockableFunction, MockError> {
        let tokens = lexer::lex(source).unwrap();
        let unit = parser::parse(&tokens).unwrap();
        classify(&unit)
    }

    #[test]
    fn test_void_no_arguments() {
        let func = classify_str("void f();").unwrap();
        assert_eq!(func.name, "f");
        assert!(func.return_type.is_void());
        assert!(func.arguments.is_empty());
    }

    #[test]
    fn test_void_parameter_means_no_arguments() {
        let func = classify_str("int f(void);").unwrap();
        assert!(func.arguments.is_empty());
    }

    #[test]
    fn test_pointer_return_with_qualifier() {
        let func = classify_str("const char* f();").unwrap();
        assert_eq!(
            func.return_type,
            ReturnTypeDescriptor {
                base_name: "char".to_string(),
                is_pointer: true,
                qualifiers: vec![KeywordId::Const],
            }
        );
        assert_eq!(func.return_type.spelling(), "const char*");
    }

    #[test]
    fn test_only_first_return_qualifier_kept() {
        let func = classify_str("const volatile int f();").unwrap();
        assert_eq!(func.return_type.qualifiers, vec![KeywordId::Const]);
        assert_eq!(func.return_type.spelling(), "const int");

        let func = classify_str("volatile const char* f();").unwrap();
        assert_eq!(func.return_type.qualifiers, vec![KeywordId::Volatile]);
        assert!(!func.return_type.is_const());
        assert_eq!(func.return_type.spelling(), "volatile char*");
    }

    #[test]
    fn test_qualified_void_is_not_void() {
        let func = classify_str("const void f();").unwrap();
        assert!(!func.return_type.is_void());
        assert_eq!(func.return_type.spelling(), "const void");
    }

    #[test]
    fn test_multiword_return_base_name() {
        let func = classify_str("unsigned long int f();").unwrap();
        assert_eq!(func.return_type.base_name, "unsigned long int");
        assert!(!func.return_type.is_pointer);
    }

    #[test]
    fn test_tagged_return_base_name() {
        let func = classify_str("struct point* f();").unwrap();
        assert_eq!(func.return_type.base_name, "struct point");
        assert!(func.return_type.is_pointer);
    }

    #[test]
    fn test_arguments_in_declaration_order() {
        let func = classify_str("const char* f(char* i, const char* m);").unwrap();
        let names: Vec<_> = func.arguments.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["i", "m"]);
        assert_eq!(func.parameter_list(), "char* i, const char* m");
    }

    #[test]
    fn test_last_entry_is_classified() {
        let func = classify_str("int g(int x); void f(double d);").unwrap();
        assert_eq!(func.name, "f");
    }

    #[test]
    fn test_storage_class_rejected() {
        let err = classify_str("static void f();").unwrap_err();
        assert!(matches!(err, MockError::StorageClass(ref s) if s == "static"));
    }

    #[test]
    fn test_multiple_storage_classes_joined() {
        let err = classify_str("extern _Thread_local int f();").unwrap_err();
        assert!(matches!(err, MockError::StorageClass(ref s) if s == "extern _Thread_local"), "got {err:?}");
    }

    #[test]
    fn test_not_a_function() {
        assert!(matches!(classify_str("int i;").unwrap_err(), MockError::NotAFunction));
        assert!(matches!(classify_str("int (*fp)(void);").unwrap_err(), MockError::NotAFunction));
    }

    #[test]
    fn test_typedef_is_not_a_declaration() {
        assert!(matches!(
            classify_str("typedef int f(void);").unwrap_err(),
            MockError::NotADeclaration
        ));
    }

    #[test]
    fn test_definition_is_not_a_declaration() {
        assert!(matches!(
            classify_str("int f(void) { return 0; }").unwrap_err(),
            MockError::NotADeclaration
        ));
    }

    #[test]
    fn test_empty_unit_is_not_a_declaration() {
        assert!(matches!(classify_str("").unwrap_err(), MockError::NotADeclaration));
    }

    #[test]
    fn test_unnamed_argument() {
        assert!(matches!(
            classify_str("void f(int);").unwrap_err(),
            MockError::UnnamedArgument
        ));
    }

    #[test]
    fn test_variadic() {
        assert!(matches!(
            classify_str("int log_msg(const char* fmt, ...);").unwrap_err(),
            MockError::Variadic
        ));
    }

    #[test]
    fn test_unhandled_return_shapes() {
        assert!(matches!(
            classify_str("char** f();").unwrap_err(),
            MockError::UnhandledReturnShape
        ));
        assert!(matches!(
            classify_str("int (*f(void))(int);").unwrap_err(),
            MockError::UnhandledReturnShape
        ));
    }

    #[test]
    fn test_complex_argument_spellings() {
        let func = classify_str("void f(int (*cb)(int x), char* argv[]);").unwrap();
        assert_eq!(func.arguments[0].type_spelling, "int (*cb)(int x)");
        assert_eq!(func.arguments[1].type_spelling, "char* argv[]");
    }
}
