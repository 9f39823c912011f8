//! Mock body emission
//!
//! Turns a [`MockableFunction`] into the C++ text of its mock. Two templates exist: a `void` function only records the
//! call, while any other function also returns the value configured on the mock (or the placeholder when none was
//! configured).
//!
//! ```text
//! char* f(int i, double j) {
//!     mock().actualCall("f")
//!         .withParameter("i", i)
//!         .withParameter("j", j);
//!     if (mock().hasReturnValue()) {
//!         return mock().pointerReturnValue();
//!     }
//!     return WRITEME;
//! }
//! ```

use mockify_core::lang::accessors::{self, CONST_POINTER_KEY, POINTER_KEY};
use mockify_core::lang::keywords::{self, KeywordId};

use super::config::MockConfig;
use super::writer::MockWriter;
use crate::errors::MockError;
use crate::frontend::classifier::{MockableFunction, ReturnTypeDescriptor};

/// Emit the mock body for `func` with the default configuration.
pub fn emit(func: &MockableFunction) -> Result<String, MockError> {
    emit_with_config(func, &MockConfig::default())
}

/// Emit the mock body for `func`.
///
/// The result has no trailing newline.
///
/// ## Errors
/// [`MockError::UnhandledReturnType`] when the return type is not `void` and has no return-value accessor.
#[tracing::instrument(skip_all, fields(function = %func.name))]
pub fn emit_with_config(func: &MockableFunction, config: &MockConfig) -> Result<String, MockError> {
    let return_spelling = func.return_type.spelling();
    let accessor = if func.return_type.is_void() {
        None
    } else {
        let key = return_value_key(&func.return_type);
        let accessor = accessors::accessor_for(&key)
            .ok_or_else(|| MockError::UnhandledReturnType(return_spelling.clone()))?;
        tracing::debug!(key = %key, accessor, "resolved return-value accessor");
        Some(accessor)
    };

    let mut w = MockWriter::new(config.indent_width);
    let signature = format!("{} {}({})", return_spelling, func.name, func.parameter_list());
    w.block(&signature, |w| {
        write_actual_call(w, func);
        if let Some(accessor) = accessor {
            w.block("if (mock().hasReturnValue())", |w| {
                w.writeln(&format!("return mock().{accessor}();"));
            });
            w.writeln(&format!("return {};", config.placeholder));
        }
    });

    let mut body = w.finish();
    if body.ends_with('\n') {
        body.pop();
    }
    Ok(body)
}

/// `mock().actualCall("f")` plus one `.withParameter` continuation line per argument.
fn write_actual_call(w: &mut MockWriter, func: &MockableFunction) {
    let call = format!("mock().actualCall(\"{}\")", func.name);
    if func.arguments.is_empty() {
        w.writeln(&format!("{call};"));
        return;
    }

    w.writeln(&call);
    w.indent();
    let last = func.arguments.len() - 1;
    for (i, arg) in func.arguments.iter().enumerate() {
        let terminator = if i == last { ";" } else { "" };
        w.writeln(&format!(".withParameter(\"{0}\", {0}){terminator}", arg.name));
    }
    w.dedent();
}

/// Canonical accessor-table key for a return type.
///
/// Plain types drop their qualifiers and have integer specifiers put in canonical order (`long unsigned` becomes
/// `unsigned long int`). Pointers keep `char*` / `const char*` / `void*` / `const void*`; any other pointer is
/// treated as `void*` (or `const void*` when the pointee is const).
pub fn return_value_key(ty: &ReturnTypeDescriptor) -> String {
    if ty.is_pointer {
        return match (ty.base_name.as_str(), ty.is_const()) {
            ("char", false) => "char*".to_string(),
            ("char", true) => "const char*".to_string(),
            (_, false) => POINTER_KEY.to_string(),
            (_, true) => CONST_POINTER_KEY.to_string(),
        };
    }
    canonical_integer(&ty.base_name).unwrap_or_else(|| ty.base_name.clone())
}

/// Canonical spelling of an integer specifier list, or `None` if `spelling` is not one.
fn canonical_integer(spelling: &str) -> Option<String> {
    let (mut unsigned, mut signed, mut longs, mut short, mut is_char) = (false, false, 0usize, false, false);
    for word in spelling.split_whitespace() {
        match keywords::from_str(word)? {
            KeywordId::Unsigned => unsigned = true,
            KeywordId::Signed => signed = true,
            KeywordId::Long => longs += 1,
            KeywordId::Short => short = true,
            KeywordId::Char => is_char = true,
            KeywordId::Int => {}
            _ => return None,
        }
    }

    let sign = if unsigned { "unsigned " } else { "" };
    let canonical = if is_char {
        // `char`, `signed char` and `unsigned char` are three distinct types.
        match (unsigned, signed) {
            (true, _) => "unsigned char".to_string(),
            (false, true) => "signed char".to_string(),
            (false, false) => "char".to_string(),
        }
    } else if short {
        format!("{sign}short int")
    } else if longs >= 2 {
        format!("{sign}long long int")
    } else if longs == 1 {
        format!("{sign}long int")
    } else {
        format!("{sign}int")
    };
    Some(canonical)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::frontend::classifier::Argument;

    fn ret(base: &str, is_pointer: bool, qualifiers: Vec<KeywordId>) -> ReturnTypeDescriptor {
        ReturnTypeDescriptor {
            base_name: base.to_string(),
            is_pointer,
            qualifiers,
        }
    }

    fn function(return_type: ReturnTypeDescriptor, args: &[(&str, &str)]) -> MockableFunction {
        MockableFunction {
            name: "f".to_string(),
            return_type,
            arguments: args
                .iter()
                .map(|(name, spelling)| Argument {
                    name: name.to_string(),
                    type_spelling: spelling.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_integer_keys_are_canonical() {
        let cases = [
            ("int", "int"),
            ("signed", "int"),
            ("signed int", "int"),
            ("unsigned", "unsigned int"),
            ("long", "long int"),
            ("long unsigned int", "unsigned long int"),
            ("unsigned long", "unsigned long int"),
            ("long long", "long long int"),
            ("unsigned long long int", "unsigned long long int"),
            ("short", "short int"),
            ("char", "char"),
            ("unsigned char", "unsigned char"),
        ];
        for (spelling, expected) in cases {
            assert_eq!(
                return_value_key(&ret(spelling, false, vec![])),
                expected,
                "canonical key for {spelling:?}"
            );
        }
    }

    #[test]
    fn test_non_integer_keys_pass_through() {
        assert_eq!(return_value_key(&ret("double", false, vec![])), "double");
        assert_eq!(return_value_key(&ret("long double", false, vec![])), "long double");
        assert_eq!(return_value_key(&ret("struct point", false, vec![])), "struct point");
    }

    #[test]
    fn test_plain_qualifiers_are_stripped() {
        assert_eq!(return_value_key(&ret("int", false, vec![KeywordId::Const])), "int");
    }

    #[test]
    fn test_pointer_keys() {
        assert_eq!(return_value_key(&ret("char", true, vec![])), "char*");
        assert_eq!(return_value_key(&ret("char", true, vec![KeywordId::Const])), "const char*");
        assert_eq!(return_value_key(&ret("void", true, vec![])), "void*");
        assert_eq!(return_value_key(&ret("void", true, vec![KeywordId::Const])), "const void*");
        assert_eq!(return_value_key(&ret("struct point", true, vec![])), "void*");
        assert_eq!(return_value_key(&ret("int", true, vec![KeywordId::Const])), "const void*");
    }

    #[test]
    fn test_void_zero_arguments() {
        let body = emit(&function(ret("void", false, vec![]), &[])).unwrap();
        assert_eq!(body, "void f() {\n    mock().actualCall(\"f\");\n}");
    }

    #[test]
    fn test_qualified_void_is_unhandled() {
        let err = emit(&function(ret("void", false, vec![KeywordId::Const]), &[])).unwrap_err();
        assert!(matches!(err, MockError::UnhandledReturnType(ref s) if s == "const void"), "got {err:?}");
    }

    #[test]
    fn test_non_integer_keywords_are_not_canonicalized() {
        assert_eq!(canonical_integer("long double"), None);
        assert_eq!(canonical_integer("foo_t"), None);
        assert_eq!(canonical_integer("long unsigned"), Some("unsigned long int".to_string()));
    }

    #[test]
    fn test_non_void_with_arguments() {
        let body = emit(&function(ret("char", true, vec![]), &[("i", "int i"), ("j", "double j")])).unwrap();
        let expected = [
            "char* f(int i, double j) {",
            "    mock().actualCall(\"f\")",
            "        .withParameter(\"i\", i)",
            "        .withParameter(\"j\", j);",
            "    if (mock().hasReturnValue()) {",
            "        return mock().pointerReturnValue();",
            "    }",
            "    return WRITEME;",
            "}",
        ]
        .join("\n");
        assert_eq!(body, expected);
    }

    #[test]
    fn test_config_changes_indent_and_placeholder() {
        let config = MockConfig::new().with_indent_width(2).with_placeholder("0");
        let body = emit_with_config(&function(ret("int", false, vec![]), &[("x", "int x")]), &config).unwrap();
        assert!(body.contains("\n  mock().actualCall(\"f\")\n    .withParameter(\"x\", x);\n"));
        assert!(body.ends_with("  return 0;\n}"));
    }

    #[test]
    fn test_unhandled_return_type_names_the_spelling() {
        let err = emit(&function(ret("float", false, vec![KeywordId::Const]), &[])).unwrap_err();
        assert!(matches!(err, MockError::UnhandledReturnType(ref s) if s == "const float"), "got {err:?}");
    }
}
