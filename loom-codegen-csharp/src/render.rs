//! C# declaration and literal syntax.

use std::fmt::Write;

use typeloom_codegen::language::{DeclarationSyntax, EnumLiteralSyntax};

/// C# generic declarations (`List<T>`, `Dictionary<K, V>`).
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpDeclarations;

impl DeclarationSyntax for CSharpDeclarations {
    fn language(&self) -> &'static str {
        "csharp"
    }
}

/// C# regular string literals.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpEnumLiterals;

impl EnumLiteralSyntax for CSharpEnumLiterals {
    fn quote(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        out.push('"');
        for c in value.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                '\0' => out.push_str("\\0"),
                '\u{07}' => out.push_str("\\a"),
                '\u{08}' => out.push_str("\\b"),
                '\u{0C}' => out.push_str("\\f"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                '\u{0B}' => out.push_str("\\v"),
                c if c.is_control() => {
                    let _ = write!(out, "\\u{:04X}", c as u32);
                }
                c => out.push(c),
            }
        }
        out.push('"');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plain() {
        assert_eq!(CSharpEnumLiterals.quote("North"), "\"North\"");
        assert_eq!(CSharpEnumLiterals.quote("2.8"), "\"2.8\"");
        assert_eq!(CSharpEnumLiterals.quote(""), "\"\"");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(
            CSharpEnumLiterals.quote(r#"say "hi""#),
            r#""say \"hi\"""#
        );
        assert_eq!(CSharpEnumLiterals.quote(r"C:\temp"), r#""C:\\temp""#);
        assert_eq!(
            CSharpEnumLiterals.quote("a\tb\nc\r\0"),
            r#""a\tb\nc\r\0""#
        );
        assert_eq!(
            CSharpEnumLiterals.quote("\u{07}\u{08}\u{0B}\u{0C}"),
            r#""\a\b\v\f""#
        );
    }

    #[test]
    fn test_quote_other_control_characters() {
        assert_eq!(CSharpEnumLiterals.quote("\u{1B}[0m"), r#""\u001B[0m""#);
        assert_eq!(CSharpEnumLiterals.quote("\u{85}"), r#""\u0085""#);
    }

    #[test]
    fn test_quote_keeps_unicode() {
        assert_eq!(CSharpEnumLiterals.quote("café ☕"), "\"café ☕\"");
    }

    #[test]
    fn test_generic_declarations() {
        let syntax = CSharpDeclarations;
        assert_eq!(syntax.language(), "csharp");
        assert_eq!(
            syntax.generic(
                "System.Collections.Generic.Dictionary",
                &["System.String".to_string(), "System.Object".to_string()]
            ),
            "System.Collections.Generic.Dictionary<System.String, System.Object>"
        );
        assert_eq!(syntax.nullable("int", "?"), "int?");
    }
}
