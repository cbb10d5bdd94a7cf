//! C#-specific naming conventions.

use typeloom_codegen::language::NamingConvention;
use typeloom_core::to_pascal_case;

fn escape_csharp_reserved(name: &str) -> String {
    format!("@{}", name)
}

/// PascalCase with every non-identifier character replaced by `_` and a
/// leading digit prefixed by `_`.
fn to_csharp_identifier(value: &str) -> String {
    let pascal: String = to_pascal_case(value)
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    match pascal.chars().next() {
        None => "Empty".to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{}", pascal),
        Some(_) => pascal,
    }
}

/// C# naming conventions.
pub const CSHARP_NAMING: NamingConvention = NamingConvention {
    // Enum members and properties are both PascalCase
    enum_member: to_csharp_identifier,
    property: to_csharp_identifier,
    reserved_words: &[
        "abstract",
        "as",
        "base",
        "bool",
        "break",
        "byte",
        "case",
        "catch",
        "char",
        "checked",
        "class",
        "const",
        "continue",
        "decimal",
        "default",
        "delegate",
        "do",
        "double",
        "else",
        "enum",
        "event",
        "explicit",
        "extern",
        "false",
        "finally",
        "fixed",
        "float",
        "for",
        "foreach",
        "goto",
        "if",
        "implicit",
        "in",
        "int",
        "interface",
        "internal",
        "is",
        "lock",
        "long",
        "namespace",
        "new",
        "null",
        "object",
        "operator",
        "out",
        "override",
        "params",
        "private",
        "protected",
        "public",
        "readonly",
        "ref",
        "return",
        "sbyte",
        "sealed",
        "short",
        "sizeof",
        "stackalloc",
        "static",
        "string",
        "struct",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "uint",
        "ulong",
        "unchecked",
        "unsafe",
        "ushort",
        "using",
        "virtual",
        "void",
        "volatile",
        "while",
    ],
    escape_reserved: escape_csharp_reserved,
};
