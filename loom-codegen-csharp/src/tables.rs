//! C# type tables.

use typeloom_codegen::{TypeTables, TypeTablesBuilder};
use typeloom_core::{ScalarKind, kinds};

const COLLECTION_TYPES: &[&str] = &[
    "System.Collections.Generic.ICollection",
    "System.Collections.ObjectModel.Collection",
    "System.Collections.Generic.List",
    "System.Collections.Generic.Dictionary",
];

const LIST: &str = "System.Collections.Generic.List";
const DICTIONARY: &str = "System.Collections.Generic.Dictionary";

/// `System.*` names and their scalar kinds.
const SYSTEM_SCALARS: &[(&str, ScalarKind)] = &[
    ("System.String", ScalarKind::String),
    ("System.Char", ScalarKind::Char),
    ("System.Boolean", ScalarKind::Boolean),
    ("System.Byte", ScalarKind::Byte),
    ("System.SByte", ScalarKind::SByte),
    ("System.Int16", ScalarKind::Int16),
    ("System.UInt16", ScalarKind::UInt16),
    ("System.Int32", ScalarKind::Int32),
    ("System.UInt32", ScalarKind::UInt32),
    ("System.Int64", ScalarKind::Int64),
    ("System.UInt64", ScalarKind::UInt64),
    ("System.Single", ScalarKind::Float),
    ("System.Double", ScalarKind::Double),
    ("System.Decimal", ScalarKind::Decimal),
    ("System.DateTime", ScalarKind::DateTime),
    ("System.DateTimeOffset", ScalarKind::DateTimeOffset),
    ("System.Guid", ScalarKind::Uuid),
    ("System.Byte[]", ScalarKind::Binary),
    ("System.IO.Stream", ScalarKind::Stream),
    ("System.Object", ScalarKind::Object),
];

/// Keyword aliases and their scalar kinds.
const KEYWORD_SCALARS: &[(&str, ScalarKind)] = &[
    ("string", ScalarKind::String),
    ("char", ScalarKind::Char),
    ("bool", ScalarKind::Boolean),
    ("byte", ScalarKind::Byte),
    ("sbyte", ScalarKind::SByte),
    ("short", ScalarKind::Int16),
    ("ushort", ScalarKind::UInt16),
    ("int", ScalarKind::Int32),
    ("uint", ScalarKind::UInt32),
    ("long", ScalarKind::Int64),
    ("ulong", ScalarKind::UInt64),
    ("float", ScalarKind::Float),
    ("double", ScalarKind::Double),
    ("decimal", ScalarKind::Decimal),
    ("DateTime", ScalarKind::DateTime),
    ("DateTimeOffset", ScalarKind::DateTimeOffset),
    ("Guid", ScalarKind::Uuid),
    ("byte[]", ScalarKind::Binary),
    ("object", ScalarKind::Object),
    ("Object", ScalarKind::Object),
];

/// Value types of the keyword table. Each takes `?` when optional.
const KEYWORD_VALUE_TYPES: &[&str] = &[
    "bool", "int", "long", "float", "double", "decimal", "DateTime", "Guid",
];

/// Value types of the `System.*` table. Each takes `?` when optional.
const SYSTEM_VALUE_TYPES: &[&str] = &[
    "System.Boolean",
    "System.Int32",
    "System.Int64",
    "System.Single",
    "System.Double",
    "System.Decimal",
    "System.DateTime",
    "System.Guid",
];

fn with_containers(builder: TypeTablesBuilder) -> TypeTablesBuilder {
    builder
        .map(kinds::ARRAY, LIST)
        .map(kinds::LIST, LIST)
        .map(kinds::MAP, DICTIONARY)
        .instantiate(kinds::ARRAY, LIST)
        .instantiate(kinds::LIST, LIST)
        .instantiate(kinds::MAP, DICTIONARY)
        .primitives(COLLECTION_TYPES.iter().copied())
}

fn with_classifications(
    mut builder: TypeTablesBuilder,
    scalars: &[(&str, ScalarKind)],
) -> TypeTablesBuilder {
    for (name, kind) in scalars {
        builder = builder.classify(*name, *kind);
    }
    builder
}

/// Classify the other C# spelling of every scalar, including the nullable
/// form of its value types.
fn with_aliases(
    builder: TypeTablesBuilder,
    scalars: &[(&str, ScalarKind)],
    value_types: &[&str],
) -> TypeTablesBuilder {
    let mut builder = with_classifications(builder, scalars);
    for (name, kind) in scalars.iter().filter(|(name, _)| value_types.contains(name)) {
        builder = builder.classify(format!("{}?", name), *kind);
    }
    builder
}

fn with_value_types(mut builder: TypeTablesBuilder, names: &[&str]) -> TypeTablesBuilder {
    for name in names {
        builder = builder.nullable(*name).value_type(*name);
    }
    builder
}

/// Tables of the `csharp-activity` target.
///
/// Every scalar maps to a fully qualified `System.*` name; value types map
/// to their nullable form.
pub fn activity_tables() -> TypeTablesBuilder {
    let builder = TypeTables::builder()
        .primitives([
            "string",
            "bool?",
            "bool",
            "double?",
            "double",
            "decimal?",
            "decimal",
            "int?",
            "int",
            "long?",
            "long",
            "float?",
            "float",
            "byte[]",
            "System.String",
            "System.Byte[]",
            "System.DateTime?",
            "System.DateTime",
            "System.DateTimeOffset?",
            "System.DateTimeOffset",
            "System.Boolean",
            "System.Boolean?",
            "System.Double",
            "System.Double?",
            "System.Decimal",
            "System.Decimal?",
            "System.Int32",
            "System.Int32?",
            "System.Int64",
            "System.Int64?",
            "System.Single",
            "System.Single?",
            "System.Guid?",
            "System.Guid",
            "System.IO.Stream",
            "System.Object",
        ])
        .map(kinds::STRING, "System.String")
        .map(kinds::BINARY, "System.Byte[]")
        .map(kinds::BYTE_ARRAY, "System.Byte[]")
        .map(kinds::BOOLEAN, "System.Boolean?")
        .map(kinds::INTEGER, "System.Int32?")
        .map(kinds::FLOAT, "System.Single?")
        .map(kinds::LONG, "System.Int64?")
        .map(kinds::DOUBLE, "System.Double?")
        .map(kinds::NUMBER, "System.Decimal?")
        .map(kinds::BIG_DECIMAL, "System.Decimal?")
        .map(kinds::DATE_TIME, "System.DateTime?")
        .map(kinds::DATE, "System.DateTime?")
        .map(kinds::FILE, "System.IO.Stream")
        .map(kinds::OBJECT, "System.Object")
        .map(kinds::UUID, "System.Guid?")
        .map(kinds::URI, "System.String");

    let builder = with_containers(builder);
    let builder = with_value_types(builder, SYSTEM_VALUE_TYPES);
    let builder = with_classifications(builder, SYSTEM_SCALARS);
    // keyword primitives appear in hand-written overlays
    with_aliases(builder, KEYWORD_SCALARS, KEYWORD_VALUE_TYPES)
}

/// Tables of the `csharp` target, using C# keyword aliases.
pub fn client_tables() -> TypeTablesBuilder {
    let builder = TypeTables::builder()
        .primitives([
            "string",
            "bool?",
            "bool",
            "double?",
            "double",
            "decimal?",
            "decimal",
            "int?",
            "int",
            "long?",
            "long",
            "float?",
            "float",
            "byte[]",
            "DateTime?",
            "DateTime",
            "DateTimeOffset?",
            "DateTimeOffset",
            "Guid?",
            "Guid",
            "Object",
            "System.IO.Stream",
        ])
        .map(kinds::STRING, "string")
        .map(kinds::BINARY, "byte[]")
        .map(kinds::BYTE_ARRAY, "byte[]")
        .map(kinds::BOOLEAN, "bool?")
        .map(kinds::INTEGER, "int?")
        .map(kinds::FLOAT, "float?")
        .map(kinds::LONG, "long?")
        .map(kinds::DOUBLE, "double?")
        .map(kinds::NUMBER, "decimal?")
        .map(kinds::BIG_DECIMAL, "decimal?")
        .map(kinds::DATE_TIME, "DateTime?")
        .map(kinds::DATE, "DateTime?")
        .map(kinds::FILE, "System.IO.Stream")
        .map(kinds::OBJECT, "Object")
        .map(kinds::UUID, "Guid?")
        .map(kinds::URI, "string");

    let builder = with_containers(builder);
    let builder = with_value_types(builder, KEYWORD_VALUE_TYPES);
    let builder = with_classifications(builder, KEYWORD_SCALARS);
    with_aliases(builder, SYSTEM_SCALARS, SYSTEM_VALUE_TYPES)
}
