//! Fixture target for tests.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests. The fixture uses short, made-up type names (`Str`,
//! `Int?`, `List`, `Dictionary`, ...) so assertions read clearly and cannot
//! be confused with any real target's names.

use std::sync::Arc;

use typeloom_core::{ScalarKind, to_pascal_case};

use crate::{
    language::{DeclarationSyntax, EnumLiteralSyntax, NamingConvention, Target, TargetOption},
    resolver::TypeResolver,
    tables::{TypeTables, TypeTablesBuilder},
};

/// Angle-bracket generics, the default syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureDeclarations;

impl DeclarationSyntax for FixtureDeclarations {
    fn language(&self) -> &'static str {
        "fixture"
    }
}

/// Double-quoted literals escaping only quotes and backslashes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureLiterals;

impl EnumLiteralSyntax for FixtureLiterals {
    fn quote(&self, value: &str) -> String {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{}\"", escaped)
    }
}

fn escape_with_underscore(name: &str) -> String {
    format!("_{}", name)
}

/// Fixture naming: PascalCase with `_` escaping.
pub const FIXTURE_NAMING: NamingConvention = NamingConvention {
    enum_member: to_pascal_case,
    property: to_pascal_case,
    reserved_words: &["Class", "Enum"],
    escape_reserved: escape_with_underscore,
};

/// The fixture tables, unbuilt.
pub fn fixture_builder() -> TypeTablesBuilder {
    TypeTables::builder()
        .map("string", "Str")
        .map("boolean", "Bool?")
        .map("integer", "Int?")
        .map("long", "Long?")
        .map("float", "Flt?")
        .map("double", "Dbl?")
        .map("number", "Dec?")
        .map("date", "Date?")
        .map("object", "Obj")
        .map("URI", "Str")
        .map("array", "List")
        .map("list", "List")
        .map("map", "Dictionary")
        .instantiate("array", "List")
        .instantiate("list", "List")
        .instantiate("map", "Dictionary")
        .primitives([
            "Str",
            "Bool",
            "Bool?",
            "Int",
            "Int?",
            "Long",
            "Long?",
            "Flt",
            "Flt?",
            "Dbl",
            "Dbl?",
            "Dec",
            "Dec?",
            "Date",
            "Date?",
            "Obj",
            "List",
            "Dictionary",
        ])
        .nullable("Bool")
        .nullable("Int")
        .nullable("Long")
        .nullable("Flt")
        .nullable("Dbl")
        .nullable("Dec")
        .nullable("Date")
        .value_type("Bool")
        .value_type("Int")
        .value_type("Long")
        .value_type("Flt")
        .value_type("Dbl")
        .value_type("Dec")
        .value_type("Date")
        .classify("Str", ScalarKind::String)
        .classify("Bool", ScalarKind::Boolean)
        .classify("Byte", ScalarKind::Byte)
        .classify("Short", ScalarKind::Int16)
        .classify("Int", ScalarKind::Int32)
        .classify("UInt", ScalarKind::UInt32)
        .classify("Long", ScalarKind::Int64)
        .classify("ULong", ScalarKind::UInt64)
        .classify("Flt", ScalarKind::Float)
        .classify("Dbl", ScalarKind::Double)
        .classify("Dec", ScalarKind::Decimal)
        .classify("Date", ScalarKind::DateTime)
        .classify("Obj", ScalarKind::Object)
}

/// The fixture tables, built.
pub fn fixture_tables() -> TypeTables {
    match fixture_builder().build() {
        Ok(tables) => tables,
        Err(e) => panic!("fixture tables are invalid: {}", e),
    }
}

/// A resolver over `tables` using the fixture strategies.
pub fn resolver_for(tables: TypeTables) -> TypeResolver {
    TypeResolver::new(
        Arc::new(tables),
        Arc::new(FixtureDeclarations),
        Arc::new(FixtureLiterals),
    )
}

/// A resolver over the fixture tables.
pub fn fixture_resolver() -> TypeResolver {
    resolver_for(fixture_tables())
}

/// A registrable target backed by the fixture tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureTarget;

impl Target for FixtureTarget {
    fn name(&self) -> &'static str {
        "fixture"
    }

    fn help(&self) -> &'static str {
        "Fixture target for tests."
    }

    fn tables(&self) -> TypeTablesBuilder {
        fixture_builder()
    }

    fn declarations(&self) -> Arc<dyn DeclarationSyntax> {
        Arc::new(FixtureDeclarations)
    }

    fn literals(&self) -> Arc<dyn EnumLiteralSyntax> {
        Arc::new(FixtureLiterals)
    }

    fn naming(&self) -> NamingConvention {
        FIXTURE_NAMING
    }

    fn options(&self) -> Vec<TargetOption> {
        vec![TargetOption {
            name: "packageName",
            description: "Name of the generated package",
            default: None,
        }]
    }
}
