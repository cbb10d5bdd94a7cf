//! Resolver behavior against the real C# tables.

use typeloom_codegen::{
    GenerationDriver, ResolveError, TargetRegistry, TypeResolver, generation::GenerationInput,
    language::Target,
};
use typeloom_codegen_csharp::{ActivityTarget, CSHARP_NAMING, register_all};
use typeloom_core::TypeDescriptor;
use typeloom_tables::TablesFile;

fn registry() -> TargetRegistry {
    let mut registry = TargetRegistry::new();
    register_all(&mut registry);
    registry
}

fn activity() -> TypeResolver {
    registry().resolver("csharp-activity", None).unwrap()
}

fn client() -> TypeResolver {
    registry().resolver("csharp", None).unwrap()
}

fn declare(resolver: &TypeResolver, descriptor: &str) -> String {
    let descriptor: TypeDescriptor = descriptor.parse().unwrap();
    resolver.declare_type(&descriptor).unwrap()
}

#[test]
fn test_activity_table_fidelity() {
    let resolver = activity();
    let expected = [
        ("string", "System.String"),
        ("binary", "System.Byte[]"),
        ("ByteArray", "System.Byte[]"),
        ("boolean", "System.Boolean?"),
        ("integer", "System.Int32?"),
        ("float", "System.Single?"),
        ("long", "System.Int64?"),
        ("double", "System.Double?"),
        ("number", "System.Decimal?"),
        ("BigDecimal", "System.Decimal?"),
        ("DateTime", "System.DateTime?"),
        ("date", "System.DateTime?"),
        ("file", "System.IO.Stream"),
        ("array", "System.Collections.Generic.List"),
        ("list", "System.Collections.Generic.List"),
        ("map", "System.Collections.Generic.Dictionary"),
        ("object", "System.Object"),
        ("UUID", "System.Guid?"),
        ("URI", "System.String"),
    ];

    for (kind, target) in expected {
        assert_eq!(resolver.resolve_scalar(kind).unwrap(), target, "kind {}", kind);
    }
    assert_eq!(resolver.tables().known_kinds().len(), expected.len());
}

#[test]
fn test_unknown_kind_names_known_kinds() {
    let err = activity().resolve_scalar("__not_a_real_kind__").unwrap_err();
    let ResolveError::UnknownTypeKind { kind, known } = &err;
    assert_eq!(kind, "__not_a_real_kind__");
    assert!(known.iter().any(|k| k == "integer"));
    assert!(err.to_string().contains("known kinds: BigDecimal, ByteArray"));
}

#[test]
fn test_activity_declarations() {
    let resolver = activity();
    assert_eq!(
        declare(&resolver, "array<string>"),
        "System.Collections.Generic.List<System.String>"
    );
    assert_eq!(
        declare(&resolver, "array<array<integer>>"),
        "System.Collections.Generic.List<System.Collections.Generic.List<System.Int32?>>"
    );
    assert_eq!(
        declare(&resolver, "map<object>"),
        "System.Collections.Generic.Dictionary<System.String, System.Object>"
    );
    assert_eq!(
        declare(&resolver, "array<map<ref:Pet>>"),
        "System.Collections.Generic.List<System.Collections.Generic.Dictionary<System.String, Pet>>"
    );
}

#[test]
fn test_client_declarations() {
    let resolver = client();
    assert_eq!(
        declare(&resolver, "map<array<number>>"),
        "System.Collections.Generic.Dictionary<string, System.Collections.Generic.List<decimal?>>"
    );
    assert_eq!(declare(&resolver, "UUID"), "Guid?");
}

#[test]
fn test_string_like_for_enum() {
    let resolver = activity();
    for target in [
        "System.String",
        "System.Single",
        "System.Single?",
        "System.Double",
        "System.Double?",
        "System.Decimal",
        "System.Decimal?",
    ] {
        assert!(resolver.is_string_like_for_enum(target), "{}", target);
    }
    for target in [
        "System.Int32",
        "System.Int32?",
        "System.Int64?",
        "System.Byte",
        "System.Int16",
        "System.UInt64",
        "System.Boolean?",
        "System.Guid?",
        "System.DecimalFormat",
    ] {
        assert!(!resolver.is_string_like_for_enum(target), "{}", target);
    }
}

#[test]
fn test_render_enum_literals() {
    let resolver = activity();
    assert_eq!(resolver.render_enum_literal("5", "System.Int32?"), "5");
    assert_eq!(resolver.render_enum_literal("5", "System.Int64"), "5");
    assert_eq!(resolver.render_enum_literal("7", "System.Byte"), "7");
    assert_eq!(
        resolver.render_enum_literal("North", "System.String"),
        "\"North\""
    );
    assert_eq!(
        resolver.render_enum_literal("2.8", "System.Decimal?"),
        "\"2.8\""
    );
    assert_eq!(
        resolver.render_enum_literal("1.5", "System.Single?"),
        "\"1.5\""
    );
}

#[test]
fn test_excluded_integrals_are_quoted() {
    let resolver = activity();
    for target in [
        "System.Int16",
        "System.UInt16",
        "System.UInt32",
        "System.UInt64",
        "System.SByte",
    ] {
        assert_eq!(resolver.render_enum_literal("3", target), "\"3\"", "{}", target);
    }
}

#[test]
fn test_client_literals_use_keywords() {
    let resolver = client();
    assert_eq!(resolver.render_enum_literal("5", "int?"), "5");
    assert_eq!(resolver.render_enum_literal("5", "long"), "5");
    assert_eq!(resolver.render_enum_literal("2.8", "decimal?"), "\"2.8\"");
    assert!(resolver.is_string_like_for_enum("string"));
    assert!(resolver.is_string_like_for_enum("double?"));
    assert!(!resolver.is_string_like_for_enum("int"));
    assert_eq!(resolver.render_enum_literal("5", "System.Int64?"), "5");
    assert!(resolver.is_string_like_for_enum("System.Decimal?"));
}

#[test]
fn test_activity_keyword_aliases_match_nullable_forms() {
    let resolver = activity();
    for target in ["int", "int?", "long", "long?"] {
        assert_eq!(resolver.render_enum_literal("5", target), "5", "{}", target);
        assert!(!resolver.is_string_like_for_enum(target), "{}", target);
    }
    for target in ["decimal", "decimal?", "double", "double?", "float", "float?"] {
        assert_eq!(resolver.render_enum_literal("2.8", target), "\"2.8\"", "{}", target);
        assert!(resolver.is_string_like_for_enum(target), "{}", target);
    }
}

#[test]
fn test_literal_escaping() {
    let resolver = activity();
    assert_eq!(
        resolver.render_enum_literal("a \"b\"\n", "System.String"),
        r#""a \"b\"\n""#
    );
}

#[test]
fn test_optional_declarations() {
    let resolver = activity();
    let optional = |d: &str| {
        let descriptor: TypeDescriptor = d.parse().unwrap();
        resolver.declare_optional(&descriptor).unwrap()
    };
    assert_eq!(optional("integer"), "System.Int32?");
    assert_eq!(optional("string"), "System.String");
    assert_eq!(
        optional("array<integer>"),
        "System.Collections.Generic.List<System.Int32?>"
    );
}

#[test]
fn test_overlay_extends_activity() {
    let file: TablesFile = r#"
        primitives = ["System.Uri"]

        [target]
        extends = "csharp-activity"

        [types]
        URI = "System.Uri"
        BigDecimal = "System.Double?"
    "#
    .parse()
    .unwrap();

    let resolver = registry().resolver("csharp-activity", Some(&file)).unwrap();
    assert_eq!(resolver.resolve_scalar("URI").unwrap(), "System.Uri");
    assert_eq!(resolver.resolve_scalar("BigDecimal").unwrap(), "System.Double?");
    assert_eq!(resolver.resolve_scalar("number").unwrap(), "System.Decimal?");
    assert!(resolver.imports(&"URI".parse().unwrap()).unwrap().is_empty());
}

#[test]
fn test_driver_with_activity_target() {
    let resolver = activity();
    let driver = GenerationDriver::new(&resolver, ActivityTarget.naming());
    let input: GenerationInput = serde_json::from_value(serde_json::json!({
        "models": [{
            "name": "Order",
            "fields": [
                { "name": "id", "type": "long", "required": true },
                { "name": "ship_date", "type": "DateTime" },
                { "name": "items", "type": "array<ref:LineItem>" }
            ]
        }],
        "enums": [
            { "name": "Ratio", "type": "number", "values": ["2.8", "0.5"] },
            { "name": "Priority", "type": "integer", "values": [1, 2] }
        ]
    }))
    .unwrap();

    let output = driver.run(&input).unwrap();

    let order = &output.models[0];
    assert_eq!(order.fields[1].property, "ShipDate");
    assert_eq!(order.fields[1].declaration, "System.DateTime?");
    assert!(order.fields[1].is_value_type);
    assert_eq!(order.imports, vec!["LineItem"]);

    let ratio = &output.enums[0];
    assert!(ratio.string_like);
    let members: Vec<(&str, &str)> = ratio
        .members
        .iter()
        .map(|m| (m.name.as_str(), m.literal.as_str()))
        .collect();
    assert_eq!(members, vec![("_28", "\"2.8\""), ("_05", "\"0.5\"")]);

    let priority = &output.enums[1];
    assert_eq!(priority.target, "System.Int32?");
    assert_eq!(priority.members[1].literal, "2");
    assert_eq!(priority.members[1].name, CSHARP_NAMING.enum_member_name("2"));
}
