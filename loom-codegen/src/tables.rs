//! Immutable type-mapping tables.
//!
//! Tables are assembled once with [`TypeTablesBuilder`] and validated by
//! [`TypeTablesBuilder::build`]. After that they are read-only, so a single
//! [`TypeTables`] can be shared by every resolver call of a generation run.
//!
//! # Example
//!
//! ```
//! use typeloom_codegen::TypeTables;
//! use typeloom_core::ScalarKind;
//!
//! let tables = TypeTables::builder()
//!     .map("string", "Str")
//!     .map("integer", "Int?")
//!     .map("array", "List")
//!     .map("map", "Dictionary")
//!     .instantiate("array", "List")
//!     .instantiate("map", "Dictionary")
//!     .primitives(["Str", "Int", "Int?", "List", "Dictionary"])
//!     .nullable("Int")
//!     .value_type("Int")
//!     .classify("Str", ScalarKind::String)
//!     .classify("Int", ScalarKind::Int32)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(tables.mapping("integer"), Some("Int?"));
//! assert_eq!(tables.classify("Int?"), Some(ScalarKind::Int32));
//! ```

use indexmap::{IndexMap, IndexSet};
use thiserror::Error;
use tracing::warn;
use typeloom_core::{ScalarKind, kinds};
use typeloom_tables::TablesFile;

/// Marker used when a builder does not set one.
pub const DEFAULT_NULLABLE_SUFFIX: &str = "?";

/// Error returned when assembled tables break one of their invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("no mapping for required kind '{kind}'")]
    MissingMapping { kind: String },

    #[error("no instantiation type for required kind '{kind}'")]
    MissingInstantiation { kind: String },

    #[error("'{target}' (mapped from '{kind}') is not in the primitive type set")]
    NotPrimitive { kind: String, target: String },

    #[error("{set} type '{name}' is not the non-nullable form of any mapped type")]
    UnreachableRefinement { set: &'static str, name: String },
}

/// Container types every declaration needs, resolved at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ContainerTypes {
    array: String,
    map: String,
    key: String,
}

/// Validated, read-only mapping tables for one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTables {
    mappings: IndexMap<String, String>,
    instantiations: IndexMap<String, String>,
    primitives: IndexSet<String>,
    nullable: IndexSet<String>,
    value_types: IndexSet<String>,
    scalars: IndexMap<String, ScalarKind>,
    nullable_suffix: String,
    containers: ContainerTypes,
}

impl TypeTables {
    /// Start assembling tables.
    pub fn builder() -> TypeTablesBuilder {
        TypeTablesBuilder::default()
    }

    /// Look up the target type mapped to an abstract kind.
    pub fn mapping(&self, kind: &str) -> Option<&str> {
        self.mappings.get(kind).map(String::as_str)
    }

    /// All (abstract kind, target type) pairs in insertion order.
    pub fn mappings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.mappings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Look up the instantiation type for a container kind.
    pub fn instantiation(&self, kind: &str) -> Option<&str> {
        self.instantiations.get(kind).map(String::as_str)
    }

    /// All (container kind, instantiation type) pairs in insertion order.
    pub fn instantiations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.instantiations
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Abstract kinds with a mapping, sorted.
    pub fn known_kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<_> = self.mappings.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Primitive target type names.
    pub fn primitives(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().map(String::as_str)
    }

    /// Target type names that take the nullable marker when optional.
    pub fn nullable_types(&self) -> impl Iterator<Item = &str> {
        self.nullable.iter().map(String::as_str)
    }

    /// Target type names copied by value.
    pub fn value_types(&self) -> impl Iterator<Item = &str> {
        self.value_types.iter().map(String::as_str)
    }

    /// Classified target type names, including derived nullable forms.
    pub fn scalars(&self) -> impl Iterator<Item = (&str, ScalarKind)> {
        self.scalars.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// The nullable marker (e.g. `?`).
    pub fn nullable_suffix(&self) -> &str {
        &self.nullable_suffix
    }

    /// Instantiation type used for array declarations.
    pub fn array_type(&self) -> &str {
        &self.containers.array
    }

    /// Instantiation type used for map declarations.
    pub fn map_type(&self) -> &str {
        &self.containers.map
    }

    /// Target string type, used for map keys.
    pub fn string_type(&self) -> &str {
        &self.containers.key
    }

    /// Check if a target type name is primitive.
    pub fn is_primitive(&self, target: &str) -> bool {
        self.primitives.contains(target)
    }

    /// Check if a target type (nullable or not) is a value type.
    pub fn is_value_type(&self, target: &str) -> bool {
        self.value_types.contains(self.strip_nullable(target))
    }

    /// Check if a target type (nullable or not) takes the nullable marker.
    pub fn is_nullable_type(&self, target: &str) -> bool {
        self.nullable.contains(self.strip_nullable(target))
    }

    /// Check if a target type already carries the nullable marker.
    pub fn is_marked_nullable(&self, target: &str) -> bool {
        target.ends_with(self.nullable_suffix.as_str())
    }

    /// Remove one trailing nullable marker, if present.
    pub fn strip_nullable<'a>(&self, target: &'a str) -> &'a str {
        target
            .strip_suffix(self.nullable_suffix.as_str())
            .unwrap_or(target)
    }

    /// Exact-match classification of a target type name.
    pub fn classify(&self, target: &str) -> Option<ScalarKind> {
        self.scalars.get(target).copied()
    }
}

/// Builder for [`TypeTables`].
///
/// Every mapping-style call is last-write-wins: setting the same key twice
/// keeps the later value.
#[derive(Debug, Clone, Default)]
pub struct TypeTablesBuilder {
    mappings: IndexMap<String, String>,
    instantiations: IndexMap<String, String>,
    primitives: IndexSet<String>,
    nullable: IndexSet<String>,
    value_types: IndexSet<String>,
    scalars: IndexMap<String, ScalarKind>,
    nullable_suffix: Option<String>,
}

impl TypeTablesBuilder {
    /// Map an abstract kind to a target type.
    pub fn map(mut self, kind: impl Into<String>, target: impl Into<String>) -> Self {
        self.mappings.insert(kind.into(), target.into());
        self
    }

    /// Set the instantiation type of a container kind.
    pub fn instantiate(mut self, kind: impl Into<String>, target: impl Into<String>) -> Self {
        self.instantiations.insert(kind.into(), target.into());
        self
    }

    /// Add a primitive type name.
    pub fn primitive(mut self, name: impl Into<String>) -> Self {
        self.primitives.insert(name.into());
        self
    }

    /// Add several primitive type names.
    pub fn primitives<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primitives.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add a type that takes the nullable marker when optional.
    pub fn nullable(mut self, name: impl Into<String>) -> Self {
        self.nullable.insert(name.into());
        self
    }

    /// Add a type copied by value.
    pub fn value_type(mut self, name: impl Into<String>) -> Self {
        self.value_types.insert(name.into());
        self
    }

    /// Classify a target type name (non-nullable form).
    pub fn classify(mut self, name: impl Into<String>, kind: ScalarKind) -> Self {
        self.scalars.insert(name.into(), kind);
        self
    }

    /// Set the nullable marker. Defaults to [`DEFAULT_NULLABLE_SUFFIX`].
    pub fn nullable_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.nullable_suffix = Some(suffix.into());
        self
    }

    /// Overlay a table file on top of the entries set so far.
    pub fn apply(mut self, file: &TablesFile) -> Self {
        for (kind, target) in &file.types {
            if let Some(previous) = self.mappings.get(kind) {
                if previous != target {
                    warn!(kind = %kind, from = %previous, to = %target, "overriding type mapping");
                }
            }
            self = self.map(kind, target);
        }
        for (kind, target) in &file.instantiation {
            self = self.instantiate(kind, target);
        }
        self = self.primitives(file.primitives.iter().cloned());
        for name in &file.nullable {
            self = self.nullable(name);
        }
        for name in &file.value_types {
            self = self.value_type(name);
        }
        for (name, kind) in &file.scalars {
            self = self.classify(name, *kind);
        }
        if let Some(suffix) = &file.target.nullable_suffix {
            self = self.nullable_suffix(suffix);
        }
        self
    }

    /// Validate the assembled entries and freeze them.
    pub fn build(self) -> Result<TypeTables, TableError> {
        let nullable_suffix = self
            .nullable_suffix
            .unwrap_or_else(|| DEFAULT_NULLABLE_SUFFIX.to_string());

        let key = self
            .mappings
            .get(kinds::STRING)
            .cloned()
            .ok_or_else(|| TableError::MissingMapping {
                kind: kinds::STRING.to_string(),
            })?;
        let array = required_instantiation(&self.instantiations, kinds::ARRAY)?;
        let map = required_instantiation(&self.instantiations, kinds::MAP)?;

        for (kind, target) in &self.mappings {
            if !kinds::is_container_kind(kind) && !self.primitives.contains(target) {
                return Err(TableError::NotPrimitive {
                    kind: kind.clone(),
                    target: target.clone(),
                });
            }
        }

        let reachable: IndexSet<&str> = self
            .mappings
            .values()
            .map(|v| v.strip_suffix(nullable_suffix.as_str()).unwrap_or(v))
            .collect();
        let refinements = [("nullable", &self.nullable), ("value", &self.value_types)];
        for (set, names) in refinements {
            if let Some(name) = names.iter().find(|n| !reachable.contains(n.as_str())) {
                return Err(TableError::UnreachableRefinement {
                    set,
                    name: name.clone(),
                });
            }
        }

        let mut scalars = self.scalars;
        let derived: Vec<(String, ScalarKind)> = scalars
            .iter()
            .filter(|(name, _)| self.nullable.contains(name.as_str()))
            .map(|(name, kind)| (format!("{}{}", name, nullable_suffix), *kind))
            .collect();
        for (name, kind) in derived {
            scalars.entry(name).or_insert(kind);
        }

        Ok(TypeTables {
            mappings: self.mappings,
            instantiations: self.instantiations,
            primitives: self.primitives,
            nullable: self.nullable,
            value_types: self.value_types,
            scalars,
            nullable_suffix,
            containers: ContainerTypes { array, map, key },
        })
    }
}

fn required_instantiation(
    instantiations: &IndexMap<String, String>,
    kind: &str,
) -> Result<String, TableError> {
    instantiations
        .get(kind)
        .cloned()
        .ok_or_else(|| TableError::MissingInstantiation {
            kind: kind.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_fixture_tables_build() {
        let tables = testing::fixture_tables();

        assert_eq!(tables.mapping("string"), Some("Str"));
        assert_eq!(tables.mapping("integer"), Some("Int?"));
        assert_eq!(tables.array_type(), "List");
        assert_eq!(tables.map_type(), "Dictionary");
        assert_eq!(tables.string_type(), "Str");
        assert_eq!(tables.nullable_suffix(), "?");
    }

    #[test]
    fn test_last_write_wins() {
        let tables = testing::fixture_builder()
            .map("float", "Dbl?")
            .map("float", "Flt?")
            .build()
            .unwrap();
        assert_eq!(tables.mapping("float"), Some("Flt?"));
    }

    #[test]
    fn test_known_kinds_sorted() {
        let tables = testing::fixture_tables();
        let kinds = tables.known_kinds();
        let mut sorted = kinds.clone();
        sorted.sort_unstable();
        assert_eq!(kinds, sorted);
        assert!(kinds.contains(&"object"));
    }

    #[test]
    fn test_nullable_forms_are_classified() {
        let tables = testing::fixture_tables();

        assert_eq!(tables.classify("Int"), Some(ScalarKind::Int32));
        assert_eq!(tables.classify("Int?"), Some(ScalarKind::Int32));
        assert_eq!(tables.classify("Dec?"), Some(ScalarKind::Decimal));
        // Str is not nullable-eligible, so no `Str?` form exists.
        assert_eq!(tables.classify("Str?"), None);
        // Exact match only.
        assert_eq!(tables.classify("Int??"), None);
        assert_eq!(tables.classify("MyInt"), None);
    }

    #[test]
    fn test_refinement_lookups() {
        let tables = testing::fixture_tables();

        assert!(tables.is_value_type("Int?"));
        assert!(tables.is_value_type("Int"));
        assert!(!tables.is_value_type("Str"));
        assert!(tables.is_nullable_type("Dec"));
        assert!(tables.is_marked_nullable("Dec?"));
        assert!(!tables.is_marked_nullable("Dec"));
        assert_eq!(tables.strip_nullable("Int?"), "Int");
        assert_eq!(tables.strip_nullable("Str"), "Str");
    }

    #[test]
    fn test_missing_string_mapping() {
        let err = TypeTables::builder()
            .instantiate("array", "List")
            .instantiate("map", "Dictionary")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            TableError::MissingMapping {
                kind: "string".to_string()
            }
        );
    }

    #[test]
    fn test_missing_instantiation() {
        let err = TypeTables::builder()
            .map("string", "Str")
            .primitive("Str")
            .instantiate("array", "List")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            TableError::MissingInstantiation {
                kind: "map".to_string()
            }
        );
    }

    #[test]
    fn test_scalar_must_be_primitive() {
        let err = testing::fixture_builder()
            .map("UUID", "Guid?")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            TableError::NotPrimitive {
                kind: "UUID".to_string(),
                target: "Guid?".to_string()
            }
        );
    }

    #[test]
    fn test_container_mapping_need_not_be_primitive() {
        let tables = testing::fixture_builder()
            .map("list", "IList")
            .build()
            .unwrap();
        assert_eq!(tables.mapping("list"), Some("IList"));
    }

    #[test]
    fn test_unreachable_refinement() {
        let err = testing::fixture_builder()
            .nullable("Guid")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            TableError::UnreachableRefinement {
                set: "nullable",
                name: "Guid".to_string()
            }
        );

        let err = testing::fixture_builder()
            .value_type("Char")
            .build()
            .unwrap_err();
        assert!(matches!(err, TableError::UnreachableRefinement { set: "value", .. }));
    }

    #[test]
    fn test_apply_overlay() {
        let file: TablesFile = r#"
            primitives = ["Half", "Half?"]
            nullable = ["Half"]

            [types]
            half = "Half?"
            URI = "Obj"

            [scalars]
            Half = "float"
        "#
        .parse()
        .unwrap();

        let tables = testing::fixture_builder().apply(&file).build().unwrap();

        assert_eq!(tables.mapping("half"), Some("Half?"));
        assert_eq!(tables.mapping("URI"), Some("Obj"));
        assert_eq!(tables.classify("Half?"), Some(ScalarKind::Float));
        assert!(tables.is_nullable_type("Half?"));
    }

    #[test]
    fn test_apply_overlay_breaking_invariant() {
        let file: TablesFile = "[types]\nUUID = \"Guid\"\n".parse().unwrap();
        let err = testing::fixture_builder().apply(&file).build().unwrap_err();
        assert!(matches!(err, TableError::NotPrimitive { .. }));
    }

    #[test]
    fn test_custom_nullable_suffix() {
        let file: TablesFile = r#"
            [target]
            nullable_suffix = " | null"
        "#
        .parse()
        .unwrap();

        let tables = TypeTables::builder()
            .map("string", "string")
            .map("integer", "number | null")
            .instantiate("array", "Array")
            .instantiate("map", "Record")
            .primitives(["string", "number | null"])
            .nullable("number")
            .classify("number", ScalarKind::Double)
            .apply(&file)
            .build()
            .unwrap();

        assert_eq!(tables.nullable_suffix(), " | null");
        assert_eq!(tables.classify("number | null"), Some(ScalarKind::Double));
        assert_eq!(tables.strip_nullable("number | null"), "number");
    }
}
