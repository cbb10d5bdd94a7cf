//! Descriptor resolution and enum literal rendering.
//!
//! [`TypeResolver`] is stateless apart from the tables and strategies it was
//! created with. Every method takes `&self`, so one resolver can be shared
//! across threads for the whole generation run.

use std::sync::Arc;

use thiserror::Error;
use typeloom_core::{ScalarKind, TypeDescriptor};

use crate::{
    language::{DeclarationSyntax, EnumLiteralSyntax},
    tables::TypeTables,
};

/// Error returned when a descriptor cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unknown type kind '{kind}' (known kinds: {})", .known.join(", "))]
    UnknownTypeKind { kind: String, known: Vec<String> },
}

/// Resolves type descriptors against one target's tables.
#[derive(Clone)]
pub struct TypeResolver {
    tables: Arc<TypeTables>,
    declarations: Arc<dyn DeclarationSyntax>,
    literals: Arc<dyn EnumLiteralSyntax>,
}

impl std::fmt::Debug for TypeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeResolver")
            .field("language", &self.declarations.language())
            .field("tables", &self.tables)
            .finish_non_exhaustive()
    }
}

impl TypeResolver {
    /// Create a resolver over built tables and a target's strategies.
    pub fn new(
        tables: Arc<TypeTables>,
        declarations: Arc<dyn DeclarationSyntax>,
        literals: Arc<dyn EnumLiteralSyntax>,
    ) -> Self {
        Self {
            tables,
            declarations,
            literals,
        }
    }

    /// The tables this resolver reads.
    pub fn tables(&self) -> &TypeTables {
        &self.tables
    }

    /// The target language name.
    pub fn language(&self) -> &'static str {
        self.declarations.language()
    }

    /// Strict lookup of the target type mapped to an abstract kind.
    ///
    /// The mapped string is returned exactly as configured, including any
    /// nullable marker. There is no fallback for unmapped kinds.
    pub fn resolve_scalar(&self, kind: &str) -> Result<&str, ResolveError> {
        self.tables
            .mapping(kind)
            .ok_or_else(|| ResolveError::UnknownTypeKind {
                kind: kind.to_string(),
                known: self
                    .tables
                    .known_kinds()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            })
    }

    /// Render the declaration string for a descriptor.
    ///
    /// Arrays and maps use their instantiation types and recurse through
    /// this same method, so nesting syntax is identical at every depth.
    pub fn declare_type(&self, descriptor: &TypeDescriptor) -> Result<String, ResolveError> {
        match descriptor {
            TypeDescriptor::Scalar(kind) => self.resolve_scalar(kind).map(String::from),
            TypeDescriptor::ArrayOf(element) => {
                let element = self.declare_type(element)?;
                Ok(self
                    .declarations
                    .generic(self.tables.array_type(), &[element]))
            }
            TypeDescriptor::MapOf(value) => {
                let key = self.tables.string_type().to_string();
                let value = self.declare_type(value)?;
                Ok(self
                    .declarations
                    .generic(self.tables.map_type(), &[key, value]))
            }
            TypeDescriptor::Named(name) => Ok(name.clone()),
        }
    }

    /// Render the declaration for an optional field.
    ///
    /// A scalar whose non-nullable form takes the nullable marker gets it
    /// exactly once. Containers and model references are unchanged.
    pub fn declare_optional(&self, descriptor: &TypeDescriptor) -> Result<String, ResolveError> {
        let declared = self.declare_type(descriptor)?;
        let needs_marker = matches!(descriptor, TypeDescriptor::Scalar(_))
            && self.tables.is_nullable_type(&declared)
            && !self.tables.is_marked_nullable(&declared);

        if needs_marker {
            Ok(self
                .declarations
                .nullable(&declared, self.tables.nullable_suffix()))
        } else {
            Ok(declared)
        }
    }

    /// Look up the concrete type used to construct a container kind.
    pub fn instantiation_type(&self, kind: &str) -> Option<&str> {
        self.tables.instantiation(kind)
    }

    /// Exact-match classification of a target type.
    pub fn classify(&self, target: &str) -> Option<ScalarKind> {
        self.tables.classify(target)
    }

    /// Check if an enum of `target` type must render its values as quoted strings.
    ///
    /// True for the target string type and every classified floating point or
    /// decimal type, nullable or not. Unclassified names are never string-like.
    pub fn is_string_like_for_enum(&self, target: &str) -> bool {
        target == self.tables.string_type()
            || self
                .classify(target)
                .is_some_and(|kind| kind.is_string_like_for_enum())
    }

    /// Render one enum member value as a literal for `target`.
    ///
    /// Values of 32/64-bit signed integer and byte types are returned as-is.
    /// Everything else, including numeric-looking floats and decimals, is
    /// quoted as a string literal.
    pub fn render_enum_literal(&self, value: &str, target: &str) -> String {
        match self.classify(target) {
            Some(kind) if kind.is_enum_integral() => value.to_string(),
            _ => self.literals.quote(value),
        }
    }

    /// Check if a target type is primitive.
    pub fn is_primitive(&self, target: &str) -> bool {
        self.tables.is_primitive(target)
    }

    /// Check if a target type is copied by value.
    pub fn is_value_type(&self, target: &str) -> bool {
        self.tables.is_value_type(target)
    }

    /// Check if a target type takes the nullable marker when optional.
    pub fn is_nullable_type(&self, target: &str) -> bool {
        self.tables.is_nullable_type(target)
    }

    /// Non-primitive type names a declaration of `descriptor` refers to.
    ///
    /// Names are distinct and in first-seen order.
    pub fn imports(&self, descriptor: &TypeDescriptor) -> Result<Vec<String>, ResolveError> {
        let mut imports = Vec::new();
        self.collect_imports(descriptor, &mut imports)?;
        Ok(imports)
    }

    fn collect_imports(
        &self,
        descriptor: &TypeDescriptor,
        imports: &mut Vec<String>,
    ) -> Result<(), ResolveError> {
        match descriptor {
            TypeDescriptor::Scalar(kind) => {
                let resolved = self.resolve_scalar(kind)?;
                self.push_import(resolved, imports);
            }
            TypeDescriptor::Named(name) => self.push_import(name, imports),
            TypeDescriptor::ArrayOf(element) => {
                self.push_import(self.tables.array_type(), imports);
                self.collect_imports(element, imports)?;
            }
            TypeDescriptor::MapOf(value) => {
                self.push_import(self.tables.map_type(), imports);
                self.push_import(self.tables.string_type(), imports);
                self.collect_imports(value, imports)?;
            }
        }
        Ok(())
    }

    fn push_import(&self, name: &str, imports: &mut Vec<String>) {
        if !self.is_primitive(name) && !imports.iter().any(|i| i == name) {
            imports.push(name.to_string());
        }
    }
}
