//! Target registry.
//!
//! The registry is how a host discovers targets by name and turns one into a
//! ready [`TypeResolver`]:
//!
//! ```ignore
//! let mut registry = TargetRegistry::new();
//! registry.register(CSharpActivityTarget);
//!
//! let resolver = registry.resolver("csharp-activity", None)?;
//! let declared = resolver.declare_type(&"array<integer>".parse()?)?;
//! ```

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;
use typeloom_tables::TablesFile;

use crate::{language::Target, resolver::TypeResolver, tables::TableError};

/// Error returned by registry lookups.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown target '{name}' (available: {})", .available.join(", "))]
    UnknownTarget {
        name: String,
        available: Vec<&'static str>,
    },

    #[error("table file extends '{extends}' but target '{target}' was requested")]
    ExtendsMismatch { extends: String, target: String },

    #[error("invalid tables for target '{target}'")]
    Tables {
        target: &'static str,
        #[source]
        source: TableError,
    },
}

/// Targets available to the host, in registration order.
#[derive(Default)]
pub struct TargetRegistry {
    targets: Vec<Box<dyn Target>>,
}

impl TargetRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target. A later target with the same name replaces the earlier one.
    pub fn register(&mut self, target: impl Target + 'static) {
        let name = target.name();
        if let Some(existing) = self.targets.iter_mut().find(|t| t.name() == name) {
            debug!(target_name = name, "replacing registered target");
            *existing = Box::new(target);
        } else {
            debug!(target_name = name, "registering target");
            self.targets.push(Box::new(target));
        }
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, target: impl Target + 'static) -> Self {
        self.register(target);
        self
    }

    /// Registered target names.
    pub fn names(&self) -> Vec<&'static str> {
        self.targets.iter().map(|t| t.name()).collect()
    }

    /// Registered targets.
    pub fn targets(&self) -> impl Iterator<Item = &dyn Target> {
        self.targets.iter().map(|t| t.as_ref())
    }

    /// Get the number of registered targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Look up a target by name.
    pub fn get(&self, name: &str) -> Result<&dyn Target, RegistryError> {
        self.targets()
            .find(|t| t.name() == name)
            .ok_or_else(|| RegistryError::UnknownTarget {
                name: name.to_string(),
                available: self.names(),
            })
    }

    /// Build a resolver for a target, optionally overlaid by a table file.
    pub fn resolver(
        &self,
        name: &str,
        overlay: Option<&TablesFile>,
    ) -> Result<TypeResolver, RegistryError> {
        let target = self.get(name)?;

        let mut builder = target.tables();
        if let Some(file) = overlay {
            if let Some(extends) = file.extends() {
                if extends != name {
                    return Err(RegistryError::ExtendsMismatch {
                        extends: extends.to_string(),
                        target: name.to_string(),
                    });
                }
            }
            builder = builder.apply(file);
        }

        let tables = builder.build().map_err(|source| RegistryError::Tables {
            target: target.name(),
            source,
        })?;

        debug!(
            target_name = target.name(),
            kinds = tables.known_kinds().len(),
            overlay = overlay.is_some(),
            "instantiated target tables"
        );

        Ok(TypeResolver::new(
            Arc::new(tables),
            target.declarations(),
            target.literals(),
        ))
    }
}
