//! Strategy traits implemented by target crates.

use std::{fmt, sync::Arc};

use serde::Serialize;

use super::NamingConvention;
use crate::tables::TypeTablesBuilder;

/// Syntax for generic type declarations.
pub trait DeclarationSyntax: Send + Sync {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Render a generic type with arguments (e.g., `List<T>`, `Dictionary<K, V>`).
    fn generic(&self, base: &str, args: &[String]) -> String {
        if args.is_empty() {
            base.to_string()
        } else {
            format!("{}<{}>", base, args.join(", "))
        }
    }

    /// Render the nullable form of `inner` given the target's marker (e.g., `int?`).
    fn nullable(&self, inner: &str, marker: &str) -> String {
        format!("{}{}", inner, marker)
    }
}

/// Syntax for string literals used as enum member values.
pub trait EnumLiteralSyntax: Send + Sync {
    /// Quote and escape `value` as a string literal.
    fn quote(&self, value: &str) -> String;
}

/// What a target generates, mirroring the host framework's categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetTag {
    Client,
    Server,
    Documentation,
    Schema,
    Config,
    Other,
}

impl TargetTag {
    /// Get the tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
            Self::Documentation => "documentation",
            Self::Schema => "schema",
            Self::Config => "config",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for TargetTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A generator option a target accepts from the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetOption {
    pub name: &'static str,
    pub description: &'static str,
    /// Default value, if the option has one.
    pub default: Option<&'static str>,
}

/// A template the host renders once per run, next to the generated models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportingFile {
    /// Template name.
    pub template: &'static str,
    /// Output folder relative to the output directory.
    pub folder: &'static str,
    /// Output file name.
    pub destination: &'static str,
}

impl SupportingFile {
    /// Create a supporting file entry.
    pub const fn new(
        template: &'static str,
        folder: &'static str,
        destination: &'static str,
    ) -> Self {
        Self {
            template,
            folder,
            destination,
        }
    }

    /// Output path relative to the output directory.
    pub fn output_path(&self) -> String {
        if self.folder.is_empty() {
            self.destination.to_string()
        } else {
            format!("{}/{}", self.folder, self.destination)
        }
    }
}

/// One target variant the host can discover and drive.
///
/// A target only describes itself. [`crate::TargetRegistry`] builds its
/// tables and wires its strategies into a [`crate::TypeResolver`].
pub trait Target: Send + Sync {
    /// Registry name (e.g., "csharp-activity").
    fn name(&self) -> &'static str;

    /// One-line description shown in target listings.
    fn help(&self) -> &'static str;

    /// Generator category.
    fn tag(&self) -> TargetTag {
        TargetTag::Client
    }

    /// Unbuilt tables, so the host can overlay them before validation.
    fn tables(&self) -> TypeTablesBuilder;

    /// Generic declaration syntax.
    fn declarations(&self) -> Arc<dyn DeclarationSyntax>;

    /// Enum literal syntax.
    fn literals(&self) -> Arc<dyn EnumLiteralSyntax>;

    /// Identifier rules.
    fn naming(&self) -> NamingConvention;

    /// Options accepted from the host.
    fn options(&self) -> Vec<TargetOption> {
        Vec::new()
    }

    /// Templates rendered once per run.
    fn supporting_files(&self) -> Vec<SupportingFile> {
        Vec::new()
    }
}
