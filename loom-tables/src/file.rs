//! Table file parsing.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use indexmap::IndexMap;
use serde::Deserialize;
use typeloom_core::ScalarKind;

use crate::{Error, Result, SourceContext, validate};

/// Default table file name looked up by the CLI.
pub const DEFAULT_FILENAME: &str = "typeloom.toml";

/// The `[target]` section of a table file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetSection {
    /// Name of the built-in target whose tables are overlaid.
    pub extends: Option<String>,
    /// Replacement nullable marker (e.g. `?`).
    pub nullable_suffix: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTablesFile {
    #[serde(default)]
    target: TargetSection,
    #[serde(default)]
    types: IndexMap<String, String>,
    #[serde(default)]
    instantiation: IndexMap<String, String>,
    #[serde(default)]
    primitives: Vec<String>,
    #[serde(default)]
    nullable: Vec<String>,
    #[serde(default)]
    value_types: Vec<String>,
    #[serde(default)]
    scalars: IndexMap<String, String>,
}

/// A parsed table-override file.
///
/// Entries are kept in file order. Mapping sections overwrite the target's
/// entries key by key; set sections add to the target's sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TablesFile {
    /// Target selection and global settings.
    pub target: TargetSection,
    /// Abstract kind -> target type.
    pub types: IndexMap<String, String>,
    /// Container kind -> instantiation type.
    pub instantiation: IndexMap<String, String>,
    /// Additional primitive type names.
    pub primitives: Vec<String>,
    /// Additional nullable-eligible type names.
    pub nullable: Vec<String>,
    /// Additional value type names.
    pub value_types: Vec<String>,
    /// Target type -> scalar kind classification.
    pub scalars: IndexMap<String, ScalarKind>,
}

impl TablesFile {
    /// Parse a table file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_tables(&content, &path.display().to_string())
    }

    /// Parse a table file from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_tables(content, filename)
    }

    /// Look for the default table file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let candidate = dir.as_ref().join(DEFAULT_FILENAME);
        candidate.is_file().then_some(candidate)
    }

    /// Name of the target this file extends, if any.
    pub fn extends(&self) -> Option<&str> {
        self.target.extends.as_deref()
    }

    /// Check if the file changes nothing.
    pub fn is_empty(&self) -> bool {
        self.target.nullable_suffix.is_none()
            && self.types.is_empty()
            && self.instantiation.is_empty()
            && self.primitives.is_empty()
            && self.nullable.is_empty()
            && self.value_types.is_empty()
            && self.scalars.is_empty()
    }
}

impl FromStr for TablesFile {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_tables(s, DEFAULT_FILENAME)
    }
}

fn parse_tables(content: &str, filename: &str) -> Result<TablesFile> {
    let ctx = SourceContext::new(content, filename);
    let raw: RawTablesFile = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

    for (kind, target) in raw.types.iter().chain(raw.instantiation.iter()) {
        if let Some(reason) = validate::check_type_name(target) {
            return Err(ctx.validation_error(
                format!("invalid type for '{}': {}", kind, reason),
                kind,
            ));
        }
    }

    for name in raw
        .primitives
        .iter()
        .chain(&raw.nullable)
        .chain(&raw.value_types)
    {
        if let Some(reason) = validate::check_type_name(name) {
            return Err(
                ctx.validation_error(format!("invalid type '{}': {}", name, reason), name)
            );
        }
    }

    if let Some(suffix) = &raw.target.nullable_suffix {
        if suffix.is_empty() {
            return Err(
                ctx.validation_error("nullable_suffix cannot be empty", "nullable_suffix")
            );
        }
    }

    let mut scalars = IndexMap::with_capacity(raw.scalars.len());
    for (target_type, kind) in &raw.scalars {
        let parsed = kind
            .parse::<ScalarKind>()
            .map_err(|_| ctx.invalid_scalar_kind_error(target_type, kind))?;
        scalars.insert(target_type.clone(), parsed);
    }

    Ok(TablesFile {
        target: raw.target,
        types: raw.types,
        instantiation: raw.instantiation,
        primitives: raw.primitives,
        nullable: raw.nullable,
        value_types: raw.value_types,
        scalars,
    })
}
