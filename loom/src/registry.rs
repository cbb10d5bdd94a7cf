//! Built-in targets and table overlays.

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::{debug, info};
use typeloom_codegen::TargetRegistry;
use typeloom_tables::TablesFile;

/// Every target shipped with the CLI.
pub fn builtin() -> TargetRegistry {
    let mut registry = TargetRegistry::new();
    typeloom_codegen_csharp::register_all(&mut registry);
    registry
}

/// Table overlay selection shared by every target command.
#[derive(Args, Debug, Default)]
pub struct TablesArgs {
    /// Table-override file (defaults to ./typeloom.toml when present)
    #[arg(long, value_name = "PATH")]
    pub tables: Option<PathBuf>,

    /// Ignore ./typeloom.toml
    #[arg(long, conflicts_with = "tables")]
    pub no_tables: bool,
}

impl TablesArgs {
    /// Resolve which file to load, if any.
    pub fn path(&self, dir: &Path) -> Option<PathBuf> {
        if self.no_tables {
            return None;
        }
        self.tables.clone().or_else(|| TablesFile::discover(dir))
    }

    /// Load the selected overlay along with its path.
    pub fn load(&self, dir: &Path) -> typeloom_tables::Result<Option<(PathBuf, TablesFile)>> {
        let Some(path) = self.path(dir) else {
            debug!("no table overlay");
            return Ok(None);
        };

        let file = TablesFile::from_file(&path)?;
        info!(path = %path.display(), empty = file.is_empty(), "loaded table overlay");
        Ok(Some((path, file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_targets() {
        assert_eq!(builtin().names(), vec!["csharp", "csharp-activity"]);
    }

    #[test]
    fn test_overlay_discovery() {
        let dir = tempfile::tempdir().unwrap();
        let args = TablesArgs::default();
        assert!(args.load(dir.path()).unwrap().is_none());

        std::fs::write(
            dir.path().join("typeloom.toml"),
            "[types]\nURI = \"System.Object\"\n",
        )
        .unwrap();
        let (path, file) = args.load(dir.path()).unwrap().unwrap();
        assert_eq!(path, dir.path().join("typeloom.toml"));
        assert_eq!(file.types["URI"], "System.Object");

        let ignored = TablesArgs {
            no_tables: true,
            ..Default::default()
        };
        assert!(ignored.load(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_explicit_overlay_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let args = TablesArgs {
            tables: Some(dir.path().join("missing.toml")),
            no_tables: false,
        };
        let err = args.load(dir.path()).unwrap_err();
        assert!(matches!(*err, typeloom_tables::Error::Io { .. }));
    }
}
