//! Check operation - table validation.

use std::path::Path;

use eyre::Result;
use typeloom_codegen::{TargetRegistry, generation::RegistryError};
use typeloom_tables::TablesFile;

use crate::reports::{CheckReport, TableStats};

/// Execute the check operation.
///
/// Builds the target's tables, with the overlay applied. An unknown target or
/// a mismatched overlay is an error; invalid tables are part of the report.
pub fn check(
    registry: &TargetRegistry,
    name: &str,
    overlay: Option<(&Path, &TablesFile)>,
) -> Result<CheckReport> {
    let result = match registry.resolver(name, overlay.map(|(_, file)| file)) {
        Ok(resolver) => {
            let tables = resolver.tables();
            Ok(TableStats {
                kinds: tables.known_kinds().len(),
                primitives: tables.primitives().count(),
                classified: tables.scalars().count(),
            })
        }
        Err(RegistryError::Tables { source, .. }) => Err(source.to_string()),
        Err(e) => return Err(e.into()),
    };

    Ok(CheckReport {
        target: name.to_string(),
        overlay: overlay.map(|(path, _)| path.to_path_buf()),
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    #[test]
    fn test_builtin_tables_valid() {
        let registry = registry::builtin();
        for name in registry.names() {
            let report = check(&registry, name, None).unwrap();
            assert!(report.is_valid(), "{}: {:?}", name, report.result);
        }
    }

    #[test]
    fn test_overlay_breaks_tables() {
        let file: TablesFile = "[types]\nURI = \"System.Uri\"\n".parse().unwrap();
        let report = check(
            &registry::builtin(),
            "csharp-activity",
            Some((Path::new("typeloom.toml"), &file)),
        )
        .unwrap();

        assert!(!report.is_valid());
        let reason = report.result.unwrap_err();
        assert!(reason.contains("System.Uri"), "{}", reason);
    }

    #[test]
    fn test_overlay_for_other_target() {
        let file: TablesFile = "[target]\nextends = \"csharp\"\n".parse().unwrap();
        let err = check(
            &registry::builtin(),
            "csharp-activity",
            Some((Path::new("typeloom.toml"), &file)),
        )
        .unwrap_err();
        assert!(err.to_string().contains("extends 'csharp'"));
    }
}
