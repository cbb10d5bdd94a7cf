//! Info operation - target tables and metadata.

use std::path::Path;

use eyre::Result;
use typeloom_codegen::TargetRegistry;
use typeloom_tables::TablesFile;

use crate::reports::{InfoReport, OptionInfo};

/// Execute the info operation.
///
/// Builds the target's tables, with the overlay applied, and collects what
/// a maintainer needs to extend them.
pub fn info(
    registry: &TargetRegistry,
    name: &str,
    overlay: Option<(&Path, &TablesFile)>,
) -> Result<InfoReport> {
    let target = registry.get(name)?;
    let resolver = registry.resolver(name, overlay.map(|(_, file)| file))?;
    let tables = resolver.tables();

    let mut types: Vec<(String, String)> = tables
        .mappings()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    types.sort();

    Ok(InfoReport {
        name: target.name().to_string(),
        help: target.help().to_string(),
        tag: target.tag().to_string(),
        language: resolver.language().to_string(),
        overlay: overlay.map(|(path, _)| path.to_path_buf()),
        nullable_suffix: tables.nullable_suffix().to_string(),
        types,
        instantiations: tables
            .instantiations()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        value_types: tables.value_types().map(str::to_string).collect(),
        options: target
            .options()
            .into_iter()
            .map(|opt| OptionInfo {
                name: opt.name.to_string(),
                description: opt.description.to_string(),
                default: opt.default.map(str::to_string),
            })
            .collect(),
        supporting_files: target
            .supporting_files()
            .iter()
            .map(|f| (f.template.to_string(), f.output_path()))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    #[test]
    fn test_activity_info() {
        let report = info(&registry::builtin(), "csharp-activity", None).unwrap();
        assert_eq!(report.language, "csharp");
        assert_eq!(report.types.len(), 19);
        assert_eq!(report.types[0], ("BigDecimal".into(), "System.Decimal?".into()));
        assert_eq!(report.options.len(), 3);
        assert_eq!(
            report.supporting_files,
            vec![("IActivity.mustache".into(), "IActivities.json".into())]
        );
    }

    #[test]
    fn test_info_with_overlay() {
        let file: TablesFile = "[types]\nURI = \"System.Object\"\n".parse().unwrap();
        let report = info(
            &registry::builtin(),
            "csharp-activity",
            Some((Path::new("typeloom.toml"), &file)),
        )
        .unwrap();

        assert!(report.types.contains(&("URI".into(), "System.Object".into())));
        assert_eq!(report.overlay.as_deref(), Some(Path::new("typeloom.toml")));
    }

    #[test]
    fn test_info_unknown_target() {
        let err = info(&registry::builtin(), "java", None).unwrap_err();
        assert!(err.to_string().starts_with("unknown target 'java'"));
    }
}
