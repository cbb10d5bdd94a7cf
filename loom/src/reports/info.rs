//! Info command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from target info.
#[derive(Debug)]
pub struct InfoReport {
    /// Target name.
    pub name: String,
    /// Target description.
    pub help: String,
    /// Generator category.
    pub tag: String,
    /// Declaration language.
    pub language: String,
    /// Table overlay in effect.
    pub overlay: Option<PathBuf>,
    /// Nullable marker.
    pub nullable_suffix: String,
    /// Abstract kind -> target type, sorted by kind.
    pub types: Vec<(String, String)>,
    /// Container kind -> instantiation type.
    pub instantiations: Vec<(String, String)>,
    /// Value types.
    pub value_types: Vec<String>,
    /// Generator options.
    pub options: Vec<OptionInfo>,
    /// Supporting files as (template, output path).
    pub supporting_files: Vec<(String, String)>,
}

/// A generator option.
#[derive(Debug)]
pub struct OptionInfo {
    pub name: String,
    pub description: String,
    pub default: Option<String>,
}

fn heading(out: &mut dyn Output, text: &str) {
    out.preformatted(&format!("  {}", text));
    out.preformatted(&format!("  {}", "─".repeat(text.chars().count())));
}

fn table(out: &mut dyn Output, rows: &[(String, String)]) {
    let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in rows {
        out.preformatted(&format!("  {:<width$}  {}", key, value, width = width));
    }
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();

        // Header
        heading(out, &self.name);
        out.preformatted(&format!("  {}", self.help));
        out.newline();

        // Metadata
        out.preformatted(&format!("  Tag         {}", self.tag));
        out.preformatted(&format!("  Language    {}", self.language));
        out.preformatted(&format!("  Nullable    {}", self.nullable_suffix));
        if let Some(overlay) = &self.overlay {
            out.preformatted(&format!("  Overlay     {}", overlay.display()));
        }
        out.newline();

        heading(out, "Types");
        table(out, &self.types);
        out.newline();

        if !self.instantiations.is_empty() {
            heading(out, "Instantiation");
            table(out, &self.instantiations);
            out.newline();
        }

        if !self.value_types.is_empty() {
            heading(out, "Value types");
            out.preformatted(&format!("  {}", self.value_types.join(", ")));
            out.newline();
        }

        if !self.options.is_empty() {
            heading(out, "Options");
            let rows: Vec<(String, String)> = self
                .options
                .iter()
                .map(|opt| {
                    let default = opt
                        .default
                        .as_ref()
                        .map(|d| format!(" (default: {})", d))
                        .unwrap_or_default();
                    (opt.name.clone(), format!("{}{}", opt.description, default))
                })
                .collect();
            table(out, &rows);
            out.newline();
        }

        if !self.supporting_files.is_empty() {
            heading(out, "Supporting files");
            for (template, path) in &self.supporting_files {
                out.preformatted(&format!("  {} → {}", template, path));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_render_info() {
        let report = InfoReport {
            name: "csharp-activity".into(),
            help: "Generates a csharp activity client.".into(),
            tag: "client".into(),
            language: "csharp".into(),
            overlay: None,
            nullable_suffix: "?".into(),
            types: vec![
                pair("integer", "System.Int32?"),
                pair("string", "System.String"),
            ],
            instantiations: vec![pair("array", "System.Collections.Generic.List")],
            value_types: vec!["System.Int32".into(), "System.Guid".into()],
            options: vec![
                OptionInfo {
                    name: "projectName".into(),
                    description: "C# project name".into(),
                    default: None,
                },
                OptionInfo {
                    name: "supportNullable".into(),
                    description: "Declare optional value types as nullable".into(),
                    default: Some("true".into()),
                },
            ],
            supporting_files: vec![pair("IActivity.mustache", "IActivities.json")],
        };

        let expected = [
            "",
            "  csharp-activity",
            "  ───────────────",
            "  Generates a csharp activity client.",
            "",
            "  Tag         client",
            "  Language    csharp",
            "  Nullable    ?",
            "",
            "  Types",
            "  ─────",
            "  integer  System.Int32?",
            "  string   System.String",
            "",
            "  Instantiation",
            "  ─────────────",
            "  array  System.Collections.Generic.List",
            "",
            "  Value types",
            "  ───────────",
            "  System.Int32, System.Guid",
            "",
            "  Options",
            "  ───────",
            "  projectName      C# project name",
            "  supportNullable  Declare optional value types as nullable (default: true)",
            "",
            "  Supporting files",
            "  ────────────────",
            "  IActivity.mustache → IActivities.json",
        ];
        assert_eq!(BufferOutput::render(&report), expected.join("\n"));
    }

    #[test]
    fn test_render_overlay_path() {
        let report = InfoReport {
            name: "csharp".into(),
            help: "Generates a csharp client.".into(),
            tag: "client".into(),
            language: "csharp".into(),
            overlay: Some(PathBuf::from("typeloom.toml")),
            nullable_suffix: "?".into(),
            types: vec![pair("string", "string")],
            instantiations: vec![],
            value_types: vec![],
            options: vec![],
            supporting_files: vec![],
        };

        let rendered = BufferOutput::render(&report);
        assert!(rendered.contains("  Overlay     typeloom.toml"));
        assert!(!rendered.contains("Options"));
    }
}
