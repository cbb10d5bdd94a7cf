//! Targets command report data structures.

use super::output::{Output, Report};

/// Report data from listing targets.
#[derive(Debug)]
pub struct TargetsReport {
    /// Registered targets, in registration order.
    pub targets: Vec<TargetSummary>,
}

/// One registered target.
#[derive(Debug)]
pub struct TargetSummary {
    pub name: String,
    pub tag: String,
    pub help: String,
}

impl Report for TargetsReport {
    fn render(&self, out: &mut dyn Output) {
        if self.targets.is_empty() {
            out.preformatted("No targets registered");
            return;
        }

        let width = self.targets.iter().map(|t| t.name.len()).max().unwrap_or(0);

        out.section("Targets");
        for target in &self.targets {
            out.preformatted(&format!(
                "  {:<width$}  {:<6}  {}",
                target.name,
                target.tag,
                target.help,
                width = width
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_render_targets() {
        let report = TargetsReport {
            targets: vec![
                TargetSummary {
                    name: "csharp".into(),
                    tag: "client".into(),
                    help: "Generates a csharp client.".into(),
                },
                TargetSummary {
                    name: "csharp-activity".into(),
                    tag: "client".into(),
                    help: "Generates a csharp activity client.".into(),
                },
            ],
        };

        insta::assert_snapshot!(BufferOutput::render(&report), @r"
        Targets:
          csharp           client  Generates a csharp client.
          csharp-activity  client  Generates a csharp activity client.
        ");
    }

    #[test]
    fn test_render_no_targets() {
        let report = TargetsReport { targets: vec![] };
        assert_eq!(BufferOutput::render(&report), "No targets registered");
    }
}
