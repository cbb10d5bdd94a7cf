//! Targets operation - registered target listing.

use typeloom_codegen::TargetRegistry;

use crate::reports::{TargetSummary, TargetsReport};

/// Execute the targets operation.
pub fn targets(registry: &TargetRegistry) -> TargetsReport {
    TargetsReport {
        targets: registry
            .targets()
            .map(|t| TargetSummary {
                name: t.name().to_string(),
                tag: t.tag().to_string(),
                help: t.help().to_string(),
            })
            .collect(),
    }
}
