//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from table validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Target name.
    pub target: String,
    /// Table overlay that was applied.
    pub overlay: Option<PathBuf>,
    /// Table sizes when the tables are valid, the failure otherwise.
    pub result: Result<TableStats, String>,
}

/// Sizes of a built set of tables.
#[derive(Debug, Default)]
pub struct TableStats {
    pub kinds: usize,
    pub primitives: usize,
    pub classified: usize,
}

impl CheckReport {
    /// Whether the check passed.
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        let subject = match &self.overlay {
            Some(path) => format!("'{}' with {}", self.target, path.display()),
            None => format!("'{}'", self.target),
        };

        match &self.result {
            Ok(stats) => {
                out.preformatted(&format!("✓ tables for {} are valid", subject));
                out.newline();
                out.key_value_indented("kinds", &stats.kinds.to_string());
                out.key_value_indented("primitives", &stats.primitives.to_string());
                out.key_value_indented("classified", &stats.classified.to_string());
            }
            Err(reason) => {
                out.error(&format!("tables for {} are invalid: {}", subject, reason));
            }
        }
    }
}
