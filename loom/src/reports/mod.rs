//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod info;
mod output;
mod targets;

pub use check::{CheckReport, TableStats};
pub use info::{InfoReport, OptionInfo};
pub use output::{Report, TerminalOutput};
pub use targets::{TargetSummary, TargetsReport};

#[cfg(test)]
pub use output::BufferOutput;
