use clap::Args;
use eyre::Result;

use super::load_overlay;
use crate::{
    ops,
    registry::{self, TablesArgs},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {
    /// Target name (see `loom targets`)
    pub target: String,

    #[command(flatten)]
    pub tables: TablesArgs,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let overlay = load_overlay(&self.tables)?;
        let overlay = overlay.as_ref().map(|(path, file)| (path.as_path(), file));

        let report = ops::info(&registry::builtin(), &self.target, overlay)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
