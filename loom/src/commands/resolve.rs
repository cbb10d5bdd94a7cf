use clap::Args;
use eyre::Result;

use super::load_resolver;
use crate::registry::TablesArgs;

#[derive(Args)]
pub struct ResolveCommand {
    /// Target name (see `loom targets`)
    pub target: String,

    /// Abstract kind (e.g. integer, UUID)
    pub kind: String,

    #[command(flatten)]
    pub tables: TablesArgs,
}

impl ResolveCommand {
    pub fn run(&self) -> Result<()> {
        let resolver = load_resolver(&self.target, &self.tables)?;
        println!("{}", resolver.resolve_scalar(&self.kind)?);

        Ok(())
    }
}
