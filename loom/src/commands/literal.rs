use clap::Args;
use eyre::Result;

use super::load_resolver;
use crate::registry::TablesArgs;

#[derive(Args)]
pub struct LiteralCommand {
    /// Target name (see `loom targets`)
    pub target: String,

    /// Raw enum value
    pub value: String,

    /// Resolved target type of the enum (e.g. "System.Decimal?")
    #[arg(value_name = "TYPE")]
    pub target_type: String,

    #[command(flatten)]
    pub tables: TablesArgs,
}

impl LiteralCommand {
    pub fn run(&self) -> Result<()> {
        let resolver = load_resolver(&self.target, &self.tables)?;
        println!(
            "{}",
            resolver.render_enum_literal(&self.value, &self.target_type)
        );

        Ok(())
    }
}
