use clap::Args;
use eyre::{Context, Result};
use typeloom_core::TypeDescriptor;

use super::load_resolver;
use crate::registry::TablesArgs;

#[derive(Args)]
pub struct DeclareCommand {
    /// Target name (see `loom targets`)
    pub target: String,

    /// Type descriptor (e.g. "array<map<integer>>", "ref:Pet")
    pub descriptor: String,

    /// Declare an optional field
    #[arg(long)]
    pub optional: bool,

    #[command(flatten)]
    pub tables: TablesArgs,
}

impl DeclareCommand {
    pub fn run(&self) -> Result<()> {
        let descriptor: TypeDescriptor = self
            .descriptor
            .parse()
            .wrap_err("Invalid type descriptor")?;
        let resolver = load_resolver(&self.target, &self.tables)?;

        let declaration = if self.optional {
            resolver.declare_optional(&descriptor)?
        } else {
            resolver.declare_type(&descriptor)?
        };
        println!("{}", declaration);

        let imports = resolver.imports(&descriptor)?;
        if !imports.is_empty() {
            tracing::info!(imports = %imports.join(", "), "declaration references models");
        }

        Ok(())
    }
}
