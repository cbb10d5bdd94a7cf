use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use clap::Args;
use eyre::{Context, Result};
use typeloom_codegen::{GenerationDriver, generation::GenerationInput};

use super::load_overlay;
use crate::registry::{self, TablesArgs};

#[derive(Args)]
pub struct RenderCommand {
    /// Target name (see `loom targets`)
    pub target: String,

    /// JSON file with models and enums (`-` reads stdin)
    pub input: PathBuf,

    /// Write JSON output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub tables: TablesArgs,
}

impl RenderCommand {
    pub fn run(&self) -> Result<()> {
        let content = if self.input.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            fs::read_to_string(&self.input)
                .wrap_err_with(|| format!("Failed to read {}", self.input.display()))?
        };
        let input: GenerationInput =
            serde_json::from_str(&content).wrap_err("Invalid generation input")?;

        let overlay = load_overlay(&self.tables)?;
        let registry = registry::builtin();
        let target = registry.get(&self.target)?;
        let resolver = registry.resolver(&self.target, overlay.as_ref().map(|(_, file)| file))?;

        let output = GenerationDriver::new(&resolver, target.naming()).run(&input)?;
        let json = serde_json::to_string_pretty(&output)?;

        match &self.output {
            Some(path) => {
                fs::write(path, json + "\n")
                    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                tracing::info!(
                    path = %path.display(),
                    models = output.models.len(),
                    enums = output.enums.len(),
                    "wrote rendered output"
                );
            }
            None => println!("{}", json),
        }

        Ok(())
    }
}
