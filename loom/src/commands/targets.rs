use clap::Args;
use eyre::Result;

use crate::{
    ops, registry,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TargetsCommand {}

impl TargetsCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::targets(&registry::builtin());
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
