mod check;
mod completions;
mod declare;
mod info;
mod literal;
mod render;
mod resolve;
mod targets;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use declare::DeclareCommand;
use eyre::Result;
use info::InfoCommand;
use literal::LiteralCommand;
use render::RenderCommand;
use resolve::ResolveCommand;
use targets::TargetsCommand;
use typeloom_codegen::TypeResolver;
use typeloom_tables::TablesFile;

use crate::registry::{self, TablesArgs};

/// Extension trait for exiting on table file errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for typeloom_tables::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load the overlay selected on the command line, relative to the working directory.
fn load_overlay(args: &TablesArgs) -> Result<Option<(PathBuf, TablesFile)>> {
    let cwd = std::env::current_dir()?;
    Ok(args.load(&cwd).unwrap_or_exit())
}

/// Build the resolver for `target` with the selected overlay applied.
fn load_resolver(target: &str, args: &TablesArgs) -> Result<TypeResolver> {
    let overlay = load_overlay(args)?;
    let resolver = registry::builtin().resolver(target, overlay.as_ref().map(|(_, file)| file))?;
    Ok(resolver)
}

#[derive(Parser)]
#[command(name = "loom")]
#[command(version)]
#[command(about = "Resolve schema types to target-language declarations")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Targets(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Resolve(cmd) => cmd.run(),
            Commands::Declare(cmd) => cmd.run(),
            Commands::Literal(cmd) => cmd.run(),
            Commands::Render(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List available targets
    Targets(TargetsCommand),

    /// Show a target's tables and options
    Info(InfoCommand),

    /// Resolve an abstract scalar kind
    Resolve(ResolveCommand),

    /// Render the declaration of a type descriptor
    Declare(DeclareCommand),

    /// Render an enum member value as a literal
    Literal(LiteralCommand),

    /// Render models and enums from a JSON input file
    Render(RenderCommand),

    /// Validate a target's tables with the overlay applied
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
