use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(name = "dtogen", version, about = "Generate DTO records from class schemas")]
pub struct Cli {
    /// Config file (defaults to ./dtogen.toml when present).
    #[arg(short, long, global = true, env = "DTOGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write every DTO to the output directory.
    Generate(GenerateArgs),

    /// Collect and render without writing; lists the DTOs that would be emitted.
    Check(SchemaArgs),

    /// Print the DTOs of one class to stdout.
    Print(PrintArgs),
}

#[derive(Debug, Default, Args)]
pub struct SchemaArgs {
    /// Schema file (.toml or .json); repeatable, overrides the config list.
    #[arg(short, long = "schema", value_name = "FILE")]
    pub schemas: Vec<PathBuf>,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Output directory, overrides the config.
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Remove the output directory first.
    #[arg(long)]
    pub clean: bool,
}

#[derive(Debug, Args)]
pub struct PrintArgs {
    /// Qualified or simple class name.
    pub class: String,

    #[command(flatten)]
    pub schema: SchemaArgs,
}
