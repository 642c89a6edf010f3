mod cli;
mod commands;
mod logging;
mod settings;

use crate::{
    cli::{Cli, Command},
    settings::Settings,
};
use clap::Parser;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    logging::init(cli.verbose, settings.log_level());

    match &cli.command {
        Command::Generate(args) => commands::generate(&settings, args),
        Command::Check(args) => commands::check(&settings, args),
        Command::Print(args) => commands::print(&settings, args),
    }
}
