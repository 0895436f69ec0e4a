//! `rebind`: inspect module files and resolve deferred bindings.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = rebind_log::Config::from_env();
    if let Some(level) = &cli.log_level {
        config = config.with_level(level.clone());
    }
    if let Some(format) = cli.log_format {
        config = config.with_format(format);
    }
    let _log = rebind_log::init_with(config)?;

    match &cli.command {
        Command::Check(args) => commands::check::run(args),
        Command::Resolve(args) => commands::resolve::run(args),
    }
}
