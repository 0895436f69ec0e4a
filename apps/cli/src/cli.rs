//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rebind_log::Format;

/// Check module files and resolve deferred bindings.
#[derive(Debug, Parser)]
#[command(name = "rebind", version, about, long_about = None)]
pub struct Cli {
    /// Log filter directive, e.g. `debug` or `rebind_rules=trace`
    /// [default: `RUST_LOG`, else `info`]
    #[arg(long, global = true, env = "REBIND_LOG")]
    pub log_level: Option<String>,

    /// Log output format: pretty, compact or json
    #[arg(long, global = true, env = "REBIND_LOG_FORMAT")]
    pub log_format: Option<Format>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load a module file and print what it declares
    Check(CheckArgs),
    /// Resolve a requested type against a module's rules
    Resolve(ResolveArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Module file (.toml or .json)
    pub module: PathBuf,
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Module file (.toml or .json)
    pub module: PathBuf,

    /// Fully qualified name of the requested type
    pub type_name: String,

    /// Select a binding property value
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_selection)]
    pub selections: Vec<(String, String)>,

    /// Register a placeholder generator under NAME; it answers `<type>_Generated`
    #[arg(long = "stub-generator", value_name = "NAME")]
    pub stub_generators: Vec<String>,
}

fn parse_selection(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    if name.is_empty() {
        return Err(format!("missing property name in '{s}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn selections_split_on_first_equals() {
        assert_eq!(
            parse_selection("user.agent=ie9").unwrap(),
            ("user.agent".to_string(), "ie9".to_string())
        );
        assert_eq!(parse_selection("a=b=c").unwrap().1, "b=c");
        assert!(parse_selection("novalue").is_err());
        assert!(parse_selection("=x").is_err());
    }

    #[test]
    fn global_log_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "rebind",
            "resolve",
            "App.toml",
            "a.Api",
            "--set",
            "locale=en",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.log_format, Some(Format::Json));
        assert_eq!(cli.log_level, None);
        let Command::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.selections, vec![("locale".to_string(), "en".to_string())]);
    }
}
