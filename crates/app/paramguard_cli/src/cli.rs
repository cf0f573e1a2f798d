use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Check call arguments against an OpenAPI operation's required parameters.
#[derive(Parser, Debug)]
#[command(name = "paramguard", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate arguments against an operation definition.
    Check(CheckArgs),

    /// Print the version.
    Version,
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Operation definition file (JSON, or YAML for `.yaml`/`.yml`).
    /// Use `-` to read JSON from stdin; `--args` must then be a file.
    #[arg(long, short = 'd')]
    pub definition: PathBuf,

    /// Arguments file holding a single object. Use `-` to read JSON from stdin.
    #[arg(long, short = 'a')]
    pub args: Option<PathBuf>,

    /// Individual argument as KEY=VALUE. VALUE is parsed as JSON when possible.
    #[arg(long = "arg", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub overrides: Vec<(String, String)>,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got `{raw}`")),
    }
}
