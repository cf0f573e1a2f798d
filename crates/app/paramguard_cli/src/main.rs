// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use cli::{CheckArgs, Cli, Commands};
use config::CliConfig;
use paramguard_core::Arguments;

mod cli;
mod config;
mod loader;
mod logging;

fn main() -> Result<()> {
    let _logger = logging::init(&CliConfig::from_env())?;

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    let args = Cli::parse();

    match &args.command {
        Commands::Check(check_args) => check(check_args)?,
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn check(args: &CheckArgs) -> Result<()> {
    let args_from_stdin = args.args.as_deref().is_some_and(loader::is_stdin);
    if loader::is_stdin(&args.definition) && args_from_stdin {
        return Err(Error::Custom(
            "--definition and --args cannot both read from stdin".to_string(),
        ));
    }

    let definition = loader::load_definition(&args.definition)?;

    let mut arguments = match &args.args {
        Some(path) => loader::load_arguments(path)?,
        None => Arguments::new(),
    };
    loader::apply_overrides(&mut arguments, &args.overrides);

    definition.validate(&arguments)?;

    println!("ok");
    Ok(())
}
