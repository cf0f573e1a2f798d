pub mod formats;

use flexi_logger::{Logger, LoggerHandle};

use crate::Error;
use crate::config::CliConfig;

/// Start the logger. Keep the returned handle alive until exit.
pub fn init(config: &CliConfig) -> Result<LoggerHandle, Error> {
    let handle = Logger::try_with_env_or_str(&config.log_spec)?
        .format(formats::cli_format)
        .log_to_stdout()
        .start()?;

    Ok(handle)
}
