//! Config command - show the effective configuration

use crate::cli::ConfigCommands;
use crate::config::MarkrConfig;
use crate::Result;

/// Execute the config command
///
/// # Errors
/// Returns an error if the configuration cannot be rendered or the config
/// directory cannot be determined
pub fn execute(config: &MarkrConfig, command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => print!("{}", config.to_toml()?),
        ConfigCommands::Path => println!("{}", MarkrConfig::config_path()?.display()),
    }
    Ok(())
}
