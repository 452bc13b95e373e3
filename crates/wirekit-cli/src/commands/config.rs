//! Implementation of the `wirekit config` subcommands.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config
                .get(&key)
                .ok_or(CliError::UnknownConfigKey { key })?;
            println!("{value}");
        }

        ConfigCommands::Set { key, value } => {
            let mut config = config;
            if !config.set(&key, &value) {
                // A known key with an unparseable value is user input, not a
                // key typo.
                if config.get(&key).is_some() {
                    return Err(CliError::InvalidInput {
                        message: format!("cannot set {key} to '{value}'"),
                    });
                }
                return Err(CliError::UnknownConfigKey { key });
            }
            config.save(None).map_err(|e| CliError::ConfigError {
                message: e.to_string(),
                source: None,
            })?;
            output.success(&format!("Set {key} = {value}"))?;
        }

        ConfigCommands::List => {
            let text = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                message: e.to_string(),
                source: None,
            })?;
            print!("{text}");
        }

        ConfigCommands::Path => {
            println!("{}", AppConfig::config_path().display());
        }
    }

    Ok(())
}
