//! Configuration commands.

use clap::{Args, Subcommand};

use favorites_core::config::AppConfig;
use favorites_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration file
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => output::print_item(config, format),
        ConfigCommand::Validate => {
            if !matches!(config.settings.provider.as_str(), "file" | "memory") {
                let message = format!(
                    "Unknown settings provider '{}' in '{config_path}'",
                    config.settings.provider
                );
                output::print_error(&message);
                return Err(AppError::configuration(message));
            }
            if !config.favorites.schema_id.contains(':') {
                let message = format!(
                    "Schema id '{}' must look like '@scope/package:plugin'",
                    config.favorites.schema_id
                );
                output::print_error(&message);
                return Err(AppError::configuration(message));
            }

            output::print_success(&format!("Configuration '{config_path}' is valid"));
            output::print_kv("Server root", &config.favorites.server_root);
            output::print_kv("Settings", &config.settings.provider);
            output::print_kv("Settings directory", &config.settings.directory);
            output::print_kv("Contents root", &config.contents.root);
        }
    }
    Ok(())
}
