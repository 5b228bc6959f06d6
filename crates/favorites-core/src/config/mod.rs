//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field carries a serde default so that a missing
//! file yields a working configuration.

pub mod contents;
pub mod favorites;
pub mod logging;
pub mod settings;

use serde::{Deserialize, Serialize};

pub use self::contents::ContentsConfig;
pub use self::favorites::FavoritesConfig;
pub use self::logging::LoggingConfig;
pub use self::settings::SettingsConfig;

use crate::error::AppError;

/// Environment variable prefix for configuration overrides.
const ENV_PREFIX: &str = "FAVORITES";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Favorites store settings.
    #[serde(default)]
    pub favorites: FavoritesConfig,
    /// Settings registry backend.
    #[serde(default)]
    pub settings: SettingsConfig,
    /// Contents probe settings.
    #[serde(default)]
    pub contents: ContentsConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// The file is optional. Values are overlaid by environment variables
    /// prefixed with `FAVORITES_`, using `__` as the section separator
    /// (e.g. `FAVORITES__FAVORITES__SERVER_ROOT`).
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
