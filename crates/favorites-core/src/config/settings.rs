//! Settings registry backend configuration.

use serde::{Deserialize, Serialize};

/// Which settings registry backs the store, and where it keeps data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConfig {
    /// Registry provider type: `"file"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Directory holding `*.jupyterlab-settings` files (file provider only).
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Capacity of the change-notification broadcast channel.
    #[serde(default = "default_notification_buffer")]
    pub notification_buffer: usize,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            directory: default_directory(),
            notification_buffer: default_notification_buffer(),
        }
    }
}

fn default_provider() -> String {
    "file".to_string()
}

fn default_directory() -> String {
    "data/user-settings".to_string()
}

fn default_notification_buffer() -> usize {
    64
}
