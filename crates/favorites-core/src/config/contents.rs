//! Contents probe configuration.

use serde::{Deserialize, Serialize};

/// Local filesystem contents probe settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentsConfig {
    /// Directory that favorite paths are resolved against.
    #[serde(default = "default_root")]
    pub root: String,
}

impl Default for ContentsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

fn default_root() -> String {
    ".".to_string()
}
