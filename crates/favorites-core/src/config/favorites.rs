//! Favorites store configuration.

use serde::{Deserialize, Serialize};

use crate::ids::setting;

/// Favorites store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesConfig {
    /// Identifier of the server root; favorites of other roots are invisible.
    #[serde(default = "default_server_root")]
    pub server_root: String,
    /// Settings schema id holding the favorites.
    #[serde(default = "default_schema_id")]
    pub schema_id: String,
    /// Schema default of the `showWidget` preference.
    #[serde(default = "default_true")]
    pub show_widget: bool,
    /// Whether to register [`defaults`](Self::defaults) as schema defaults.
    #[serde(default = "default_true")]
    pub seed_defaults: bool,
    /// Built-in favorites; they are hidden rather than deleted on removal.
    #[serde(default = "default_favorites")]
    pub defaults: Vec<DefaultFavoriteConfig>,
}

/// A seeded default favorite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultFavoriteConfig {
    /// Path relative to the server root (`""` is the root itself).
    pub path: String,
    /// Content type, `"directory"` for folders.
    #[serde(default = "default_content_type")]
    pub content_type: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Icon identifier.
    #[serde(default)]
    pub icon_label: Option<String>,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            server_root: default_server_root(),
            schema_id: default_schema_id(),
            show_widget: true,
            seed_defaults: true,
            defaults: default_favorites(),
        }
    }
}

fn default_server_root() -> String {
    "Jupyter Server Root".to_string()
}

fn default_schema_id() -> String {
    setting::FAVORITES_SCHEMA.to_string()
}

fn default_content_type() -> String {
    "directory".to_string()
}

fn default_true() -> bool {
    true
}

fn default_favorites() -> Vec<DefaultFavoriteConfig> {
    vec![DefaultFavoriteConfig {
        path: String::new(),
        content_type: default_content_type(),
        name: Some("Home".to_string()),
        icon_label: Some("ui-components:home".to_string()),
    }]
}
