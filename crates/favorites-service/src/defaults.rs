//! Schema defaults of the favorites settings.

use serde_json::{Map, Value};
use tracing::info;

use favorites_core::config::FavoritesConfig;
use favorites_core::ids::setting;
use favorites_core::result::AppResult;
use favorites_core::traits::settings::SettingsRegistry;
use favorites_entity::Favorite;

/// The configured default favorites, bound to the configured server root.
pub fn default_favorites(config: &FavoritesConfig) -> Vec<Favorite> {
    config
        .defaults
        .iter()
        .map(|d| Favorite {
            root: config.server_root.clone(),
            path: d.path.clone(),
            content_type: d.content_type.clone(),
            icon_label: d.icon_label.clone(),
            name: d.name.clone(),
            default: true,
            hidden: false,
        })
        .collect()
}

/// Register the favorites schema defaults.
///
/// They back every key the user document does not set, so a fresh install
/// shows the default favorites and a reset document falls back to them.
pub async fn register_schema_defaults(
    settings: &dyn SettingsRegistry,
    config: &FavoritesConfig,
) -> AppResult<()> {
    let favorites = if config.seed_defaults {
        default_favorites(config)
    } else {
        Vec::new()
    };

    let mut defaults = Map::new();
    defaults.insert(
        setting::FAVORITES_KEY.to_string(),
        serde_json::to_value(&favorites)?,
    );
    defaults.insert(
        setting::SHOW_WIDGET_KEY.to_string(),
        Value::Bool(config.show_widget),
    );
    defaults.insert(
        setting::SHOW_STARS_ON_ALL_CELLS_KEY.to_string(),
        Value::Bool(false),
    );

    settings.register_defaults(&config.schema_id, defaults).await?;
    info!(
        schema_id = %config.schema_id,
        defaults = favorites.len(),
        "Favorites schema defaults registered"
    );
    Ok(())
}
