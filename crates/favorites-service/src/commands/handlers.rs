//! Command handlers delegating to the favorites store.

use std::path::Path;
use std::sync::{Arc, Weak};

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use favorites_core::error::AppError;
use favorites_core::ids::command;
use favorites_core::result::AppResult;
use favorites_core::traits::command::CommandHandler;
use favorites_entity::favorite::pinner_action_description;
use favorites_entity::{Favorite, FavoritesSettings};

use super::labels;
use crate::cells::CellFavoritesService;
use crate::manager::FavoritesManager;

/// Weak handle to the store; commands outlive neither the store nor the
/// registry that owns them.
#[derive(Debug, Clone)]
struct ManagerRef(Weak<FavoritesManager>);

impl ManagerRef {
    fn new(manager: &Arc<FavoritesManager>) -> Self {
        Self(Arc::downgrade(manager))
    }

    fn get(&self) -> AppResult<Arc<FavoritesManager>> {
        self.0
            .upgrade()
            .ok_or_else(|| AppError::internal("Favorites manager has been dropped"))
    }
}

/// Non-empty string argument.
fn string_arg<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn required_string_arg<'a>(args: &'a Value, key: &str) -> AppResult<&'a str> {
    args.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::validation(format!("Missing '{key}' argument")))
}

fn favorite_arg(args: &Value) -> AppResult<Favorite> {
    let raw = args
        .get("favorite")
        .cloned()
        .ok_or_else(|| AppError::validation("Missing 'favorite' argument"))?;
    serde_json::from_value(raw)
        .map_err(|e| AppError::validation(format!("Invalid 'favorite' argument: {e}")))
}

// ── Open ───────────────────────────────────────────────────────

/// Navigates the file browser to `args.favorite.path`.
#[derive(Debug)]
pub struct OpenFavoriteCommand {
    manager: ManagerRef,
}

impl OpenFavoriteCommand {
    pub fn new(manager: &Arc<FavoritesManager>) -> Self {
        Self {
            manager: ManagerRef::new(manager),
        }
    }
}

#[async_trait]
impl CommandHandler for OpenFavoriteCommand {
    fn command_id(&self) -> &str {
        command::OPEN_FAVORITE
    }

    fn label(&self, args: &Value) -> String {
        match favorite_arg(args) {
            Ok(favorite) => labels::open_favorite(&favorite),
            Err(_) => labels::OPEN_FAVORITE.to_string(),
        }
    }

    async fn execute(&self, args: &Value) -> AppResult<Value> {
        let favorite = favorite_arg(args)?;
        self.manager.get()?.open_path(&favorite.path).await
    }
}

// ── Panel toggle ───────────────────────────────────────────────

/// Flips the `showWidget` preference; `args.showWidget` is the current value.
#[derive(Debug)]
pub struct ToggleWidgetCommand {
    manager: ManagerRef,
}

impl ToggleWidgetCommand {
    pub fn new(manager: &Arc<FavoritesManager>) -> Self {
        Self {
            manager: ManagerRef::new(manager),
        }
    }
}

#[async_trait]
impl CommandHandler for ToggleWidgetCommand {
    fn command_id(&self) -> &str {
        command::TOGGLE_FAVORITES_WIDGET
    }

    fn label(&self, args: &Value) -> String {
        let show_widget = args
            .get("showWidget")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        labels::toggle_widget(show_widget).to_string()
    }

    fn is_visible(&self, _args: &Value) -> bool {
        self.manager
            .get()
            .is_ok_and(|m| !m.visible_favorites(false).is_empty())
    }

    async fn execute(&self, args: &Value) -> AppResult<Value> {
        let show_widget = args
            .get("showWidget")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        self.manager
            .get()?
            .save_settings(FavoritesSettings::show_widget(!show_widget))
            .await?;
        Ok(Value::Bool(!show_widget))
    }
}

// ── Reset ──────────────────────────────────────────────────────

/// Un-hides the defaults and drops user favorites.
#[derive(Debug)]
pub struct RestoreDefaultsCommand {
    manager: ManagerRef,
}

impl RestoreDefaultsCommand {
    pub fn new(manager: &Arc<FavoritesManager>) -> Self {
        Self {
            manager: ManagerRef::new(manager),
        }
    }
}

#[async_trait]
impl CommandHandler for RestoreDefaultsCommand {
    fn command_id(&self) -> &str {
        command::RESTORE_DEFAULTS
    }

    fn label(&self, _args: &Value) -> String {
        labels::RESTORE_DEFAULTS.to_string()
    }

    async fn execute(&self, _args: &Value) -> AppResult<Value> {
        self.manager.get()?.restore_defaults().await?;
        Ok(Value::Null)
    }
}

/// Hides the defaults and drops user favorites.
#[derive(Debug)]
pub struct ClearFavoritesCommand {
    manager: ManagerRef,
}

impl ClearFavoritesCommand {
    pub fn new(manager: &Arc<FavoritesManager>) -> Self {
        Self {
            manager: ManagerRef::new(manager),
        }
    }
}

#[async_trait]
impl CommandHandler for ClearFavoritesCommand {
    fn command_id(&self) -> &str {
        command::CLEAR_FAVORITES
    }

    fn label(&self, _args: &Value) -> String {
        labels::CLEAR_FAVORITES.to_string()
    }

    async fn execute(&self, _args: &Value) -> AppResult<Value> {
        self.manager.get()?.clear_favorites().await?;
        Ok(Value::Null)
    }
}

// ── Per-item ───────────────────────────────────────────────────

/// Removes the favorite at `args.path`.
#[derive(Debug)]
pub struct RemoveFavoriteCommand {
    manager: ManagerRef,
}

impl RemoveFavoriteCommand {
    pub fn new(manager: &Arc<FavoritesManager>) -> Self {
        Self {
            manager: ManagerRef::new(manager),
        }
    }
}

#[async_trait]
impl CommandHandler for RemoveFavoriteCommand {
    fn command_id(&self) -> &str {
        command::REMOVE_FAVORITE
    }

    fn label(&self, _args: &Value) -> String {
        labels::REMOVE_FAVORITE.to_string()
    }

    async fn execute(&self, args: &Value) -> AppResult<Value> {
        let path = required_string_arg(args, "path")?;
        self.manager.get()?.remove_favorite(path).await?;
        Ok(Value::Null)
    }
}

/// Names the favorite at `args.path` with `args.displayName`.
///
/// Does nothing when either argument is missing or empty, which is what a
/// cancelled name prompt produces.
#[derive(Debug)]
pub struct RenameFavoriteCommand {
    manager: ManagerRef,
}

impl RenameFavoriteCommand {
    pub fn new(manager: &Arc<FavoritesManager>) -> Self {
        Self {
            manager: ManagerRef::new(manager),
        }
    }
}

#[async_trait]
impl CommandHandler for RenameFavoriteCommand {
    fn command_id(&self) -> &str {
        command::RENAME_FAVORITE
    }

    fn label(&self, _args: &Value) -> String {
        labels::RENAME_FAVORITE.to_string()
    }

    async fn execute(&self, args: &Value) -> AppResult<Value> {
        let (Some(path), Some(display_name)) =
            (string_arg(args, "path"), string_arg(args, "displayName"))
        else {
            debug!("Rename skipped: missing path or name");
            return Ok(Value::Null);
        };
        self.manager
            .get()?
            .rename_favorite(path, display_name)
            .await?;
        Ok(Value::Null)
    }
}

/// Pins `args.path`, or unpins it when it is already a favorite.
///
/// `args.contentType` and `args.iconLabel` describe the item; without them
/// it is pinned as a folder.
#[derive(Debug)]
pub struct AddOrRemoveFavoriteCommand {
    manager: ManagerRef,
}

impl AddOrRemoveFavoriteCommand {
    pub fn new(manager: &Arc<FavoritesManager>) -> Self {
        Self {
            manager: ManagerRef::new(manager),
        }
    }
}

#[async_trait]
impl CommandHandler for AddOrRemoveFavoriteCommand {
    fn command_id(&self) -> &str {
        command::ADD_OR_REMOVE_FAVORITE
    }

    fn label(&self, args: &Value) -> String {
        let pinned = match (self.manager.get(), args.get("path").and_then(Value::as_str)) {
            (Ok(manager), Some(path)) => manager.has_favorite(path),
            _ => false,
        };
        pinner_action_description(pinned).to_string()
    }

    async fn execute(&self, args: &Value) -> AppResult<Value> {
        let manager = self.manager.get()?;
        let path = required_string_arg(args, "path")?;

        if manager.has_favorite(path) {
            manager.remove_favorite(path).await?;
            return Ok(Value::Bool(false));
        }

        let favorite = match string_arg(args, "contentType") {
            Some(content_type) => {
                let favorite = Favorite::new(manager.server_root(), path, content_type);
                match string_arg(args, "iconLabel") {
                    Some(icon_label) => favorite.with_icon_label(icon_label),
                    None => favorite,
                }
            }
            None => Favorite::directory(manager.server_root(), path),
        };
        manager.add_favorite(favorite).await?;
        Ok(Value::Bool(true))
    }
}

// ── Cells ──────────────────────────────────────────────────────

/// Flips the favorite tag of cell `args.index` in the notebook file at
/// `args.notebook`; returns the new state.
#[derive(Debug)]
pub struct ToggleCellFavoriteCommand {
    cells: CellFavoritesService,
}

impl ToggleCellFavoriteCommand {
    pub fn new(cells: CellFavoritesService) -> Self {
        Self { cells }
    }
}

#[async_trait]
impl CommandHandler for ToggleCellFavoriteCommand {
    fn command_id(&self) -> &str {
        command::TOGGLE_CELL_FAVORITE
    }

    fn label(&self, _args: &Value) -> String {
        labels::TOGGLE_CELL_FAVORITE.to_string()
    }

    async fn execute(&self, args: &Value) -> AppResult<Value> {
        let notebook = required_string_arg(args, "notebook")?;
        let index = args
            .get("index")
            .and_then(Value::as_u64)
            .ok_or_else(|| AppError::validation("Missing 'index' argument"))?;
        let favorite = self
            .cells
            .toggle_cell_in_file(Path::new(notebook), index as usize)
            .await?;
        Ok(Value::Bool(favorite))
    }
}
