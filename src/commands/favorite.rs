//! Favorite management commands.

use serde::Serialize;
use serde_json::json;
use tabled::Tabled;

use favorites_core::error::AppError;
use favorites_core::ids::command;
use favorites_core::traits::contents::ContentsProbe;
use favorites_core::traits::command::CommandExecutor;
use favorites_entity::Favorite;
use favorites_entity::favorite::content_type_for;

use crate::app::App;
use crate::output::{self, OutputFormat};

/// Favorite display row
#[derive(Debug, Serialize, Tabled)]
struct FavoriteRow {
    /// Display name
    name: String,
    /// Path relative to the root
    path: String,
    /// Content type
    #[tabled(rename = "type")]
    content_type: String,
    /// Icon identifier
    icon: String,
    /// Built-in favorite
    default: bool,
    /// Soft-deleted
    hidden: bool,
}

impl From<&Favorite> for FavoriteRow {
    fn from(f: &Favorite) -> Self {
        Self {
            name: f.display_name().to_string(),
            path: f.path.clone(),
            content_type: f.content_type.clone(),
            icon: f.icon().to_string(),
            default: f.default,
            hidden: f.hidden,
        }
    }
}

/// List favorites in display order.
pub fn list(app: &App, all: bool, format: OutputFormat) -> Result<(), AppError> {
    let favorites = if all {
        app.manager.favorites()
    } else {
        app.manager.visible_favorites(true)
    };
    let rows: Vec<FavoriteRow> = favorites.iter().map(FavoriteRow::from).collect();
    output::print_list(&rows, format, "No favorites.");
    Ok(())
}

/// Pin a path, inferring its content type from the filesystem if needed.
pub async fn add(
    app: &App,
    path: &str,
    content_type: Option<&str>,
    icon_label: Option<&str>,
) -> Result<(), AppError> {
    if app.manager.has_favorite(path) {
        output::print_warning(&format!("'{path}' is already a favorite"));
        return Ok(());
    }

    let content_type = match content_type {
        Some(ct) => ct.to_string(),
        None => {
            let meta = app.contents.get(path).await?;
            content_type_for(path, meta.is_directory).to_string()
        }
    };

    let mut favorite = Favorite::new(app.manager.server_root(), path, content_type);
    if let Some(icon_label) = icon_label {
        favorite = favorite.with_icon_label(icon_label);
    }

    app.manager.add_favorite(favorite).await?;
    output::print_success(&format!("Added '{path}'"));
    Ok(())
}

/// Unpin a path.
pub async fn remove(app: &App, path: &str) -> Result<(), AppError> {
    require_favorite(app, path)?;
    app.commands
        .execute(command::REMOVE_FAVORITE, json!({ "path": path }))
        .await?;
    output::print_success(&format!("Removed '{path}'"));
    Ok(())
}

/// Set a display name.
pub async fn rename(app: &App, path: &str, name: &str) -> Result<(), AppError> {
    require_favorite(app, path)?;
    app.commands
        .execute(
            command::RENAME_FAVORITE,
            json!({ "path": path, "displayName": name }),
        )
        .await?;
    output::print_success(&format!("Renamed '{path}' to '{name}'"));
    Ok(())
}

/// Pin or unpin a path.
pub async fn toggle(app: &App, path: &str) -> Result<(), AppError> {
    let args = json!({ "path": path });
    let action = app
        .commands
        .label(command::ADD_OR_REMOVE_FAVORITE, &args)
        .await?;
    app.commands
        .execute(command::ADD_OR_REMOVE_FAVORITE, args)
        .await?;
    output::print_success(&format!("{action}: '{path}'"));
    Ok(())
}

/// Open a favorite through the file browser command.
pub async fn open(app: &App, path: &str) -> Result<(), AppError> {
    let favorite = app
        .manager
        .visible_favorites(false)
        .into_iter()
        .find(|f| f.path == path)
        .ok_or_else(|| AppError::not_found(format!("'{path}' is not a favorite")))?;
    app.manager.handle_click(&favorite).await
}

/// Restore the default favorites.
pub async fn restore_defaults(app: &App) -> Result<(), AppError> {
    app.commands
        .execute(command::RESTORE_DEFAULTS, json!({}))
        .await?;
    output::print_success("Default favorites restored");
    Ok(())
}

/// Drop all favorites after confirmation.
pub async fn clear(app: &App, force: bool) -> Result<(), AppError> {
    if !force {
        let confirm = dialoguer::Confirm::new()
            .with_prompt("This will remove every favorite you added. Continue?")
            .default(false)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    app.commands
        .execute(command::CLEAR_FAVORITES, json!({}))
        .await?;
    output::print_success("Favorites cleared");
    Ok(())
}

/// Remove favorites of missing paths.
pub async fn prune(app: &App) -> Result<(), AppError> {
    let removed = app.manager.prune_invalid().await?;
    if removed == 0 {
        output::print_success("All favorites point to existing paths");
    } else {
        output::print_success(&format!("Removed {removed} favorite(s) of missing paths"));
    }
    Ok(())
}

fn require_favorite(app: &App, path: &str) -> Result<(), AppError> {
    if app.manager.has_favorite(path) {
        Ok(())
    } else {
        Err(AppError::not_found(format!("'{path}' is not a favorite")))
    }
}
