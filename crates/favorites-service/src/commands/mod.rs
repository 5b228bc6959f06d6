//! Favorites commands.
//!
//! Each handler holds a weak reference to the [`FavoritesManager`] and
//! translates JSON arguments into a store operation.

pub mod handlers;
pub mod labels;

use std::sync::Arc;

use favorites_providers::CommandRegistry;

use crate::cells::CellFavoritesService;
use crate::manager::FavoritesManager;

pub use handlers::{
    AddOrRemoveFavoriteCommand, ClearFavoritesCommand, OpenFavoriteCommand,
    RemoveFavoriteCommand, RenameFavoriteCommand, RestoreDefaultsCommand,
    ToggleCellFavoriteCommand, ToggleWidgetCommand,
};

/// Register every favorites command on `registry`.
pub async fn register_commands(registry: &CommandRegistry, manager: &Arc<FavoritesManager>) {
    registry
        .register(Arc::new(OpenFavoriteCommand::new(manager)))
        .await;
    registry
        .register(Arc::new(ToggleWidgetCommand::new(manager)))
        .await;
    registry
        .register(Arc::new(RestoreDefaultsCommand::new(manager)))
        .await;
    registry
        .register(Arc::new(ClearFavoritesCommand::new(manager)))
        .await;
    registry
        .register(Arc::new(RemoveFavoriteCommand::new(manager)))
        .await;
    registry
        .register(Arc::new(RenameFavoriteCommand::new(manager)))
        .await;
    registry
        .register(Arc::new(AddOrRemoveFavoriteCommand::new(manager)))
        .await;
}

/// Register the notebook cell commands on `registry`.
pub async fn register_cell_commands(registry: &CommandRegistry, cells: &CellFavoritesService) {
    registry
        .register(Arc::new(ToggleCellFavoriteCommand::new(cells.clone())))
        .await;
}
