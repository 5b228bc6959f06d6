//! Favorites submenu projection.

use serde_json::json;

use favorites_core::ids::command;
use favorites_entity::{Favorite, FavoritesMenu, MenuEntry};

use crate::commands::labels;

/// Builds the favorites submenu from the visible favorites.
///
/// Layout: one "open" row per visible favorite, a separator when there
/// is at least one, then the panel toggle, "Restore Defaults", and
/// "Clear Favorites".
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuProjector;

impl MenuProjector {
    /// Create a projector.
    pub fn new() -> Self {
        Self
    }

    /// Project the menu. `visible` must already be in display order.
    pub fn project(&self, visible: &[Favorite], show_widget: bool) -> FavoritesMenu {
        let mut items: Vec<MenuEntry> = visible
            .iter()
            .map(|favorite| {
                MenuEntry::command(
                    command::OPEN_FAVORITE,
                    labels::open_favorite(favorite),
                    json!({ "favorite": favorite }),
                )
            })
            .collect();

        if !items.is_empty() {
            items.push(MenuEntry::Separator);
        }

        items.push(MenuEntry::command(
            command::TOGGLE_FAVORITES_WIDGET,
            labels::toggle_widget(show_widget),
            json!({ "showWidget": show_widget }),
        ));
        items.push(MenuEntry::command(
            command::RESTORE_DEFAULTS,
            labels::RESTORE_DEFAULTS,
            json!({}),
        ));
        items.push(MenuEntry::command(
            command::CLEAR_FAVORITES,
            labels::CLEAR_FAVORITES,
            json!({}),
        ));

        FavoritesMenu::new(items)
    }
}
