//! Labels shown for favorites commands.

use favorites_entity::Favorite;

/// Label of the "restore defaults" command.
pub const RESTORE_DEFAULTS: &str = "Restore Defaults";

/// Label of the "clear favorites" command.
pub const CLEAR_FAVORITES: &str = "Clear Favorites";

/// Label of the "remove favorite" command.
pub const REMOVE_FAVORITE: &str = "Remove Favorite";

/// Label of the "rename favorite" command.
pub const RENAME_FAVORITE: &str = "Rename Favorite";

/// Label of the "toggle cell favorite" command.
pub const TOGGLE_CELL_FAVORITE: &str = "Toggle Cell Favorite";

/// Fallback label of the "open favorite" command.
pub const OPEN_FAVORITE: &str = "Open Favorite";

/// Menu label of a favorite: root and path joined.
pub fn open_favorite(favorite: &Favorite) -> String {
    favorite.full_path()
}

/// Label of the panel toggle given the current preference.
pub fn toggle_widget(show_widget: bool) -> &'static str {
    if show_widget {
        "Hide Favorites Widget"
    } else {
        "Show Favorites Widget"
    }
}
