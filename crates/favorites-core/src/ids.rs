//! Well-known identifiers shared by the store, the command handlers,
//! and the host.
//!
//! Centralising them prevents typos and makes it easy to find every
//! command and setting key the add-on uses.

/// Plugin identifier; every command id is prefixed with it.
pub const PLUGIN_ID: &str = "jupyterlab-favorites";

// ── Command ids ────────────────────────────────────────────

/// Command ids registered by the add-on.
pub mod command {
    /// Toggle the favorite state of the selected file browser item.
    pub const ADD_OR_REMOVE_FAVORITE: &str = "jupyterlab-favorites:add-or-remove-favorite";
    /// Remove a favorite by path.
    pub const REMOVE_FAVORITE: &str = "jupyterlab-favorites:remove-favorite";
    /// Assign a display name to a favorite.
    pub const RENAME_FAVORITE: &str = "jupyterlab-favorites:rename-favorite";
    /// Navigate the file browser to a favorite.
    pub const OPEN_FAVORITE: &str = "jupyterlab-favorites:open-favorite";
    /// Show or hide the favorites panel.
    pub const TOGGLE_FAVORITES_WIDGET: &str = "jupyterlab-favorites:toggle-favorites-widget";
    /// Un-hide every default favorite and drop user additions.
    pub const RESTORE_DEFAULTS: &str = "jupyterlab-favorites:restore-defaults";
    /// Hide every default favorite and drop user additions.
    pub const CLEAR_FAVORITES: &str = "jupyterlab-favorites:clear-favorites";
    /// Toggle the favorite tag on the active notebook cell.
    pub const TOGGLE_CELL_FAVORITE: &str = "jupyterlab-favorites:toggle-cell-favorite";

    /// Host command used to navigate the file browser.
    pub const FILEBROWSER_OPEN_PATH: &str = "filebrowser:open-path";
}

// ── Setting ids ────────────────────────────────────────────

/// Settings schema ids and keys.
pub mod setting {
    /// Schema id of the favorites plugin settings.
    pub const FAVORITES_SCHEMA: &str = "@jlab-enhanced/favorites:favorites";

    /// Key holding the favorites array.
    pub const FAVORITES_KEY: &str = "favorites";
    /// Key holding the panel visibility preference.
    pub const SHOW_WIDGET_KEY: &str = "showWidget";
    /// Key holding the "show stars on all cells" preference.
    pub const SHOW_STARS_ON_ALL_CELLS_KEY: &str = "showStarsOnAllCells";
}
