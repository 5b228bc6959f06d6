//! Menu descriptor model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Title of the favorites submenu.
pub const FAVORITES_MENU_TITLE: &str = "Favorites";

/// One menu row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MenuEntry {
    /// A row that runs a command.
    Command {
        /// Command to execute.
        command_id: String,
        /// Label shown to the user.
        label: String,
        /// Arguments passed to the command.
        args: Value,
    },
    /// A visual divider.
    Separator,
}

impl MenuEntry {
    /// Build a command row.
    pub fn command(command_id: impl Into<String>, label: impl Into<String>, args: Value) -> Self {
        Self::Command {
            command_id: command_id.into(),
            label: label.into(),
            args,
        }
    }

    /// The command id, or `None` for separators.
    pub fn command_id(&self) -> Option<&str> {
        match self {
            Self::Command { command_id, .. } => Some(command_id),
            Self::Separator => None,
        }
    }

    /// The label, or `None` for separators.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Command { label, .. } => Some(label),
            Self::Separator => None,
        }
    }
}

/// Immutable snapshot of the favorites submenu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoritesMenu {
    /// Submenu title.
    pub title: String,
    /// Ordered rows.
    pub items: Vec<MenuEntry>,
}

impl FavoritesMenu {
    /// Create a menu with the given rows.
    pub fn new(items: Vec<MenuEntry>) -> Self {
        Self {
            title: FAVORITES_MENU_TITLE.to_string(),
            items,
        }
    }

    /// Number of rows, separators included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the menu has no rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for FavoritesMenu {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
