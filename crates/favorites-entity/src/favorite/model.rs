//! Favorite entity model.

use serde::{Deserialize, Serialize};

use super::path::{merge_paths, split_name};

/// Content type used for folders.
pub const DIRECTORY_CONTENT_TYPE: &str = "directory";

/// Icon used for folders when no icon label is set.
pub const FOLDER_ICON: &str = "ui-components:folder";

/// Icon used for everything else when no icon label is set.
pub const FILE_ICON: &str = "ui-components:file";

/// One pinned filesystem path.
///
/// Serialized with the camelCase keys of the persisted settings document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    /// Server root this favorite belongs to. Empty in legacy documents,
    /// where the loader assigns the current root.
    #[serde(default)]
    pub root: String,
    /// Path relative to the root.
    pub path: String,
    /// `"directory"` or a file content type; drives icon and sort group.
    pub content_type: String,
    /// Icon identifier override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_label: Option<String>,
    /// User-assigned display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Built-in favorite; hidden instead of deleted on removal.
    #[serde(default, skip_serializing_if = "is_false")]
    pub default: bool,
    /// Soft-delete flag.
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden: bool,
}

impl Favorite {
    /// Create a favorite for `path` under `root`.
    pub fn new(
        root: impl Into<String>,
        path: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            path: path.into(),
            content_type: content_type.into(),
            icon_label: None,
            name: None,
            default: false,
            hidden: false,
        }
    }

    /// Create a folder favorite, as pinned from the breadcrumbs.
    pub fn directory(root: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(root, path, DIRECTORY_CONTENT_TYPE).with_icon_label(FOLDER_ICON)
    }

    /// Set the icon label.
    pub fn with_icon_label(mut self, icon_label: impl Into<String>) -> Self {
        self.icon_label = Some(icon_label.into());
        self
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Mark as a built-in default favorite.
    pub fn as_default(mut self) -> Self {
        self.default = true;
        self
    }

    /// Whether this favorite points at a folder.
    pub fn is_directory(&self) -> bool {
        self.content_type == DIRECTORY_CONTENT_TYPE
    }

    /// Whether this favorite belongs to `root` and sits at `path`.
    pub fn matches(&self, root: &str, path: &str) -> bool {
        self.root == root && self.path == path
    }

    /// Last path segment.
    pub fn basename(&self) -> &str {
        split_name(&self.path).0
    }

    /// Name shown in the panel: the user name if set, else the basename.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.basename())
    }

    /// Secondary text shown after the name. Hidden once a display name is set.
    pub fn display_dirname(&self) -> String {
        if self.name.is_some() {
            return String::new();
        }
        format!("/{}", split_name(&self.path).1)
    }

    /// Root and path joined, used as tooltip and menu label.
    pub fn full_path(&self) -> String {
        merge_paths(&self.root, &self.path)
    }

    /// Icon to render, falling back on the content type.
    pub fn icon(&self) -> &str {
        match &self.icon_label {
            Some(label) => label,
            None if self.is_directory() => FOLDER_ICON,
            None => FILE_ICON,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// The persisted settings shape.
///
/// Both keys are optional so the same type describes full documents and
/// merge-style partial writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesSettings {
    /// Favorites of every root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorites: Option<Vec<Favorite>>,
    /// Whether the favorites panel should be shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_widget: Option<bool>,
}

impl FavoritesSettings {
    /// Settings carrying only the favorites array.
    pub fn favorites(favorites: Vec<Favorite>) -> Self {
        Self {
            favorites: Some(favorites),
            show_widget: None,
        }
    }

    /// Settings carrying only the panel preference.
    pub fn show_widget(show_widget: bool) -> Self {
        Self {
            favorites: None,
            show_widget: Some(show_widget),
        }
    }
}
