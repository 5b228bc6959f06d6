//! Path helpers for favorites.

use super::model::DIRECTORY_CONTENT_TYPE;

/// Split a `/`-separated path into `(basename, dirname)`.
///
/// A path without separators has an empty dirname.
pub fn split_name(path: &str) -> (&str, &str) {
    match path.rsplit_once('/') {
        Some((dir, name)) => (name, dir),
        None => (path, ""),
    }
}

/// Join a server root and a relative path with exactly one `/`.
pub fn merge_paths(root: &str, path: &str) -> String {
    let root = root.strip_suffix('/').unwrap_or(root);
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{root}/{path}")
}

/// Content type recorded when a path is pinned without one.
pub fn content_type_for(path: &str, is_directory: bool) -> &'static str {
    if is_directory {
        DIRECTORY_CONTENT_TYPE
    } else if path.ends_with(".ipynb") {
        "notebook"
    } else {
        "file"
    }
}

/// Label of the pin/unpin action.
pub fn pinner_action_description(show_remove: bool) -> &'static str {
    if show_remove {
        "Remove Favorite"
    } else {
        "Add Favorite"
    }
}
