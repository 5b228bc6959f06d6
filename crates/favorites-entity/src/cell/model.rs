//! Favorite tag handling on cell metadata.

use serde_json::{Map, Value};

/// Tag marking a favorite cell.
pub const FAVORITE_TAG: &str = "favorite";

/// Metadata key holding the tag list.
const TAGS_KEY: &str = "tags";

/// Whether the cell metadata carries the favorite tag.
pub fn is_favorite(metadata: &Map<String, Value>) -> bool {
    metadata
        .get(TAGS_KEY)
        .and_then(Value::as_array)
        .is_some_and(|tags| tags.iter().any(|t| t.as_str() == Some(FAVORITE_TAG)))
}

/// Add or remove the favorite tag.
///
/// Removing the last tag deletes the `tags` key. A non-array `tags` value
/// is treated as empty.
pub fn set_favorite(metadata: &mut Map<String, Value>, favorite: bool) {
    let mut tags: Vec<Value> = metadata
        .get(TAGS_KEY)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    tags.retain(|t| t.as_str() != Some(FAVORITE_TAG));
    if favorite {
        tags.push(Value::String(FAVORITE_TAG.to_string()));
    }

    if tags.is_empty() {
        metadata.remove(TAGS_KEY);
    } else {
        metadata.insert(TAGS_KEY.to_string(), Value::Array(tags));
    }
}

/// Flip the favorite tag and return the new state.
pub fn toggle_favorite(metadata: &mut Map<String, Value>) -> bool {
    let favorite = !is_favorite(metadata);
    set_favorite(metadata, favorite);
    favorite
}
