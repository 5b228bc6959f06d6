//! Notifications emitted by the favorites store.

use serde::{Deserialize, Serialize};

use favorites_entity::Favorite;

/// Store change notification.
///
/// Every reload emits `FavoritesChanged` followed by `VisibilityChanged`.
/// The favorites payload is always the full visible list, never a delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum FavoritesEvent {
    /// The favorites list was replaced; carries the sorted visible favorites.
    FavoritesChanged(Vec<Favorite>),
    /// Whether the favorites panel should be shown.
    VisibilityChanged(bool),
}
