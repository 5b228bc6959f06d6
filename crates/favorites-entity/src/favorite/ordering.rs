//! Display ordering of favorites.
//!
//! Favorites are grouped by content type (plain string order, so
//! `"directory"` sorts before `"file"`), then ordered by basename with a
//! case-sensitive comparison.

use std::cmp::Ordering;

use super::model::Favorite;

/// Compare two favorites for display.
pub fn compare_for_display(a: &Favorite, b: &Favorite) -> Ordering {
    a.content_type
        .cmp(&b.content_type)
        .then_with(|| a.basename().cmp(b.basename()))
}

/// Sort favorites in place for display. Ties keep their stored order.
pub fn sort_for_display(favorites: &mut [Favorite]) {
    favorites.sort_by(compare_for_display);
}
