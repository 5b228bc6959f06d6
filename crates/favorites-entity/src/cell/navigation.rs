//! Active-cell resolution under the favorites filter.

use serde_json::Value;

use super::model::is_favorite;

/// Favorite flags of a notebook's cells plus the filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellNavigation {
    favorites: Vec<bool>,
    filter_active: bool,
}

impl CellNavigation {
    /// Build from per-cell favorite flags.
    pub fn new(favorites: Vec<bool>, filter_active: bool) -> Self {
        Self {
            favorites,
            filter_active,
        }
    }

    /// Build from notebook cell JSON objects (reads each cell's `metadata`).
    pub fn from_cells(cells: &[Value], filter_active: bool) -> Self {
        let favorites = cells
            .iter()
            .map(|cell| {
                cell.get("metadata")
                    .and_then(Value::as_object)
                    .is_some_and(is_favorite)
            })
            .collect();
        Self::new(favorites, filter_active)
    }

    /// Indices of favorite cells.
    pub fn favorite_indices(&self) -> Vec<usize> {
        self.favorites
            .iter()
            .enumerate()
            .filter_map(|(i, fav)| fav.then_some(i))
            .collect()
    }

    /// Resolve the active cell index after a move request.
    ///
    /// `None` means "no active cell" and is only returned for an empty
    /// notebook, or when the filter finds no favorite and no cell was
    /// active before.
    pub fn resolve(&self, current: Option<usize>, requested: i64) -> Option<usize> {
        let last = self.favorites.len().checked_sub(1)?;
        let target = requested.clamp(0, last as i64) as usize;

        if !self.filter_active || self.favorites[target] {
            return Some(target);
        }

        let moving_down = current.is_none_or(|c| target > c);
        let nearest = if moving_down {
            (target + 1..=last).find(|&i| self.favorites[i])
        } else {
            (0..target).rev().find(|&i| self.favorites[i])
        };

        nearest.or(current)
    }
}
