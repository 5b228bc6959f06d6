//! Notebook cell favorites.
//!
//! A cell is a favorite when its metadata `tags` array contains
//! [`FAVORITE_TAG`]. With the favorites filter active, moving the active
//! cell skips over non-favorite cells.

pub mod model;
pub mod navigation;

pub use model::{FAVORITE_TAG, is_favorite, set_favorite, toggle_favorite};
pub use navigation::CellNavigation;
