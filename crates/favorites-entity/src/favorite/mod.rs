//! Favorite entity and its presentation helpers.

pub mod model;
pub mod ordering;
pub mod path;

pub use model::{Favorite, FavoritesSettings};
pub use ordering::{compare_for_display, sort_for_display};
pub use path::{content_type_for, merge_paths, pinner_action_description, split_name};
