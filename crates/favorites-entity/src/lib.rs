//! # favorites-entity
//!
//! Domain models for the favorites add-on: pinned paths, the persisted
//! settings shape, menu descriptors, and notebook cell favorites.

pub mod cell;
pub mod favorite;
pub mod menu;

pub use favorite::{Favorite, FavoritesSettings};
pub use menu::{FavoritesMenu, MenuEntry};
