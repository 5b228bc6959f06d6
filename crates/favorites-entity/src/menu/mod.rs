//! Menu descriptors rendered by the host's main menu.

pub mod model;

pub use model::{FavoritesMenu, MenuEntry};
