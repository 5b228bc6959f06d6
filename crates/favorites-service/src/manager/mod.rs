//! The favorites store.

pub mod events;
pub mod service;

pub use events::FavoritesEvent;
pub use service::FavoritesManager;
