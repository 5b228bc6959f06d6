//! # favorites-service
//!
//! The favorites store and everything derived from it:
//!
//! - [`FavoritesManager`] owns the favorites list, persists mutations to
//!   the settings registry, and reloads on every settings change.
//! - [`MenuProjector`] and [`VisibilityState`] derive the favorites
//!   submenu and the "show the panel" flag from the store.
//! - [`commands`] adapts store operations to command handlers.
//!
//! Services follow constructor injection; collaborators are provided at
//! construction time via `Arc` references.

pub mod cells;
pub mod commands;
pub mod defaults;
pub mod manager;
pub mod projector;

#[cfg(test)]
mod testing;

pub use cells::CellFavoritesService;
pub use commands::{register_cell_commands, register_commands};
pub use defaults::{default_favorites, register_schema_defaults};
pub use manager::{FavoritesEvent, FavoritesManager};
pub use projector::{MenuProjector, VisibilityState};
