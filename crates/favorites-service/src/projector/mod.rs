//! Derived views of the store: panel visibility and the favorites menu.

pub mod menu;
pub mod visibility;

pub use menu::MenuProjector;
pub use visibility::VisibilityState;
