//! # favorites-providers
//!
//! Concrete collaborators for the favorites store:
//!
//! - **settings**: in-memory and JSON-file settings registries with schema
//!   defaults and change notification
//! - **contents**: local filesystem contents probe
//! - **commands**: in-process command registry
//!
//! The settings backend is selected at runtime based on configuration.

pub mod commands;
pub mod contents;
pub mod settings;

pub use commands::CommandRegistry;
pub use contents::LocalContents;
pub use settings::SettingsManager;
