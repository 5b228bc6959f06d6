//! # favorites-core
//!
//! Core crate for the favorites add-on. Contains the collaborator traits
//! (settings registry, contents probe, command execution), configuration
//! schemas, well-known identifiers, settings change events, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other favorites crates.

pub mod config;
pub mod error;
pub mod events;
pub mod ids;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
