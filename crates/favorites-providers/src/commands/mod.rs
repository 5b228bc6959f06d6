//! In-process command registry.

pub mod registry;

pub use registry::CommandRegistry;
