//! Contents probes.

pub mod local;

pub use local::LocalContents;
