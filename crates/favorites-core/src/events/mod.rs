//! Events emitted by settings collaborators.
//!
//! A settings registry broadcasts a [`SettingsEvent`] after every
//! successful write, whether it came from the favorites store itself or
//! from anyone else. Subscribers treat it as "reload this schema".

pub mod settings;

pub use settings::{SettingsChange, SettingsEvent};
