//! Collaborator traits defined in `favorites-core` and implemented by
//! `favorites-providers` (or by the host application).

pub mod command;
pub mod contents;
pub mod settings;

pub use command::{CommandExecutor, CommandHandler};
pub use contents::{ContentsMetadata, ContentsProbe};
pub use settings::{SettingValue, SettingsRegistry};
