//! Settings change events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What kind of write produced a settings event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SettingsChange {
    /// A single key was written, other keys retained.
    Set {
        /// The written key.
        key: String,
    },
    /// The whole user document was replaced.
    Uploaded,
}

/// Notification that a schema's persisted value changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the write completed.
    pub timestamp: DateTime<Utc>,
    /// The schema whose value changed.
    pub schema_id: String,
    /// The kind of write.
    pub change: SettingsChange,
}

impl SettingsEvent {
    /// Create a new settings event.
    pub fn new(schema_id: impl Into<String>, change: SettingsChange) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            schema_id: schema_id.into(),
            change,
        }
    }

    /// Event for a single-key write.
    pub fn set(schema_id: impl Into<String>, key: impl Into<String>) -> Self {
        Self::new(schema_id, SettingsChange::Set { key: key.into() })
    }

    /// Event for a full-document upload.
    pub fn uploaded(schema_id: impl Into<String>) -> Self {
        Self::new(schema_id, SettingsChange::Uploaded)
    }
}
