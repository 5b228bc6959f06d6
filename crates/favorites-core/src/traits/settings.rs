//! Settings registry trait for the persisted favorites state.

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::broadcast;

use crate::events::SettingsEvent;
use crate::result::AppResult;

/// A setting as read from the registry.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SettingValue {
    /// Effective value: the user value if present, else the schema default.
    pub composite: Option<Value>,
    /// The stored user value, if any.
    pub user: Option<Value>,
}

/// Key-value persistence service with change notifications.
///
/// Values are scoped by schema id. Every successful `set` or `upload`
/// broadcasts a [`SettingsEvent`] to all subscribers, including the
/// writer itself.
#[async_trait]
pub trait SettingsRegistry: Send + Sync + std::fmt::Debug + 'static {
    /// Read the effective value of one key.
    async fn get(&self, schema_id: &str, key: &str) -> AppResult<SettingValue>;

    /// Write one key, preserving every other key of the schema.
    async fn set(&self, schema_id: &str, key: &str, value: Value) -> AppResult<()>;

    /// Replace the schema's user data with the given raw JSON document.
    async fn upload(&self, schema_id: &str, raw: &str) -> AppResult<()>;

    /// Register the schema defaults that back `composite` when no user
    /// value is stored. Replaces earlier defaults for the schema.
    async fn register_defaults(
        &self,
        schema_id: &str,
        defaults: Map<String, Value>,
    ) -> AppResult<()>;

    /// Subscribe to change notifications for all schemas.
    fn subscribe(&self) -> broadcast::Receiver<SettingsEvent>;
}
