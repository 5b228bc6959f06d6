//! In-memory settings registry for tests and single-process hosts.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{Map, Value};
use tokio::sync::broadcast;
use tracing::debug;

use favorites_core::events::SettingsEvent;
use favorites_core::result::AppResult;
use favorites_core::traits::settings::{SettingValue, SettingsRegistry};

use super::{parse_document, read_key};

/// Stored state of one schema.
#[derive(Debug, Clone, Default)]
struct SchemaEntry {
    /// Schema defaults backing `composite`.
    defaults: Map<String, Value>,
    /// User data.
    user: Map<String, Value>,
}

/// In-memory settings registry.
#[derive(Debug)]
pub struct MemorySettingsRegistry {
    /// Schema id → stored state
    schemas: DashMap<String, SchemaEntry>,
    /// Change notifications
    events: broadcast::Sender<SettingsEvent>,
    /// Number of successful `set`/`upload` calls
    writes: AtomicU64,
}

impl MemorySettingsRegistry {
    /// Create an empty registry.
    pub fn new(buffer_size: usize) -> Self {
        let (events, _) = broadcast::channel(buffer_size.max(1));
        Self {
            schemas: DashMap::new(),
            events,
            writes: AtomicU64::new(0),
        }
    }

    /// Seed user data without emitting a notification, as if it had been
    /// persisted by an earlier session.
    pub fn with_user_data(self, schema_id: &str, user: Value) -> Self {
        if let Value::Object(map) = user {
            self.schemas.entry(schema_id.to_string()).or_default().user = map;
        }
        self
    }

    /// Snapshot of the stored user data of a schema.
    pub fn user_data(&self, schema_id: &str) -> Map<String, Value> {
        self.schemas
            .get(schema_id)
            .map(|entry| entry.user.clone())
            .unwrap_or_default()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    fn notify(&self, event: SettingsEvent) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}

impl Default for MemorySettingsRegistry {
    fn default() -> Self {
        Self::new(64)
    }
}

#[async_trait]
impl SettingsRegistry for MemorySettingsRegistry {
    async fn get(&self, schema_id: &str, key: &str) -> AppResult<SettingValue> {
        let entry = self.schemas.get(schema_id);
        Ok(read_key(
            entry.as_ref().map(|e| &e.user),
            entry.as_ref().map(|e| &e.defaults),
            key,
        ))
    }

    async fn set(&self, schema_id: &str, key: &str, value: Value) -> AppResult<()> {
        self.schemas
            .entry(schema_id.to_string())
            .or_default()
            .user
            .insert(key.to_string(), value);
        debug!(schema_id, key, "Setting written");
        self.notify(SettingsEvent::set(schema_id, key));
        Ok(())
    }

    async fn upload(&self, schema_id: &str, raw: &str) -> AppResult<()> {
        let user = parse_document(schema_id, raw)?;
        self.schemas.entry(schema_id.to_string()).or_default().user = user;
        debug!(schema_id, bytes = raw.len(), "Settings uploaded");
        self.notify(SettingsEvent::uploaded(schema_id));
        Ok(())
    }

    async fn register_defaults(
        &self,
        schema_id: &str,
        defaults: Map<String, Value>,
    ) -> AppResult<()> {
        self.schemas.entry(schema_id.to_string()).or_default().defaults = defaults;
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<SettingsEvent> {
        self.events.subscribe()
    }
}
