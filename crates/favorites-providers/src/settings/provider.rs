//! Settings manager that dispatches to the configured registry backend.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::broadcast;
use tracing::info;

use favorites_core::config::settings::SettingsConfig;
use favorites_core::error::AppError;
use favorites_core::events::SettingsEvent;
use favorites_core::result::AppResult;
use favorites_core::traits::settings::{SettingValue, SettingsRegistry};

/// Settings manager that wraps the configured registry backend.
///
/// The backend is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    /// The inner registry.
    inner: Arc<dyn SettingsRegistry>,
}

impl SettingsManager {
    /// Create a settings manager from configuration.
    pub async fn new(config: &SettingsConfig) -> AppResult<Self> {
        let inner: Arc<dyn SettingsRegistry> = match config.provider.as_str() {
            #[cfg(feature = "file")]
            "file" => {
                info!(directory = %config.directory, "Initializing file settings registry");
                let registry = crate::settings::file::FileSettingsRegistry::new(
                    &config.directory,
                    config.notification_buffer,
                )
                .await?;
                Arc::new(registry)
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory settings registry");
                Arc::new(crate::settings::memory::MemorySettingsRegistry::new(
                    config.notification_buffer,
                ))
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown settings provider: '{other}'. Supported: file, memory"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a settings manager from an existing registry (for testing).
    pub fn from_registry(registry: Arc<dyn SettingsRegistry>) -> Self {
        Self { inner: registry }
    }

    /// Get a reference to the inner registry.
    pub fn registry(&self) -> &dyn SettingsRegistry {
        self.inner.as_ref()
    }
}

#[async_trait]
impl SettingsRegistry for SettingsManager {
    async fn get(&self, schema_id: &str, key: &str) -> AppResult<SettingValue> {
        self.inner.get(schema_id, key).await
    }

    async fn set(&self, schema_id: &str, key: &str, value: Value) -> AppResult<()> {
        self.inner.set(schema_id, key, value).await
    }

    async fn upload(&self, schema_id: &str, raw: &str) -> AppResult<()> {
        self.inner.upload(schema_id, raw).await
    }

    async fn register_defaults(
        &self,
        schema_id: &str,
        defaults: Map<String, Value>,
    ) -> AppResult<()> {
        self.inner.register_defaults(schema_id, defaults).await
    }

    fn subscribe(&self) -> broadcast::Receiver<SettingsEvent> {
        self.inner.subscribe()
    }
}
