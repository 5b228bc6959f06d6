//! Test doubles shared by the unit tests of this crate.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::broadcast;

use favorites_core::error::AppError;
use favorites_core::events::SettingsEvent;
use favorites_core::result::AppResult;
use favorites_core::traits::command::CommandExecutor;
use favorites_core::traits::contents::{ContentsMetadata, ContentsProbe};
use favorites_core::traits::settings::{SettingValue, SettingsRegistry};

/// Contents probe with a fixed set of existing and broken paths.
#[derive(Debug, Default)]
pub struct FakeContents {
    existing: Mutex<HashSet<String>>,
    failing: Mutex<HashSet<String>>,
}

impl FakeContents {
    pub fn add(&self, path: &str) {
        self.existing.lock().unwrap().insert(path.to_string());
    }

    pub fn fail(&self, path: &str) {
        self.failing.lock().unwrap().insert(path.to_string());
    }
}

#[async_trait]
impl ContentsProbe for FakeContents {
    async fn get(&self, path: &str) -> AppResult<ContentsMetadata> {
        if self.failing.lock().unwrap().contains(path) {
            return Err(AppError::contents(format!("probe failed: {path}")));
        }
        if self.existing.lock().unwrap().contains(path) {
            return Ok(ContentsMetadata {
                path: path.to_string(),
                is_directory: true,
                size_bytes: 0,
            });
        }
        Err(AppError::not_found(format!("No such path: {path}")))
    }
}

/// Executor recording every call.
#[derive(Debug, Default)]
pub struct RecordingCommands {
    calls: Mutex<Vec<(String, Value)>>,
}

impl RecordingCommands {
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandExecutor for RecordingCommands {
    async fn execute(&self, command_id: &str, args: Value) -> AppResult<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((command_id.to_string(), args));
        Ok(Value::Null)
    }
}

/// Registry whose reads are empty and whose writes always fail.
#[derive(Debug)]
pub struct FailingSettings {
    events: broadcast::Sender<SettingsEvent>,
}

impl Default for FailingSettings {
    fn default() -> Self {
        let (events, _) = broadcast::channel(4);
        Self { events }
    }
}

#[async_trait]
impl SettingsRegistry for FailingSettings {
    async fn get(&self, _schema_id: &str, _key: &str) -> AppResult<SettingValue> {
        Ok(SettingValue::default())
    }

    async fn set(&self, _schema_id: &str, _key: &str, _value: Value) -> AppResult<()> {
        Err(AppError::settings("settings unavailable"))
    }

    async fn upload(&self, _schema_id: &str, _raw: &str) -> AppResult<()> {
        Err(AppError::settings("settings unavailable"))
    }

    async fn register_defaults(
        &self,
        _schema_id: &str,
        _defaults: Map<String, Value>,
    ) -> AppResult<()> {
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<SettingsEvent> {
        self.events.subscribe()
    }
}
