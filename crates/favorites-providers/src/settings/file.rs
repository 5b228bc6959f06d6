//! JSON-file settings registry.
//!
//! Mirrors the user-settings layout of the notebook IDE: schema id
//! `@scope/pkg:plugin` is stored at
//! `<directory>/@scope/pkg/plugin.jupyterlab-settings`.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::{Mutex, broadcast};
use tracing::debug;

use favorites_core::error::{AppError, ErrorKind};
use favorites_core::events::SettingsEvent;
use favorites_core::result::AppResult;
use favorites_core::traits::settings::{SettingValue, SettingsRegistry};

use super::{parse_document, read_key, to_settings_json};

/// File extension of user settings documents.
const SETTINGS_EXTENSION: &str = "jupyterlab-settings";

/// Settings registry persisting each schema to its own JSON file.
#[derive(Debug)]
pub struct FileSettingsRegistry {
    /// Root of the user-settings tree.
    directory: PathBuf,
    /// Schema id → defaults
    defaults: DashMap<String, Map<String, Value>>,
    /// Change notifications
    events: broadcast::Sender<SettingsEvent>,
    /// Serializes read-modify-write cycles on the files.
    write_lock: Mutex<()>,
}

impl FileSettingsRegistry {
    /// Create a registry rooted at `directory`, creating it if needed.
    pub async fn new(directory: impl Into<PathBuf>, buffer_size: usize) -> AppResult<Self> {
        let directory = directory.into();
        fs::create_dir_all(&directory).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!(
                    "Failed to create settings directory: {}",
                    directory.display()
                ),
                e,
            )
        })?;
        let (events, _) = broadcast::channel(buffer_size.max(1));
        Ok(Self {
            directory,
            defaults: DashMap::new(),
            events,
            write_lock: Mutex::new(()),
        })
    }

    /// Location of the settings file for a schema.
    pub fn settings_path(&self, schema_id: &str) -> AppResult<PathBuf> {
        let (package, plugin) = schema_id.rsplit_once(':').ok_or_else(|| {
            AppError::validation(format!("Invalid schema id '{schema_id}': missing ':'"))
        })?;
        if package.is_empty() || plugin.is_empty() {
            return Err(AppError::validation(format!(
                "Invalid schema id '{schema_id}'"
            )));
        }

        let relative = Path::new(package).join(format!("{plugin}.{SETTINGS_EXTENSION}"));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if escapes {
            return Err(AppError::validation(format!(
                "Schema id '{schema_id}' escapes the settings directory"
            )));
        }
        Ok(self.directory.join(relative))
    }

    /// Read the stored user data of a schema; a missing file is empty.
    pub async fn user_data(&self, schema_id: &str) -> AppResult<Map<String, Value>> {
        let path = self.settings_path(schema_id)?;
        match fs::read_to_string(&path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(Map::new()),
            Ok(raw) => parse_document(schema_id, &raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Settings,
                format!("Failed to read settings: {}", path.display()),
                e,
            )),
        }
    }

    async fn write_raw(&self, path: &Path, raw: &str) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Settings,
                    format!("Failed to create directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        fs::write(path, raw).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Settings,
                format!("Failed to write settings: {}", path.display()),
                e,
            )
        })
    }

    fn notify(&self, event: SettingsEvent) {
        let _ = self.events.send(event);
    }
}

#[async_trait]
impl SettingsRegistry for FileSettingsRegistry {
    async fn get(&self, schema_id: &str, key: &str) -> AppResult<SettingValue> {
        let user = self.user_data(schema_id).await?;
        let defaults = self.defaults.get(schema_id);
        Ok(read_key(Some(&user), defaults.as_deref(), key))
    }

    async fn set(&self, schema_id: &str, key: &str, value: Value) -> AppResult<()> {
        let path = self.settings_path(schema_id)?;
        {
            let _guard = self.write_lock.lock().await;
            let mut user = self.user_data(schema_id).await?;
            user.insert(key.to_string(), value);
            let raw = to_settings_json(&user)?;
            self.write_raw(&path, &raw).await?;
        }

        debug!(schema_id, key, path = %path.display(), "Setting written");
        self.notify(SettingsEvent::set(schema_id, key));
        Ok(())
    }

    async fn upload(&self, schema_id: &str, raw: &str) -> AppResult<()> {
        parse_document(schema_id, raw)?;
        let path = self.settings_path(schema_id)?;
        {
            let _guard = self.write_lock.lock().await;
            self.write_raw(&path, raw).await?;
        }

        debug!(schema_id, path = %path.display(), "Settings uploaded");
        self.notify(SettingsEvent::uploaded(schema_id));
        Ok(())
    }

    async fn register_defaults(
        &self,
        schema_id: &str,
        defaults: Map<String, Value>,
    ) -> AppResult<()> {
        self.defaults.insert(schema_id.to_string(), defaults);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<SettingsEvent> {
        self.events.subscribe()
    }
}
