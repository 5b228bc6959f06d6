//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use tempfile::TempDir;

use favorites_core::config::FavoritesConfig;
use favorites_core::ids::command;
use favorites_core::result::AppResult;
use favorites_core::traits::command::CommandHandler;
use favorites_entity::Favorite;
use favorites_providers::settings::memory::MemorySettingsRegistry;
use favorites_providers::{CommandRegistry, LocalContents};
use favorites_service::{FavoritesManager, register_commands, register_schema_defaults};

/// Server root used by every test store.
pub const ROOT: &str = "/r";

/// Records the paths the file browser was asked to open.
#[derive(Default)]
pub struct FileBrowser {
    opened: Mutex<Vec<String>>,
}

impl FileBrowser {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandHandler for FileBrowser {
    fn command_id(&self) -> &str {
        command::FILEBROWSER_OPEN_PATH
    }

    fn label(&self, _args: &Value) -> String {
        "Open Path".to_string()
    }

    async fn execute(&self, args: &Value) -> AppResult<Value> {
        let path = args["path"].as_str().unwrap_or_default().to_string();
        self.opened.lock().unwrap().push(path);
        Ok(Value::Null)
    }
}

/// A fully wired favorites store over in-memory settings and a temporary
/// contents root.
pub struct TestApp {
    pub config: FavoritesConfig,
    pub settings: Arc<MemorySettingsRegistry>,
    pub commands: Arc<CommandRegistry>,
    pub browser: Arc<FileBrowser>,
    pub manager: Arc<FavoritesManager>,
    pub contents_dir: TempDir,
}

impl TestApp {
    /// Store seeded with `user` as the persisted settings document.
    pub async fn new(user: Value) -> Self {
        Self::build(user, false).await
    }

    /// Store whose schema defaults are registered from the default config.
    pub async fn with_schema_defaults(user: Value) -> Self {
        Self::build(user, true).await
    }

    async fn build(user: Value, schema_defaults: bool) -> Self {
        let config = FavoritesConfig {
            server_root: ROOT.to_string(),
            ..FavoritesConfig::default()
        };
        let settings =
            Arc::new(MemorySettingsRegistry::default().with_user_data(&config.schema_id, user));
        if schema_defaults {
            register_schema_defaults(settings.as_ref(), &config)
                .await
                .expect("Failed to register defaults");
        }

        let contents_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let contents = Arc::new(LocalContents::new(contents_dir.path()));
        let commands = Arc::new(CommandRegistry::new());

        let manager = Arc::new(FavoritesManager::new(
            &config,
            settings.clone(),
            contents,
            commands.clone(),
        ));
        register_commands(&commands, &manager).await;
        let browser = Arc::new(FileBrowser::default());
        commands.register(browser.clone()).await;

        manager.init().await.expect("Failed to init manager");

        Self {
            config,
            settings,
            commands,
            browser,
            manager,
            contents_dir,
        }
    }

    /// The persisted favorites array, every root included.
    pub fn stored_favorites(&self) -> Vec<Favorite> {
        let user = self.settings.user_data(&self.config.schema_id);
        match user.get("favorites") {
            Some(value) => serde_json::from_value(value.clone()).expect("Invalid stored favorites"),
            None => Vec::new(),
        }
    }

    /// The persisted user document.
    pub fn stored_document(&self) -> Value {
        Value::Object(self.settings.user_data(&self.config.schema_id))
    }

    /// Create a directory under the contents root.
    pub fn mkdir(&self, path: &str) {
        std::fs::create_dir_all(self.contents_dir.path().join(path)).expect("mkdir failed");
    }

    /// Paths of the visible favorites in display order.
    pub fn visible_paths(&self) -> Vec<String> {
        self.manager
            .visible_favorites(true)
            .into_iter()
            .map(|f| f.path)
            .collect()
    }
}
