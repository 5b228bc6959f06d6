//! Integration tests for the favorites store over file-backed settings.

use std::sync::Arc;

use serde_json::{Value, json};

use favorites_core::config::{
    AppConfig, ContentsConfig, FavoritesConfig, LoggingConfig, SettingsConfig,
};
use favorites_entity::{Favorite, FavoritesSettings};
use favorites_providers::{CommandRegistry, LocalContents, SettingsManager};
use favorites_service::{FavoritesManager, register_schema_defaults};

struct FileStore {
    _dir: tempfile::TempDir,
    settings_path: std::path::PathBuf,
    config: AppConfig,
}

impl FileStore {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.favorites.server_root = "/srv".to_string();
        config.settings = SettingsConfig {
            provider: "file".to_string(),
            directory: dir.path().join("settings").display().to_string(),
            notification_buffer: 16,
        };
        config.contents.root = dir.path().display().to_string();
        let settings_path = dir
            .path()
            .join("settings/@jlab-enhanced/favorites/favorites.jupyterlab-settings");
        Self {
            _dir: dir,
            settings_path,
            config,
        }
    }

    async fn open(&self) -> Arc<FavoritesManager> {
        let settings = Arc::new(SettingsManager::new(&self.config.settings).await.unwrap());
        register_schema_defaults(settings.as_ref(), &self.config.favorites)
            .await
            .unwrap();
        let manager = Arc::new(FavoritesManager::new(
            &self.config.favorites,
            settings,
            Arc::new(LocalContents::new(&self.config.contents.root)),
            Arc::new(CommandRegistry::new()),
        ));
        manager.init().await.unwrap();
        manager
    }

    fn document(&self) -> Value {
        let raw = std::fs::read_to_string(&self.settings_path).unwrap();
        serde_json::from_str(&raw).unwrap()
    }
}

#[tokio::test]
async fn test_fresh_install_shows_home() {
    let store = FileStore::new();
    let manager = store.open().await;

    let visible = manager.visible_favorites(true);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].display_name(), "Home");
    assert!(manager.is_visible());
    assert!(!store.settings_path.exists());
}

#[tokio::test]
async fn test_favorites_survive_restart() {
    let store = FileStore::new();
    {
        let manager = store.open().await;
        manager
            .add_favorite(Favorite::directory("/srv", "data"))
            .await
            .unwrap();
        manager.rename_favorite("data", "Data").await.unwrap();
    }

    let manager = store.open().await;
    assert!(manager.has_favorite("data"));
    assert_eq!(
        manager
            .favorites()
            .iter()
            .find(|f| f.path == "data")
            .and_then(|f| f.name.clone())
            .as_deref(),
        Some("Data")
    );

    let raw = std::fs::read_to_string(&store.settings_path).unwrap();
    assert!(raw.starts_with("{\n    \""));
}

#[tokio::test]
async fn test_merge_write_keeps_other_keys() {
    let store = FileStore::new();
    let manager = store.open().await;

    manager
        .save_settings(FavoritesSettings::show_widget(false))
        .await
        .unwrap();
    manager
        .add_favorite(Favorite::new("/srv", "a.txt", "file"))
        .await
        .unwrap();

    let doc = store.document();
    assert_eq!(doc["showWidget"], json!(false));
    // The seeded Home favorite is persisted together with the new one.
    assert_eq!(doc["favorites"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_overwrite_replaces_document() {
    let store = FileStore::new();
    let manager = store.open().await;
    manager
        .save_settings(FavoritesSettings::show_widget(false))
        .await
        .unwrap();

    manager
        .overwrite_settings(FavoritesSettings::favorites(vec![
            Favorite::directory("/srv", "only"),
        ]))
        .await
        .unwrap();

    let doc = store.document();
    assert!(doc.get("showWidget").is_none());
    assert_eq!(manager.visible_favorites(true)[0].path, "only");
    assert!(manager.show_widget());
}

#[tokio::test]
async fn test_hand_edited_legacy_document() {
    let store = FileStore::new();
    std::fs::create_dir_all(store.settings_path.parent().unwrap()).unwrap();
    std::fs::write(
        &store.settings_path,
        r#"{"favorites": [{"path": "legacy", "contentType": "directory"}], "showWidget": true}"#,
    )
    .unwrap();

    let manager = store.open().await;

    assert!(manager.has_favorite("legacy"));
    assert_eq!(manager.favorites()[0].root, "/srv");
}

#[tokio::test]
async fn test_config_assembled_from_section_types() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        favorites: FavoritesConfig {
            server_root: "/lab".to_string(),
            ..FavoritesConfig::default()
        },
        settings: SettingsConfig {
            provider: "memory".to_string(),
            ..SettingsConfig::default()
        },
        contents: ContentsConfig {
            root: dir.path().display().to_string(),
        },
        logging: LoggingConfig::default(),
    };

    let settings = Arc::new(SettingsManager::new(&config.settings).await.unwrap());
    let manager = Arc::new(FavoritesManager::new(
        &config.favorites,
        settings,
        Arc::new(LocalContents::new(&config.contents.root)),
        Arc::new(CommandRegistry::new()),
    ));
    manager.init().await.unwrap();
    manager
        .add_favorite(Favorite::directory("/lab", "notes"))
        .await
        .unwrap();

    assert_eq!(manager.server_root(), "/lab");
    assert!(manager.has_favorite("notes"));
}
