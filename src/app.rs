//! Wiring of the favorites collaborators for one CLI invocation.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use favorites_core::config::AppConfig;
use favorites_core::ids::command;
use favorites_core::result::AppResult;
use favorites_core::traits::command::CommandHandler;
use favorites_providers::{CommandRegistry, LocalContents, SettingsManager};
use favorites_service::{
    CellFavoritesService, FavoritesManager, register_cell_commands, register_commands,
    register_schema_defaults,
};

/// Everything a sub-command needs.
pub struct App {
    /// Loaded configuration.
    pub config: AppConfig,
    /// Command registry; favorites commands plus the file browser stand-in.
    pub commands: Arc<CommandRegistry>,
    /// The favorites store.
    pub manager: Arc<FavoritesManager>,
    /// Notebook cell favorites.
    pub cells: CellFavoritesService,
    /// Local contents probe.
    pub contents: Arc<LocalContents>,
}

impl App {
    /// Build the collaborators, register commands, and load the favorites.
    pub async fn build(config: AppConfig) -> AppResult<Self> {
        let settings = Arc::new(SettingsManager::new(&config.settings).await?);
        register_schema_defaults(settings.as_ref(), &config.favorites).await?;

        let contents = Arc::new(LocalContents::new(&config.contents.root));
        let commands = Arc::new(CommandRegistry::new());

        let manager = Arc::new(FavoritesManager::new(
            &config.favorites,
            settings.clone(),
            contents.clone(),
            commands.clone(),
        ));
        register_commands(&commands, &manager).await;
        commands
            .register(Arc::new(OpenPathCommand::new(contents.root().to_path_buf())))
            .await;

        manager.init().await?;

        let cells = CellFavoritesService::new(settings, config.favorites.schema_id.clone());
        register_cell_commands(&commands, &cells).await;
        info!(
            provider = %config.settings.provider,
            server_root = %config.favorites.server_root,
            "Favorites ready"
        );

        Ok(Self {
            config,
            commands,
            manager,
            cells,
            contents,
        })
    }
}

/// Stand-in for the file browser's open-path command: prints the local path.
#[derive(Debug)]
struct OpenPathCommand {
    root: PathBuf,
}

impl OpenPathCommand {
    fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl CommandHandler for OpenPathCommand {
    fn command_id(&self) -> &str {
        command::FILEBROWSER_OPEN_PATH
    }

    fn label(&self, _args: &Value) -> String {
        "Open Path".to_string()
    }

    async fn execute(&self, args: &Value) -> AppResult<Value> {
        let path = args.get("path").and_then(Value::as_str).unwrap_or("/");
        let local = self.root.join(path.trim_start_matches('/'));
        println!("{}", local.display());
        Ok(Value::String(local.display().to_string()))
    }
}
