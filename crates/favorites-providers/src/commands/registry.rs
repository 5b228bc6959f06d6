//! Command registry: handlers registered by id, executed by id.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info};

use favorites_core::error::AppError;
use favorites_core::result::AppResult;
use favorites_core::traits::command::{CommandExecutor, CommandHandler};

/// Registry of command handlers keyed by command id.
pub struct CommandRegistry {
    /// Command id → handler
    handlers: RwLock<HashMap<String, Arc<dyn CommandHandler>>>,
}

impl CommandRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a handler, replacing any handler with the same id.
    pub async fn register(&self, handler: Arc<dyn CommandHandler>) {
        let command_id = handler.command_id().to_string();
        let replaced = self
            .handlers
            .write()
            .await
            .insert(command_id.clone(), handler)
            .is_some();

        info!(command_id = %command_id, replaced, "Command registered");
    }

    /// Removes a handler. Returns whether one was registered.
    pub async fn unregister(&self, command_id: &str) -> bool {
        self.handlers.write().await.remove(command_id).is_some()
    }

    /// Whether a handler is registered for `command_id`.
    pub async fn has_command(&self, command_id: &str) -> bool {
        self.handlers.read().await.contains_key(command_id)
    }

    /// All registered command ids, sorted.
    pub async fn command_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.handlers.read().await.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Label of a command for the given arguments.
    pub async fn label(&self, command_id: &str, args: &Value) -> AppResult<String> {
        Ok(self.handler(command_id).await?.label(args))
    }

    /// Whether a command should be offered for the given arguments.
    pub async fn is_visible(&self, command_id: &str, args: &Value) -> AppResult<bool> {
        Ok(self.handler(command_id).await?.is_visible(args))
    }

    async fn handler(&self, command_id: &str) -> AppResult<Arc<dyn CommandHandler>> {
        self.handlers
            .read()
            .await
            .get(command_id)
            .cloned()
            .ok_or_else(|| AppError::command(format!("Unknown command: {command_id}")))
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry").finish_non_exhaustive()
    }
}

#[async_trait]
impl CommandExecutor for CommandRegistry {
    async fn execute(&self, command_id: &str, args: Value) -> AppResult<Value> {
        // Clone the handler out so the lock is not held while it runs;
        // handlers may execute further commands.
        let handler = self.handler(command_id).await?;
        debug!(command_id, "Executing command");
        handler.execute(&args).await
    }
}
