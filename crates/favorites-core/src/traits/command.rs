//! Command execution traits.

use async_trait::async_trait;
use serde_json::Value;

use crate::result::AppResult;

/// Sink that executes commands by id.
///
/// The favorites store never navigates by itself; it asks the host to
/// run a command instead.
#[async_trait]
pub trait CommandExecutor: Send + Sync + 'static {
    /// Execute `command_id` with the given JSON arguments.
    async fn execute(&self, command_id: &str, args: Value) -> AppResult<Value>;
}

/// A single registered command.
#[async_trait]
pub trait CommandHandler: Send + Sync + 'static {
    /// The command id this handler responds to.
    fn command_id(&self) -> &str;

    /// Human-readable label for the given arguments.
    fn label(&self, args: &Value) -> String;

    /// Whether the command should be offered for the given arguments.
    fn is_visible(&self, _args: &Value) -> bool {
        true
    }

    /// Run the command.
    async fn execute(&self, args: &Value) -> AppResult<Value>;
}
