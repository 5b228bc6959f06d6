//! Panel preference, menu, and status commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::json;
use tabled::Tabled;

use favorites_core::error::AppError;
use favorites_core::ids::command;
use favorites_core::traits::command::CommandExecutor;
use favorites_entity::{FavoritesSettings, MenuEntry};

use crate::app::App;
use crate::output::{self, OutputFormat};

/// Arguments for widget commands
#[derive(Debug, Args)]
pub struct WidgetArgs {
    /// Widget subcommand
    #[command(subcommand)]
    pub command: WidgetCommand,
}

/// Widget subcommands
#[derive(Debug, Subcommand)]
pub enum WidgetCommand {
    /// Show the favorites panel
    Show,
    /// Hide the favorites panel
    Hide,
    /// Flip the panel preference
    Toggle,
}

/// Menu display row
#[derive(Debug, Serialize, Tabled)]
struct MenuRow {
    /// Position in the menu
    #[tabled(rename = "#")]
    position: usize,
    /// Label, empty for separators
    label: String,
    /// Command id, empty for separators
    command: String,
    /// Whether the command is offered
    visible: bool,
}

/// Status summary
#[derive(Debug, Serialize)]
struct Status {
    server_root: String,
    schema_id: String,
    settings_provider: String,
    show_widget: bool,
    panel_visible: bool,
    favorites: usize,
    visible_favorites: usize,
}

/// Execute widget commands
pub async fn execute(args: &WidgetArgs, app: &App) -> Result<(), AppError> {
    match &args.command {
        WidgetCommand::Show => {
            app.manager
                .save_settings(FavoritesSettings::show_widget(true))
                .await?;
        }
        WidgetCommand::Hide => {
            app.manager
                .save_settings(FavoritesSettings::show_widget(false))
                .await?;
        }
        WidgetCommand::Toggle => {
            app.commands
                .execute(
                    command::TOGGLE_FAVORITES_WIDGET,
                    json!({ "showWidget": app.manager.show_widget() }),
                )
                .await?;
        }
    }

    let state = if app.manager.show_widget() { "on" } else { "off" };
    output::print_success(&format!("Favorites widget preference is {state}"));
    if app.manager.show_widget() && !app.manager.is_visible() {
        output::print_warning("The panel stays hidden until a favorite is added");
    }
    Ok(())
}

/// Print the favorites submenu.
pub async fn menu(app: &App, format: OutputFormat) -> Result<(), AppError> {
    let menu = app.manager.menu();
    let mut rows = Vec::with_capacity(menu.len());
    for (position, entry) in menu.items.iter().enumerate() {
        let row = match entry {
            MenuEntry::Command {
                command_id, args, ..
            } => MenuRow {
                position,
                label: app.commands.label(command_id, args).await?,
                command: command_id.clone(),
                visible: app.commands.is_visible(command_id, args).await?,
            },
            MenuEntry::Separator => MenuRow {
                position,
                label: "────".to_string(),
                command: String::new(),
                visible: true,
            },
        };
        rows.push(row);
    }

    if format == OutputFormat::Table {
        println!("{}", menu.title);
    }
    output::print_list(&rows, format, "Menu is empty.");
    Ok(())
}

/// Print a store summary.
pub fn status(app: &App, format: OutputFormat) -> Result<(), AppError> {
    let status = Status {
        server_root: app.manager.server_root().to_string(),
        schema_id: app.manager.schema_id().to_string(),
        settings_provider: app.config.settings.provider.clone(),
        show_widget: app.manager.show_widget(),
        panel_visible: app.manager.is_visible(),
        favorites: app.manager.favorites().len(),
        visible_favorites: app.manager.visible_favorites(false).len(),
    };

    match format {
        OutputFormat::Json => output::print_item(&status, format),
        OutputFormat::Table => {
            println!("Favorites status");
            output::print_kv("Server root", &status.server_root);
            output::print_kv("Schema", &status.schema_id);
            output::print_kv("Settings provider", &status.settings_provider);
            output::print_kv("Widget preference", &status.show_widget.to_string());
            output::print_kv("Panel visible", &status.panel_visible.to_string());
            output::print_kv("Favorites", &status.favorites.to_string());
            output::print_kv("Visible favorites", &status.visible_favorites.to_string());
        }
    }
    Ok(())
}
