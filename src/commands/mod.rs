//! CLI command definitions and dispatch.

pub mod cell;
pub mod config;
pub mod favorite;
pub mod widget;

use clap::{Parser, Subcommand};

use favorites_core::config::AppConfig;
use favorites_core::error::AppError;

use crate::app::App;
use crate::output::OutputFormat;

/// Favorites for the notebook file browser
#[derive(Debug, Parser)]
#[command(name = "favorites", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List favorites of the server root
    List {
        /// Include hidden favorites
        #[arg(short, long)]
        all: bool,
    },
    /// Pin a path
    Add {
        /// Path relative to the server root
        path: String,
        /// Content type; inferred from the filesystem when omitted
        #[arg(long)]
        content_type: Option<String>,
        /// Icon identifier
        #[arg(long)]
        icon_label: Option<String>,
    },
    /// Unpin a path (default favorites are hidden)
    Remove {
        /// Path relative to the server root
        path: String,
    },
    /// Set the display name of a favorite
    Rename {
        /// Path relative to the server root
        path: String,
        /// New display name
        name: String,
    },
    /// Pin a path, or unpin it if already pinned
    Toggle {
        /// Path relative to the server root
        path: String,
    },
    /// Open a favorite in the file browser
    Open {
        /// Path relative to the server root
        path: String,
    },
    /// Un-hide default favorites and drop all others
    RestoreDefaults,
    /// Hide default favorites and drop all others
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Remove favorites whose path no longer exists
    Prune,
    /// Favorites panel preference
    Widget(widget::WidgetArgs),
    /// Show the favorites menu
    Menu,
    /// Show store status
    Status,
    /// Configuration management
    Config(config::ConfigArgs),
    /// Notebook cell favorites
    Cell(cell::CellArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        if let Commands::Config(args) = &self.command {
            return config::execute(args, &config, &self.config, self.format);
        }

        let app = App::build(config).await?;
        match &self.command {
            Commands::List { all } => favorite::list(&app, *all, self.format),
            Commands::Add {
                path,
                content_type,
                icon_label,
            } => favorite::add(&app, path, content_type.as_deref(), icon_label.as_deref()).await,
            Commands::Remove { path } => favorite::remove(&app, path).await,
            Commands::Rename { path, name } => favorite::rename(&app, path, name).await,
            Commands::Toggle { path } => favorite::toggle(&app, path).await,
            Commands::Open { path } => favorite::open(&app, path).await,
            Commands::RestoreDefaults => favorite::restore_defaults(&app).await,
            Commands::Clear { force } => favorite::clear(&app, *force).await,
            Commands::Prune => favorite::prune(&app).await,
            Commands::Widget(args) => widget::execute(args, &app).await,
            Commands::Menu => widget::menu(&app, self.format).await,
            Commands::Status => widget::status(&app, self.format),
            Commands::Cell(args) => cell::execute(args, &app, self.format).await,
            // Handled above, before the store is built.
            Commands::Config(_) => Ok(()),
        }
    }
}
