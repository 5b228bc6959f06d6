//! Notebook cell favorite commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use serde_json::json;

use favorites_core::error::AppError;
use favorites_core::ids::command;
use favorites_core::traits::command::CommandExecutor;
use favorites_service::cells::read_notebook;

use crate::app::App;
use crate::output::{self, OutputFormat};

/// Arguments for cell commands
#[derive(Debug, Args)]
pub struct CellArgs {
    /// Cell subcommand
    #[command(subcommand)]
    pub command: CellCommand,
}

/// Cell subcommands
#[derive(Debug, Subcommand)]
pub enum CellCommand {
    /// List the favorite cells of a notebook
    List {
        /// Notebook file
        notebook: PathBuf,
    },
    /// Flip the favorite tag of a cell
    Toggle {
        /// Notebook file
        notebook: PathBuf,
        /// Zero-based cell index
        index: usize,
    },
    /// Resolve the active cell after moving to a requested index
    Next {
        /// Notebook file
        notebook: PathBuf,
        /// Requested cell index (clamped to the notebook)
        #[arg(allow_hyphen_values = true)]
        requested: i64,
        /// Currently active cell
        #[arg(long)]
        current: Option<usize>,
        /// Only land on favorite cells
        #[arg(long)]
        filter: bool,
    },
}

/// Favorite cell display row
#[derive(Debug, Serialize, Tabled)]
struct CellRow {
    /// Cell index
    index: usize,
    /// Cell type
    cell_type: String,
    /// First source line
    preview: String,
}

/// Execute cell commands
pub async fn execute(args: &CellArgs, app: &App, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        CellCommand::List { notebook } => {
            let nb = read_notebook(notebook).await?;
            let rows: Vec<CellRow> = app
                .cells
                .favorite_cells(&nb)?
                .into_iter()
                .map(|index| {
                    let cell = &nb["cells"][index];
                    CellRow {
                        index,
                        cell_type: cell["cell_type"].as_str().unwrap_or("code").to_string(),
                        preview: first_line(&cell["source"]),
                    }
                })
                .collect();
            output::print_list(&rows, format, "No favorite cells.");
        }
        CellCommand::Toggle { notebook, index } => {
            let favorite = app
                .commands
                .execute(
                    command::TOGGLE_CELL_FAVORITE,
                    json!({"notebook": notebook.display().to_string(), "index": index}),
                )
                .await?
                .as_bool()
                .unwrap_or(false);
            let state = if favorite { "marked" } else { "unmarked" };
            output::print_success(&format!("Cell {index} {state} as favorite"));
            if !app.cells.show_stars_on_all_cells().await? {
                println!("Stars are shown on favorite cells only.");
            }
        }
        CellCommand::Next {
            notebook,
            requested,
            current,
            filter,
        } => {
            let nb = read_notebook(notebook).await?;
            match app.cells.navigation(&nb, *filter)?.resolve(*current, *requested) {
                Some(index) => output::print_kv("Active cell", &index.to_string()),
                None => output::print_warning("No cell to activate"),
            }
        }
    }
    Ok(())
}

/// First line of a cell source, which nbformat stores as a string or a
/// list of lines.
fn first_line(source: &serde_json::Value) -> String {
    let text = match source {
        serde_json::Value::String(s) => s.as_str(),
        serde_json::Value::Array(lines) => lines.first().and_then(|l| l.as_str()).unwrap_or(""),
        _ => "",
    };
    text.lines().next().unwrap_or("").to_string()
}
