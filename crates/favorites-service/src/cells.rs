//! Favorite cells of notebook documents.
//!
//! Notebooks are handled as nbformat JSON; only `cells[*].metadata.tags`
//! is read or written.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use tokio::fs;
use tracing::{debug, info};

use favorites_core::error::{AppError, ErrorKind};
use favorites_core::ids::setting;
use favorites_core::result::AppResult;
use favorites_core::traits::settings::SettingsRegistry;
use favorites_entity::cell::{CellNavigation, is_favorite, toggle_favorite};

/// Reads and toggles favorite cells.
#[derive(Debug, Clone)]
pub struct CellFavoritesService {
    /// Settings holding `showStarsOnAllCells`.
    settings: Arc<dyn SettingsRegistry>,
    /// Favorites schema id.
    schema_id: String,
}

impl CellFavoritesService {
    /// Creates a new cell favorites service.
    pub fn new(settings: Arc<dyn SettingsRegistry>, schema_id: impl Into<String>) -> Self {
        Self {
            settings,
            schema_id: schema_id.into(),
        }
    }

    /// Whether the star is shown on every cell instead of favorites only.
    pub async fn show_stars_on_all_cells(&self) -> AppResult<bool> {
        let value = self
            .settings
            .get(&self.schema_id, setting::SHOW_STARS_ON_ALL_CELLS_KEY)
            .await?;
        Ok(value
            .composite
            .as_ref()
            .and_then(Value::as_bool)
            .unwrap_or(false))
    }

    /// Indices of the favorite cells of `notebook`.
    pub fn favorite_cells(&self, notebook: &Value) -> AppResult<Vec<usize>> {
        Ok(self.navigation(notebook, false)?.favorite_indices())
    }

    /// Navigation over the cells of `notebook`.
    pub fn navigation(&self, notebook: &Value, filter_active: bool) -> AppResult<CellNavigation> {
        Ok(CellNavigation::from_cells(cells(notebook)?, filter_active))
    }

    /// Flip the favorite tag of cell `index`; returns the new state.
    pub fn toggle_cell(&self, notebook: &mut Value, index: usize) -> AppResult<bool> {
        let cells = notebook
            .get_mut("cells")
            .and_then(Value::as_array_mut)
            .ok_or_else(|| AppError::validation("Notebook has no 'cells' array"))?;
        let count = cells.len();
        let cell = cells
            .get_mut(index)
            .and_then(Value::as_object_mut)
            .ok_or_else(|| {
                AppError::not_found(format!("Cell {index} not found ({count} cells)"))
            })?;

        let metadata = cell
            .entry("metadata")
            .or_insert_with(|| Value::Object(Default::default()));
        let metadata = metadata
            .as_object_mut()
            .ok_or_else(|| AppError::validation(format!("Cell {index} metadata is not an object")))?;

        let favorite = toggle_favorite(metadata);
        debug!(index, favorite, "Cell favorite toggled");
        Ok(favorite)
    }

    /// Toggle a cell of the notebook stored at `path` and write it back.
    pub async fn toggle_cell_in_file(&self, path: &Path, index: usize) -> AppResult<bool> {
        let mut notebook = read_notebook(path).await?;
        let favorite = self.toggle_cell(&mut notebook, index)?;
        write_notebook(path, &notebook).await?;
        info!(path = %path.display(), index, favorite, "Notebook cell favorite saved");
        Ok(favorite)
    }
}

fn cells(notebook: &Value) -> AppResult<&[Value]> {
    notebook
        .get("cells")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| AppError::validation("Notebook has no 'cells' array"))
}

/// Whether cell `index` of `notebook` is a favorite.
pub fn is_favorite_cell(notebook: &Value, index: usize) -> bool {
    notebook
        .get("cells")
        .and_then(|c| c.get(index))
        .and_then(|c| c.get("metadata"))
        .and_then(Value::as_object)
        .is_some_and(is_favorite)
}

/// Read a notebook document.
pub async fn read_notebook(path: &Path) -> AppResult<Value> {
    let raw = fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::not_found(format!("Notebook not found: {}", path.display()))
        } else {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read notebook: {}", path.display()),
                e,
            )
        }
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::validation(format!("Invalid notebook {}: {e}", path.display()))
    })
}

/// Serialize a notebook the way nbformat writes it: one-space indent and
/// a trailing newline.
pub fn to_notebook_json(notebook: &Value) -> AppResult<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    notebook.serialize(&mut ser)?;
    buf.push(b'\n');
    String::from_utf8(buf).map_err(|e| AppError::internal(format!("Notebook is not UTF-8: {e}")))
}

/// Write a notebook document.
pub async fn write_notebook(path: &Path, notebook: &Value) -> AppResult<()> {
    let raw = to_notebook_json(notebook)?;
    fs::write(path, raw).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Storage,
            format!("Failed to write notebook: {}", path.display()),
            e,
        )
    })
}
