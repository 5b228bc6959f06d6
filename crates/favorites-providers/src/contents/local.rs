//! Local filesystem contents probe.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use favorites_core::error::{AppError, ErrorKind};
use favorites_core::result::AppResult;
use favorites_core::traits::contents::{ContentsMetadata, ContentsProbe};

/// Probes paths below a local server root.
#[derive(Debug, Clone)]
pub struct LocalContents {
    /// Directory favorite paths are resolved against.
    root: PathBuf,
}

impl LocalContents {
    /// Create a probe rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The server root on disk.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a relative path within the root.
    fn resolve(&self, path: &str) -> AppResult<PathBuf> {
        let clean = Path::new(path.trim_start_matches('/'));
        let escapes = clean
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));
        if escapes {
            return Err(AppError::validation(format!(
                "Path escapes the server root: {path}"
            )));
        }
        Ok(self.root.join(clean))
    }
}

#[async_trait]
impl ContentsProbe for LocalContents {
    async fn get(&self, path: &str) -> AppResult<ContentsMetadata> {
        let full_path = self.resolve(path)?;
        let meta = fs::metadata(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Path not found: {path}"))
            } else {
                AppError::with_source(
                    ErrorKind::Contents,
                    format!("Failed to get metadata: {path}"),
                    e,
                )
            }
        })?;

        debug!(path, is_directory = meta.is_dir(), "Probed path");
        Ok(ContentsMetadata {
            path: path.to_string(),
            is_directory: meta.is_dir(),
            size_bytes: if meta.is_dir() { 0 } else { meta.len() },
        })
    }
}
