//! Contents probe trait used to validate favorite paths.

use async_trait::async_trait;

use crate::result::AppResult;

/// Metadata about a probed path (no content is read).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContentsMetadata {
    /// Path relative to the server root.
    pub path: String,
    /// Whether the path is a directory.
    pub is_directory: bool,
    /// Size in bytes (zero for directories).
    pub size_bytes: u64,
}

/// Probe for the existence of paths below the server root.
#[async_trait]
pub trait ContentsProbe: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch metadata for `path`.
    ///
    /// Must fail with an [`ErrorKind::NotFound`](crate::error::ErrorKind::NotFound)
    /// error when the path does not exist.
    async fn get(&self, path: &str) -> AppResult<ContentsMetadata>;
}
