//! Filesystem infrastructure — production `FileStore` over `tokio::fs`.

use std::path::Path;

use tracing::debug;

use crate::application::ports::FileStore;
use crate::domain::error::SysError;

/// Production file store. Each operation is an independent syscall; no
/// locking, no caching, and no coordination between concurrent calls.
/// Overwrite semantics for `write` are whatever the filesystem provides.
pub struct TokioFileStore;

impl FileStore for TokioFileStore {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }

    async fn size(&self, path: &Path) -> u64 {
        tokio::fs::metadata(path).await.map(|m| m.len()).unwrap_or(0)
    }

    async fn read(&self, path: &Path) -> Result<String, SysError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SysError::Read {
                path: path.to_path_buf(),
                source,
            })
    }

    async fn write(&self, path: &Path, contents: &str) -> Result<(), SysError> {
        debug!(path = %path.display(), bytes = contents.len(), "writing file");
        tokio::fs::write(path, contents)
            .await
            .map_err(|source| SysError::Write {
                path: path.to_path_buf(),
                source,
            })
    }

    async fn remove(&self, path: &Path) -> Result<(), SysError> {
        // Absent path is a successful no-op, not an error.
        if tokio::fs::metadata(path).await.is_err() {
            return Ok(());
        }
        debug!(path = %path.display(), "removing file");
        tokio::fs::remove_file(path)
            .await
            .map_err(|source| SysError::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}
