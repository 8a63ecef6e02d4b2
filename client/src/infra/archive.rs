//! Archive infrastructure — reads a tar stream into memory.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::error::SysError;

/// One member of a tar archive with its decoded text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TarEntry {
    pub path: String,
    pub data: String,
}

/// Read every entry of the tar file at `path` into memory, in encounter
/// order. Directory entries appear with empty data, so consumers that
/// rely on directory-before-file ordering see them.
///
/// Content is decoded as UTF-8 text (lossy); archives are assumed to
/// hold text members.
///
/// # Errors
///
/// Returns [`SysError::Read`] carrying the path when the file cannot be
/// opened or the stream is not a readable tar archive.
pub async fn read_archive(path: &Path) -> Result<Vec<TarEntry>, SysError> {
    let path = path.to_path_buf();
    let task_path = path.clone();
    match tokio::task::spawn_blocking(move || read_blocking(&task_path)).await {
        Ok(result) => result,
        Err(join_error) => Err(SysError::Read {
            path,
            source: std::io::Error::other(join_error),
        }),
    }
}

fn read_blocking(path: &Path) -> Result<Vec<TarEntry>, SysError> {
    let file = std::fs::File::open(path).map_err(|e| read_err(path, e))?;
    let mut archive = tar::Archive::new(file);
    let mut entries = Vec::new();

    for entry in archive.entries().map_err(|e| read_err(path, e))? {
        let mut entry = entry.map_err(|e| read_err(path, e))?;
        let entry_path = entry
            .path()
            .map_err(|e| read_err(path, e))?
            .to_string_lossy()
            .into_owned();

        let mut bytes = Vec::new();
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| read_err(path, e))?;

        entries.push(TarEntry {
            path: entry_path,
            data: String::from_utf8_lossy(&bytes).into_owned(),
        });
    }

    debug!(path = %path.display(), count = entries.len(), "read tar archive");
    Ok(entries)
}

fn read_err(path: &Path, source: std::io::Error) -> SysError {
    SysError::Read {
        path: path.to_path_buf(),
        source,
    }
}
