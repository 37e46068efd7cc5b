use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use ai_audit_core::{RawUsageData, UsageData};
use async_trait::async_trait;

use crate::error::StorageError;
use crate::traits::UsageStore;

/// Single JSON document on disk.
///
/// Every `load` reads the file afresh. `save` writes a uniquely named temp
/// file next to the store and renames it over the store, so concurrent
/// readers (and concurrent writers in other processes) see either the old or
/// a complete new document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io { path: self.path.clone(), source }
    }
}

#[async_trait]
impl UsageStore for JsonFileStore {
    async fn load(&self) -> Result<Option<RawUsageData>, StorageError> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "usage store absent");
                return Ok(None);
            },
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(StorageError::DataCorruption {
                    context: format!("{} is not valid UTF-8", self.path.display()),
                    source: Box::new(e),
                });
            },
            Err(e) => return Err(self.io_error(e)),
        };
        let raw = parse_document(&text, &self.path.display().to_string())?;
        tracing::debug!(
            path = %self.path.display(),
            sessions = raw.sessions.as_ref().map_or(0, Vec::len),
            "loaded usage store"
        );
        Ok(Some(raw))
    }

    async fn save(&self, data: &UsageData) -> Result<(), StorageError> {
        let body = serde_json::to_vec_pretty(data)?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&path, &body))
            .await
            .map_err(|e| self.io_error(std::io::Error::other(e)))?
            .map_err(|e| self.io_error(e))?;
        tracing::debug!(
            path = %self.path.display(),
            sessions = data.sessions.len(),
            "saved usage store"
        );
        Ok(())
    }
}

/// Writes `body` to a fresh temp file in the store's directory, then renames it into place.
fn write_atomic(path: &Path, body: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(body)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Parses store text, labelling failures with where the text came from.
pub(crate) fn parse_document(text: &str, origin: &str) -> Result<RawUsageData, StorageError> {
    serde_json::from_str(text).map_err(|e| StorageError::DataCorruption {
        context: format!("failed to parse usage store {origin}"),
        source: Box::new(e),
    })
}
