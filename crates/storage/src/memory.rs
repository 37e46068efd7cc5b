use ai_audit_core::{RawUsageData, UsageData};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::json_file::parse_document;
use crate::traits::UsageStore;

/// In-memory store holding the document as JSON text.
///
/// Keeping text rather than typed data means fixtures go through the same
/// parsing as the file store, including corrupt documents.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RwLock<Option<String>>,
}

impl MemoryStore {
    /// A store that does not exist yet.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_json(text: impl Into<String>) -> Self {
        Self { document: RwLock::new(Some(text.into())) }
    }

    /// Current document text, `None` if nothing was ever stored.
    pub async fn snapshot(&self) -> Option<String> {
        self.document.read().await.clone()
    }
}

#[async_trait]
impl UsageStore for MemoryStore {
    async fn load(&self) -> Result<Option<RawUsageData>, StorageError> {
        let guard = self.document.read().await;
        guard.as_deref().map(|text| parse_document(text, "(memory)")).transpose()
    }

    async fn save(&self, data: &UsageData) -> Result<(), StorageError> {
        let text = serde_json::to_string(data)?;
        *self.document.write().await = Some(text);
        Ok(())
    }
}
