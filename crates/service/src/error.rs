//! Typed error enum for the service layer.

use ai_audit_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Store could not be read or written (I/O failure or corrupt document).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether the store exists but could not be parsed.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_corruption())
    }
}
