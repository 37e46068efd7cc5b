//! Storage backend trait abstraction
//!
//! Lets services run against the JSON file in production and an in-memory
//! fixture in tests.

use ai_audit_core::{RawUsageData, UsageData};
use async_trait::async_trait;

use crate::error::StorageError;

#[async_trait]
pub trait UsageStore: Send + Sync {
    /// Load the whole document. `Ok(None)` when the store does not exist yet.
    async fn load(&self) -> Result<Option<RawUsageData>, StorageError>;

    /// Replace the whole document.
    async fn save(&self, data: &UsageData) -> Result<(), StorageError>;
}
