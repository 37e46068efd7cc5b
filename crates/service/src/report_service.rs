use std::sync::Arc;

use ai_audit_core::UsageData;
use ai_audit_storage::UsageStore;

use crate::error::ServiceError;

/// What the report query returns: the retained sessions plus the normalized summary.
pub type UsageReport = UsageData;

/// Read-only query over the usage store.
pub struct ReportService {
    store: Arc<dyn UsageStore>,
}

impl ReportService {
    #[must_use]
    pub fn new(store: Arc<dyn UsageStore>) -> Self {
        Self { store }
    }

    /// Loads the store fresh, keeps the last `limit` sessions and normalizes the summary.
    ///
    /// An absent store yields an empty report. `None` or `Some(0)` means no limit.
    /// The stored summary is returned as-is (normalized), never recomputed, so it
    /// always describes the whole store even when sessions are truncated.
    pub async fn get_report(&self, limit: Option<usize>) -> Result<UsageReport, ServiceError> {
        let Some(raw) = self.store.load().await? else {
            tracing::debug!("usage store absent, returning empty report");
            return Ok(UsageReport::default());
        };
        let mut report = raw.normalize();
        let stored = report.sessions.len();
        keep_last(&mut report.sessions, limit);
        tracing::debug!(stored, returned = report.sessions.len(), ?limit, "built usage report");
        Ok(report)
    }
}

/// Drops all but the last `limit` items, preserving order.
pub fn keep_last<T>(items: &mut Vec<T>, limit: Option<usize>) {
    if let Some(limit) = limit.filter(|&n| n > 0) {
        let excess = items.len().saturating_sub(limit);
        items.drain(..excess);
    }
}
