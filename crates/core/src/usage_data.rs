//! The stored document, in its lenient on-disk form and its normalized form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::session::SessionRecord;
use crate::summary::UsageSummary;

/// The store as read from disk.
///
/// Top-level keys may be missing or `null`. The summary is kept as an
/// untyped value and only interpreted by [`UsageSummary::normalize`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUsageData {
    #[serde(default)]
    pub sessions: Option<Vec<SessionRecord>>,
    #[serde(default)]
    pub summary: Option<Value>,
}

impl RawUsageData {
    /// Trusts the stored summary; does not reconcile it against sessions.
    #[must_use]
    pub fn normalize(self) -> UsageData {
        let summary = UsageSummary::normalize(self.summary.as_ref());
        UsageData { sessions: self.sessions.unwrap_or_default(), summary }
    }
}

/// Normalized store contents; also the shape of a usage report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageData {
    pub sessions: Vec<SessionRecord>,
    pub summary: UsageSummary,
}

impl From<UsageData> for RawUsageData {
    fn from(data: UsageData) -> Self {
        Self {
            sessions: Some(data.sessions),
            summary: serde_json::to_value(data.summary).ok(),
        }
    }
}
