//! Summary counters and their normalization from loosely-typed store data.
//!
//! The stored summary is an advisory cache. Normalization accepts whatever
//! the store holds (missing keys, numeric strings, wrong shapes) and turns it
//! into a fully-populated [`UsageSummary`] without ever failing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coerce::to_number_or_zero;

/// Per-tool counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolStats {
    pub sessions: u64,
    pub tokens: u64,
    pub files: u64,
}

/// Per-model and per-user counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    pub sessions: u64,
    pub tokens: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSummary {
    pub total_sessions: u64,
    pub total_tokens: u64,
    pub total_input_tokens: u64,
    pub total_output_tokens: u64,
    pub total_files: u64,
    pub by_tool: BTreeMap<String, ToolStats>,
    pub by_model: BTreeMap<String, UsageStats>,
    pub by_user: BTreeMap<String, UsageStats>,
}

impl UsageSummary {
    /// Normalizes a raw stored summary.
    ///
    /// `None` or a non-object value yields the all-zero summary.
    #[must_use]
    pub fn normalize(raw: Option<&Value>) -> Self {
        let Some(obj) = raw.and_then(Value::as_object) else {
            return Self::default();
        };
        Self {
            total_sessions: to_number_or_zero(obj.get("totalSessions")),
            total_tokens: to_number_or_zero(obj.get("totalTokens")),
            total_input_tokens: to_number_or_zero(obj.get("totalInputTokens")),
            total_output_tokens: to_number_or_zero(obj.get("totalOutputTokens")),
            total_files: to_number_or_zero(obj.get("totalFiles")),
            by_tool: normalize_grouping(obj.get("byTool"), |entry| ToolStats {
                sessions: to_number_or_zero(entry.and_then(|e| e.get("sessions"))),
                tokens: to_number_or_zero(entry.and_then(|e| e.get("tokens"))),
                files: to_number_or_zero(entry.and_then(|e| e.get("files"))),
            }),
            by_model: normalize_grouping(obj.get("byModel"), usage_stats),
            by_user: normalize_grouping(obj.get("byUser"), usage_stats),
        }
    }
}

fn usage_stats(entry: Option<&Map<String, Value>>) -> UsageStats {
    UsageStats {
        sessions: to_number_or_zero(entry.and_then(|e| e.get("sessions"))),
        tokens: to_number_or_zero(entry.and_then(|e| e.get("tokens"))),
    }
}

/// Absent or non-object groupings become empty; non-object entries become zero-filled.
fn normalize_grouping<T>(
    raw: Option<&Value>,
    entry: impl Fn(Option<&Map<String, Value>>) -> T,
) -> BTreeMap<String, T> {
    raw.and_then(Value::as_object)
        .map(|groups| {
            groups.iter().map(|(key, value)| (key.clone(), entry(value.as_object()))).collect()
        })
        .unwrap_or_default()
}
