//! Core types for ai-audit
//!
//! Sessions, the advisory summary, lenient normalization of stored data and
//! the aggregation that recomputes summaries from sessions.

mod aggregate;
mod coerce;
mod constants;
mod env_config;
mod session;
mod summary;
mod usage_data;

pub use coerce::to_number_or_zero;
pub use constants::*;
pub use env_config::{AuditConfig, env_parse_with_default};
pub use session::{FileTouch, Session, SessionRecord, TokenUsage};
pub use summary::{ToolStats, UsageStats, UsageSummary};
pub use usage_data::{RawUsageData, UsageData};
