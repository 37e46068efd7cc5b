use std::sync::Arc;

use ai_audit_core::{
    FileTouch, MAX_PROMPT_CHARS, Session, SessionRecord, TokenUsage, UNKNOWN_MODEL, UNKNOWN_TOOL,
    UsageData, UsageSummary,
};
use ai_audit_storage::UsageStore;
use chrono::{SecondsFormat, Utc};
use tokio::sync::Mutex;

use crate::error::ServiceError;

/// Everything the caller knows about an AI-assisted change.
#[derive(Debug, Clone, Default)]
pub struct NewSession {
    pub tool: String,
    pub model: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub files: Vec<FileTouch>,
    pub commit: Option<String>,
    pub branch: Option<String>,
    pub user_id: String,
    pub prompt: Option<String>,
}

/// Write path: appends sessions and keeps the stored summary in step.
pub struct TrackingService {
    store: Arc<dyn UsageStore>,
    max_sessions: usize,
    write_lock: Mutex<()>,
}

impl TrackingService {
    /// `max_sessions` below 1 is raised to 1.
    #[must_use]
    pub fn new(store: Arc<dyn UsageStore>, max_sessions: usize) -> Self {
        Self { store, max_sessions: max_sessions.max(1), write_lock: Mutex::new(()) }
    }

    /// Records one session.
    ///
    /// Evicts the oldest sessions beyond the cap and recomputes the summary
    /// from what is retained. Retained sessions are written back exactly as
    /// they were stored. A corrupt store is left untouched and reported.
    pub async fn record(&self, new: NewSession) -> Result<Session, ServiceError> {
        let user_id = new.user_id.trim();
        if user_id.is_empty() {
            return Err(ServiceError::InvalidInput("user id must not be empty".to_owned()));
        }

        let session = Session {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            tool: label_or(&new.tool, UNKNOWN_TOOL),
            model: label_or(&new.model, UNKNOWN_MODEL),
            tokens: TokenUsage::new(new.input_tokens, new.output_tokens),
            files: new.files,
            commit: non_empty(new.commit),
            branch: non_empty(new.branch),
            user_id: user_id.to_owned(),
            prompt: non_empty(new.prompt).map(|p| truncate_chars(&p, MAX_PROMPT_CHARS)),
        };

        let _guard = self.write_lock.lock().await;
        let mut sessions = match self.store.load().await? {
            Some(raw) => raw.normalize().sessions,
            None => Vec::new(),
        };
        sessions.push(SessionRecord::from(session.clone()));
        let evicted = sessions.len().saturating_sub(self.max_sessions);
        sessions.drain(..evicted);

        let summary = UsageSummary::from_sessions(sessions.iter().map(SessionRecord::session));
        self.store.save(&UsageData { sessions, summary }).await?;

        tracing::info!(
            id = %session.id,
            tool = %session.tool,
            model = %session.model,
            tokens = session.tokens.total,
            files = session.files.len(),
            evicted,
            "recorded AI usage session"
        );
        Ok(session)
    }
}

fn label_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() { fallback.to_owned() } else { trimmed.to_owned() }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
