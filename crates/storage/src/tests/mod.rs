//! Test utilities and module declarations for storage tests.

use ai_audit_core::{FileTouch, Session, SessionRecord, TokenUsage, UsageData, UsageSummary};
use tempfile::TempDir;

use crate::JsonFileStore;

pub fn create_test_store() -> (JsonFileStore, TempDir) {
    let temp_dir = TempDir::new().unwrap_or_else(|e| panic!("tempdir: {e}"));
    let store = JsonFileStore::new(temp_dir.path().join("audit").join("usage-data.json"));
    (store, temp_dir)
}

pub fn create_test_session(id: &str) -> Session {
    Session {
        id: id.to_owned(),
        timestamp: "2025-03-01T12:00:00.000Z".to_owned(),
        tool: "Cursor".to_owned(),
        model: "gpt-4o".to_owned(),
        tokens: TokenUsage::new(20, 25),
        files: vec![FileTouch::unmeasured("src/main.rs")],
        commit: Some("abc123".to_owned()),
        branch: Some("main".to_owned()),
        user_id: "alice".to_owned(),
        prompt: None,
    }
}

pub fn create_test_data(ids: &[&str]) -> UsageData {
    let sessions: Vec<Session> = ids.iter().map(|id| create_test_session(id)).collect();
    let summary = UsageSummary::from_sessions(&sessions);
    UsageData { sessions: sessions.into_iter().map(SessionRecord::from).collect(), summary }
}

mod json_file_tests;
