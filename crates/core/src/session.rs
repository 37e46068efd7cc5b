use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::constants::{UNKNOWN_MODEL, UNKNOWN_TOOL};

/// One recorded AI-assisted change event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    /// RFC 3339 event time, kept verbatim as stored.
    pub timestamp: String,
    #[serde(default = "default_tool")]
    pub tool: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub tokens: TokenUsage,
    #[serde(default)]
    pub files: Vec<FileTouch>,
    pub commit: Option<String>,
    pub branch: Option<String>,
    #[serde(default)]
    pub user_id: String,
    pub prompt: Option<String>,
}

fn default_tool() -> String {
    UNKNOWN_TOOL.to_owned()
}

fn default_model() -> String {
    UNKNOWN_MODEL.to_owned()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub input: u64,
    #[serde(default)]
    pub output: u64,
    #[serde(default)]
    pub total: u64,
}

impl TokenUsage {
    #[must_use]
    pub const fn new(input: u64, output: u64) -> Self {
        Self { input, output, total: input.saturating_add(output) }
    }
}

/// A file touched by a session, measured at tracking time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTouch {
    pub path: String,
    #[serde(default)]
    pub lines: u64,
    #[serde(default)]
    pub size: u64,
    /// RFC 3339 mtime, `None` when the file could not be stat'ed.
    #[serde(default)]
    pub modified: Option<String>,
}

impl FileTouch {
    #[must_use]
    pub fn unmeasured(path: impl Into<String>) -> Self {
        Self { path: path.into(), lines: 0, size: 0, modified: None }
    }
}

/// A stored session: the original JSON object plus its typed reading.
///
/// Serializes the original object unchanged: keys written by other tools
/// survive and absent keys are not filled in with defaults. Deserializing
/// still validates the object as a [`Session`].
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    raw: Map<String, Value>,
    session: Session,
}

impl SessionRecord {
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }
}

impl From<Session> for SessionRecord {
    fn from(session: Session) -> Self {
        let raw = match serde_json::to_value(&session) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        Self { raw, session }
    }
}

impl Serialize for SessionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SessionRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::deserialize(deserializer)?;
        let session = Session::deserialize(Value::Object(raw.clone())).map_err(D::Error::custom)?;
        Ok(Self { raw, session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_total_is_sum() {
        let tokens = TokenUsage::new(30, 15);
        assert_eq!(tokens.total, 45);
        assert_eq!(TokenUsage::new(u64::MAX, 1).total, u64::MAX);
    }

    #[test]
    #[expect(clippy::unwrap_used, reason = "test code")]
    fn session_missing_optional_keys_uses_defaults() {
        let session: Session =
            serde_json::from_str(r#"{"id":"s1","timestamp":"2025-01-01T00:00:00Z"}"#).unwrap();
        assert_eq!(session.tool, "Unknown");
        assert_eq!(session.model, "unknown");
        assert_eq!(session.tokens, TokenUsage::default());
        assert!(session.files.is_empty());
        assert!(session.commit.is_none());
        assert!(session.user_id.is_empty());
    }

    #[test]
    #[expect(clippy::unwrap_used, reason = "test code")]
    fn session_serializes_camel_case() {
        let session: Session = serde_json::from_str(
            r#"{"id":"s1","timestamp":"2025-01-01T00:00:00Z","userId":"alice","commit":null}"#,
        )
        .unwrap();
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["userId"], "alice");
        assert!(value.get("user_id").is_none());
        assert!(value["commit"].is_null());
    }

    #[test]
    #[expect(clippy::unwrap_used, reason = "test code")]
    fn record_serializes_stored_object_unchanged() {
        let stored = serde_json::json!({
            "id": "s1",
            "linesAdded": 12,
            "timestamp": "2025-01-01T00:00:00Z",
            "tokens": {"input": 1, "output": 2, "total": 3}
        });
        let record: SessionRecord = serde_json::from_value(stored.clone()).unwrap();
        assert_eq!(record.session().tool, "Unknown");
        assert_eq!(record.session().tokens.total, 3);
        assert_eq!(serde_json::to_value(&record).unwrap(), stored);
    }

    #[test]
    fn record_with_wrong_field_type_is_rejected() {
        let result = serde_json::from_str::<SessionRecord>(
            r#"{"id":"s1","timestamp":"2025-01-01T00:00:00Z","tokens":"many"}"#,
        );
        assert!(result.is_err());
        assert!(serde_json::from_str::<SessionRecord>("\"s1\"").is_err());
    }

    #[test]
    #[expect(clippy::unwrap_used, reason = "test code")]
    fn record_from_session_matches_typed_serialization() {
        let session: Session =
            serde_json::from_str(r#"{"id":"s1","timestamp":"2025-01-01T00:00:00Z"}"#).unwrap();
        let record = SessionRecord::from(session.clone());
        assert_eq!(record.session(), &session);
        assert_eq!(serde_json::to_value(&record).unwrap(), serde_json::to_value(&session).unwrap());
    }

    #[test]
    fn session_with_wrong_field_type_is_rejected() {
        let result = serde_json::from_str::<Session>(
            r#"{"id":"s1","timestamp":"2025-01-01T00:00:00Z","files":"a.rs"}"#,
        );
        assert!(result.is_err());
    }
}
