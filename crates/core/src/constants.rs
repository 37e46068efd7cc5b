//! Shared constants for ai-audit.

/// Upper bound for the report `limit` accepted over HTTP.
pub const MAX_REPORT_LIMIT: usize = 100;

/// Default cap on retained sessions; the writer evicts the oldest beyond it.
pub const DEFAULT_MAX_SESSIONS: usize = 1000;

/// Stored prompts are truncated to this many characters.
pub const MAX_PROMPT_CHARS: usize = 500;

/// Store location relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = ".ai-audit/usage-data.json";

/// Tool label recorded when the originating assistant is not known.
pub const UNKNOWN_TOOL: &str = "Unknown";

/// Model label recorded when the model is not known.
pub const UNKNOWN_MODEL: &str = "unknown";

/// Env var overriding the store location.
pub const ENV_STORE_PATH: &str = "AI_AUDIT_STORE_PATH";

/// Env var overriding the retained-session cap.
pub const ENV_MAX_SESSIONS: &str = "AI_AUDIT_MAX_SESSIONS";
