//! Environment-driven configuration with warn-level logging for invalid values.

use std::path::PathBuf;

use crate::constants::{DEFAULT_MAX_SESSIONS, DEFAULT_STORE_PATH, ENV_MAX_SESSIONS, ENV_STORE_PATH};

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Resolved runtime configuration shared by the CLI and the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    /// Location of the JSON store.
    pub store_path: PathBuf,
    /// Retained-session cap enforced on write.
    pub max_sessions: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self { store_path: PathBuf::from(DEFAULT_STORE_PATH), max_sessions: DEFAULT_MAX_SESSIONS }
    }
}

impl AuditConfig {
    /// Builds the config from `AI_AUDIT_STORE_PATH` and `AI_AUDIT_MAX_SESSIONS`.
    ///
    /// A zero cap is rejected with a warning, since it would discard every write.
    #[must_use]
    pub fn from_env() -> Self {
        let store_path = std::env::var_os(ENV_STORE_PATH)
            .filter(|v| !v.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STORE_PATH), PathBuf::from);
        let mut max_sessions = env_parse_with_default(ENV_MAX_SESSIONS, DEFAULT_MAX_SESSIONS);
        if max_sessions == 0 {
            tracing::warn!(var = ENV_MAX_SESSIONS, "session cap must be positive, using default");
            max_sessions = DEFAULT_MAX_SESSIONS;
        }
        Self { store_path, max_sessions }
    }

    /// Replaces the store path when an explicit override is given.
    #[must_use]
    pub fn with_store_path(self, path: Option<PathBuf>) -> Self {
        match path {
            Some(store_path) => Self { store_path, ..self },
            None => self,
        }
    }
}
