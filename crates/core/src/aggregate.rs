//! Folding sessions into summary counters.

use crate::session::Session;
use crate::summary::UsageSummary;

impl UsageSummary {
    /// Merges one session into the totals and all three groupings.
    pub fn record(&mut self, session: &Session) {
        let tokens = session.tokens.total;
        let files = u64::try_from(session.files.len()).unwrap_or(u64::MAX);

        self.total_sessions = self.total_sessions.saturating_add(1);
        self.total_tokens = self.total_tokens.saturating_add(tokens);
        self.total_input_tokens = self.total_input_tokens.saturating_add(session.tokens.input);
        self.total_output_tokens = self.total_output_tokens.saturating_add(session.tokens.output);
        self.total_files = self.total_files.saturating_add(files);

        let tool = self.by_tool.entry(session.tool.clone()).or_default();
        tool.sessions = tool.sessions.saturating_add(1);
        tool.tokens = tool.tokens.saturating_add(tokens);
        tool.files = tool.files.saturating_add(files);

        let model = self.by_model.entry(session.model.clone()).or_default();
        model.sessions = model.sessions.saturating_add(1);
        model.tokens = model.tokens.saturating_add(tokens);

        let user = self.by_user.entry(session.user_id.clone()).or_default();
        user.sessions = user.sessions.saturating_add(1);
        user.tokens = user.tokens.saturating_add(tokens);
    }

    /// Recomputes a summary from scratch.
    #[must_use]
    pub fn from_sessions<'a>(sessions: impl IntoIterator<Item = &'a Session>) -> Self {
        sessions.into_iter().fold(Self::default(), |mut summary, session| {
            summary.record(session);
            summary
        })
    }
}
