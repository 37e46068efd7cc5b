use std::path::{Path, PathBuf};
use std::sync::Arc;

use ai_audit_core::{FileTouch, UNKNOWN_MODEL, UNKNOWN_TOOL};
use ai_audit_service::{NewSession, TrackingService};
use ai_audit_storage::UsageStore;
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use clap::Args;

#[derive(Args)]
pub(crate) struct TrackArgs {
    /// Assistant that produced the change
    #[arg(long, default_value = UNKNOWN_TOOL)]
    tool: String,
    /// Model identifier
    #[arg(long, default_value = UNKNOWN_MODEL)]
    model: String,
    #[arg(long, default_value_t = 0)]
    input_tokens: u64,
    #[arg(long, default_value_t = 0)]
    output_tokens: u64,
    /// File touched by the change (repeatable)
    #[arg(long = "file")]
    files: Vec<PathBuf>,
    #[arg(long)]
    commit: Option<String>,
    #[arg(long)]
    branch: Option<String>,
    /// Attribution [default: $AI_AUDIT_USER, then $USER]
    #[arg(long, env = "AI_AUDIT_USER")]
    user: Option<String>,
    #[arg(long)]
    prompt: Option<String>,
}

pub(crate) async fn run(
    store: Arc<dyn UsageStore>,
    max_sessions: usize,
    args: TrackArgs,
) -> Result<()> {
    let mut files = Vec::with_capacity(args.files.len());
    for path in &args.files {
        files.push(measure_file(path).await);
    }

    let new = NewSession {
        tool: args.tool,
        model: args.model,
        input_tokens: args.input_tokens,
        output_tokens: args.output_tokens,
        files,
        commit: args.commit,
        branch: args.branch,
        user_id: args.user.unwrap_or_else(default_user),
        prompt: args.prompt,
    };
    let session = TrackingService::new(store, max_sessions)
        .record(new)
        .await
        .context("failed to record AI usage session")?;
    println!("{}", serde_json::to_string_pretty(&session)?);
    Ok(())
}

fn default_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .ok()
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| "unknown".to_owned())
}

/// Line count, byte size and mtime; an unreadable file is recorded with zero metrics.
async fn measure_file(path: &Path) -> FileTouch {
    let display_path = path.to_string_lossy().into_owned();
    let (metadata, bytes) = match (tokio::fs::metadata(path).await, tokio::fs::read(path).await) {
        (Ok(metadata), Ok(bytes)) => (metadata, bytes),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(path = %display_path, error = %e, "could not measure tracked file");
            return FileTouch::unmeasured(display_path);
        },
    };
    let modified = metadata
        .modified()
        .ok()
        .map(|t| DateTime::<Utc>::from(t).to_rfc3339_opts(SecondsFormat::Millis, true));
    FileTouch {
        path: display_path,
        lines: count_lines(&bytes),
        size: metadata.len(),
        modified,
    }
}

fn count_lines(bytes: &[u8]) -> u64 {
    let newlines = bytes.iter().filter(|&&b| b == b'\n').count();
    let trailing = usize::from(!bytes.is_empty() && !bytes.ends_with(b"\n"));
    u64::try_from(newlines + trailing).unwrap_or(u64::MAX)
}
