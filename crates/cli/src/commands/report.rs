use std::sync::Arc;

use ai_audit_service::ReportService;
use ai_audit_storage::UsageStore;
use anyhow::{Context, Result};

pub(crate) async fn run(store: Arc<dyn UsageStore>, limit: Option<usize>) -> Result<()> {
    let report = ReportService::new(store)
        .get_report(limit)
        .await
        .context("failed to load usage report")?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
