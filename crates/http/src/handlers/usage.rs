use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use ai_audit_service::UsageReport;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::ReportQuery;

/// `GET /api/ai-usage?limit=N`
///
/// An unparseable query string degrades to "no limit" instead of a 400.
pub async fn get_usage_report(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<Json<UsageReport>, ApiError> {
    let query = query.map(|Query(q)| q).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "ignoring malformed usage report query");
        ReportQuery::default()
    });
    let limit = query.parsed_limit();
    let report = state.report_service.get_report(limit).await?;
    Ok(Json(report))
}
