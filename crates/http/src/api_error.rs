//! Typed API error for HTTP handlers.
//!
//! Converts service errors into JSON responses `{"error": "message"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// The report endpoint has no caller-input failures (bad limits degrade to
/// "no limit"), so every error is a 500. The real error is logged
/// server-side and the client gets a static message.
#[derive(Debug)]
pub enum ApiError {
    /// 500 Internal Server Error. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self::Internal(err) = self;
        tracing::error!(error = ?err, "internal server error");
        let body = serde_json::json!({"error": "internal server error"});
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ai_audit_service::ServiceError> for ApiError {
    fn from(err: ai_audit_service::ServiceError) -> Self {
        Self::Internal(err.into())
    }
}
