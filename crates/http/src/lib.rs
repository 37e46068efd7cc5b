//! HTTP API server for ai-audit.
//!
//! Read-only: the report endpoint never writes to the usage store.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use std::sync::Arc;

use axum::http::Method;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};

use ai_audit_service::ReportService;

pub use query_types::parse_limit;
pub use response_types::VersionResponse;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Read-only usage report query
    pub report_service: Arc<ReportService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new().allow_methods([Method::GET]).allow_origin(Any);
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/ai-usage", get(handlers::usage::get_usage_report))
        .with_state(state)
        .layer(cors)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
