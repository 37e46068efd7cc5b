use std::sync::Arc;

use ai_audit_http::{AppState, create_router};
use ai_audit_service::ReportService;
use ai_audit_storage::UsageStore;
use anyhow::Result;

pub(crate) async fn run(store: Arc<dyn UsageStore>, host: &str, port: u16) -> Result<()> {
    let report_service = Arc::new(ReportService::new(store));
    let state = Arc::new(AppState { report_service });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down HTTP server");
}
