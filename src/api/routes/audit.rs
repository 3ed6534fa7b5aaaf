use axum::{extract::State, Json};
use crate::api::AppState;
use crate::api::models::RunAuditRequest;
use crate::errors::BatchError;
use crate::models::{AuditMode, SiteSummary};
use crate::pipeline::{BatchOptions, BatchOrchestrator};
use tracing::info;

pub async fn run_mobile_audit(
    State(state): State<AppState>,
    Json(req): Json<RunAuditRequest>,
) -> Result<Json<Vec<SiteSummary>>, BatchError> {
    run_audit(state, req, AuditMode::Mobile).await
}

pub async fn run_desktop_audit(
    State(state): State<AppState>,
    Json(req): Json<RunAuditRequest>,
) -> Result<Json<Vec<SiteSummary>>, BatchError> {
    run_audit(state, req, AuditMode::Desktop).await
}

async fn run_audit(
    state: AppState,
    req: RunAuditRequest,
    mode: AuditMode,
) -> Result<Json<Vec<SiteSummary>>, BatchError> {
    if req.site_url.trim().is_empty() {
        return Err(BatchError::InvalidRequest("siteUrl must not be empty".into()));
    }

    let options = BatchOptions {
        mode,
        verbose: state.log.is_verbose(),
        ..Default::default()
    };
    let orchestrator = BatchOrchestrator::new(state.engine.clone(), options).with_log(state.log);

    let _guard = state.audit_lock.lock().await;
    info!(site = %req.site_url, %mode, "Audit requested");
    let summaries = orchestrator.run(&[req.site_url]).await;

    Ok(Json(summaries))
}
