pub mod routes;
pub mod models;
pub mod errors;

use std::sync::Arc;
use axum::Router;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::engine::AuditEngine;
use crate::pipeline::BatchLog;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn AuditEngine>,
    /// Held for the length of one audit so a single engine drives the browser at a time.
    pub audit_lock: Arc<Mutex<()>>,
    pub log: BatchLog,
}

impl AppState {
    pub fn new(engine: Arc<dyn AuditEngine>, log: BatchLog) -> Self {
        Self {
            engine,
            audit_lock: Arc::new(Mutex::new(())),
            log,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .route("/api/mobile/run-audit", axum::routing::post(routes::audit::run_mobile_audit))
        .route("/api/desktop/run-audit", axum::routing::post(routes::audit::run_desktop_audit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
