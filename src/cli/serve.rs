use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::cli::commands::ServeArgs;
use crate::engine::{locate_engine, LighthouseCli};
use crate::errors::BatchError;
use crate::api;
use crate::pipeline::BatchLog;
use tracing::info;

pub async fn handle_serve(args: ServeArgs, verbose: bool) -> Result<(), BatchError> {
    info!(host = %args.host, port = args.port, "Starting API server");

    let log = BatchLog::new(verbose);
    let explicit = args.engine.engine.as_ref().map(PathBuf::from);
    let search_root = std::env::current_dir()?;
    let location = locate_engine(explicit.as_deref(), args.engine.use_global, &search_root, log).await?;

    let mut lighthouse = LighthouseCli::new(location.command(), log);
    if let Some(secs) = args.engine.timeout.filter(|s| *s > 0) {
        lighthouse = lighthouse.with_timeout(Duration::from_secs(secs));
    }

    let state = api::AppState::new(Arc::new(lighthouse), log);
    let app = api::build_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| BatchError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
