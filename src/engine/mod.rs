pub mod lighthouse;
pub mod locate;

pub use lighthouse::{EngineCommand, LighthouseCli};
pub use locate::{locate_engine, EngineLocation};

use async_trait::async_trait;
use crate::models::{AuditMode, SiteTarget};

/// Raw result of one engine invocation, before aggregation.
#[derive(Debug, Clone, PartialEq)]
pub enum AuditOutcome {
    /// The engine exited successfully; `report` is its JSON output, unaltered.
    Succeeded { report: String },
    /// The engine failed to start, exited nonzero, or timed out.
    Failed { error: String },
}

/// The external audit engine, run once per site.
#[async_trait]
pub trait AuditEngine: Send + Sync {
    /// Audit a single site. Implementations never retry and never fail the
    /// batch: every problem is reported through [`AuditOutcome::Failed`].
    async fn run(&self, site: &SiteTarget, mode: AuditMode) -> AuditOutcome;

    /// Engine name for logging
    fn engine_name(&self) -> &str;
}
