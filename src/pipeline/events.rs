/// Messages sent from the batch orchestrator to a progress display.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchEvent {
    /// Sites resolved, about to audit the first one
    BatchStarted {
        total: usize,
    },
    /// The engine is auditing a site
    SiteStarted {
        index: usize,
        total: usize,
        url: String,
    },
    /// A site produced scores
    SiteCompleted {
        index: usize,
        url: String,
        score: Option<f64>,
    },
    /// A site failed; the batch continues
    SiteFailed {
        index: usize,
        url: String,
        error: String,
    },
    /// Every site has been audited
    BatchCompleted {
        audited: usize,
        failed: usize,
        duration_ms: u64,
    },
}
