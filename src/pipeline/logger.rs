use tracing::{debug, info, warn};

/// Progress logger handed to the orchestrator and the audit engine.
///
/// Built once per batch. Verbose runs surface progress at `info`, quiet runs
/// keep it at `debug`. Failures are always logged at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchLog {
    verbose: bool,
}

impl BatchLog {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn progress(&self, message: &str) {
        if self.verbose {
            info!("{}", message);
        } else {
            debug!("{}", message);
        }
    }

    pub fn failure(&self, message: &str) {
        warn!("{}", message);
    }
}
