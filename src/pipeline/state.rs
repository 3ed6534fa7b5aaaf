use crate::models::AuditMode;
use crate::sites::ArtifactFlags;

/// Per-run options for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    pub html: bool,
    pub csv: bool,
    pub verbose: bool,
    pub mode: AuditMode,
}

impl BatchOptions {
    pub fn artifacts(&self) -> ArtifactFlags {
        ArtifactFlags {
            html: self.html,
            csv: self.csv,
        }
    }
}

/// Counts reported when a batch finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchTally {
    pub audited: usize,
    pub failed: usize,
}

impl BatchTally {
    pub fn record(&mut self, failed: bool) {
        self.audited += 1;
        if failed {
            self.failed += 1;
        }
    }
}
