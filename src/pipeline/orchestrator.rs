use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use crate::engine::AuditEngine;
use crate::models::SiteSummary;
use crate::scoring::summarize;
use crate::sites::resolve_sites;
use super::events::BatchEvent;
use super::logger::BatchLog;
use super::state::{BatchOptions, BatchTally};
use tracing::info;

/// Drives resolve → audit → aggregate over a batch of sites, one at a time.
pub struct BatchOrchestrator {
    engine: Arc<dyn AuditEngine>,
    options: BatchOptions,
    log: BatchLog,
    event_tx: Option<mpsc::UnboundedSender<BatchEvent>>,
}

impl BatchOrchestrator {
    pub fn new(engine: Arc<dyn AuditEngine>, options: BatchOptions) -> Self {
        Self {
            engine,
            options,
            log: BatchLog::new(options.verbose),
            event_tx: None,
        }
    }

    /// Replace the logger built from `options.verbose`.
    pub fn with_log(mut self, log: BatchLog) -> Self {
        self.log = log;
        self
    }

    /// Attach an event channel for streaming progress to a display.
    pub fn with_event_channel(mut self, tx: mpsc::UnboundedSender<BatchEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    fn emit(&self, event: BatchEvent) {
        if let Some(ref tx) = self.event_tx {
            let _ = tx.send(event);
        }
    }

    /// Audit every site in input order and return their summaries in the same order.
    ///
    /// A failing site never stops the batch; it shows up as a summary with
    /// `error` set.
    pub async fn run<S: AsRef<str>>(&self, raw_sites: &[S]) -> Vec<SiteSummary> {
        let started = Instant::now();
        let sites = resolve_sites(raw_sites, self.options.artifacts());
        let total = sites.len();

        info!(
            sites = total,
            mode = %self.options.mode,
            engine = self.engine.engine_name(),
            "Lighthouse batch run start"
        );
        self.emit(BatchEvent::BatchStarted { total });

        let mut tally = BatchTally::default();
        let mut summaries = Vec::with_capacity(total);

        for (i, site) in sites.into_iter().enumerate() {
            let prefix = format!("{}/{}: ", i + 1, total);
            self.log.progress(&format!("{}analyzing '{}'", prefix, site.url));
            self.emit(BatchEvent::SiteStarted {
                index: i,
                total,
                url: site.url.clone(),
            });

            let outcome = self.engine.run(&site, self.options.mode).await;
            let summary = summarize(site, outcome);

            match &summary.error {
                Some(error) => {
                    self.log.failure(&format!("{}analysis FAILED for {}", prefix, summary.url));
                    self.emit(BatchEvent::SiteFailed {
                        index: i,
                        url: summary.url.clone(),
                        error: error.clone(),
                    });
                }
                None => {
                    let score = summary
                        .score
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "n/a".to_string());
                    self.log.progress(&format!(
                        "{}analysis of '{}' complete with score {}",
                        prefix, summary.url, score
                    ));
                    self.emit(BatchEvent::SiteCompleted {
                        index: i,
                        url: summary.url.clone(),
                        score: summary.score,
                    });
                }
            }

            tally.record(summary.is_failed());
            summaries.push(summary);
        }

        // Every site yields a summary today; drop any without a target.
        summaries.retain(|s| !s.url.is_empty());

        let duration_ms = started.elapsed().as_millis() as u64;
        info!(
            audited = tally.audited,
            failed = tally.failed,
            duration_ms,
            "Lighthouse batch run complete"
        );
        self.emit(BatchEvent::BatchCompleted {
            audited: tally.audited,
            failed: tally.failed,
            duration_ms,
        });

        summaries
    }
}
