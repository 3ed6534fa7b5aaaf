use indicatif::{ProgressBar, ProgressStyle};
use console::style;
use crate::pipeline::BatchEvent;

/// Progress bar over the sites of a batch.
pub struct BatchProgress {
    bar: Option<ProgressBar>,
    hidden: bool,
}

impl BatchProgress {
    pub fn new(hidden: bool) -> Self {
        Self { bar: None, hidden }
    }

    /// Handle a batch event and update the bar accordingly.
    pub fn handle_event(&mut self, event: &BatchEvent) {
        match event {
            BatchEvent::BatchStarted { total } => {
                let bar = if self.hidden {
                    ProgressBar::hidden()
                } else {
                    ProgressBar::new(*total as u64)
                };
                if let Ok(bar_style) = ProgressStyle::default_bar()
                    .template("  {spinner:.cyan} {bar:30.cyan/dark_gray} {pos}/{len} sites | {msg}")
                {
                    bar.set_style(bar_style.progress_chars("█▓░"));
                }
                bar.enable_steady_tick(std::time::Duration::from_millis(120));
                self.bar = Some(bar);
            }
            BatchEvent::SiteStarted { url, .. } => {
                if let Some(bar) = &self.bar {
                    bar.set_message(format!("analyzing {}", url));
                }
            }
            BatchEvent::SiteCompleted { .. } => {
                if let Some(bar) = &self.bar {
                    bar.inc(1);
                }
            }
            BatchEvent::SiteFailed { url, .. } => {
                if let Some(bar) = &self.bar {
                    bar.println(format!("  {} {} failed", style("✗").red(), url));
                    bar.inc(1);
                }
            }
            BatchEvent::BatchCompleted { audited, failed, duration_ms } => {
                if let Some(bar) = self.bar.take() {
                    bar.finish_and_clear();
                }
                if !self.hidden {
                    println!(
                        "  {} {} site(s) audited, {} failed in {}",
                        style("●").cyan(),
                        audited,
                        failed,
                        format_elapsed(*duration_ms),
                    );
                }
            }
        }
    }
}

fn format_elapsed(ms: u64) -> String {
    let secs = ms / 1000;
    let mins = secs / 60;
    let remaining_secs = secs % 60;
    if mins > 0 {
        format!("{}m{}s", mins, remaining_secs)
    } else {
        format!("{}s", secs)
    }
}
