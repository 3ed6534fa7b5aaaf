use std::path::{Path, PathBuf};
use crate::errors::BatchError;
use crate::models::SiteSummary;
use tracing::info;

pub const REPORT_SUMMARY: &str = "summary.json";

/// Write the batch's summaries to `<dir>/summary.json`, creating `dir`.
pub async fn write_summary(dir: &Path, summaries: &[SiteSummary]) -> Result<PathBuf, BatchError> {
    tokio::fs::create_dir_all(dir).await?;

    let json = serde_json::to_string_pretty(summaries)?;
    let path = dir.join(REPORT_SUMMARY);
    tokio::fs::write(&path, &json).await?;
    info!(path = %path.display(), count = summaries.len(), "Wrote summary.json");

    Ok(path)
}

/// Read summaries written by a previous run.
pub async fn load_summary(path: &Path) -> Result<Vec<SiteSummary>, BatchError> {
    if !path.exists() {
        return Err(BatchError::Config(format!("Summary file not found: {}", path.display())));
    }
    let content = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}
