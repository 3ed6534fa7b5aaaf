use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use crate::errors::BatchError;
use crate::pipeline::BatchLog;
use super::lighthouse::EngineCommand;

const GLOBAL_BINARY: &str = "lighthouse";

/// Where the engine was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineLocation {
    Explicit(PathBuf),
    Global,
    Local(PathBuf),
}

impl EngineLocation {
    pub fn command(&self) -> EngineCommand {
        match self {
            Self::Explicit(path) if is_script(path) => EngineCommand::node_script(path),
            Self::Explicit(path) => EngineCommand::new(path.display().to_string()),
            Self::Global => EngineCommand::new(GLOBAL_BINARY),
            Self::Local(script) => EngineCommand::node_script(script),
        }
    }
}

fn is_script(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "js" || ext == "mjs")
}

/// Candidate locations of a locally installed Lighthouse CLI, in lookup order.
pub fn local_candidates(root: &Path) -> Vec<PathBuf> {
    vec![
        root.join("node_modules").join("lighthouse").join("cli").join("index.js"),
        root.join("..").join("lighthouse").join("cli").join("index.js"),
    ]
}

async fn global_install_available() -> bool {
    Command::new(GLOBAL_BINARY)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Find the audit engine.
///
/// An explicit path wins. With `use_global` the global `lighthouse` binary is
/// probed first; a missing global install falls back to a local one.
pub async fn locate_engine(
    explicit: Option<&Path>,
    use_global: bool,
    search_root: &Path,
    log: BatchLog,
) -> Result<EngineLocation, BatchError> {
    if let Some(path) = explicit {
        if is_script(path) && !path.exists() {
            return Err(BatchError::EngineNotFound(format!(
                "engine script {} does not exist",
                path.display()
            )));
        }
        log.progress(&format!("Targeting audit engine at '{}'", path.display()));
        return Ok(EngineLocation::Explicit(path.to_path_buf()));
    }

    if use_global {
        if global_install_available().await {
            log.progress("Targeting global install of Lighthouse cli");
            return Ok(EngineLocation::Global);
        }
        log.failure("Global Lighthouse install not found, falling back to local one");
    }

    for candidate in local_candidates(search_root) {
        if candidate.exists() {
            log.progress(&format!("Targeting local Lighthouse cli at '{}'", candidate.display()));
            return Ok(EngineLocation::Local(candidate));
        }
    }

    Err(BatchError::EngineNotFound(format!(
        "no Lighthouse cli under {} (install it locally or pass --use-global / --engine)",
        search_root.display()
    )))
}
