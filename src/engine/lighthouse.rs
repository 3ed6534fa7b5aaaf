use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use crate::models::{AuditMode, SiteTarget};
use crate::pipeline::BatchLog;
use crate::sites::JSON_EXT;
use super::{AuditEngine, AuditOutcome};

const CHROME_FLAGS: &str = "--no-sandbox --headless --disable-gpu";

/// Program plus leading arguments that start the engine, e.g. `node <cli.js>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl EngineCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    /// Run a JavaScript entry point through `node`.
    pub fn node_script(script: &Path) -> Self {
        Self {
            program: "node".to_string(),
            args: vec![script.display().to_string()],
        }
    }
}

impl std::fmt::Display for EngineCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs the Lighthouse command line once per site.
pub struct LighthouseCli {
    command: EngineCommand,
    timeout: Option<Duration>,
    output_dir: Option<PathBuf>,
    log: BatchLog,
}

impl LighthouseCli {
    pub fn new(command: EngineCommand, log: BatchLog) -> Self {
        Self {
            command,
            timeout: None,
            output_dir: None,
            log,
        }
    }

    /// Kill the engine and fail the site when it runs longer than `limit`.
    pub fn with_timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    /// Directory receiving HTML/CSV artifacts for sites that request them.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Where the engine writes the report for `site`, or `None` when the
    /// report comes back on stdout.
    fn artifact_base(&self, site: &SiteTarget) -> Option<PathBuf> {
        if !site.wants_artifacts() {
            return None;
        }
        self.output_dir.as_ref().map(|dir| dir.join(&site.name))
    }

    /// Engine arguments for one site, after the command's own arguments.
    pub fn build_args(&self, site: &SiteTarget, mode: AuditMode) -> Vec<String> {
        let mut args = vec![site.url.clone()];
        if mode == AuditMode::Desktop {
            args.extend(["--preset".to_string(), "desktop".to_string()]);
        }
        args.extend(["--output".to_string(), "json".to_string()]);

        match self.artifact_base(site) {
            Some(base) => {
                if site.html.is_some() {
                    args.extend(["--output".to_string(), "html".to_string()]);
                }
                if site.csv.is_some() {
                    args.extend(["--output".to_string(), "csv".to_string()]);
                }
                args.extend(["--output-path".to_string(), base.display().to_string()]);
            }
            None => args.extend(["--output-path".to_string(), "stdout".to_string()]),
        }

        args.push(format!("--chrome-flags={}", CHROME_FLAGS));
        args
    }

    async fn read_report_file(&self, base: &Path) -> AuditOutcome {
        let path = PathBuf::from(format!("{}{}", base.display(), JSON_EXT));
        match tokio::fs::read_to_string(&path).await {
            Ok(report) => AuditOutcome::Succeeded { report },
            Err(e) => AuditOutcome::Failed {
                error: format!("failed to read report {}: {}", path.display(), e),
            },
        }
    }
}

#[async_trait]
impl AuditEngine for LighthouseCli {
    async fn run(&self, site: &SiteTarget, mode: AuditMode) -> AuditOutcome {
        let args = self.build_args(site, mode);
        self.log.progress(&format!("{} {}", self.command, args.join(" ")));

        let mut cmd = Command::new(&self.command.program);
        cmd.args(&self.command.args)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, cmd.output()).await {
                Ok(result) => result,
                Err(_) => {
                    return AuditOutcome::Failed {
                        error: format!("audit engine timed out after {:?}", limit),
                    };
                }
            },
            None => cmd.output().await,
        };

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                return AuditOutcome::Failed {
                    error: format!("failed to launch audit engine '{}': {}", self.command.program, e),
                };
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
            let error = if stderr.is_empty() {
                format!("audit engine exited with {}", output.status)
            } else {
                stderr
            };
            return AuditOutcome::Failed { error };
        }

        match self.artifact_base(site) {
            Some(base) => self.read_report_file(&base).await,
            None => AuditOutcome::Succeeded {
                report: String::from_utf8_lossy(&output.stdout).into_owned(),
            },
        }
    }

    fn engine_name(&self) -> &str {
        "lighthouse"
    }
}
