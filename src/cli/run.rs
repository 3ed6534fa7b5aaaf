use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use crate::budget::evaluate_all;
use crate::cli::commands::RunArgs;
use crate::cli::progress::BatchProgress;
use crate::config::{self, BatchConfig, DEFAULT_OUTPUT_DIR};
use crate::config::parser::validate_budgets;
use crate::engine::{locate_engine, AuditEngine, LighthouseCli};
use crate::errors::BatchError;
use crate::models::{AuditMode, BudgetConfig};
use crate::pipeline::{BatchLog, BatchOptions, BatchOrchestrator};
use crate::reporting::{format_summary_line, format_violation_line, write_summary};
use tracing::{info, warn};

/// Everything a batch run needs, merged from CLI flags and the config file.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub sites: Vec<String>,
    pub options: BatchOptions,
    pub use_global: bool,
    pub engine_path: Option<PathBuf>,
    pub timeout: Option<Duration>,
    pub output_dir: PathBuf,
    pub write_summary: bool,
    pub budgets: BudgetConfig,
    pub fail_on_budgets: bool,
}

pub async fn handle_run(args: RunArgs, verbose: bool, quiet: bool) -> Result<(), BatchError> {
    let file_config = if let Some(config_path) = &args.config {
        Some(config::parse_config(Path::new(config_path)).await?)
    } else {
        None
    };

    let listed_sites = match &args.file {
        Some(path) => read_sites_file(Path::new(path)).await?,
        None => Vec::new(),
    };

    let plan = build_run_plan(&args, file_config.as_ref(), listed_sites, verbose)?;
    info!(sites = plan.sites.len(), mode = %plan.options.mode, "Starting Lighthouse batch");

    let log = BatchLog::new(plan.options.verbose);
    let search_root = std::env::current_dir()?;
    let location = locate_engine(plan.engine_path.as_deref(), plan.use_global, &search_root, log).await?;

    let mut lighthouse = LighthouseCli::new(location.command(), log);
    if let Some(limit) = plan.timeout {
        lighthouse = lighthouse.with_timeout(limit);
    }
    if plan.options.html || plan.options.csv {
        tokio::fs::create_dir_all(&plan.output_dir).await?;
        lighthouse = lighthouse.with_output_dir(&plan.output_dir);
    }
    let engine: Arc<dyn AuditEngine> = Arc::new(lighthouse);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut progress = BatchProgress::new(quiet);
    let progress_task = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            progress.handle_event(&event);
        }
    });

    let orchestrator = BatchOrchestrator::new(engine, plan.options)
        .with_log(log)
        .with_event_channel(tx);
    let summaries = orchestrator.run(plan.sites.as_slice()).await;
    drop(orchestrator);
    progress_task
        .await
        .map_err(|e| BatchError::Internal(format!("Progress task failed: {}", e)))?;

    if !quiet {
        for summary in &summaries {
            println!("{}", format_summary_line(summary));
        }
    }

    if plan.write_summary {
        write_summary(&plan.output_dir, &summaries).await?;
    }

    if plan.budgets.is_empty() {
        return Ok(());
    }

    let violations = evaluate_all(&summaries, &plan.budgets);
    if violations.is_empty() {
        info!("All budgets satisfied");
        return Ok(());
    }

    for violation in &violations {
        println!("{}", format_violation_line(violation));
    }
    warn!(count = violations.len(), "Budget violations found");

    if plan.fail_on_budgets {
        return Err(BatchError::BudgetExceeded(violations.len()));
    }
    Ok(())
}

/// Read one site per line, skipping blank lines and `#` comments.
pub async fn read_sites_file(path: &Path) -> Result<Vec<String>, BatchError> {
    if !path.exists() {
        return Err(BatchError::Config(format!("Sites file not found: {}", path.display())));
    }
    let content = tokio::fs::read_to_string(path).await?;
    Ok(parse_sites_list(&content))
}

pub fn parse_sites_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Merge CLI flags over config file values.
///
/// Sites from every source are combined in order: positional, `--sites`,
/// `--file`, then the config file.
pub fn build_run_plan(
    args: &RunArgs,
    file_config: Option<&BatchConfig>,
    listed_sites: Vec<String>,
    verbose: bool,
) -> Result<RunPlan, BatchError> {
    let default_config = BatchConfig::default();
    let file = file_config.unwrap_or(&default_config);
    let engine = file.engine_or_default();
    let output = file.output_or_default();

    let sites: Vec<String> = args
        .urls
        .iter()
        .chain(args.site_list.iter())
        .cloned()
        .chain(listed_sites)
        .chain(file.sites.iter().cloned())
        .collect();
    if sites.is_empty() {
        return Err(BatchError::Config("No sites to audit".into()));
    }

    let budgets = args.budgets.to_config().merged_with(&file.budgets.clone().unwrap_or_default());
    validate_budgets(&budgets)?;

    let timeout_secs = args.engine.timeout.or(engine.timeout_secs);
    if timeout_secs == Some(0) {
        return Err(BatchError::Config("Timeout must be positive".into()));
    }

    let options = BatchOptions {
        html: args.html || file.html.unwrap_or(false),
        csv: args.csv || file.csv.unwrap_or(false),
        verbose: verbose || file.verbose.unwrap_or(false),
        mode: AuditMode::from_desktop_flag(args.desktop || file.desktop.unwrap_or(false)),
    };

    let output_dir = args
        .out
        .clone()
        .or(output.directory)
        .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());

    Ok(RunPlan {
        sites,
        options,
        use_global: args.engine.use_global || engine.use_global.unwrap_or(false),
        engine_path: args.engine.engine.clone().or(engine.path).map(PathBuf::from),
        timeout: timeout_secs.map(Duration::from_secs),
        output_dir: PathBuf::from(output_dir),
        write_summary: !args.no_summary && output.summary.unwrap_or(true),
        budgets,
        fail_on_budgets: args.fail_on_budgets,
    })
}
