use std::path::Path;
use crate::budget::evaluate_all;
use crate::cli::commands::CheckArgs;
use crate::config::{self, parser::validate_budgets};
use crate::errors::BatchError;
use crate::reporting::{format_violation_line, load_summary};
use tracing::info;

/// Re-gate a previous run's summary.json against budgets without auditing again.
pub async fn handle_check(args: CheckArgs) -> Result<(), BatchError> {
    let file_budgets = match &args.config {
        Some(path) => config::parse_config(Path::new(path)).await?.budgets.unwrap_or_default(),
        None => Default::default(),
    };
    let budgets = args.budgets.to_config().merged_with(&file_budgets);
    validate_budgets(&budgets)?;

    if budgets.is_empty() {
        return Err(BatchError::Config("No budgets configured; nothing to check".into()));
    }

    let summaries = load_summary(Path::new(&args.summary)).await?;
    let violations = evaluate_all(&summaries, &budgets);

    if violations.is_empty() {
        info!(sites = summaries.len(), "All budgets satisfied");
        return Ok(());
    }

    for violation in &violations {
        println!("{}", format_violation_line(violation));
    }
    Err(BatchError::BudgetExceeded(violations.len()))
}
