use console::style;
use crate::budget::BudgetViolation;
use crate::models::SiteSummary;
use crate::scoring::round2;

fn percent(score: Option<f64>) -> String {
    match score {
        Some(s) => format!("{}", round2(s * 100.0)),
        None => "n/a".to_string(),
    }
}

/// One console line per audited site.
pub fn format_summary_line(summary: &SiteSummary) -> String {
    if let Some(error) = &summary.error {
        let first_line = error.lines().next().unwrap_or_default();
        return format!(
            "  {} {}  {}",
            style("✗").red(),
            summary.url,
            style(format!("FAILED: {}", first_line)).red()
        );
    }

    let categories = summary
        .detail
        .iter()
        .flatten()
        .map(|(id, score)| format!("{} {}", id, percent(*score)))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "  {} {}  score {}  ({})",
        style("✓").green(),
        summary.url,
        style(percent(summary.score)).bold(),
        categories
    )
}

pub fn format_violation_line(violation: &BudgetViolation) -> String {
    format!("  {} {}", style("⚠").yellow(), violation)
}
