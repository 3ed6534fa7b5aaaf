pub mod report;

pub use report::{parse_categories, CategorySet, RawCategory};

use crate::engine::AuditOutcome;
use crate::errors::BatchError;
use crate::models::{CategoryScoreMap, SiteSummary, SiteTarget};

/// Category detail plus overall score for one report.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedScores {
    /// Mean of all category scores, rounded to two decimals. `None` when any
    /// category score is non-numeric.
    pub score: Option<f64>,
    pub detail: CategoryScoreMap,
}

/// Round to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Reduce parsed categories to per-category detail and an overall score.
///
/// Categories without an id count toward the mean but get no detail entry.
pub fn aggregate_categories(categories: &[RawCategory]) -> AggregatedScores {
    let mut detail = CategoryScoreMap::new();
    let mut total = Some(0.0);

    for category in categories {
        let score = category.numeric_score();
        if let Some(id) = &category.id {
            detail.insert(id.clone(), score);
        }
        total = total.zip(score).map(|(sum, s)| sum + s);
    }

    let score = total
        .map(|sum| sum / categories.len() as f64)
        .filter(|mean| mean.is_finite())
        .map(round2);

    AggregatedScores { score, detail }
}

/// Parse a raw engine report into aggregated scores.
pub fn score_report(report: &str) -> Result<AggregatedScores, BatchError> {
    let categories = parse_categories(report)?;
    Ok(aggregate_categories(&categories))
}

/// Turn one engine outcome into the site's summary.
///
/// Never fails: engine failures and unreadable reports both become a summary
/// with `score = 0` and the error text.
pub fn summarize(site: SiteTarget, outcome: AuditOutcome) -> SiteSummary {
    match outcome {
        AuditOutcome::Failed { error } => SiteSummary::failed(site, error),
        AuditOutcome::Succeeded { report } => match score_report(&report) {
            Ok(scores) => SiteSummary::scored(site, scores.score, scores.detail),
            Err(e) => SiteSummary::failed(site, e.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteTarget {
        SiteTarget {
            url: "https://example.com".to_string(),
            name: "example_com".to_string(),
            html: None,
            csv: None,
        }
    }

    fn succeeded(report: &str) -> AuditOutcome {
        AuditOutcome::Succeeded { report: report.to_string() }
    }

    #[test]
    fn test_map_report_mean_and_detail() {
        let summary = summarize(
            site(),
            succeeded(r#"{"categories":{"a":{"id":"a","score":0.5},"b":{"id":"b","score":1.0}}}"#),
        );
        assert_eq!(summary.score, Some(0.75));
        let detail = summary.detail.unwrap();
        assert_eq!(detail.len(), 2);
        assert_eq!(detail["a"], Some(0.5));
        assert_eq!(detail["b"], Some(1.0));
        assert!(summary.error.is_none());
    }

    #[test]
    fn test_legacy_report() {
        let summary = summarize(site(), succeeded(r#"{"reportCategories":[{"id":"perf","score":0.9}]}"#));
        assert_eq!(summary.score, Some(0.9));
        assert_eq!(summary.detail.unwrap()["perf"], Some(0.9));
    }

    #[test]
    fn test_failed_outcome() {
        let summary = summarize(site(), AuditOutcome::Failed { error: "timeout".to_string() });
        assert_eq!(summary.score, Some(0.0));
        assert_eq!(summary.error.as_deref(), Some("timeout"));
        assert!(summary.detail.is_none());
    }

    #[test]
    fn test_mean_rounded_to_two_decimals() {
        let scores = score_report(
            r#"{"categories":[{"id":"a","score":0.91},{"id":"b","score":0.88},{"id":"c","score":0.99}]}"#,
        ).unwrap();
        assert_eq!(scores.score, Some(0.93));
    }

    #[test]
    fn test_category_without_id_counts_toward_mean() {
        let scores = score_report(r#"{"categories":[{"id":"a","score":1.0},{"score":0.0}]}"#).unwrap();
        assert_eq!(scores.score, Some(0.5));
        assert_eq!(scores.detail.len(), 1);
    }

    #[test]
    fn test_null_category_score_propagates() {
        let scores = score_report(
            r#"{"categories":{"performance":{"id":"performance","score":0.8},"pwa":{"id":"pwa","score":null}}}"#,
        ).unwrap();
        assert_eq!(scores.score, None);
        assert_eq!(scores.detail["pwa"], None);
        assert_eq!(scores.detail["performance"], Some(0.8));
    }

    #[test]
    fn test_unparseable_report_becomes_failed_summary() {
        let summary = summarize(site(), succeeded("<html>not json</html>"));
        assert_eq!(summary.score, Some(0.0));
        assert!(summary.detail.is_none());
        assert!(summary.error.unwrap().starts_with("invalid audit report: "));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.756), 0.76);
        assert_eq!(round2(0.123), 0.12);
        assert_eq!(round2(0.5), 0.5);
        assert_eq!(round2(1.0), 1.0);
    }
}
