use serde::Serialize;
use crate::models::{BudgetConfig, BudgetDimension, SiteSummary};
use crate::scoring::round2;

/// One threshold a site failed to meet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetViolation {
    pub dimension: BudgetDimension,
    /// Scaled score (0-100); `None` when the score was missing or non-numeric.
    pub actual: Option<f64>,
    pub threshold: f64,
    pub url: String,
}

impl std::fmt::Display for BudgetViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.actual {
            Some(actual) => write!(
                f,
                "{} score {} < {} for {}",
                self.dimension, round2(actual), self.threshold, self.url
            ),
            None => write!(
                f,
                "{} score n/a < {} for {}",
                self.dimension, self.threshold, self.url
            ),
        }
    }
}

/// Scale to 0-100 at two-decimal precision so e.g. 0.29 compares as 29, not 28.999….
fn scaled(score: Option<f64>) -> Option<f64> {
    score.filter(|s| s.is_finite()).map(|s| round2(s * 100.0))
}

/// Check a summary against every enforced threshold.
///
/// Category thresholds are skipped for sites without category detail (failed
/// audits); the overall score threshold always applies. A missing or
/// non-numeric score never satisfies a threshold.
pub fn evaluate(summary: &SiteSummary, budgets: &BudgetConfig) -> Vec<BudgetViolation> {
    BudgetDimension::ALL
        .iter()
        .filter_map(|dimension| {
            let threshold = budgets.threshold(*dimension)?;
            let actual = match dimension.category_key() {
                None => scaled(summary.score),
                Some(key) => {
                    summary.detail.as_ref()?;
                    scaled(summary.category_score(key))
                }
            };

            let satisfied = actual.is_some_and(|a| a >= threshold);
            (!satisfied).then(|| BudgetViolation {
                dimension: *dimension,
                actual,
                threshold,
                url: summary.url.clone(),
            })
        })
        .collect()
}

/// Violation messages for a summary, `None` when every threshold is met.
pub fn check_budgets(summary: &SiteSummary, budgets: &BudgetConfig) -> Option<Vec<String>> {
    let messages: Vec<String> = evaluate(summary, budgets)
        .iter()
        .map(|v| v.to_string())
        .collect();
    (!messages.is_empty()).then_some(messages)
}

/// Evaluate every summary of a batch, in batch order.
pub fn evaluate_all(summaries: &[SiteSummary], budgets: &BudgetConfig) -> Vec<BudgetViolation> {
    summaries
        .iter()
        .flat_map(|summary| evaluate(summary, budgets))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryScoreMap, SiteTarget};

    fn summary(score: Option<f64>, detail: &[(&str, Option<f64>)]) -> SiteSummary {
        let detail: CategoryScoreMap = detail
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        SiteSummary::scored(
            SiteTarget {
                url: "https://example.com".to_string(),
                name: "example_com".to_string(),
                html: None,
                csv: None,
            },
            score,
            detail,
        )
    }

    fn failed() -> SiteSummary {
        SiteSummary::failed(
            SiteTarget {
                url: "https://down.example.com".to_string(),
                name: "down_example_com".to_string(),
                html: None,
                csv: None,
            },
            "net::ERR_NAME_NOT_RESOLVED",
        )
    }

    #[test]
    fn test_score_and_category_violations() {
        let s = summary(Some(0.5), &[("performance", Some(0.4))]);
        let budgets = BudgetConfig {
            score: Some(60.0),
            performance: Some(50.0),
            ..Default::default()
        };
        let messages = check_budgets(&s, &budgets).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], "average score 50 < 60 for https://example.com");
        assert_eq!(messages[1], "performance score 40 < 50 for https://example.com");
    }

    #[test]
    fn test_all_satisfied_is_none() {
        let s = summary(Some(0.9), &[("performance", Some(0.9)), ("seo", Some(1.0))]);
        let budgets = BudgetConfig {
            score: Some(90.0),
            performance: Some(90.0),
            seo: Some(100.0),
            ..Default::default()
        };
        assert!(check_budgets(&s, &budgets).is_none());
    }

    #[test]
    fn test_zero_or_absent_threshold_never_violates() {
        let s = summary(Some(0.0), &[("performance", Some(0.0))]);
        let budgets = BudgetConfig {
            score: Some(0.0),
            performance: None,
            ..Default::default()
        };
        assert!(evaluate(&s, &budgets).is_empty());
    }

    #[test]
    fn test_failed_audit_skips_categories_but_checks_score() {
        let budgets = BudgetConfig {
            score: Some(10.0),
            accessibility: Some(90.0),
            seo: Some(90.0),
            ..Default::default()
        };
        let violations = evaluate(&failed(), &budgets);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].dimension, BudgetDimension::Score);
        assert_eq!(violations[0].to_string(), "average score 0 < 10 for https://down.example.com");
    }

    #[test]
    fn test_best_practices_reads_hyphenated_detail() {
        let s = summary(Some(0.8), &[("best-practices", Some(0.7))]);
        let budgets = BudgetConfig { best_practices: Some(75.0), ..Default::default() };
        let messages = check_budgets(&s, &budgets).unwrap();
        assert_eq!(messages, vec!["best practices score 70 < 75 for https://example.com"]);
    }

    #[test]
    fn test_missing_or_null_category_always_violates() {
        let s = summary(None, &[("pwa", None)]);
        let budgets = BudgetConfig {
            score: Some(1.0),
            pwa: Some(1.0),
            seo: Some(1.0),
            ..Default::default()
        };
        let violations = evaluate(&s, &budgets);
        assert_eq!(violations.len(), 3);
        assert!(violations.iter().all(|v| v.actual.is_none()));
        assert_eq!(violations[1].to_string(), "seo score n/a < 1 for https://example.com");
    }

    #[test]
    fn test_comparison_is_strict() {
        let s = summary(Some(0.5), &[("accessibility", Some(0.5))]);
        let budgets = BudgetConfig {
            score: Some(50.0),
            accessibility: Some(50.0),
            ..Default::default()
        };
        assert!(evaluate(&s, &budgets).is_empty());
    }

    #[test]
    fn test_two_decimal_scores_meet_equal_thresholds() {
        for k in 0..=100u32 {
            let score = k as f64 / 100.0;
            let s = summary(Some(score), &[("performance", Some(score)), ("seo", Some(score))]);
            let budgets = BudgetConfig {
                score: Some(k as f64),
                performance: Some(k as f64),
                seo: Some(k as f64),
                ..Default::default()
            };
            assert!(check_budgets(&s, &budgets).is_none(), "score {} failed threshold {}", score, k);
        }
    }

    #[test]
    fn test_scores_just_below_threshold_violate() {
        let s = summary(Some(0.58), &[("performance", Some(0.28))]);
        let budgets = BudgetConfig {
            score: Some(59.0),
            performance: Some(29.0),
            ..Default::default()
        };
        let messages = check_budgets(&s, &budgets).unwrap();
        assert_eq!(messages, vec![
            "average score 58 < 59 for https://example.com",
            "performance score 28 < 29 for https://example.com",
        ]);
    }

    #[test]
    fn test_order_follows_dimensions() {
        let s = summary(
            Some(0.1),
            &[("accessibility", Some(0.1)), ("performance", Some(0.1)), ("best-practices", Some(0.1)), ("seo", Some(0.1)), ("pwa", Some(0.1))],
        );
        let budgets = BudgetConfig {
            score: Some(50.0),
            accessibility: Some(50.0),
            performance: Some(50.0),
            best_practices: Some(50.0),
            seo: Some(50.0),
            pwa: Some(50.0),
        };
        let dims: Vec<BudgetDimension> = evaluate(&s, &budgets).iter().map(|v| v.dimension).collect();
        assert_eq!(dims, BudgetDimension::ALL.to_vec());
    }

    #[test]
    fn test_evaluate_all_keeps_batch_order() {
        let budgets = BudgetConfig { score: Some(60.0), ..Default::default() };
        let violations = evaluate_all(&[failed(), summary(Some(0.9), &[]), failed()], &budgets);
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().all(|v| v.url == "https://down.example.com"));
    }
}
