use serde::{Deserialize, Serialize};

/// Minimum acceptable scores on a 0-100 scale.
///
/// An absent threshold, or one `<= 0`, is not enforced.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BudgetConfig {
    pub score: Option<f64>,
    pub accessibility: Option<f64>,
    pub performance: Option<f64>,
    #[serde(rename = "bestPractices", alias = "best_practices")]
    pub best_practices: Option<f64>,
    pub seo: Option<f64>,
    pub pwa: Option<f64>,
}

impl BudgetConfig {
    fn raw(&self, dimension: BudgetDimension) -> Option<f64> {
        match dimension {
            BudgetDimension::Score => self.score,
            BudgetDimension::Accessibility => self.accessibility,
            BudgetDimension::Performance => self.performance,
            BudgetDimension::BestPractices => self.best_practices,
            BudgetDimension::Seo => self.seo,
            BudgetDimension::Pwa => self.pwa,
        }
    }

    /// The enforced threshold for a dimension, if any.
    pub fn threshold(&self, dimension: BudgetDimension) -> Option<f64> {
        self.raw(dimension).filter(|t| *t > 0.0)
    }

    pub fn is_empty(&self) -> bool {
        BudgetDimension::ALL.iter().all(|d| self.threshold(*d).is_none())
    }

    /// Fill every unset threshold from `other`.
    pub fn merged_with(&self, other: &BudgetConfig) -> BudgetConfig {
        BudgetConfig {
            score: self.score.or(other.score),
            accessibility: self.accessibility.or(other.accessibility),
            performance: self.performance.or(other.performance),
            best_practices: self.best_practices.or(other.best_practices),
            seo: self.seo.or(other.seo),
            pwa: self.pwa.or(other.pwa),
        }
    }

    /// Configured values, enforced or not, for range validation.
    pub fn configured(&self) -> impl Iterator<Item = (BudgetDimension, f64)> + '_ {
        BudgetDimension::ALL
            .iter()
            .filter_map(move |d| self.raw(*d).map(|v| (*d, v)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetDimension {
    Score,
    Accessibility,
    Performance,
    BestPractices,
    Seo,
    Pwa,
}

impl BudgetDimension {
    /// Evaluation order.
    pub const ALL: [BudgetDimension; 6] = [
        Self::Score,
        Self::Accessibility,
        Self::Performance,
        Self::BestPractices,
        Self::Seo,
        Self::Pwa,
    ];

    /// Key in the summary's category detail, `None` for the overall score.
    pub fn category_key(&self) -> Option<&'static str> {
        match self {
            Self::Score => None,
            Self::Accessibility => Some("accessibility"),
            Self::Performance => Some("performance"),
            Self::BestPractices => Some("best-practices"),
            Self::Seo => Some("seo"),
            Self::Pwa => Some("pwa"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Score => "average",
            Self::Accessibility => "accessibility",
            Self::Performance => "performance",
            Self::BestPractices => "best practices",
            Self::Seo => "seo",
            Self::Pwa => "pwa",
        }
    }
}

impl std::fmt::Display for BudgetDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_negative_thresholds_not_enforced() {
        let budgets = BudgetConfig {
            score: Some(0.0),
            performance: Some(-5.0),
            seo: Some(80.0),
            ..Default::default()
        };
        assert_eq!(budgets.threshold(BudgetDimension::Score), None);
        assert_eq!(budgets.threshold(BudgetDimension::Performance), None);
        assert_eq!(budgets.threshold(BudgetDimension::Seo), Some(80.0));
        assert!(!budgets.is_empty());
        assert!(BudgetConfig::default().is_empty());
    }

    #[test]
    fn test_best_practices_accepts_both_spellings() {
        let camel: BudgetConfig = serde_json::from_str(r#"{"bestPractices": 90}"#).unwrap();
        let snake: BudgetConfig = serde_yaml::from_str("best_practices: 90").unwrap();
        assert_eq!(camel.best_practices, Some(90.0));
        assert_eq!(snake.best_practices, Some(90.0));
    }

    #[test]
    fn test_merged_with_prefers_self() {
        let cli = BudgetConfig { score: Some(95.0), ..Default::default() };
        let file = BudgetConfig { score: Some(50.0), pwa: Some(40.0), ..Default::default() };
        let merged = cli.merged_with(&file);
        assert_eq!(merged.score, Some(95.0));
        assert_eq!(merged.pwa, Some(40.0));
    }

    #[test]
    fn test_best_practices_maps_to_hyphenated_key() {
        assert_eq!(BudgetDimension::BestPractices.category_key(), Some("best-practices"));
        assert_eq!(BudgetDimension::Score.category_key(), None);
    }
}
