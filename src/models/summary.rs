use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use super::site::SiteTarget;

/// Category id to normalized score in `[0,1]`.
///
/// Keys are whatever categories the engine's report declares. A `None` value
/// means the engine reported a non-numeric score for that category.
pub type CategoryScoreMap = BTreeMap<String, Option<f64>>;

/// Aggregated result for one audited site.
///
/// Either `detail` is present together with `score`, or `error` is present
/// and `score` is `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSummary {
    pub url: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csv: Option<String>,
    /// Mean of all category scores rounded to two decimals.
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<CategoryScoreMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SiteSummary {
    /// Summary for a site whose audit could not produce scores.
    pub fn failed(site: SiteTarget, error: impl Into<String>) -> Self {
        Self {
            url: site.url,
            name: site.name,
            html: site.html,
            csv: site.csv,
            score: Some(0.0),
            detail: None,
            error: Some(error.into()),
        }
    }

    /// Summary for a site with aggregated category scores.
    pub fn scored(site: SiteTarget, score: Option<f64>, detail: CategoryScoreMap) -> Self {
        Self {
            url: site.url,
            name: site.name,
            html: site.html,
            csv: site.csv,
            score,
            detail: Some(detail),
            error: None,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Score of a single category, if the report declared it with a numeric value.
    pub fn category_score(&self, id: &str) -> Option<f64> {
        self.detail.as_ref()?.get(id).copied().flatten()
    }
}
