use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use crate::errors::BatchError;

/// One category as the engine reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub score: Value,
}

impl RawCategory {
    /// Numeric score, `None` when the engine reported `null` or a non-number.
    pub fn numeric_score(&self) -> Option<f64> {
        self.score.as_f64()
    }
}

/// The two category layouts seen across engine versions.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategorySet {
    /// `[{ "id": "performance", "score": 0.9 }, ...]`
    List(Vec<RawCategory>),
    /// `{ "performance": { "id": "performance", "score": 0.9 }, ... }`
    Map(BTreeMap<String, RawCategory>),
}

impl CategorySet {
    pub fn into_categories(self) -> Vec<RawCategory> {
        match self {
            Self::List(list) => list,
            Self::Map(map) => map.into_values().collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawReport {
    categories: Option<CategorySet>,
    #[serde(rename = "reportCategories")]
    report_categories: Option<CategorySet>,
}

/// Parse an engine report into its category list.
///
/// Current reports keep categories under `categories`, older ones under
/// `reportCategories`; `categories` wins when both are present.
pub fn parse_categories(report: &str) -> Result<Vec<RawCategory>, BatchError> {
    let raw: RawReport = serde_json::from_str(report)
        .map_err(|e| BatchError::ReportParse(e.to_string()))?;

    let categories = raw
        .categories
        .or(raw.report_categories)
        .ok_or_else(|| BatchError::ReportParse("report has no category list".into()))?
        .into_categories();

    if categories.is_empty() {
        return Err(BatchError::ReportParse("report declares no categories".into()));
    }

    Ok(categories)
}
