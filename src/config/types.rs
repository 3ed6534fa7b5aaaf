use serde::{Deserialize, Serialize};
use crate::models::BudgetConfig;

pub const DEFAULT_OUTPUT_DIR: &str = "./report/lighthouse";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct BatchConfig {
    #[serde(default)]
    pub sites: Vec<String>,
    pub html: Option<bool>,
    pub csv: Option<bool>,
    pub verbose: Option<bool>,
    pub desktop: Option<bool>,
    pub engine: Option<EngineConfig>,
    pub output: Option<OutputConfig>,
    pub budgets: Option<BudgetConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct EngineConfig {
    pub use_global: Option<bool>,
    pub path: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: Option<String>,
    pub summary: Option<bool>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: Some(DEFAULT_OUTPUT_DIR.to_string()),
            summary: Some(true),
        }
    }
}

impl BatchConfig {
    pub fn engine_or_default(&self) -> EngineConfig {
        self.engine.clone().unwrap_or_default()
    }

    pub fn output_or_default(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }
}
