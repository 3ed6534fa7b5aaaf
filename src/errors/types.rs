use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Audit engine not found: {0}")]
    EngineNotFound(String),

    #[error("invalid audit report: {0}")]
    ReportParse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("{0} budget violation(s)")]
    BudgetExceeded(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
