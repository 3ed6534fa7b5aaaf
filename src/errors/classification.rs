use super::types::BatchError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub exit_code: i32,
}

impl BatchError {
    /// Classify this error to determine its type name and the process exit code.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            BatchError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                exit_code: 2,
            },
            BatchError::EngineNotFound(_) => ErrorClassification {
                error_type: "EngineNotFoundError",
                exit_code: 3,
            },
            BatchError::BudgetExceeded(_) => ErrorClassification {
                error_type: "BudgetExceededError",
                exit_code: 4,
            },
            BatchError::InvalidRequest(_) => ErrorClassification {
                error_type: "InvalidRequestError",
                exit_code: 2,
            },

            // Recovered per site during a batch; only reach main from outer surfaces.
            BatchError::ReportParse(_) => ErrorClassification {
                error_type: "ReportParseError",
                exit_code: 1,
            },

            BatchError::Io(_) => ErrorClassification {
                error_type: "IoError",
                exit_code: 1,
            },
            BatchError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                exit_code: 1,
            },
            BatchError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                exit_code: 2,
            },
            BatchError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                exit_code: 1,
            },
        }
    }
}
