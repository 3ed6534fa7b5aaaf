use std::path::Path;
use crate::errors::BatchError;
use crate::models::BudgetConfig;
use super::types::BatchConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::warn;

pub async fn parse_config(path: &Path) -> Result<BatchConfig, BatchError> {
    if !path.exists() {
        return Err(BatchError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(BatchError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;

    // JSON Schema validation
    validate_schema(&yaml)?;

    // Parse into typed config
    let config: BatchConfig = serde_yaml::from_value(yaml)?;

    validate_semantics(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), BatchError> {
    // Convert YAML value to JSON for schema validation
    let json_str = serde_json::to_string(yaml)
        .map_err(|e| BatchError::Config(format!("Config conversion error: {}", e)))?;
    let json_value: serde_json::Value = serde_json::from_str(&json_str)
        .map_err(|e| BatchError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| BatchError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory: typed parsing and semantic checks below decide what is fatal
        for error in errors {
            warn!(validation_error = %format!("{} at {}", error, error.instance_path), "Config schema warning");
        }
    }

    Ok(())
}

/// Thresholds live on the 0-100 scale; zero means "not enforced".
pub fn validate_budgets(budgets: &BudgetConfig) -> Result<(), BatchError> {
    for (dimension, value) in budgets.configured() {
        if !(0.0..=100.0).contains(&value) {
            return Err(BatchError::Config(format!(
                "Budget '{}' must be between 0 and 100, got {}",
                dimension, value
            )));
        }
    }
    Ok(())
}

/// Reject values that parse but cannot be honored.
pub fn validate_semantics(config: &BatchConfig) -> Result<(), BatchError> {
    if let Some(budgets) = &config.budgets {
        validate_budgets(budgets)?;
    }

    if let Some(engine) = &config.engine {
        if engine.timeout_secs == Some(0) {
            return Err(BatchError::Config("engine.timeout_secs must be positive".into()));
        }
    }

    if config.sites.iter().any(|s| s.trim().is_empty()) {
        warn!("Config lists a blank site; it will be audited as 'https://'");
    }

    Ok(())
}
