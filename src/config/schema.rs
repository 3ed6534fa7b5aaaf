use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "sites": { "type": "array", "items": { "type": "string" } },
            "html": { "type": "boolean" },
            "csv": { "type": "boolean" },
            "verbose": { "type": "boolean" },
            "desktop": { "type": "boolean" },
            "engine": {
                "type": "object",
                "properties": {
                    "use_global": { "type": "boolean" },
                    "path": { "type": "string" },
                    "timeout_secs": { "type": "integer", "minimum": 1 }
                },
                "additionalProperties": false
            },
            "output": {
                "type": "object",
                "properties": {
                    "directory": { "type": "string" },
                    "summary": { "type": "boolean" }
                },
                "additionalProperties": false
            },
            "budgets": {
                "type": "object",
                "properties": {
                    "score": { "$ref": "#/$defs/threshold" },
                    "accessibility": { "$ref": "#/$defs/threshold" },
                    "performance": { "$ref": "#/$defs/threshold" },
                    "bestPractices": { "$ref": "#/$defs/threshold" },
                    "best_practices": { "$ref": "#/$defs/threshold" },
                    "seo": { "$ref": "#/$defs/threshold" },
                    "pwa": { "$ref": "#/$defs/threshold" }
                },
                "additionalProperties": false
            }
        },
        "additionalProperties": false,
        "$defs": {
            "threshold": { "type": "number", "minimum": 0, "maximum": 100 }
        }
    })
});
