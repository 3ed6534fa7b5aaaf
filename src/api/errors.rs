use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use crate::errors::BatchError;

impl IntoResponse for BatchError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            BatchError::Config(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            BatchError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            BatchError::EngineNotFound(_) => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        (status, Json(json!({"error": message}))).into_response()
    }
}
