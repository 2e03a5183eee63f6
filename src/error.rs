use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failures of the service layer. The discovery engine itself never fails.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Explorer request failed: {0}")]
    Explorer(String),
    #[error("Explorer returned status {status} for {url}")]
    ExplorerStatus { status: u16, url: String },
}

impl IntoResponse for DiscoveryError {
    fn into_response(self) -> Response {
        let status = match &self {
            DiscoveryError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DiscoveryError::NotFound(_) => StatusCode::NOT_FOUND,
            DiscoveryError::Explorer(_) | DiscoveryError::ExplorerStatus { .. } => {
                StatusCode::BAD_GATEWAY
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
