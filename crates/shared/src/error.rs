use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body the catalog API returns alongside non-success statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("catalog status {status_code}: {status_message}")]
pub struct CatalogApiError {
    pub status_code: i64,
    pub status_message: String,
    #[serde(default)]
    pub success: bool,
}

impl CatalogApiError {
    pub fn new(status_code: i64, status_message: impl Into<String>) -> Self {
        Self {
            status_code,
            status_message: status_message.into(),
            success: false,
        }
    }

    /// Parses an error body, returning `None` when it is not the catalog's shape.
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}
