use reqwest::StatusCode;
use shared::error::CatalogApiError;
use thiserror::Error;

/// The two failure kinds the rest of the app distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogErrorKind {
    /// The catalog answered with a non-success status.
    NetworkFailure,
    /// The request never completed, or its body could not be read or decoded.
    ParseOrTransportFailure,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog responded with {status}: {message}")]
    Status {
        status: StatusCode,
        message: String,
        api_error: Option<CatalogApiError>,
    },
    #[error("catalog request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("catalog response could not be decoded: {0}")]
    Parse(#[source] serde_json::Error),
}

impl CatalogError {
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        let api_error = CatalogApiError::from_body(body);
        let message = match &api_error {
            Some(api_error) => api_error.status_message.clone(),
            None => status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string(),
        };
        Self::Status {
            status,
            message,
            api_error,
        }
    }

    pub fn kind(&self) -> CatalogErrorKind {
        match self {
            Self::Status { .. } => CatalogErrorKind::NetworkFailure,
            Self::Transport(_) | Self::Parse(_) => CatalogErrorKind::ParseOrTransportFailure,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            Self::Parse(_) => None,
        }
    }
}
