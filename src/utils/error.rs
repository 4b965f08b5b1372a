//! Error handling for the paste server

use axum::http::StatusCode;
use thiserror::Error;

/// Every way a paste request can fail
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PasteError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("No text provided")]
    MissingText,

    #[error("Invalid delay: {0}")]
    InvalidDelay(f64),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Keystroke error: {0}")]
    Keystroke(String),

    #[error("Paste backend unavailable")]
    BackendUnavailable,
}

impl PasteError {
    /// HTTP status reported to the client
    pub fn status(&self) -> StatusCode {
        match self {
            PasteError::InvalidJson(_) | PasteError::MissingText | PasteError::InvalidDelay(_) => {
                StatusCode::BAD_REQUEST
            }
            PasteError::Clipboard(_)
            | PasteError::Keystroke(_)
            | PasteError::BackendUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True when the failure came from the request itself rather than the desktop
    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }
}

impl From<serde_json::Error> for PasteError {
    fn from(err: serde_json::Error) -> Self {
        PasteError::InvalidJson(err.to_string())
    }
}
