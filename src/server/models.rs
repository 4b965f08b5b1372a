//! JSON bodies exchanged over HTTP

use crate::utils::PasteError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settle time between clipboard write and keystroke when the client gives none
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// Body of `POST /paste`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PasteRequest {
    #[serde(default)]
    pub text: Option<String>,

    /// Seconds to wait before the keystroke
    #[serde(default)]
    pub delay: Option<f64>,
}

/// A request that passed validation and may touch the desktop
#[derive(Debug, Clone, PartialEq)]
pub struct ValidPaste {
    pub text: String,
    pub delay: Duration,
}

impl PasteRequest {
    /// Parses a raw request body
    pub fn from_body(body: &[u8]) -> Result<Self, PasteError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Checks the fields, filling in the default delay
    pub fn validate(self) -> Result<ValidPaste, PasteError> {
        let text = match self.text {
            Some(text) if !text.is_empty() => text,
            _ => return Err(PasteError::MissingText),
        };

        let delay = match self.delay {
            None => DEFAULT_DELAY,
            Some(secs) => {
                Duration::try_from_secs_f64(secs).map_err(|_| PasteError::InvalidDelay(secs))?
            }
        };

        Ok(ValidPaste { text, delay })
    }
}

/// Successful paste
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteResponse {
    pub success: bool,
    pub length: usize,
}

impl PasteResponse {
    pub fn new(length: usize) -> Self {
        Self {
            success: true,
            length,
        }
    }
}

/// Any failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn ok(service: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
        }
    }
}
