//! Places client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to places provider timed out")]
    Timeout,

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PlacesError {
    /// Classify a failed send, keeping deadline expiry distinct from other transport errors.
    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            PlacesError::Timeout
        } else {
            PlacesError::Http(e)
        }
    }

    /// Status code returned by the provider, if it answered with a non-2xx response.
    pub fn provider_status(&self) -> Option<u16> {
        match self {
            PlacesError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
