//! Errors raised while talking to the address proxy.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Address proxy did not answer in time")]
    Timeout,

    #[error("Address proxy error: {status} - {message}")]
    Proxy { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FormError {
    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FormError::Timeout
        } else {
            FormError::Http(e)
        }
    }
}

/// Result type alias for form operations.
pub type FormResult<T> = Result<T, FormError>;
