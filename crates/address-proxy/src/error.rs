//! Error types for the address proxy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use places_client::PlacesError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Proxy error types.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// A required request field was missing or empty.
    #[error("{0}")]
    Validation(&'static str),

    /// The places provider answered with a non-2xx status.
    #[error("{message}")]
    Provider { status: StatusCode, message: &'static str },

    /// Network failure, timeout or unreadable provider response.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ProxyError {
    /// Map a places client failure, using `message` when the provider rejected the call.
    pub fn from_places(e: PlacesError, message: &'static str) -> Self {
        match e.provider_status() {
            Some(code) => ProxyError::Provider {
                status: StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            },
            None => ProxyError::Transport(e.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Validation(_) => StatusCode::BAD_REQUEST,
            ProxyError::Provider { status, .. } => *status,
            ProxyError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Transport and internal details stay in the logs, not the response
        let message = match &self {
            ProxyError::Transport(detail) | ProxyError::Internal(detail) => {
                error!(detail = %detail, "Request failed");
                "Internal Server Error".to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_status() {
        let err = ProxyError::Validation("Place ID is required");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Place ID is required");
    }

    #[test]
    fn test_provider_status_passthrough() {
        let places = PlacesError::Api {
            status: 503,
            message: "down".into(),
        };
        let err = ProxyError::from_places(places, "Failed to fetch suggestions");
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "Failed to fetch suggestions");
    }

    #[test]
    fn test_timeout_is_transport() {
        let err = ProxyError::from_places(PlacesError::Timeout, "Failed to fetch suggestions");
        assert!(matches!(err, ProxyError::Transport(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_provider_status_becomes_bad_gateway() {
        let places = PlacesError::Api {
            status: 1000,
            message: String::new(),
        };
        let err = ProxyError::from_places(places, "Failed to fetch place details");
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }
}
