//! API request and response types.

use serde::{Deserialize, Serialize};

/// Request to search for address suggestions.
#[derive(Debug, Default, Deserialize)]
pub struct SuggestionsRequest {
    /// Free text typed by the user
    pub text: Option<String>,
}

/// Request to look up a single place.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceDetailsRequest {
    /// Provider place identifier from a previous suggestion
    #[serde(rename = "placeId")]
    pub place_id: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Returns the field only if it is present and not blank.
pub(crate) fn required(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}
