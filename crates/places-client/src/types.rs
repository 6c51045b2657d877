//! Request and response types for the places API.
//!
//! Field names follow the provider's PascalCase wire format. Fields the
//! provider may add are ignored on the way in, so callers only ever see the
//! shape declared here.

use serde::{Deserialize, Serialize};

/// Body of a suggestion search.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SuggestionsRequest {
    pub text: String,
    pub max_results: u32,
}

/// Summary block echoed back by a suggestion search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SearchSummary {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    pub data_source: String,
}

/// A single suggestion: display text plus the provider's opaque place id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaceCandidate {
    #[serde(rename = "Text")]
    pub display_text: String,
    /// Query-type suggestions carry no place id.
    #[serde(rename = "PlaceId", default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

impl PlaceCandidate {
    pub fn new(display_text: impl Into<String>, place_id: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
            place_id: Some(place_id.into()),
        }
    }
}

/// Result of a suggestion search, in the provider's relevance order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    #[serde(rename = "Summary")]
    pub summary: SearchSummary,
    #[serde(rename = "Results", default)]
    pub candidates: Vec<PlaceCandidate>,
}

/// Structured address of a single place.
///
/// Every component is optional; the provider omits the ones it doesn't know.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PlaceDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Envelope returned by a place lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaceDetailResponse {
    #[serde(rename = "Place")]
    pub place: PlaceDetail,
}
