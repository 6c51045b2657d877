//! HTTP request handlers.

use super::types::{required, HealthResponse, PlaceDetailsRequest, SuggestionsRequest};
use super::AppState;
use crate::error::ProxyError;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use places_client::{PlaceDetailResponse, SearchResult};
use tracing::{debug, info, warn};

const SUGGESTIONS_FAILED: &str = "Failed to fetch suggestions";
const PLACE_DETAILS_FAILED: &str = "Failed to fetch place details";

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Forward free text to the provider's suggestion search.
pub async fn fetch_suggestions(
    State(state): State<AppState>,
    payload: Result<Json<SuggestionsRequest>, JsonRejection>,
) -> Result<Json<SearchResult>, ProxyError> {
    let request = payload.map(|Json(r)| r).unwrap_or_else(|rejection| {
        debug!(%rejection, "Unreadable suggestions request body");
        SuggestionsRequest::default()
    });
    let text = required(request.text).ok_or(ProxyError::Validation("Text is required"))?;

    let result = state
        .places
        .search_suggestions(&text)
        .await
        .map_err(|e| {
            warn!(error = %e, "Suggestion search failed");
            ProxyError::from_places(e, SUGGESTIONS_FAILED)
        })?;

    info!(candidates = result.candidates.len(), "Suggestions fetched");
    Ok(Json(result))
}

/// Look up the full address for a place identifier.
pub async fn fetch_place_details(
    State(state): State<AppState>,
    payload: Result<Json<PlaceDetailsRequest>, JsonRejection>,
) -> Result<Json<PlaceDetailResponse>, ProxyError> {
    let request = payload.map(|Json(r)| r).unwrap_or_else(|rejection| {
        debug!(%rejection, "Unreadable place details request body");
        PlaceDetailsRequest::default()
    });
    let place_id =
        required(request.place_id).ok_or(ProxyError::Validation("Place ID is required"))?;

    let detail = state.places.get_place(&place_id).await.map_err(|e| {
        warn!(error = %e, "Place lookup failed");
        ProxyError::from_places(e, PLACE_DETAILS_FAILED)
    })?;

    info!("Place details fetched");
    Ok(Json(detail))
}
