//! Where the address field gets its data from.

use crate::error::{FormError, FormResult};
use async_trait::async_trait;
use places_client::{PlaceDetail, PlaceDetailResponse, SearchResult};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Suggestion search and place lookup, as seen by the address field.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressBackend: Send + Sync {
    /// Candidate places for free text, in relevance order.
    async fn fetch_suggestions(&self, text: &str) -> FormResult<SearchResult>;

    /// Full address for a place identifier.
    async fn fetch_place_details(&self, place_id: &str) -> FormResult<PlaceDetail>;
}

/// Calls the address proxy's `/api/*` routes over HTTP.
#[derive(Clone)]
pub struct ProxyBackend {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ProxyBackend {
    /// Create a backend for the proxy at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> FormResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post<T: serde::de::DeserializeOwned>(
        &self,
        route: &str,
        body: serde_json::Value,
    ) -> FormResult<T> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, route))
            .json(&body)
            .send()
            .await
            .map_err(FormError::from_transport)?;

        let status = response.status();
        let text = response.text().await.map_err(FormError::from_transport)?;

        if status.is_success() {
            serde_json::from_str(&text).map_err(FormError::from)
        } else {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|b| b.error)
                .unwrap_or(text);
            warn!(%status, %message, route, "Address proxy returned an error");
            Err(FormError::Proxy {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl AddressBackend for ProxyBackend {
    #[instrument(skip(self, text))]
    async fn fetch_suggestions(&self, text: &str) -> FormResult<SearchResult> {
        let result: SearchResult = self
            .post("/api/fetchSuggestions", serde_json::json!({ "text": text }))
            .await?;
        debug!(candidates = result.candidates.len(), "Suggestions received");
        Ok(result)
    }

    #[instrument(skip(self))]
    async fn fetch_place_details(&self, place_id: &str) -> FormResult<PlaceDetail> {
        let response: PlaceDetailResponse = self
            .post(
                "/api/fetchPlaceDetails",
                serde_json::json!({ "placeId": place_id }),
            )
            .await?;
        Ok(response.place)
    }
}
