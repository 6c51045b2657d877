//! Places API HTTP client.

use crate::config::PlacesConfig;
use crate::error::PlacesError;
use crate::types::*;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};
use urlencoding::encode;

/// Client for a single place index.
///
/// The API key is stored using `SecretString` so it never shows up in logs
/// or debug output. Each operation makes exactly one outbound request.
#[derive(Clone)]
pub struct PlacesClient {
    client: Client,
    base_url: String,
    index_name: String,
    api_key: SecretString,
    max_results: u32,
    language: String,
}

impl PlacesClient {
    /// Create a new places client.
    pub fn new(config: &PlacesConfig) -> Result<Self, PlacesError> {
        if config.api_key.expose_secret().trim().is_empty() {
            return Err(PlacesError::Config("places API key is empty".into()));
        }

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.endpoint(),
            index_name: config.index_name.clone(),
            api_key: config.api_key.clone(),
            max_results: config.max_results,
            language: config.language.clone(),
        })
    }

    /// Get the configured place index name.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    fn index_url(&self) -> String {
        format!(
            "{}/places/v0/indexes/{}",
            self.base_url,
            encode(&self.index_name)
        )
    }

    /// Search for place suggestions matching free text.
    #[instrument(skip(self, text), fields(index = %self.index_name, text_len = text.len()))]
    pub async fn search_suggestions(&self, text: &str) -> Result<SearchResult, PlacesError> {
        let request = SuggestionsRequest {
            text: text.to_string(),
            max_results: self.max_results,
        };

        let response = self
            .client
            .post(format!("{}/search/suggestions", self.index_url()))
            .query(&[("key", self.api_key.expose_secret().as_str())])
            .json(&request)
            .send()
            .await
            .map_err(PlacesError::from_transport)?;

        let result = self.handle_response::<SearchResult>(response).await?;
        debug!(candidates = result.candidates.len(), "Suggestion search completed");
        Ok(result)
    }

    /// Look up the full address of a place by its identifier.
    #[instrument(skip(self), fields(index = %self.index_name))]
    pub async fn get_place(&self, place_id: &str) -> Result<PlaceDetailResponse, PlacesError> {
        let response = self
            .client
            .get(format!("{}/places/{}", self.index_url(), encode(place_id)))
            .query(&[
                ("key", self.api_key.expose_secret().as_str()),
                ("language", self.language.as_str()),
            ])
            .send()
            .await
            .map_err(PlacesError::from_transport)?;

        self.handle_response::<PlaceDetailResponse>(response).await
    }

    /// Handle HTTP response, converting errors appropriately.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, PlacesError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await.map_err(PlacesError::from_transport)?;
            debug!("Response body: {}", truncate(&body, 200));
            serde_json::from_str(&body).map_err(PlacesError::from)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            warn!(status = %status, "Places provider returned an error");
            Err(PlacesError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

fn truncate(body: &str, max: usize) -> &str {
    match body.char_indices().nth(max) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
