//! Places provider configuration.

use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

/// Connection settings for a place index.
///
/// Deserialised from the `PLACES__*` environment section by the binaries,
/// or built directly in tests.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacesConfig {
    /// API key sent as the `key` query credential
    pub api_key: SecretString,

    /// AWS region hosting the place index
    #[serde(default = "default_region")]
    pub region: String,

    /// Place index name
    #[serde(default = "default_index_name")]
    pub index_name: String,

    /// Override for the provider endpoint (defaults to the regional AWS host)
    #[serde(default)]
    pub base_url: Option<String>,

    /// Maximum suggestions requested per search
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    /// Language for place lookups
    #[serde(default = "default_language")]
    pub language: String,

    /// Deadline for every outbound request
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

impl PlacesConfig {
    /// Create a configuration with default settings for the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            region: default_region(),
            index_name: default_index_name(),
            base_url: None,
            max_results: default_max_results(),
            language: default_language(),
            timeout: default_timeout(),
        }
    }

    /// Endpoint the client talks to.
    pub fn endpoint(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://places.geo.{}.amazonaws.com", self.region),
        }
    }
}

fn default_region() -> String {
    "ap-southeast-2".into()
}

fn default_index_name() -> String {
    "z-location-index".into()
}

fn default_max_results() -> u32 {
    10
}

fn default_language() -> String {
    "en".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}
