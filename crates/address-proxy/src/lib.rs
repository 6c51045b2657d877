//! Address Proxy - thin HTTP front for a places provider.
//!
//! Exposes two endpoints used by the registration form's address field:
//! - `POST /api/fetchSuggestions` forwards free text to the suggestion search
//! - `POST /api/fetchPlaceDetails` resolves a place id to a full address
//!
//! Handlers keep no state between requests; the API key never leaves the server.

pub mod api;
pub mod config;
pub mod error;

pub use config::Config;
pub use error::ProxyError;
