//! HTTP API for the address proxy.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::{logging_middleware, rate_limit_middleware, RateLimitState, RouteLimit};
pub use types::*;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use places_client::PlacesClient;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Places provider client
    pub places: Arc<PlacesClient>,
}

impl AppState {
    /// Create new application state.
    pub fn new(places: PlacesClient) -> Self {
        Self {
            places: Arc::new(places),
        }
    }
}

/// Create the API router with default rate limiting.
pub fn create_router(state: AppState) -> Router {
    create_router_with_rate_limit(state, RateLimitState::default())
}

/// Create the API router with custom rate limiting.
pub fn create_router_with_rate_limit(state: AppState, rate_limit: RateLimitState) -> Router {
    let suggestions = Router::new()
        .route("/api/fetchSuggestions", post(handlers::fetch_suggestions))
        .route_layer(axum_middleware::from_fn_with_state(
            rate_limit.suggestions,
            rate_limit_middleware,
        ));

    let place_details = Router::new()
        .route("/api/fetchPlaceDetails", post(handlers::fetch_place_details))
        .route_layer(axum_middleware::from_fn_with_state(
            rate_limit.place_details,
            rate_limit_middleware,
        ));

    Router::new()
        // Health check (no rate limiting)
        .route("/health", get(handlers::health))
        .merge(suggestions)
        .merge(place_details)
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Allow any origin to call the API.
pub fn with_cors(router: Router) -> Router {
    router.layer(CorsLayer::permissive())
}
