//! Per-route rate limits and request logging.

use crate::error::ProxyError;
use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::{num::NonZeroU32, sync::Arc, time::Instant};
use tracing::{debug, error, warn};

type DirectLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Quota for one proxy route.
///
/// Suggestions fire on every keystroke while detail lookups follow a click,
/// so each route draws from its own budget.
#[derive(Clone)]
pub struct RouteLimit {
    route: &'static str,
    limiter: Arc<DirectLimiter>,
}

impl RouteLimit {
    /// Allow `per_minute` requests; zero falls back to one per minute.
    pub fn per_minute(route: &'static str, per_minute: u32) -> Self {
        let quota = Quota::per_minute(NonZeroU32::new(per_minute).unwrap_or(NonZeroU32::MIN));
        Self {
            route,
            limiter: Arc::new(RateLimiter::direct(quota)),
        }
    }

    fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

/// Rate limits for the two proxy routes.
#[derive(Clone)]
pub struct RateLimitState {
    pub suggestions: RouteLimit,
    pub place_details: RouteLimit,
}

impl RateLimitState {
    pub fn new(suggestions_per_minute: u32, place_details_per_minute: u32) -> Self {
        Self {
            suggestions: RouteLimit::per_minute("fetchSuggestions", suggestions_per_minute),
            place_details: RouteLimit::per_minute("fetchPlaceDetails", place_details_per_minute),
        }
    }

    /// Limits high enough that tests never hit them.
    pub fn permissive() -> Self {
        Self::new(10_000, 10_000)
    }
}

impl Default for RateLimitState {
    fn default() -> Self {
        Self::new(600, 120)
    }
}

/// Returns 429 once the route's quota is spent. Rejected calls never reach
/// the provider.
pub async fn rate_limit_middleware(
    State(limit): State<RouteLimit>,
    request: Request,
    next: Next,
) -> Result<Response, ProxyError> {
    if !limit.try_acquire() {
        warn!(route = limit.route, "Rate limit exceeded");
        return Err(ProxyError::RateLimitExceeded);
    }

    Ok(next.run(request).await)
}

/// Logs one line per request with the matched route, status and latency.
///
/// Request bodies carry what the user typed and are never logged.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        error!(%method, %route, status, latency_ms, "Proxy request failed");
    } else if response.status().is_client_error() {
        warn!(%method, %route, status, latency_ms, "Proxy request rejected");
    } else {
        debug!(%method, %route, status, latency_ms, "Proxy request served");
    }

    response
}
