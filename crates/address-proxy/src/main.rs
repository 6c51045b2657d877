//! Address Proxy - Entry point.

use address_proxy::{
    api::{create_router_with_rate_limit, with_cors, AppState, RateLimitState},
    config::Config,
};
use anyhow::Context;
use places_client::PlacesClient;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Address Proxy");

    let places = PlacesClient::new(&config.places).context("Failed to create places client")?;
    info!(
        index = %places.index_name(),
        region = %config.places.region,
        timeout = ?config.places.timeout,
        "Places client ready"
    );

    let state = AppState::new(places);
    let rate_limit = RateLimitState::new(
        config.rate_limit.suggestions_per_minute,
        config.rate_limit.place_details_per_minute,
    );

    let mut app = create_router_with_rate_limit(state, rate_limit);
    if config.server.allow_cors {
        info!("CORS enabled for all origins");
        app = with_cors(app);
    }

    let addr = SocketAddr::new(
        config
            .server
            .listen_addr
            .parse()
            .with_context(|| format!("Invalid listen address: {}", config.server.listen_addr))?,
        config.server.port,
    );

    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
