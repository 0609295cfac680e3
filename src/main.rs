mod model;
mod server;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    router,
    startup,
    state::AppState,
};

/// Requests per peer IP allowed in a burst before rate limiting kicks in.
const RATE_LIMIT_BURST: u32 = 30;
const RATE_LIMIT_REPLENISH_MS: u64 = 500;
const RATE_LIMIT_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let discord = startup::setup_discord_client(&config, http_client.clone()).await;
    let cors = startup::setup_cors(&config)?;

    let state = AppState::new(
        db,
        http_client,
        oauth_client,
        Arc::new(discord),
        config.app_url.clone(),
    );

    let governor_config = GovernorConfigBuilder::default()
        .per_millisecond(RATE_LIMIT_REPLENISH_MS)
        .burst_size(RATE_LIMIT_BURST)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid rate limit configuration".to_string()))?;

    let limiter = governor_config.limiter().clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(RATE_LIMIT_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            limiter.retain_recent();
        }
    });

    let app = router::router()
        .with_state(state)
        .layer(session)
        .layer(GovernorLayer::new(governor_config))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
