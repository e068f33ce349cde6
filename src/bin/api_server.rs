// API Server Binary Entry Point
//
// Purpose: Start the Axum advisory server
// Usage: cargo run --bin api_server

use agri_advisor::{create_router, AppState, Config};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Credentials may live in weather.env next to the binary; absence is fine
    let env_file_loaded = dotenv::from_filename("weather.env").is_ok();

    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "agri_advisor=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");
    if !env_file_loaded {
        tracing::debug!("weather.env not found, using process environment only");
    }

    let config = Config::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  WEATHER_API_URL: {}", config.weather.endpoint);
    tracing::info!("  WEATHER_TIMEOUT: {:?}", config.weather.timeout);
    tracing::info!(
        "  OPENWEATHER_KEY: {}",
        if config.weather.api_key.is_some() { "set" } else { "unset (mock mode)" }
    );

    let state = AppState::new(&config)?;

    // Create router with all endpoints and middleware
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
