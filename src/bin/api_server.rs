// API Server Binary Entry Point
//
// Purpose: Serve the content catalog over HTTP
// Usage: cargo run --features api --bin api_server

use std::net::SocketAddr;
use theopedia::{create_router, AppState, SiteConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "theopedia=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let config = SiteConfig::from_env()?;

    tracing::info!("Configuration:");
    tracing::info!("  CONTENT_DIR: {}", config.content_dir.display());
    tracing::info!("  BASE_URL: {}", config.base_url);
    tracing::info!("  LOCALES: {} (default {})", config.locales.join(", "), config.default_locale);
    tracing::info!("  PORT: {}", config.port);

    let port = config.port;

    tracing::info!("Initializing application state...");
    let state = AppState::new(config).await?;
    tracing::info!("Application state initialized successfully");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
