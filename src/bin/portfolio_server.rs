// Portfolio Server Binary Entry Point
//
// Purpose: serve the portfolio page and its page-session UI endpoints
// Usage: cargo run --bin portfolio_server

use portfolio_site::{create_router, AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "portfolio_site=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting portfolio server...");

    let config = ServerConfig::from_env()?;

    tracing::info!("Configuration:");
    tracing::info!("  BIND_ADDR: {}", config.bind_addr);
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  STATIC_DIR: {}", config.static_dir);
    tracing::info!("  SESSION_TTL_SECS: {}", config.session_ttl.as_secs());
    tracing::info!("  SESSION_CAPACITY: {}", config.session_capacity);
    tracing::info!("  VISIBILITY_THRESHOLD: {}", config.threshold.ratio());

    let state = AppState::new(&config)?;
    tracing::info!("Application state initialized successfully");

    let app = create_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
