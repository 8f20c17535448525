// Preview server entry point
//
// Purpose: serve a site directory with pages rendered on request
// Usage: cargo run --features api --bin preview_server

use portfolio_content::{create_router, AppState, SiteConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "portfolio_content=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting preview server...");

    // Configuration from environment variables
    // Default: ./site on port 3000
    let config = SiteConfig::from_env()?;

    tracing::info!("Configuration:");
    tracing::info!("  SITE_DIR: {}", config.site_dir.display());
    tracing::info!("  PAGES_CONFIG: {:?}", config.pages_config);
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  RENDER_CACHE_TTL_SECS: {}", config.cache_ttl.as_secs());

    let state = AppState::new(&config).await?;
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
