//! # Surah Site Server
//!
//! Entry point: sets up logging, loads configuration and the surah index,
//! then serves the router from `surah_site::routes`.

use surah_site::config::Config;
use surah_site::routes;
use surah_site::state::AppState;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application entry point
///
/// 1. Sets up logging
/// 2. Loads configuration from the environment
/// 3. Loads the surah catalog and builds the reverse index
/// 4. Serves HTTP until Ctrl+C or SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default: info for dependencies, debug for this crate; RUST_LOG overrides
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,surah_site=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment variables and .env file
    // Invalid values (bad port, out-of-range session TTL) stop startup here
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    // Built once here and shared read-only with every handler
    let app_state = AppState::new(&config)?;
    tracing::info!("Surah index built with {} entries", app_state.surahs.len());

    // Routes, session layer, CORS and request tracing
    let app = routes::router(app_state);

    let bind_addr = config.bind_address();
    tracing::info!("Starting server on {}", bind_addr);

    // Serve until Ctrl+C or SIGTERM, letting in-flight requests finish
    let listener = TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
