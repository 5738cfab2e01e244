use anyhow::Result;
use std::net::SocketAddr;

mod handlers;
mod routes;
mod state;

use common::config::Settings;
use common::db::{DbPool, RedisCache};
use common::telemetry;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Optional local .env file; absent in production.
    dotenvy::dotenv().ok();

    let config = Settings::load()?;
    let _log_guards = telemetry::init_logging(&config)?;

    tracing::info!(
        app_name = %config.app_name,
        environment = %config.environment,
        "Starting API server"
    );

    // Initialize database connection pool
    let db_pool = DbPool::new(&config).await?;
    tracing::info!("Database connection pool established");

    // Redis connects lazily on first use; an unconfigured or unreachable
    // server leaves the API running without it.
    let redis = RedisCache::new(config.redis_url.clone());

    // Create application state
    let state = AppState::new(db_pool, redis, config.clone());

    // Create router
    let app = routes::create_router(state.clone());

    // Start server
    let addr = SocketAddr::from((config.host.parse::<std::net::IpAddr>()?, config.port));
    tracing::info!(addr = %addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.redis.close().await;
    state.db_pool.close().await;

    tracing::info!("API server stopped");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Initiating graceful shutdown");
}
