//! Task API server entry point.

use std::sync::Arc;

use sqlx::sqlite::SqlitePool;
use taskboard::api::routes::create_router;
use taskboard::infrastructure::{AppConfig, AppDependencies, SqliteTaskStore};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,taskboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!("Failed to load configuration from environment: {error}");
            tracing::info!("Using default configuration");
            AppConfig::default()
        }
    };

    // An unreachable store at startup is fatal; do not serve degraded.
    let pool = match SqlitePool::connect(&config.database_url).await {
        Ok(pool) => pool,
        Err(error) => {
            tracing::error!("Error connecting to task store: {error}");
            std::process::exit(1);
        }
    };

    let store = SqliteTaskStore::new(pool);
    if let Err(error) = store.init_schema().await {
        tracing::error!("Error preparing task store schema: {error}");
        std::process::exit(1);
    }
    tracing::info!("Connected to task store at {}", config.database_url);

    let bind_address = config.bind_address();
    let dependencies = AppDependencies::new(config, Arc::new(store));

    let app = create_router(dependencies)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!("Error binding {bind_address}: {error}");
            std::process::exit(1);
        }
    };
    tracing::info!("Server is running on http://{bind_address}");

    if let Err(error) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {error}");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    tracing::info!("Shutdown signal received");
}
