//! Upload server implementation
//!
//! HTTP server using Axum: the upload form, the JSON conversion endpoint
//! and health/version probes.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers;
use crate::images::DEFAULT_IMAGES_DIR;

/// Server configuration
#[derive(Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Directory with `<category>.csv` image lookup files
    pub images_dir: PathBuf,
    /// Largest accepted upload, in bytes
    pub max_upload_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            max_upload_bytes: 20 * 1024 * 1024,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub version: String,
    pub images_dir: PathBuf,
}

impl AppState {
    pub fn new(images_dir: PathBuf) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            images_dir,
        }
    }
}

/// Build the router; kept apart from [`run_api_server`] so it can be driven in tests
pub fn create_router(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/version", get(handlers::version))
        .route("/upload", post(handlers::upload))
        .route("/api/v1/convert", post(handlers::convert))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Run the upload server
pub async fn run_api_server(config: ApiConfig) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "pricelist_server=info,aqua_pricelist=info,tower_http=info".into()
            }),
        )
        .init();

    let state = Arc::new(AppState::new(config.images_dir.clone()));
    let app = create_router(state, config.max_upload_bytes);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("🐟 Price-list server starting on http://{}", addr);
    info!("   Upload form: /, JSON: /api/v1/convert");
    info!("   Image tables: {}", config.images_dir.display());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Price-list server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
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

    info!("Shutdown signal received, stopping server...");
}
