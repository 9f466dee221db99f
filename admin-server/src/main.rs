use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use admin_server::backend::{BackendClient, BackendConfig};
use admin_server::cache::{CacheConfig, CachedBackend};
use admin_server::web::{AppState, create_router};

/// Fallback backend URL for local development.
const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Where the booking backend lives
    let backend_url = std::env::var("BACKEND_URL").unwrap_or_else(|_| {
        tracing::warn!("BACKEND_URL not set, defaulting to {DEFAULT_BACKEND_URL}");
        DEFAULT_BACKEND_URL.to_string()
    });

    // Where the admin SPA's built assets live
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

    let backend_config = BackendConfig::new(&backend_url);
    let backend_client =
        BackendClient::new(backend_config).expect("Failed to create backend client");
    let backend = CachedBackend::new(backend_client, &CacheConfig::default());

    let state = AppState::new(backend);
    let app = create_router(state, &static_dir);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()
        .expect("Invalid BIND_ADDR");

    tracing::info!("Flight admin console listening on http://{addr}");
    tracing::info!("Proxying booking backend at {backend_url}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server error");
}
