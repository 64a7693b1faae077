//! Glance Web Server
//!
//! Axum server exposing the single root route.

mod handlers;
mod routes;

pub use routes::create_router;

use glance_storage::Storage;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
}

impl AppState {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}

pub type SharedState = Arc<AppState>;

/// Server configuration, constructed once at process start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}

/// Bind and serve until the process exits.
pub async fn run(config: ServerConfig, storage: Storage) -> std::io::Result<()> {
    let state = Arc::new(AppState::new(storage));
    let router = create_router(state);

    info!("Starting Glance server on {}", config.bind);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, router).await
}
