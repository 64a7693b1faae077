//! Route definitions

use crate::handlers;
use crate::SharedState;
use axum::{routing::get, Router};
use tower_http::compression::CompressionLayer;

/// Create the application router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .with_state(state)
        .layer(CompressionLayer::new())
}
