//! Request handlers

use crate::SharedState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use tracing::error;

/// The fixed view returned by the root route.
pub(crate) const INDEX_HTML: &str = "<!DOCTYPE html>\n\
    <html>\n\
    <head><title>Glance</title></head>\n\
    <body><h1>Glance</h1></body>\n\
    </html>\n";

/// Handle the root request.
///
/// Opens and releases a scoped connection; the query step is intentionally
/// unspecified, so no query is issued before the fixed view is returned.
pub async fn index(State(state): State<SharedState>) -> impl IntoResponse {
    match state.storage.check().await {
        Ok(()) => Html(INDEX_HTML).into_response(),
        Err(e) => {
            error!("Root request failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
