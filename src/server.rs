//! Dev server router assembly.

use axum::{
    Router,
    middleware,
    routing::{any, get},
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;

use crate::handlers::{proxy_api, serve_static};
use crate::middleware::{check_host, log_requests};
use crate::state::AppState;

/// Builds the dev server: API proxy for the prefix itself and everything
/// below it, static files and route fallback everywhere else.
///
/// Layers run outermost first: request logging, host check, compression.
pub fn router(state: Arc<AppState>) -> Router {
    let prefix = state.api_path.as_str();
    Router::new()
        .route(prefix, any(proxy_api))
        .route(&format!("{}/", prefix), any(proxy_api))
        .route(&format!("{}/{{*path}}", prefix), any(proxy_api))
        .fallback(get(serve_static))
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn_with_state(state.clone(), check_host))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}
