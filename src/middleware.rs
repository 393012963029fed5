//! Request logging and host checking middleware.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::{sync::Arc, time::Instant};
use tracing::{info, warn};

use crate::request_id::RequestId;
use crate::state::AppState;

/// Assigns each request a [`RequestId`] and a start time, then logs it
///
/// Both are stored in the request extensions for downstream handlers.
pub async fn log_requests(mut req: Request<Body>, next: Next) -> Response {
    let id = RequestId::generate();
    let method = req.method().clone();
    let uri = req.uri().clone();

    req.extensions_mut().insert(id.clone());
    req.extensions_mut().insert(Instant::now());

    info!("{} → {} {}", id, method, uri.path());
    next.run(req).await
}

/// Refuses requests whose host is not on the allow-list with 403.
pub async fn check_host(
    State(state): State<Arc<AppState>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| req.uri().authority().map(|authority| authority.as_str()))
        .unwrap_or_default()
        .to_string();

    if state.allowed_hosts.permits(&host) {
        return next.run(req).await;
    }

    match req.extensions().get::<RequestId>() {
        Some(id) => warn!("{} ✗ blocked host {:?}", id, host),
        None => warn!("blocked host {:?}", host),
    }
    (
        StatusCode::FORBIDDEN,
        format!("Blocked request. This host ({:?}) is not allowed.", host),
    )
        .into_response()
}
