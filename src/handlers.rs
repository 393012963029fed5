//! Dev server request handlers.

use axum::{
    body::{Body, Bytes},
    extract::{Extension, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode, Uri, header},
    response::Response,
};
use std::{
    path::{Component, PathBuf},
    sync::Arc,
    time::Instant,
};
use tokio::fs;
use tracing::{error, info};

use crate::request_id::{RequestId, Served};
use crate::routes;
use crate::state::AppState;

/// Serves the built dashboard
///
/// - Directory requests get their `index.html`
/// - Content type is guessed from the file extension
/// - Paths of the route table that match no file get the root `index.html`,
///   so client-side navigation survives a reload
pub async fn serve_static(
    State(state): State<Arc<AppState>>,
    Extension(id): Extension<RequestId>,
    Extension(start_time): Extension<Instant>,
    uri: Uri,
) -> Result<Response, StatusCode> {
    let path = uri.path().trim_start_matches('/');

    // No escaping the static root.
    if PathBuf::from(path)
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        info!(
            "{} ← {} {} ({}ms)",
            id,
            Served::Static,
            StatusCode::NOT_FOUND,
            start_time.elapsed().as_millis()
        );
        return Err(StatusCode::NOT_FOUND);
    }

    let mut file_path = state.static_dir.join(path);
    if file_path.is_dir() {
        file_path.push("index.html");
    }

    let (served, file_path) = if file_path.is_file() {
        (Served::Static, file_path)
    } else if let Some(view) = routes::resolve(uri.path()) {
        info!("{} ↳ {} view", id, view.name());
        (Served::Route, state.static_dir.join("index.html"))
    } else {
        (Served::Static, file_path)
    };

    match fs::read(&file_path).await {
        Ok(content) => {
            let mime_type = mime_guess::from_path(&file_path).first_or_octet_stream();
            let content_type = HeaderValue::from_str(mime_type.as_ref())
                .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
            let mut response = Response::new(Body::from(content));
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, content_type);

            info!(
                "{} ← {} {} ({}ms)",
                id,
                served,
                response.status(),
                start_time.elapsed().as_millis()
            );
            Ok(response)
        }
        Err(_) => {
            info!(
                "{} ← {} {} ({}ms)",
                id,
                served,
                StatusCode::NOT_FOUND,
                start_time.elapsed().as_millis()
            );
            Err(StatusCode::NOT_FOUND)
        }
    }
}

/// Request headers that stay between the browser and the dev server.
/// Without `host` the client writes the backend's own address.
const SKIP_REQUEST_HEADERS: &[&str] = &["host", "accept-encoding", "connection", "keep-alive"];

/// Response headers the dev server recomputes itself.
const SKIP_RESPONSE_HEADERS: &[&str] =
    &["transfer-encoding", "content-encoding", "connection", "keep-alive"];

fn without(headers: &HeaderMap, skip: &[&str]) -> HeaderMap {
    let mut kept = HeaderMap::with_capacity(headers.len());
    for (key, value) in headers.iter() {
        if !skip.contains(&key.as_str()) {
            kept.append(key.clone(), value.clone());
        }
    }
    kept
}

/// Forwards everything under the API prefix to the backend
///
/// Path and query go through unchanged, so `/api/docker/containers?all=1`
/// becomes `{backend}/api/docker/containers?all=1`. The response body is
/// streamed back, which keeps the backend's log streams live.
pub async fn proxy_api(
    State(state): State<Arc<AppState>>,
    Extension(id): Extension<RequestId>,
    Extension(start_time): Extension<Instant>,
    method: Method,
    headers: HeaderMap,
    uri: Uri,
    body: Bytes,
) -> Result<Response, StatusCode> {
    let target = format!(
        "{}{}",
        state.api_base_url,
        uri.path_and_query().map_or("/", |pq| pq.as_str())
    );

    info!("{} → {} {} {}", id, Served::Api, method, target);
    let backend_start = Instant::now();

    let upstream = state
        .http
        .request(method, &target)
        .headers(without(&headers, SKIP_REQUEST_HEADERS))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            error!("{} backend unreachable: {}", id, e);
            info!(
                "{} ← {} {} ({}ms)",
                id,
                Served::Api,
                StatusCode::BAD_GATEWAY,
                start_time.elapsed().as_millis()
            );
            StatusCode::BAD_GATEWAY
        })?;

    let status = upstream.status();
    let response_headers = without(upstream.headers(), SKIP_RESPONSE_HEADERS);
    info!(
        "{} ← {} {} ({}ms backend, {}ms total)",
        id,
        Served::Api,
        status,
        backend_start.elapsed().as_millis(),
        start_time.elapsed().as_millis()
    );

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
