//! Shared helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use homelab_web::{hosts::AllowedHosts, server, state::AppState};
use nanoid::nanoid;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};

pub const INDEX_HTML: &str = "<!doctype html><title>homelab</title><div id=\"app\"></div>";
pub const APP_JS: &str = "console.log('homelab');";

/// Serves `app` on an ephemeral port and returns its address.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// An address nothing listens on.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Temporary copy of a built dashboard, removed on drop
pub struct StaticDir(pub PathBuf);

impl StaticDir {
    pub fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("homelab-web-{}", nanoid!(8)));
        std::fs::create_dir_all(dir.join("assets")).unwrap();
        std::fs::write(dir.join("index.html"), INDEX_HTML).unwrap();
        std::fs::write(dir.join("assets").join("app.js"), APP_JS).unwrap();
        Self(dir)
    }
}

impl Drop for StaticDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

/// Starts the dev server in front of `backend` and returns its address.
pub async fn spawn_dev_server(
    backend: SocketAddr,
    static_dir: &StaticDir,
    allowed_hosts: AllowedHosts,
) -> SocketAddr {
    let state = Arc::new(AppState::new(
        format!("http://{}", backend),
        "/api",
        static_dir.0.clone(),
        allowed_hosts,
    ));
    spawn(server::router(state)).await
}
