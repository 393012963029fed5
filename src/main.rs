//! Dev server for the homelab dashboard.
//!
//! - Serves the built dashboard with history-mode fallback for its routes
//! - Forwards `/api/*` to the backend
//! - Refuses requests for hosts outside the allow-list
//! - Logs every request with a colour-coded id and its latency

use homelab_web::{cli::Cli, config, server, state::AppState};
use std::{error::Error, sync::Arc};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Cli = argh::from_env();
    let static_dir = args.static_dir.canonicalize().map_err(|e| {
        format!(
            "static directory {} is not usable: {}",
            args.static_dir.display(),
            e
        )
    })?;

    let state = Arc::new(AppState::new(
        config::with_scheme(&args.api),
        &args.api_path,
        static_dir,
        args.allowed_hosts(),
    ));
    if !state.api_path.starts_with('/') {
        return Err(format!(
            "API path prefix {:?} must start with '/' and not be the root",
            args.api_path
        )
        .into());
    }
    let app = server::router(state.clone());

    info!("Serving static files from: {:?}", state.static_dir);
    info!(
        "Proxying {}/* to: {}{}/",
        state.api_path, state.api_base_url, state.api_path
    );
    info!("Allowed hosts: {:?}", state.allowed_hosts);
    info!("Server running on: http://{}", args.bind);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
