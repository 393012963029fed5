//! Shared dev server state.

use reqwest::Client;
use std::path::PathBuf;

use crate::hosts::AllowedHosts;

/// Read-only state shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    /// Base URL of the backend (e.g. "http://127.0.0.1:9069")
    pub api_base_url: String,
    /// Path prefix forwarded to the backend (e.g. "/api")
    pub api_path: String,
    /// Root directory of the built dashboard
    pub static_dir: PathBuf,
    pub allowed_hosts: AllowedHosts,
    /// Connection pool for proxied requests
    pub http: Client,
}

impl AppState {
    pub fn new(
        api_base_url: impl Into<String>,
        api_path: &str,
        static_dir: PathBuf,
        allowed_hosts: AllowedHosts,
    ) -> Self {
        let api_base_url: String = api_base_url.into();
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            api_path: api_path.trim_end_matches('/').to_string(),
            static_dir,
            allowed_hosts,
            http: Client::new(),
        }
    }
}
