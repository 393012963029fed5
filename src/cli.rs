//! Command-line interface of the dev server.

use argh::FromArgs;
use std::{net::SocketAddr, path::PathBuf};

use crate::config;
use crate::hosts::AllowedHosts;

/// Dev server for the homelab dashboard: static files plus an API proxy
#[derive(Debug, FromArgs)]
pub struct Cli {
    /// path to the built dashboard (default: 'dist')
    #[argh(option, long = "static-dir", default = "PathBuf::from(config::DEFAULT_STATIC_DIR)")]
    pub static_dir: PathBuf,

    /// backend API address (default: '127.0.0.1:9069')
    #[argh(option, default = "config::DEFAULT_BACKEND.to_string()")]
    pub api: String,

    /// API path prefix (default: '/api')
    #[argh(option, long = "api-path", default = "config::DEFAULT_API_PATH.to_string()")]
    pub api_path: String,

    /// server bind address (default: '127.0.0.1:1337')
    #[argh(option, default = "default_bind()")]
    pub bind: SocketAddr,

    /// extra hostname to accept, repeatable; a leading '.' allows subdomains
    /// (default: 'dev.larsw.net')
    #[argh(option, long = "allowed-host")]
    pub allowed_hosts: Vec<String>,
}

impl Cli {
    pub fn allowed_hosts(&self) -> AllowedHosts {
        if self.allowed_hosts.is_empty() {
            AllowedHosts::new(config::DEFAULT_ALLOWED_HOSTS)
        } else {
            AllowedHosts::new(&self.allowed_hosts)
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 1337))
}
