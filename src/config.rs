//! Process-wide configuration: the API base URL and dev server defaults.

use std::sync::OnceLock;

/// Environment variable holding the API base URL.
pub const API_BASE_ENV: &str = "VITE_API_BASE";

/// Default dev server bind address
pub const DEFAULT_BIND: &str = "127.0.0.1:1337";

/// Default backend the dev server proxies to
pub const DEFAULT_BACKEND: &str = "127.0.0.1:9069";

/// Path prefix forwarded to the backend
pub const DEFAULT_API_PATH: &str = "/api";

/// Directory holding the built dashboard
pub const DEFAULT_STATIC_DIR: &str = "dist";

/// Hostnames accepted besides localhost and raw IP addresses
pub const DEFAULT_ALLOWED_HOSTS: &[&str] = &["dev.larsw.net"];

/// Origin used when the base URL is relative and no other origin is given.
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:1337";

static API_BASE: OnceLock<String> = OnceLock::new();

/// Turns a raw environment value into a base URL; absent means same-origin.
pub fn resolve_api_base(value: Option<String>) -> String {
    value.unwrap_or_default()
}

/// Returns the API base URL, reading [`API_BASE_ENV`] on first use only.
pub fn api_base() -> &'static str {
    API_BASE.get_or_init(|| resolve_api_base(std::env::var(API_BASE_ENV).ok()))
}

/// Prepends `http://` when the address carries no scheme.
pub fn with_scheme(addr: &str) -> String {
    if addr.starts_with("http://") || addr.starts_with("https://") {
        addr.to_string()
    } else {
        format!("http://{}", addr)
    }
}
