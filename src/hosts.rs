//! Host header allow-list for the dev server.
//!
//! Requests naming a host outside the list are refused so a page on some
//! other domain cannot reach the dev server through DNS rebinding.

use std::net::IpAddr;

/// Hostnames the dev server answers for
///
/// IP addresses, `localhost` and `*.localhost` are always accepted. An entry
/// starting with `.` also accepts every subdomain of that name.
#[derive(Debug, Clone, Default)]
pub struct AllowedHosts {
    hosts: Vec<String>,
}

impl AllowedHosts {
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            hosts: hosts
                .into_iter()
                .map(|h| h.as_ref().trim().to_ascii_lowercase())
                .filter(|h| !h.is_empty())
                .collect(),
        }
    }

    /// Whether a `Host` header value (port included or not) is acceptable.
    pub fn permits(&self, host: &str) -> bool {
        let name = hostname(host).to_ascii_lowercase();
        if name.is_empty() {
            return false;
        }
        if name.parse::<IpAddr>().is_ok() || name == "localhost" || name.ends_with(".localhost") {
            return true;
        }

        self.hosts.iter().any(|entry| match entry.strip_prefix('.') {
            Some(domain) => name == domain || name.ends_with(entry.as_str()),
            None => name == *entry,
        })
    }
}

/// Strips the port and IPv6 brackets from a `Host` header value.
fn hostname(host: &str) -> &str {
    let host = host.trim();
    if let Some(rest) = host.strip_prefix('[') {
        return rest.split(']').next().unwrap_or_default();
    }
    match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_addresses_always_pass() {
        let hosts = AllowedHosts::default();
        assert!(hosts.permits("127.0.0.1:1337"));
        assert!(hosts.permits("[::1]:1337"));
        assert!(hosts.permits("localhost"));
        assert!(hosts.permits("app.localhost:1337"));
    }

    #[test]
    fn test_listed_hosts() {
        let hosts = AllowedHosts::new(["dev.larsw.net"]);
        assert!(hosts.permits("dev.larsw.net"));
        assert!(hosts.permits("DEV.larsw.net:443"));
        assert!(!hosts.permits("larsw.net"));
        assert!(!hosts.permits("evil.dev.larsw.net"));
        assert!(!hosts.permits("evil.example.com"));
    }

    #[test]
    fn test_wildcard_entries() {
        let hosts = AllowedHosts::new([".lan"]);
        assert!(hosts.permits("lan"));
        assert!(hosts.permits("nas.lan:8080"));
        assert!(!hosts.permits("nas.wlan"));
    }

    #[test]
    fn test_empty_host_is_refused() {
        assert!(!AllowedHosts::new(["dev.larsw.net"]).permits(""));
    }
}
