//! Relay configuration
//!
//! The relay is the intermediary service used to sidestep cross-origin
//! fetch restrictions and to accept uploads. Only its base URL is
//! configurable; the proxy and upload endpoints derive from it.

use serde::{Deserialize, Serialize};

/// Relay endpoint used when nothing else is configured
pub const DEFAULT_RELAY_URL: &str = "http://localhost:5001";

/// Base URL of the relay service with derived endpoint builders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    base_url: String,
}

impl RelayConfig {
    /// Create a config from a base URL (trailing slash normalized away)
    pub fn new(url: &str) -> Self {
        Self {
            base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Proxy endpoint for fetching a remote document through the relay
    pub fn proxy_url(&self, target: &str) -> String {
        format!("{}/proxy?url={}", self.base_url, urlencoding::encode(target))
    }

    /// Upload endpoint for multipart file submissions
    pub fn upload_url(&self) -> String {
        format!("{}/upload", self.base_url)
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RELAY_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_trailing_slashes() {
        let config = RelayConfig::new("http://relay.example/ ");
        assert_eq!(config.base_url(), "http://relay.example");
    }

    #[test]
    fn proxy_url_percent_encodes_the_target() {
        let config = RelayConfig::default();
        assert_eq!(
            config.proxy_url("https://example.com/a b?x=1"),
            "http://localhost:5001/proxy?url=https%3A%2F%2Fexample.com%2Fa%20b%3Fx%3D1"
        );
    }

    #[test]
    fn upload_url_derives_from_the_base() {
        assert_eq!(RelayConfig::default().upload_url(), "http://localhost:5001/upload");
    }
}
