//! Configuration for the isitdown MCP Server
//!
//! All process-wide constants (lookup URL, user agent, fetch timeout) live
//! here so tests can point the checker at a fixture server.

use std::time::Duration;

/// Configuration for the isitdown MCP Server
#[derive(Debug, Clone)]
pub struct Config {
    /// URL prefix the domain is appended to (ends in `?domain=`)
    pub base_url: String,

    /// User-Agent header sent with the lookup request
    pub user_agent: String,

    /// Deadline for the outbound fetch
    pub timeout: Duration,
}

impl Config {
    /// Create a configuration from defaults and environment overrides
    pub fn new() -> Self {
        let base_url = std::env::var("ISITDOWN_BASE_URL")
            .unwrap_or_else(|_| isitdown::BASE_URL.to_string());

        let user_agent = std::env::var("ISITDOWN_USER_AGENT")
            .unwrap_or_else(|_| isitdown::USER_AGENT.to_string());

        let timeout_secs = std::env::var("ISITDOWN_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(isitdown::DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            user_agent,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// isitdownrightnow.com constants
pub mod isitdown {
    /// Lookup endpoint; the raw domain string is appended verbatim
    pub const BASE_URL: &str = "https://www.isitdownrightnow.com/check.php?domain=";

    /// Product-identifying user agent
    pub const USER_AGENT: &str = "isitdown-app/0.0.1";

    /// Default fetch deadline in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
}
