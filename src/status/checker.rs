//! Status checker
//!
//! Owns the outbound HTTP side of a lookup. One GET per check, bounded by
//! the configured timeout; every transport failure collapses into the fixed
//! indeterminate message rather than an error.

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Result, StatusError};
use crate::status::{parser, INDETERMINATE_MESSAGE};

/// Checks whether a website is up by scraping isitdownrightnow.com
pub struct StatusChecker {
    /// HTTP client (connection pooling is transparent to callers)
    http_client: reqwest::Client,

    /// Endpoint, user agent, and timeout
    config: Config,
}

impl StatusChecker {
    /// Create a new status checker
    pub fn new(config: Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Check the status of a website by its root domain.
    ///
    /// The domain is interpolated into the lookup URL verbatim; no
    /// validation or escaping is performed (accepted weakness, inherited
    /// from the scraped endpoint's own query format).
    ///
    /// Always returns a reply string, never an error: any transport failure
    /// or unreadable page reads as "could not determine".
    pub async fn check_status(&self, root_domain: &str) -> String {
        match self.fetch_status_page(root_domain).await {
            Ok(body) => parser::resolve_status(&body).render(),
            Err(e) => {
                warn!(domain = root_domain, error = %e, "status lookup failed");
                INDETERMINATE_MESSAGE.to_string()
            }
        }
    }

    /// Fetch the raw status page for a domain
    async fn fetch_status_page(&self, root_domain: &str) -> Result<String> {
        let url = format!("{}{}", self.config.base_url, root_domain);
        debug!(%url, "fetching status page");

        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatusError::RequestFailed { status }.into());
        }

        Ok(response.text().await?)
    }
}
