//! HTTPS price source backed by reqwest

use super::{PriceSource, TransportError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// User agent sent with every request
const USER_AGENT: &str = concat!("btc-ticker/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP source
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Total request timeout
    pub timeout: Duration,
    /// TCP + TLS handshake timeout
    pub connect_timeout: Duration,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

/// Fetches ticker bodies over TLS only
pub struct HttpSource {
    config: HttpSourceConfig,
    client: Client,
}

impl HttpSource {
    /// Create a source with default timeouts
    pub fn new() -> anyhow::Result<Self> {
        Self::with_config(HttpSourceConfig::default())
    }

    /// Create a source with custom configuration
    pub fn with_config(config: HttpSourceConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .https_only(true)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { config, client })
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    fn map_error(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(self.config.timeout)
        } else if let Some(status) = err.status() {
            TransportError::Status(status.as_u16())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

/// Reject anything that is not an https URL before touching the network
pub(crate) fn require_https(url: &str) -> Result<(), TransportError> {
    let scheme = url.split_once("://").map(|(scheme, _)| scheme);
    match scheme {
        Some(s) if s.eq_ignore_ascii_case("https") => Ok(()),
        _ => Err(TransportError::InsecureEndpoint(url.to_string())),
    }
}

#[async_trait]
impl PriceSource for HttpSource {
    async fn fetch_body(&self, url: &str) -> Result<String, TransportError> {
        require_https(url)?;

        tracing::debug!(url = %url, "Requesting ticker");

        let response = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response.text().await.map_err(|e| self.map_error(e))
    }
}
