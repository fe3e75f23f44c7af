//! Configuration types for btc-ticker
//!
//! Every section is optional; a missing file or section falls back to the
//! built-in defaults.

use crate::exchange::Exchange;
use crate::fetch::HttpSourceConfig;
use crate::telemetry::LogFormat;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Upper bound for any configured timeout (seconds)
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Per-exchange URL overrides; JSON paths stay fixed
    #[serde(default)]
    pub endpoints: HashMap<Exchange, String>,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Fetch cycle configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect + TLS handshake timeout (seconds)
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Exchanges to query, in card order
    #[serde(default = "Exchange::all")]
    pub exchanges: Vec<Exchange>,
}

fn default_timeout_secs() -> u64 {
    10
}
fn default_connect_timeout_secs() -> u64 {
    5
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            exchanges: Exchange::all(),
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn http(&self) -> HttpSourceConfig {
        HttpSourceConfig {
            timeout: self.timeout(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the fetcher would refuse at runtime
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(1..=MAX_TIMEOUT_SECS).contains(&self.fetch.timeout_secs) {
            anyhow::bail!(
                "fetch.timeout_secs must be between 1 and {}, got {}",
                MAX_TIMEOUT_SECS,
                self.fetch.timeout_secs
            );
        }
        if !(1..=MAX_TIMEOUT_SECS).contains(&self.fetch.connect_timeout_secs) {
            anyhow::bail!(
                "fetch.connect_timeout_secs must be between 1 and {}, got {}",
                MAX_TIMEOUT_SECS,
                self.fetch.connect_timeout_secs
            );
        }
        if self.fetch.exchanges.is_empty() {
            anyhow::bail!("fetch.exchanges must name at least one exchange");
        }
        for (exchange, url) in &self.endpoints {
            if !url.to_ascii_lowercase().starts_with("https://") {
                anyhow::bail!("endpoint for {} must be https: {}", exchange, url);
            }
        }
        Ok(())
    }
}
