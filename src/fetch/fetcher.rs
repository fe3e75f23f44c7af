//! Sequential exchange fetcher

use super::{ExchangeOutcome, FetchBatch, FetchError, PriceResult, PriceSource, TransportError};
use crate::exchange::{extract_price, Exchange};
use crate::format::{display_string, speech_string};
use crate::telemetry::{record_fetch, record_latency};
use chrono::Utc;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default bound on a single exchange request
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches and formats prices for a set of exchanges, one at a time
pub struct PriceFetcher<S> {
    source: S,
    request_timeout: Duration,
    endpoints: HashMap<Exchange, String>,
}

impl<S: PriceSource> PriceFetcher<S> {
    /// Create a fetcher using the built-in exchange table
    pub fn new(source: S) -> Self {
        Self {
            source,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            endpoints: HashMap::new(),
        }
    }

    /// Bound each request, independent of any timeout in the source
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Replace the URL of some exchanges; their JSON paths are unchanged
    pub fn with_endpoints(mut self, endpoints: HashMap<Exchange, String>) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// URL queried for an exchange
    pub fn url_for(&self, exchange: Exchange) -> &str {
        self.endpoints
            .get(&exchange)
            .map(String::as_str)
            .unwrap_or(exchange.spec().url)
    }

    /// Fetch, parse and format the price of one exchange
    pub async fn fetch(&self, exchange: Exchange) -> Result<PriceResult, FetchError> {
        let url = self.url_for(exchange);
        let started = Instant::now();

        let body = tokio::time::timeout(self.request_timeout, self.source.fetch_body(url))
            .await
            .map_err(|_| TransportError::Timeout(self.request_timeout))??;

        record_latency(exchange, started.elapsed());

        let price = extract_price(&body, exchange.spec().price_pointer)?;

        Ok(PriceResult {
            exchange,
            price,
            display: display_string(price),
            speech: speech_string(price, exchange),
            fetched_at: Utc::now(),
        })
    }

    /// Query every exchange in order; failures never abort the batch
    pub async fn fetch_all(&self, exchanges: &[Exchange]) -> FetchBatch {
        let mut outcomes = Vec::with_capacity(exchanges.len());

        for &exchange in exchanges {
            let result = self.fetch(exchange).await;

            match &result {
                Ok(price) => {
                    tracing::info!(
                        exchange = %exchange,
                        price = %price.price,
                        display = %price.display,
                        "Fetched price"
                    );
                    record_fetch(exchange, "ok");
                }
                Err(e) => {
                    tracing::warn!(exchange = %exchange, error = %e, "Price fetch failed");
                    record_fetch(exchange, e.kind());
                }
            }

            outcomes.push(ExchangeOutcome { exchange, result });
        }

        FetchBatch::new(outcomes)
    }
}
