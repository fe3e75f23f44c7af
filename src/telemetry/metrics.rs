//! Fetch metrics
//!
//! Recorded through the `metrics` facade. Nothing is exported unless the
//! host installs a recorder; without one these calls are no-ops.

use crate::exchange::Exchange;
use std::time::Duration;

const FETCH_TOTAL: &str = "btc_ticker_fetch_total";
const FETCH_LATENCY_MS: &str = "btc_ticker_fetch_latency_ms";

/// Count one fetch attempt by outcome (`ok`, `transport_error`, `parse_error`)
pub fn record_fetch(exchange: Exchange, outcome: &'static str) {
    metrics::counter!(FETCH_TOTAL, "exchange" => exchange.name(), "outcome" => outcome)
        .increment(1);
}

/// Record how long an exchange took to return its body
pub fn record_latency(exchange: Exchange, duration: Duration) {
    let value_ms = duration.as_secs_f64() * 1000.0;

    tracing::debug!(
        metric = FETCH_LATENCY_MS,
        exchange = %exchange,
        value_ms,
        "Recording latency"
    );

    metrics::histogram!(FETCH_LATENCY_MS, "exchange" => exchange.name()).record(value_ms);
}
