//! Fetch result and error types

use crate::exchange::Exchange;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::time::Duration;
use thiserror::Error;

/// Failure to obtain a response body over a secure channel
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Endpoint is not reachable over TLS
    #[error("Insecure endpoint, https required: {0}")]
    InsecureEndpoint(String),
    /// Request did not complete in time
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    /// Server answered with a non-success status
    #[error("HTTP status {0}")]
    Status(u16),
    /// Connection, TLS or body read failure
    #[error("Request failed: {0}")]
    Request(String),
}

/// Failure to turn a response body into a price
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Malformed JSON: {0}")]
    MalformedJson(String),
    #[error("Missing price field at {0}")]
    MissingField(String),
    #[error("Price field at {path} is not numeric: {value}")]
    NotNumeric { path: String, value: String },
    #[error("Price must be positive, got {0}")]
    NonPositive(Decimal),
}

/// Per-exchange fetch failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl FetchError {
    /// Short label used for metrics and logs
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport_error",
            FetchError::Parse(_) => "parse_error",
        }
    }
}

/// The parsed and formatted outcome of querying one exchange
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceResult {
    pub exchange: Exchange,
    /// Last traded price in USD
    pub price: Decimal,
    /// Two-decimal currency text, e.g. `$450.25`
    pub display: String,
    /// Whole-dollar sentence, e.g. `$450 on Bitstamp`
    pub speech: String,
    /// When the price was produced
    pub fetched_at: DateTime<Utc>,
}

/// Success or failure of one exchange within a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangeOutcome {
    pub exchange: Exchange,
    #[serde(serialize_with = "serialize_result")]
    pub result: Result<PriceResult, FetchError>,
}

impl ExchangeOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// All outcomes of one fetch cycle, in request order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FetchBatch {
    pub outcomes: Vec<ExchangeOutcome>,
}

impl FetchBatch {
    pub fn new(outcomes: Vec<ExchangeOutcome>) -> Self {
        Self { outcomes }
    }

    /// Outcome for a given exchange, if it was requested
    pub fn get(&self, exchange: Exchange) -> Option<&ExchangeOutcome> {
        self.outcomes.iter().find(|o| o.exchange == exchange)
    }

    /// Successful results in request order
    pub fn successes(&self) -> impl Iterator<Item = &PriceResult> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// Failures in request order
    pub fn failures(&self) -> impl Iterator<Item = (Exchange, &FetchError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.exchange, e)))
    }

    /// First successful result; the one that gets spoken
    pub fn first_success(&self) -> Option<&PriceResult> {
        self.successes().next()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

fn serialize_result<S: Serializer>(
    result: &Result<PriceResult, FetchError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    #[serde(rename_all = "lowercase")]
    enum Wire<'a> {
        Ok(&'a PriceResult),
        Error { kind: &'static str, message: String },
    }

    match result {
        Ok(price) => Wire::Ok(price).serialize(serializer),
        Err(e) => Wire::Error {
            kind: e.kind(),
            message: e.to_string(),
        }
        .serialize(serializer),
    }
}
