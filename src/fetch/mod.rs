//! Exchange price fetcher
//!
//! Queries each requested exchange in turn, extracts the last price from the
//! ticker body and formats it for display and speech. Every exchange ends up
//! with an explicit success or failure in the returned [`FetchBatch`].

mod fetcher;
mod http;
mod task;
mod types;

pub use fetcher::PriceFetcher;
pub use http::{HttpSource, HttpSourceConfig};
pub use task::{spawn_fetch, FetchHandle, TaskError};
pub use types::{
    ExchangeOutcome, FetchBatch, FetchError, ParseError, PriceResult, TransportError,
};

use async_trait::async_trait;

/// Trait for anything that can return the body of a ticker endpoint
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// GET `url` and return the response body
    async fn fetch_body(&self, url: &str) -> Result<String, TransportError>;
}
