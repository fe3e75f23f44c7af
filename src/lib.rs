//! btc-ticker: Bitcoin price cards from exchange ticker APIs
//!
//! This library provides the core components for:
//! - A declarative table of exchanges (ticker URL + JSON price path)
//! - Sequential HTTPS price fetching with typed per-exchange errors
//! - Display and speech formatting of prices
//! - A one-shot, cancellable background fetch cycle
//! - A headless card deck updated from completed batches

pub mod cli;
pub mod config;
pub mod deck;
pub mod exchange;
pub mod fetch;
pub mod format;
pub mod telemetry;
