//! Exchange table
//!
//! Every supported exchange is one enum variant plus one row in
//! [`EXCHANGES`]: the ticker URL and the JSON pointer of the last price.

mod extract;

pub use extract::extract_price;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named external price-quoting service
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Exchange {
    Bitstamp,
    #[value(name = "mtgox")]
    MtGox,
}

/// Static request and extraction settings for one exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeSpec {
    pub exchange: Exchange,
    /// Ticker endpoint, always https
    pub url: &'static str,
    /// RFC 6901 pointer to the last traded price in the response body
    pub price_pointer: &'static str,
}

/// Declarative exchange table, in display order
pub const EXCHANGES: &[ExchangeSpec] = &[
    ExchangeSpec {
        exchange: Exchange::Bitstamp,
        url: "https://www.bitstamp.net/api/ticker/",
        price_pointer: "/last",
    },
    ExchangeSpec {
        exchange: Exchange::MtGox,
        url: "https://data.mtgox.com/api/2/BTCUSD/money/ticker_fast",
        price_pointer: "/data/last/value",
    },
];

impl Exchange {
    /// All exchanges in table order
    pub fn all() -> Vec<Exchange> {
        EXCHANGES.iter().map(|s| s.exchange).collect()
    }

    /// Table row for this exchange
    pub fn spec(self) -> &'static ExchangeSpec {
        EXCHANGES
            .iter()
            .find(|s| s.exchange == self)
            .unwrap_or_else(|| unreachable!("every exchange has a table row"))
    }

    /// Human-readable name, used on cards and in speech
    pub fn name(self) -> &'static str {
        match self {
            Exchange::Bitstamp => "Bitstamp",
            Exchange::MtGox => "MtGox",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Exchange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EXCHANGES
            .iter()
            .map(|spec| spec.exchange)
            .find(|e| e.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Unknown exchange: {}", s))
    }
}
