//! Fetch command implementation

use crate::config::{Config, MAX_TIMEOUT_SECS};
use crate::deck::{Announcer, ConsoleAnnouncer, FetchObserver, Presenter};
use crate::exchange::Exchange;
use crate::fetch::{spawn_fetch, HttpSource, PriceFetcher};
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Exchanges to query (defaults to the configured list)
    #[arg(short, long, value_enum)]
    pub exchange: Vec<Exchange>,

    /// Print the batch as JSON instead of cards
    #[arg(long)]
    pub json: bool,

    /// Override the per-request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_TIMEOUT_SECS))]
    pub timeout: Option<u64>,
}

impl FetchArgs {
    /// Exchanges to query, in card order
    pub fn exchanges(&self, config: &Config) -> Vec<Exchange> {
        if self.exchange.is_empty() {
            config.fetch.exchanges.clone()
        } else {
            self.exchange.clone()
        }
    }

    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let exchanges = self.exchanges(config);

        let mut http = config.fetch.http();
        if let Some(secs) = self.timeout {
            http.timeout = std::time::Duration::from_secs(secs);
        }
        let request_timeout = http.timeout;

        let fetcher = PriceFetcher::new(HttpSource::with_config(http)?)
            .with_request_timeout(request_timeout)
            .with_endpoints(config.endpoints.clone());

        let mut presenter = Presenter::new(&exchanges, ConsoleAnnouncer);
        if !self.json {
            print_cards(&presenter);
        }

        tracing::info!(exchanges = ?exchanges, "Starting fetch cycle");
        let handle = spawn_fetch(Arc::new(fetcher), exchanges, None);

        let batch = tokio::select! {
            batch = handle.wait() => batch?,
            _ = tokio::signal::ctrl_c() => {
                anyhow::bail!("Interrupted before the fetch cycle completed");
            }
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&batch)?);
            return Ok(());
        }

        presenter.on_fetch_complete(&batch);
        print_cards(&presenter);

        Ok(())
    }
}

fn print_cards<A: Announcer>(presenter: &Presenter<A>) {
    for card in presenter.deck().cards() {
        println!("{}", card);
    }
}
