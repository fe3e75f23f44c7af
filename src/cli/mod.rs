//! CLI interface for btc-ticker
//!
//! Provides subcommands for:
//! - `fetch`: Run one fetch cycle and show the cards
//! - `exchanges`: List supported exchanges
//! - `config`: Show the effective configuration

mod exchanges;
mod fetch;

pub use exchanges::print_exchanges;
pub use fetch::FetchArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "btc-ticker")]
#[command(about = "Bitcoin price cards from exchange ticker APIs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one fetch cycle and show the cards
    Fetch(FetchArgs),
    /// List supported exchanges
    Exchanges,
    /// Show the effective configuration
    Config,
}
