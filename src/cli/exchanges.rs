//! Exchanges command implementation

use crate::config::Config;
use crate::exchange::EXCHANGES;

/// Print the exchange table with any configured URL overrides applied
pub fn print_exchanges(config: &Config) {
    println!("{:<10} {:<18} URL", "EXCHANGE", "PRICE PATH");
    for spec in EXCHANGES {
        let url = config
            .endpoints
            .get(&spec.exchange)
            .map(String::as_str)
            .unwrap_or(spec.url);
        println!("{:<10} {:<18} {}", spec.exchange, spec.price_pointer, url);
    }
}
