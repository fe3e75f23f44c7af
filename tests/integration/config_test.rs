//! Configuration integration tests

use btc_ticker::config::Config;
use btc_ticker::exchange::Exchange;
use std::io::Write;

#[test]
fn test_config_example_parses() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.fetch.exchanges, Exchange::all());
    assert!(config.endpoints.is_empty());
}

#[test]
fn test_config_load_rejects_insecure_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[endpoints]\nbitstamp = \"http://www.bitstamp.net/api/ticker/\""
    )
    .unwrap();

    tokio_test::assert_err!(Config::load(file.path()));
}

#[test]
fn test_config_load_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[fetch]\nexchanges = [\"mtgox\"]\n\n[endpoints]\nmtgox = \"https://mirror.example.com/ticker_fast\""
    )
    .unwrap();

    let config = tokio_test::assert_ok!(Config::load(file.path()));
    assert_eq!(config.fetch.exchanges, vec![Exchange::MtGox]);
    assert_eq!(config.endpoints.len(), 1);
}
