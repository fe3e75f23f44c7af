//! HTTP source integration tests (loopback only, no external network)

use btc_ticker::exchange::Exchange;
use btc_ticker::fetch::{
    FetchError, HttpSource, HttpSourceConfig, PriceFetcher, TransportError,
};
use std::collections::HashMap;
use std::time::Duration;

fn fetcher(endpoints: HashMap<Exchange, String>) -> PriceFetcher<HttpSource> {
    let source = HttpSource::with_config(HttpSourceConfig {
        timeout: Duration::from_secs(2),
        connect_timeout: Duration::from_secs(1),
    })
    .unwrap();

    PriceFetcher::new(source)
        .with_request_timeout(Duration::from_secs(2))
        .with_endpoints(endpoints)
}

#[tokio::test]
async fn test_insecure_endpoint_is_transport_error() {
    let mut endpoints = HashMap::new();
    endpoints.insert(Exchange::Bitstamp, "http://127.0.0.1:9/api/ticker/".to_string());

    let err = fetcher(endpoints).fetch(Exchange::Bitstamp).await.unwrap_err();
    assert_eq!(
        err,
        FetchError::Transport(TransportError::InsecureEndpoint(
            "http://127.0.0.1:9/api/ticker/".to_string()
        ))
    );
}

#[tokio::test]
async fn test_unreachable_endpoints_fail_per_exchange() {
    let mut endpoints = HashMap::new();
    endpoints.insert(Exchange::Bitstamp, "https://127.0.0.1:1/api/ticker/".to_string());
    endpoints.insert(Exchange::MtGox, "http://127.0.0.1:1/ticker_fast".to_string());

    let batch = fetcher(endpoints).fetch_all(&Exchange::all()).await;

    assert_eq!(batch.len(), 2);
    assert!(matches!(
        batch.get(Exchange::Bitstamp).unwrap().result,
        Err(FetchError::Transport(_))
    ));
    assert!(matches!(
        batch.get(Exchange::MtGox).unwrap().result,
        Err(FetchError::Transport(TransportError::InsecureEndpoint(_)))
    ));
    assert!(batch.first_success().is_none());
}
