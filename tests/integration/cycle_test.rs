//! Fetch cycle integration tests: fixture source through to cards

use async_trait::async_trait;
use btc_ticker::deck::{Announcer, CardState, FetchObserver, Presenter};
use btc_ticker::exchange::Exchange;
use btc_ticker::fetch::{
    spawn_fetch, FetchError, FetchHandle, ParseError, PriceFetcher, PriceSource, TaskError,
    TransportError,
};
use rust_decimal_macros::dec;
use std::sync::Arc;

/// Serves one body per exchange URL
struct Fixtures {
    bitstamp: Result<&'static str, TransportError>,
    mtgox: Result<&'static str, TransportError>,
}

#[async_trait]
impl PriceSource for Fixtures {
    async fn fetch_body(&self, url: &str) -> Result<String, TransportError> {
        let body = if url == Exchange::Bitstamp.spec().url {
            &self.bitstamp
        } else {
            &self.mtgox
        };
        body.clone().map(str::to_string)
    }
}

#[derive(Default)]
struct Spoken(Vec<String>);

impl Announcer for Spoken {
    fn speak(&mut self, text: &str) {
        self.0.push(text.to_string());
    }
}

#[tokio::test]
async fn test_full_cycle_both_exchanges() {
    let fetcher = PriceFetcher::new(Fixtures {
        bitstamp: Ok(r#"{"high":"460.00","last":"450.25","low":"440.10"}"#),
        mtgox: Ok(r#"{"result":"success","data":{"last":{"value":"451.80","currency":"USD"}}}"#),
    });

    let mut presenter = Presenter::new(&Exchange::all(), Spoken::default());
    let batch = spawn_fetch(Arc::new(fetcher), Exchange::all(), None)
        .wait()
        .await
        .unwrap();
    presenter.on_fetch_complete(&batch);

    let bitstamp = batch.get(Exchange::Bitstamp).unwrap().result.as_ref().unwrap();
    assert_eq!(bitstamp.price, dec!(450.25));
    assert_eq!(bitstamp.display, "$450.25");
    assert_eq!(bitstamp.speech, "$450 on Bitstamp");

    let mtgox = batch.get(Exchange::MtGox).unwrap().result.as_ref().unwrap();
    assert_eq!(mtgox.price, dec!(451.80));
    assert_eq!(mtgox.display, "$451.80");

    assert_eq!(presenter.announcer().0, vec!["$450 on Bitstamp"]);
    assert_eq!(
        presenter.deck().card(Exchange::MtGox).unwrap().state,
        CardState::Quoted("$451.80".to_string())
    );
}

#[tokio::test]
async fn test_malformed_json_does_not_break_batch() {
    let fetcher = PriceFetcher::new(Fixtures {
        bitstamp: Ok(r#"{"last":"450.25"}"#),
        mtgox: Ok("<!DOCTYPE html><title>Service Unavailable</title>"),
    });

    let batch = spawn_fetch(Arc::new(fetcher), Exchange::all(), None)
        .wait()
        .await
        .unwrap();

    assert!(batch.get(Exchange::Bitstamp).unwrap().is_ok());
    assert!(matches!(
        batch.get(Exchange::MtGox).unwrap().result,
        Err(FetchError::Parse(ParseError::MalformedJson(_)))
    ));
}

#[tokio::test]
async fn test_unreachable_exchange_only_fails_itself() {
    let fetcher = PriceFetcher::new(Fixtures {
        bitstamp: Err(TransportError::Request("connection refused".to_string())),
        mtgox: Ok(r#"{"data":{"last":{"value":"451.80"}}}"#),
    });

    let mut presenter = Presenter::new(&Exchange::all(), Spoken::default());
    let batch = spawn_fetch(Arc::new(fetcher), Exchange::all(), None)
        .wait()
        .await
        .unwrap();
    presenter.on_fetch_complete(&batch);

    let failures: Vec<_> = batch.failures().map(|(e, _)| e).collect();
    assert_eq!(failures, vec![Exchange::Bitstamp]);
    assert!(matches!(
        presenter.deck().card(Exchange::Bitstamp).unwrap().state,
        CardState::Failed(_)
    ));
    assert_eq!(presenter.announcer().0, vec!["$452 on MtGox"]);
}

/// Deliver a cycle to the presenter the way the `fetch` command does
async fn run_cycle(
    handle: FetchHandle,
    presenter: &mut Presenter<Spoken>,
) -> Result<(), TaskError> {
    let batch = handle.wait().await?;
    presenter.on_fetch_complete(&batch);
    Ok(())
}

#[tokio::test]
async fn test_cancelled_cycle_leaves_cards_loading() {
    let fetcher = Arc::new(PriceFetcher::new(Fixtures {
        bitstamp: Ok(r#"{"last":"450.25"}"#),
        mtgox: Ok(r#"{"data":{"last":{"value":"451.80"}}}"#),
    }));

    let mut presenter = Presenter::new(&Exchange::all(), Spoken::default());
    let mut handle = spawn_fetch(fetcher, Exchange::all(), None);
    handle.cancel();

    assert_eq!(
        run_cycle(handle, &mut presenter).await,
        Err(TaskError::Cancelled)
    );
    assert!(presenter
        .deck()
        .cards()
        .iter()
        .all(|c| c.state == CardState::Loading));
    assert!(presenter.announcer().0.is_empty());
}

#[tokio::test]
async fn test_uncancelled_cycle_reaches_cards() {
    let fetcher = Arc::new(PriceFetcher::new(Fixtures {
        bitstamp: Ok(r#"{"last":"450.25"}"#),
        mtgox: Ok(r#"{"data":{"last":{"value":"451.80"}}}"#),
    }));

    let mut presenter = Presenter::new(&Exchange::all(), Spoken::default());
    let handle = spawn_fetch(fetcher, Exchange::all(), None);

    assert_eq!(run_cycle(handle, &mut presenter).await, Ok(()));
    assert_eq!(
        presenter.deck().card(Exchange::Bitstamp).unwrap().state,
        CardState::Quoted("$450.25".to_string())
    );
    assert_eq!(presenter.announcer().0, vec!["$450 on Bitstamp"]);
}
