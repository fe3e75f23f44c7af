//! Batch presenter: cards plus speech

use super::{Announcer, CardDeck, FetchObserver};
use crate::exchange::Exchange;
use crate::fetch::FetchBatch;

/// Applies batches to a deck and speaks the first successful price
pub struct Presenter<A> {
    deck: CardDeck,
    announcer: A,
}

impl<A: Announcer> Presenter<A> {
    pub fn new(exchanges: &[Exchange], announcer: A) -> Self {
        Self {
            deck: CardDeck::new(exchanges),
            announcer,
        }
    }

    pub fn deck(&self) -> &CardDeck {
        &self.deck
    }

    pub fn announcer(&self) -> &A {
        &self.announcer
    }
}

impl<A: Announcer> FetchObserver for Presenter<A> {
    fn on_fetch_complete(&mut self, batch: &FetchBatch) {
        let changed = self.deck.apply(batch);
        tracing::debug!(
            outcomes = batch.len(),
            changed,
            "Applied batch to cards"
        );

        match batch.first_success() {
            Some(price) => self.announcer.speak(&price.speech),
            None => tracing::warn!("No exchange returned a price, nothing to speak"),
        }
    }
}

/// Writes speech lines to stdout
#[derive(Debug, Default)]
pub struct ConsoleAnnouncer;

impl Announcer for ConsoleAnnouncer {
    fn speak(&mut self, text: &str) {
        tracing::info!(text, "Speaking");
        println!("Say: {}", text);
    }
}
