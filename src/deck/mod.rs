//! Card deck presentation
//!
//! Headless model of the card UI: one card per exchange, starting in
//! `Loading`, updated once per completed batch. The first successful price
//! of a batch is handed to an [`Announcer`] for speech playback.

mod card;
mod presenter;

pub use card::{Card, CardDeck, CardState};
pub use presenter::{ConsoleAnnouncer, Presenter};

use crate::fetch::FetchBatch;

/// Callback surface invoked with each completed batch
pub trait FetchObserver {
    fn on_fetch_complete(&mut self, batch: &FetchBatch);
}

/// Speech playback sink
pub trait Announcer {
    fn speak(&mut self, text: &str);
}
