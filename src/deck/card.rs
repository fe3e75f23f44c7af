//! Cards and the deck holding them

use crate::exchange::Exchange;
use crate::fetch::{ExchangeOutcome, FetchBatch};
use std::fmt;

/// Text shown on a card before its exchange has answered
pub const LOADING_TEXT: &str = "Loading";

/// What a card currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardState {
    Loading,
    /// Display string of the last price
    Quoted(String),
    /// Reason the last fetch failed
    Failed(String),
}

/// One card per exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub exchange: Exchange,
    pub state: CardState,
}

impl Card {
    pub fn new(exchange: Exchange) -> Self {
        Self {
            exchange,
            state: CardState::Loading,
        }
    }

    /// Main text of the card
    pub fn text(&self) -> &str {
        match &self.state {
            CardState::Loading => LOADING_TEXT,
            CardState::Quoted(display) => display,
            CardState::Failed(_) => "Unavailable",
        }
    }

    /// Footer text of the card
    pub fn info(&self) -> String {
        match &self.state {
            CardState::Failed(reason) => format!("{} ({})", self.exchange, reason),
            _ => self.exchange.to_string(),
        }
    }

    fn apply(&mut self, outcome: &ExchangeOutcome) {
        self.state = match &outcome.result {
            Ok(price) => CardState::Quoted(price.display.clone()),
            Err(e) => CardState::Failed(e.to_string()),
        };
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12} {}", self.text(), self.info())
    }
}

/// Ordered set of cards, one per exchange
#[derive(Debug, Clone, Default)]
pub struct CardDeck {
    cards: Vec<Card>,
}

impl CardDeck {
    /// Create a deck with every card loading
    pub fn new(exchanges: &[Exchange]) -> Self {
        let mut cards: Vec<Card> = Vec::with_capacity(exchanges.len());
        for &exchange in exchanges {
            if !cards.iter().any(|c| c.exchange == exchange) {
                cards.push(Card::new(exchange));
            }
        }
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, exchange: Exchange) -> Option<&Card> {
        self.cards.iter().find(|c| c.exchange == exchange)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Update cards from a batch; returns how many cards changed state
    ///
    /// Outcomes for exchanges without a card are ignored.
    pub fn apply(&mut self, batch: &FetchBatch) -> usize {
        let mut changed = 0;
        for outcome in &batch.outcomes {
            if let Some(card) = self.cards.iter_mut().find(|c| c.exchange == outcome.exchange) {
                let before = card.state.clone();
                card.apply(outcome);
                if card.state != before {
                    changed += 1;
                }
            } else {
                tracing::debug!(exchange = %outcome.exchange, "No card for outcome");
            }
        }
        changed
    }
}
