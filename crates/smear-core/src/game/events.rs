use crate::model::card::Card;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use serde::Serialize;

/// Structured record of something the engine did. The core emits these to a
/// sink instead of writing to a console, so it stays usable headless and the
/// stream itself is testable.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    HandDealt {
        hand_number: u32,
        dealer: Seat,
    },
    BidPlaced {
        seat: Seat,
        bid: u8,
    },
    /// An out-of-range declaration was coerced (1 -> 0, >5 -> 5).
    BidAdjusted {
        seat: Seat,
        declared: u8,
        recorded: u8,
    },
    ForcedTwoSet {
        dealer: Seat,
    },
    TrumpRevealed {
        bidder: Seat,
        trump: Suit,
    },
    TrickResolved {
        winner: Seat,
        cards: Vec<Card>,
    },
    HandScored {
        scores: Vec<i32>,
        bidder_set: bool,
    },
    GameOver {
        winners: Vec<Seat>,
        standings: Vec<i32>,
    },
}

pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}

/// Discards everything. Default for drivers that do not observe events.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Buffers events in order. Used by tests and by drivers that post-process
/// a hand's full event stream.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<GameEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}

impl EventSink for RecordingSink {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
