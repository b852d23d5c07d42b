mod cautious;
mod greedy;

pub use cautious::CautiousPolicy;
pub use greedy::GreedyPolicy;

use smear_core::game::player::{BidView, Player, TrickView};
use smear_core::model::card::Card;
use smear_core::model::hand::Hand;
use smear_core::model::seat::Seat;
use smear_core::model::suit::Suit;
use smear_core::model::trick::Play;
use tracing::{Level, event};

/// Decision-making interface for one seat. Selected at player construction
/// time; the engine only ever sees the `Player` adapter below.
pub trait Policy: Send {
    fn choose_bid(&mut self, view: &BidView<'_>, hand: &Hand, force_two: bool) -> u8;

    fn choose_trump(&mut self, hand: &Hand) -> Suit;

    /// Called with a non-empty hand only.
    fn choose_play(&mut self, view: &TrickView<'_>, hand: &Hand) -> Card;
}

/// Adapts a [`Policy`] to the engine's `Player` contract and logs each
/// decision.
pub struct PolicyPlayer {
    name: String,
    policy: Box<dyn Policy>,
}

impl PolicyPlayer {
    pub fn new(name: impl Into<String>, policy: Box<dyn Policy>) -> Self {
        Self {
            name: name.into(),
            policy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Player for PolicyPlayer {
    fn declare_bid(&mut self, view: &BidView<'_>, hand: &Hand, force_two: bool) -> u8 {
        let bid = self.policy.choose_bid(view, hand, force_two);
        event!(
            Level::DEBUG,
            player = %self.name,
            bid,
            force_two,
            high_bid = view.high_bid,
            "bid declared"
        );
        bid
    }

    fn name_trump(&mut self, hand: &Hand) -> Suit {
        let trump = self.policy.choose_trump(hand);
        event!(Level::DEBUG, player = %self.name, trump = %trump, "trump named");
        trump
    }

    fn play_card(&mut self, view: &TrickView<'_>, hand: &Hand) -> Option<Card> {
        if hand.is_empty() {
            return None;
        }
        let card = self.policy.choose_play(view, hand);
        event!(Level::TRACE, player = %self.name, card = %card, "card played");
        Some(card)
    }

    fn receive_trick_result(&mut self, winner: Seat, plays: &[Play]) {
        event!(
            Level::TRACE,
            player = %self.name,
            winner = %winner,
            cards = plays.len(),
            "trick observed"
        );
    }
}
