use crate::bot::estimate_bid;
use crate::policy::Policy;
use smear_core::game::bidding::MIN_BID;
use smear_core::game::player::{BidView, TrickView};
use smear_core::model::card::Card;
use smear_core::model::hand::Hand;
use smear_core::model::suit::Suit;
use smear_core::model::trump::{beats, trump_strength};

/// Just greedy enough: takes every trick it can, with the biggest card it
/// has, and dumps its weakest otherwise.
#[derive(Debug, Default)]
pub struct GreedyPolicy {
    planned_trump: Option<Suit>,
}

impl GreedyPolicy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Policy for GreedyPolicy {
    fn choose_bid(&mut self, _view: &BidView<'_>, hand: &Hand, force_two: bool) -> u8 {
        let estimate = estimate_bid(hand);
        self.planned_trump = Some(estimate.trump);
        if force_two {
            estimate.expected.max(MIN_BID)
        } else if estimate.expected >= MIN_BID {
            estimate.expected
        } else {
            0
        }
    }

    fn choose_trump(&mut self, hand: &Hand) -> Suit {
        self.planned_trump
            .unwrap_or_else(|| estimate_bid(hand).trump)
    }

    fn choose_play(&mut self, view: &TrickView<'_>, hand: &Hand) -> Card {
        let trump = view.trump;
        match (view.lead_suit, view.winning_card) {
            (Some(lead), Some(winning)) => {
                let best_winner = hand
                    .iter()
                    .copied()
                    .filter(|&card| beats(card, winning, trump, lead))
                    .max_by_key(|&card| play_strength(card, trump));
                best_winner.unwrap_or_else(|| weakest(hand, trump))
            }
            // Leading: put the biggest card out and dare the table.
            _ => hand
                .iter()
                .copied()
                .max_by_key(|&card| play_strength(card, trump))
                .expect("non-empty hand"),
        }
    }
}

/// Total order used for "biggest" and "weakest": any trump above any
/// off-suit card, then rank.
fn play_strength(card: Card, trump: Suit) -> u8 {
    match trump_strength(card, trump) {
        Some(strength) => 100 + strength,
        None => card.rank.value(),
    }
}

fn weakest(hand: &Hand, trump: Suit) -> Card {
    hand.iter()
        .copied()
        .min_by_key(|&card| play_strength(card, trump))
        .expect("non-empty hand")
}
