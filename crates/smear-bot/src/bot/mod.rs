//! Hand evaluation shared by the bidding side of every policy.

use smear_core::model::hand::Hand;
use smear_core::model::rank::Rank;
use smear_core::model::suit::Suit;

/// What a hand looks like with one suit as trump: how many of the four
/// categories it can plausibly land, and how much trump backs that up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidEstimate {
    pub trump: Suit,
    pub expected: u8,
    pub trump_count: usize,
}

/// Evaluate every suit and keep the most promising one. Deliberately
/// coarse: bidding in Smear is about not overreaching, and the clamp to
/// {0, 2..=5} happens in the engine anyway.
pub fn estimate_bid(hand: &Hand) -> BidEstimate {
    Suit::ALL
        .iter()
        .map(|&trump| evaluate_suit(hand, trump))
        .max_by_key(|est| (est.expected, est.trump_count))
        .expect("four suits evaluated")
}

pub fn evaluate_suit(hand: &Hand, trump: Suit) -> BidEstimate {
    let trump_count = hand.iter().filter(|card| card.is_trump(trump)).count();
    let mut expected = 0u8;

    let holds = |rank: Rank| hand.iter().any(|c| c.suit == trump && c.rank == rank);

    // High: the ace is a lock, a guarded king is a decent shot.
    if holds(Rank::Ace) || (holds(Rank::King) && trump_count >= 3) {
        expected += 1;
    }
    // Low: the deuce scores for whoever takes it home, but leading it out
    // early usually brings it back.
    if holds(Rank::Two) || holds(Rank::Three) {
        expected += 1;
    }
    // Jack and jick only survive behind enough trump to protect them.
    if trump_count >= 3 {
        let jacks = hand
            .iter()
            .filter(|card| matches!(card.rank, Rank::Jack) && card.is_trump(trump))
            .count();
        expected += jacks as u8;
    }
    // Game: counted cards plus trump length to win the late tricks that
    // carry tens.
    let counted: u32 = hand.iter().map(|card| card.game_points() as u32).sum();
    if counted >= 15 && trump_count >= 3 {
        expected += 1;
    }

    BidEstimate {
        trump,
        expected,
        trump_count,
    }
}
