use crate::bot::estimate_bid;
use crate::policy::Policy;
use smear_core::game::bidding::MIN_BID;
use smear_core::game::player::{BidView, TrickView};
use smear_core::model::card::Card;
use smear_core::model::hand::Hand;
use smear_core::model::rank::Rank;
use smear_core::model::suit::Suit;
use smear_core::model::trump::{beats, trump_strength};

/// Takes tricks that carry points with the cheapest card that wins them,
/// keeps jacks and jicks out of harm's way, and bids a point under its
/// estimate.
#[derive(Debug, Default)]
pub struct CautiousPolicy {
    planned_trump: Option<Suit>,
}

impl CautiousPolicy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Policy for CautiousPolicy {
    fn choose_bid(&mut self, _view: &BidView<'_>, hand: &Hand, force_two: bool) -> u8 {
        let estimate = estimate_bid(hand);
        self.planned_trump = Some(estimate.trump);
        if force_two {
            MIN_BID
        } else if estimate.expected > MIN_BID {
            estimate.expected - 1
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
                let cheapest_winner = hand
                    .iter()
                    .copied()
                    .filter(|&card| beats(card, winning, trump, lead))
                    .min_by_key(|&card| winner_cost(card, trump));
                match cheapest_winner {
                    Some(card) if trick_is_worth_taking(view, trump) => card,
                    _ => discard(hand, trump),
                }
            }
            // Lead low and off-trump; make the others spend cards.
            _ => hand
                .iter()
                .copied()
                .min_by_key(|&card| lead_cost(card, trump))
                .expect("non-empty hand"),
        }
    }
}

/// Points already riding on the trick: counted cards, or a jack/jick that
/// would score for whoever takes it.
fn trick_is_worth_taking(view: &TrickView<'_>, trump: Suit) -> bool {
    view.plays.iter().any(|play| {
        play.card.game_points() > 0
            || (matches!(play.card.rank, Rank::Jack) && play.card.is_trump(trump))
    })
}

/// Cheapest first, but spending the jack or jick to win is a last resort.
fn winner_cost(card: Card, trump: Suit) -> u8 {
    let base = trump_strength(card, trump).unwrap_or(card.rank.value());
    if matches!(card.rank, Rank::Jack) && card.is_trump(trump) {
        base + 100
    } else {
        base
    }
}

fn lead_cost(card: Card, trump: Suit) -> (bool, u8, u8) {
    (
        card.is_trump(trump),
        card.game_points(),
        card.rank.value(),
    )
}

/// When not contesting the trick, throw the card worth the least, keeping
/// trump and counted cards back.
fn discard(hand: &Hand, trump: Suit) -> Card {
    hand.iter()
        .copied()
        .min_by_key(|&card| lead_cost(card, trump))
        .expect("non-empty hand")
}

#[cfg(test)]
mod tests {
    use super::CautiousPolicy;
    use crate::policy::Policy;
    use smear_core::game::player::{BidView, TrickView};
    use smear_core::model::card::Card;
    use smear_core::model::hand::Hand;
    use smear_core::model::rank::Rank;
    use smear_core::model::seat::Seat;
    use smear_core::model::suit::Suit;
    use smear_core::model::trick::Play;

    fn hand_of(cards: &[(Rank, Suit)]) -> Hand {
        Hand::with_cards(cards.iter().map(|&(r, s)| Card::new(r, s)).collect())
    }

    fn plays_of(cards: &[(Rank, Suit)]) -> Vec<Play> {
        cards
            .iter()
            .enumerate()
            .map(|(i, &(r, s))| Play {
                seat: Seat::new(i as u8),
                card: Card::new(r, s),
            })
            .collect()
    }

    #[test]
    fn wins_a_counted_trick_with_the_cheapest_card() {
        let mut policy = CautiousPolicy::new();
        let hand = hand_of(&[
            (Rank::Ace, Suit::Spades),
            (Rank::Queen, Suit::Spades),
            (Rank::Nine, Suit::Hearts),
        ]);
        // A ten is on the table: worth taking, but not with the ace.
        let plays = plays_of(&[(Rank::Ten, Suit::Spades)]);
        let view = TrickView {
            trump: Suit::Spades,
            bid: 2,
            bidder: Seat::new(0),
            lead_suit: Some(Suit::Spades),
            plays: &plays,
            winning_card: Some(Card::new(Rank::Ten, Suit::Spades)),
        };
        assert_eq!(
            policy.choose_play(&view, &hand),
            Card::new(Rank::Queen, Suit::Spades)
        );
    }

    #[test]
    fn lets_a_worthless_trick_go() {
        let mut policy = CautiousPolicy::new();
        let hand = hand_of(&[
            (Rank::Ace, Suit::Spades),
            (Rank::Four, Suit::Diamonds),
        ]);
        let plays = plays_of(&[(Rank::Nine, Suit::Clubs)]);
        let view = TrickView {
            trump: Suit::Spades,
            bid: 2,
            bidder: Seat::new(0),
            lead_suit: Some(Suit::Clubs),
            plays: &plays,
            winning_card: Some(Card::new(Rank::Nine, Suit::Clubs)),
        };
        assert_eq!(
            policy.choose_play(&view, &hand),
            Card::new(Rank::Four, Suit::Diamonds)
        );
    }

    #[test]
    fn leads_low_and_off_trump() {
        let mut policy = CautiousPolicy::new();
        let hand = hand_of(&[
            (Rank::Two, Suit::Spades),
            (Rank::Ten, Suit::Hearts),
            (Rank::Six, Suit::Diamonds),
        ]);
        let view = TrickView {
            trump: Suit::Spades,
            bid: 2,
            bidder: Seat::new(0),
            lead_suit: None,
            plays: &[],
            winning_card: None,
        };
        assert_eq!(
            policy.choose_play(&view, &hand),
            Card::new(Rank::Six, Suit::Diamonds)
        );
    }

    #[test]
    fn forced_dealer_concedes_only_the_minimum() {
        let mut policy = CautiousPolicy::new();
        let weak = hand_of(&[
            (Rank::Four, Suit::Clubs),
            (Rank::Five, Suit::Diamonds),
            (Rank::Six, Suit::Hearts),
        ]);
        let view = BidView {
            dealer: Seat::new(0),
            high_bid: 0,
            bids: &[],
        };
        assert_eq!(policy.choose_bid(&view, &weak, true), 2);
        assert_eq!(policy.choose_bid(&view, &weak, false), 0);
    }
}
