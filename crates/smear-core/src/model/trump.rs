//! Trump-aware card comparison, including the jick.

use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;

/// Position of a card within the trump suit's pecking order, or `None` for
/// non-trump. Rank values are doubled so the jick can take the odd slot
/// strictly between the trump Ten and the trump Jack. Scoring and trick
/// resolution both rank trump through this function, so the two can never
/// disagree at the jick boundary.
pub const fn trump_strength(card: Card, trump: Suit) -> Option<u8> {
    if card.suit as u8 == trump as u8 {
        Some(card.rank.value() * 2)
    } else if card.is_jick(trump) {
        Some(Rank::Ten.value() * 2 + 1)
    } else {
        None
    }
}

/// Whether `candidate` beats the currently winning `incumbent` in an
/// in-progress trick. The first card of a trick has no incumbent and wins
/// unconditionally; callers handle that case.
pub fn beats(candidate: Card, incumbent: Card, trump: Suit, lead: Suit) -> bool {
    match (
        trump_strength(candidate, trump),
        trump_strength(incumbent, trump),
    ) {
        (Some(new), Some(winning)) => new > winning,
        (Some(_), None) => true,
        (None, Some(_)) => false,
        (None, None) => {
            if candidate.suit != lead {
                false
            } else if incumbent.suit != lead {
                true
            } else {
                candidate.rank > incumbent.rank
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{beats, trump_strength};
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn jick_sits_between_trump_ten_and_jack() {
        let trump = Suit::Spades;
        let jick = card(Rank::Jack, Suit::Clubs);
        let ten = card(Rank::Ten, Suit::Spades);
        let jack = card(Rank::Jack, Suit::Spades);
        let strength = |c| trump_strength(c, trump).unwrap();
        assert!(strength(ten) < strength(jick));
        assert!(strength(jick) < strength(jack));
    }

    #[test]
    fn jick_beats_trump_ten_but_loses_to_queen() {
        let trump = Suit::Spades;
        let jick = card(Rank::Jack, Suit::Clubs);
        assert!(beats(jick, card(Rank::Ten, Suit::Spades), trump, Suit::Spades));
        assert!(!beats(
            jick,
            card(Rank::Queen, Suit::Spades),
            trump,
            Suit::Spades
        ));
        assert!(beats(card(Rank::Queen, Suit::Spades), jick, trump, Suit::Spades));
    }

    #[test]
    fn off_suit_card_cannot_beat_lead_suit() {
        // Trump hearts, clubs led: a 9 of diamonds never takes the trick.
        let trump = Suit::Hearts;
        let lead = Suit::Clubs;
        let king_of_clubs = card(Rank::King, Suit::Clubs);
        assert!(!beats(card(Rank::Nine, Suit::Diamonds), king_of_clubs, trump, lead));
        assert!(!beats(card(Rank::Ace, Suit::Diamonds), king_of_clubs, trump, lead));
    }

    #[test]
    fn any_trump_beats_any_non_trump() {
        let trump = Suit::Hearts;
        let lead = Suit::Clubs;
        assert!(beats(
            card(Rank::Two, Suit::Hearts),
            card(Rank::Ace, Suit::Clubs),
            trump,
            lead
        ));
        assert!(!beats(
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Two, Suit::Hearts),
            trump,
            lead
        ));
    }

    #[test]
    fn same_suit_non_trump_compares_by_rank() {
        let trump = Suit::Hearts;
        let lead = Suit::Clubs;
        assert!(beats(
            card(Rank::King, Suit::Clubs),
            card(Rank::Ten, Suit::Clubs),
            trump,
            lead
        ));
        assert!(!beats(
            card(Rank::Ten, Suit::Clubs),
            card(Rank::King, Suit::Clubs),
            trump,
            lead
        ));
    }

    #[test]
    fn jick_of_wrong_color_is_plain() {
        let trump = Suit::Spades;
        let red_jack = card(Rank::Jack, Suit::Diamonds);
        assert_eq!(trump_strength(red_jack, trump), None);
        assert!(!beats(red_jack, card(Rank::Two, Suit::Spades), trump, Suit::Diamonds));
    }
}
