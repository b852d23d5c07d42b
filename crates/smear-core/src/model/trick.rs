use crate::model::card::Card;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use crate::model::trump::beats;
use std::fmt;

/// One round of play: each seat contributes exactly one card, and the
/// strongest card under trump/lead rules takes them all.
#[derive(Debug, Clone)]
pub struct Trick {
    trump: Suit,
    seat_count: usize,
    lead_suit: Option<Suit>,
    plays: Vec<Play>,
    winner: Option<Play>,
}

#[derive(Debug, Clone, Copy)]
pub struct Play {
    pub seat: Seat,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrickError {
    TrickFull,
    AlreadyPlayed(Seat),
    IncompleteTrick { played: usize, expected: usize },
}

impl fmt::Display for TrickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrickError::TrickFull => write!(f, "every seat has already played this trick"),
            TrickError::AlreadyPlayed(seat) => {
                write!(f, "{seat} has already played this trick")
            }
            TrickError::IncompleteTrick { played, expected } => {
                write!(f, "trick has {played} of {expected} cards")
            }
        }
    }
}

impl std::error::Error for TrickError {}

impl Trick {
    pub fn new(trump: Suit, seat_count: usize) -> Self {
        Self {
            trump,
            seat_count,
            lead_suit: None,
            plays: Vec::with_capacity(seat_count),
            winner: None,
        }
    }

    pub fn trump(&self) -> Suit {
        self.trump
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.lead_suit
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == self.seat_count
    }

    pub fn winning_card(&self) -> Option<Card> {
        self.winner.map(|play| play.card)
    }

    /// Record a card for a seat. The first card establishes the lead suit
    /// and is the provisional winner unconditionally; later cards take over
    /// only when strictly stronger, so the earliest play holds any tie.
    pub fn add_card(&mut self, seat: Seat, card: Card) -> Result<(), TrickError> {
        if self.is_complete() {
            return Err(TrickError::TrickFull);
        }
        if self.plays.iter().any(|play| play.seat == seat) {
            return Err(TrickError::AlreadyPlayed(seat));
        }

        let play = Play { seat, card };
        match (self.lead_suit, self.winner) {
            (None, _) => {
                self.lead_suit = Some(card.suit);
                self.winner = Some(play);
            }
            (Some(lead), Some(winning)) => {
                if beats(card, winning.card, self.trump, lead) {
                    self.winner = Some(play);
                }
            }
            (Some(_), None) => unreachable!("lead suit implies a provisional winner"),
        }
        self.plays.push(play);
        Ok(())
    }

    /// The winning seat, available only once every seat has played.
    pub fn winner(&self) -> Result<Seat, TrickError> {
        if !self.is_complete() {
            return Err(TrickError::IncompleteTrick {
                played: self.plays.len(),
                expected: self.seat_count,
            });
        }
        Ok(self.winner.expect("complete trick has a winner").seat)
    }

    /// Hand the played cards over to the winner's pile, consuming the trick.
    pub fn collect(self) -> Vec<Card> {
        self.plays.into_iter().map(|play| play.card).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Trick, TrickError};
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::seat::Seat;
    use crate::model::suit::Suit;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn first_card_sets_lead_and_provisional_winner() {
        let mut trick = Trick::new(Suit::Spades, 3);
        trick.add_card(Seat::new(1), card(Rank::Four, Suit::Diamonds)).unwrap();
        assert_eq!(trick.lead_suit(), Some(Suit::Diamonds));
        assert_eq!(trick.winning_card(), Some(card(Rank::Four, Suit::Diamonds)));
        assert!(matches!(
            trick.winner(),
            Err(TrickError::IncompleteTrick { played: 1, expected: 3 })
        ));
    }

    #[test]
    fn seat_cannot_play_twice() {
        let mut trick = Trick::new(Suit::Spades, 3);
        trick.add_card(Seat::new(0), card(Rank::Four, Suit::Diamonds)).unwrap();
        assert_eq!(
            trick.add_card(Seat::new(0), card(Rank::Five, Suit::Diamonds)),
            Err(TrickError::AlreadyPlayed(Seat::new(0)))
        );
        assert_eq!(trick.plays().len(), 1);
    }

    #[test]
    fn full_trick_rejects_more_cards() {
        let mut trick = Trick::new(Suit::Spades, 2);
        trick.add_card(Seat::new(0), card(Rank::Four, Suit::Diamonds)).unwrap();
        trick.add_card(Seat::new(1), card(Rank::Five, Suit::Diamonds)).unwrap();
        assert_eq!(
            trick.add_card(Seat::new(2), card(Rank::Six, Suit::Diamonds)),
            Err(TrickError::TrickFull)
        );
    }

    #[test]
    fn jick_takes_the_trick_over_trump_ten() {
        let mut trick = Trick::new(Suit::Spades, 3);
        trick.add_card(Seat::new(0), card(Rank::Ten, Suit::Spades)).unwrap();
        trick.add_card(Seat::new(1), card(Rank::Jack, Suit::Clubs)).unwrap();
        trick.add_card(Seat::new(2), card(Rank::Ace, Suit::Hearts)).unwrap();
        assert_eq!(trick.winner(), Ok(Seat::new(1)));
    }

    #[test]
    fn winner_is_independent_of_follow_order() {
        // Same three cards, both follow orders after the same lead.
        let cards = [
            card(Rank::King, Suit::Clubs),
            card(Rank::Nine, Suit::Diamonds),
            card(Rank::Two, Suit::Hearts),
        ];
        let mut forward = Trick::new(Suit::Hearts, 3);
        forward.add_card(Seat::new(0), cards[0]).unwrap();
        forward.add_card(Seat::new(1), cards[1]).unwrap();
        forward.add_card(Seat::new(2), cards[2]).unwrap();

        let mut reversed = Trick::new(Suit::Hearts, 3);
        reversed.add_card(Seat::new(0), cards[0]).unwrap();
        reversed.add_card(Seat::new(2), cards[2]).unwrap();
        reversed.add_card(Seat::new(1), cards[1]).unwrap();

        // The deuce of hearts is trump and wins either way.
        assert_eq!(forward.winner(), Ok(Seat::new(2)));
        assert_eq!(reversed.winner(), Ok(Seat::new(2)));
    }

    #[test]
    fn collect_returns_all_played_cards() {
        let mut trick = Trick::new(Suit::Spades, 2);
        trick.add_card(Seat::new(0), card(Rank::Four, Suit::Diamonds)).unwrap();
        trick.add_card(Seat::new(1), card(Rank::Five, Suit::Diamonds)).unwrap();
        let cards = trick.collect();
        assert_eq!(cards.len(), 2);
        assert!(cards.contains(&card(Rank::Four, Suit::Diamonds)));
    }
}
