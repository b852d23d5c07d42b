use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use crate::model::trump::trump_strength;

/// Cards a seat has won in tricks this hand. All four scoring categories
/// are computed from piles once the hand is played out.
#[derive(Debug, Clone, Default)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn take_in(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn game_points(&self) -> u32 {
        self.cards.iter().map(|card| card.game_points() as u32).sum()
    }

    pub fn highest_trump(&self, trump: Suit) -> Option<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|&card| trump_strength(card, trump).is_some())
            .max_by_key(|&card| trump_strength(card, trump))
    }

    pub fn lowest_trump(&self, trump: Suit) -> Option<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|&card| trump_strength(card, trump).is_some())
            .min_by_key(|&card| trump_strength(card, trump))
    }

    /// Jacks counted for scoring: the trump-suit Jack and the jick.
    pub fn jack_and_jick_count(&self, trump: Suit) -> u32 {
        self.cards
            .iter()
            .filter(|card| matches!(card.rank, Rank::Jack) && card.is_trump(trump))
            .count() as u32
    }
}
