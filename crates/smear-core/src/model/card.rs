use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// The off-suit Jack of trump's color, which plays as trump.
    pub const fn is_jick(self, trump: Suit) -> bool {
        matches!(self.rank, Rank::Jack)
            && self.suit as u8 != trump as u8
            && self.suit.same_color(trump)
    }

    pub const fn is_trump(self, trump: Suit) -> bool {
        self.suit as u8 == trump as u8 || self.is_jick(trump)
    }

    /// Contribution toward the "game" category tally.
    pub const fn game_points(self) -> u8 {
        match self.rank {
            Rank::Ten => 10,
            Rank::Ace => 4,
            Rank::King => 3,
            Rank::Queen => 2,
            Rank::Jack => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
