use core::fmt;
use serde::{Deserialize, Serialize};

/// Seat index at the table. Resolved once at the API boundary; everything
/// downstream works with this type, never raw integers or names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seat(u8);

impl Seat {
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn next(self, seat_count: usize) -> Seat {
        let next = self.0 as usize + 1;
        if next == seat_count {
            Seat(0)
        } else {
            Seat(next as u8)
        }
    }

    pub fn all(seat_count: usize) -> impl Iterator<Item = Seat> {
        (0..seat_count as u8).map(Seat)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat{}", self.0)
    }
}
