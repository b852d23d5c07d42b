use crate::model::pile::Pile;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use crate::model::trump::trump_strength;

/// Per-seat result of one hand, with the category winners kept for event
/// reporting and summaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandScores {
    pub totals: Vec<i32>,
    pub game_winner: Option<Seat>,
    pub high_winner: Option<Seat>,
    pub low_winner: Option<Seat>,
    pub bidder_set: bool,
}

/// Nobody bid: the dealer is set two and the hand is not played.
pub fn two_set_scores(dealer: Seat, seat_count: usize) -> HandScores {
    let mut totals = vec![0; seat_count];
    totals[dealer.index()] = -2;
    HandScores {
        totals,
        game_winner: None,
        high_winner: None,
        low_winner: None,
        bidder_set: true,
    }
}

/// Tally the four categories from the seats' piles, then apply the set
/// penalty. Precondition: every dealt card sits in exactly one pile (the
/// hand is fully played out).
pub fn score_hand(piles: &[Pile], trump: Suit, bid: u8, bidder: Seat) -> HandScores {
    let seat_count = piles.len();
    let mut totals = vec![0i32; seat_count];

    // Jacks and jicks count directly, one point per card taken.
    for seat in Seat::all(seat_count) {
        totals[seat.index()] = piles[seat.index()].jack_and_jick_count(trump) as i32;
    }

    // Game: unique maximum of counted card points, or nobody. A tie at
    // zero awards nobody as well.
    let game_winner = unique_max(
        Seat::all(seat_count).filter_map(|seat| {
            let points = piles[seat.index()].game_points();
            (points > 0).then_some((seat, points))
        }),
    );
    if let Some(seat) = game_winner {
        totals[seat.index()] += 1;
    }

    // High and low trump, ranked with the jick between trump Ten and Jack.
    // No trump in any pile means neither point is awarded.
    let high_winner = Seat::all(seat_count)
        .filter_map(|seat| {
            piles[seat.index()]
                .highest_trump(trump)
                .map(|card| (seat, trump_strength(card, trump).expect("trump card")))
        })
        .max_by_key(|&(_, strength)| strength)
        .map(|(seat, _)| seat);
    if let Some(seat) = high_winner {
        totals[seat.index()] += 1;
    }

    let low_winner = Seat::all(seat_count)
        .filter_map(|seat| {
            piles[seat.index()]
                .lowest_trump(trump)
                .map(|card| (seat, trump_strength(card, trump).expect("trump card")))
        })
        .min_by_key(|&(_, strength)| strength)
        .map(|(seat, _)| seat);
    if let Some(seat) = low_winner {
        totals[seat.index()] += 1;
    }

    // Set: a bidder short of their bid forfeits everything they earned.
    let bidder_set = totals[bidder.index()] < bid as i32;
    if bidder_set {
        totals[bidder.index()] = -(bid as i32);
    }

    HandScores {
        totals,
        game_winner,
        high_winner,
        low_winner,
        bidder_set,
    }
}

/// The key of the strictly greatest value, or `None` when the top is shared.
fn unique_max<I>(entries: I) -> Option<Seat>
where
    I: Iterator<Item = (Seat, u32)>,
{
    let mut best: Option<(Seat, u32)> = None;
    let mut tied = false;
    for (seat, value) in entries {
        match best {
            Some((_, top)) if value > top => {
                best = Some((seat, value));
                tied = false;
            }
            Some((_, top)) if value == top => tied = true,
            None => best = Some((seat, value)),
            _ => {}
        }
    }
    if tied { None } else { best.map(|(seat, _)| seat) }
}
