use crate::game::events::{EventSink, GameEvent};
use crate::game::player::{BidView, Player};
use crate::model::hand::Hand;
use crate::model::seat::Seat;
use serde::Serialize;

pub const MIN_BID: u8 = 2;
pub const MAX_BID: u8 = 5;

/// One accepted bid, post-coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BidRecord {
    pub seat: Seat,
    pub bid: u8,
}

/// Result of one auction.
#[derive(Debug, Clone)]
pub enum BidOutcome {
    /// Nobody bid above 0: the dealer eats a two-set and the hand is not
    /// played out.
    ForcedTwoSet {
        dealer: Seat,
        records: Vec<BidRecord>,
    },
    Auction {
        bidder: Seat,
        bid: u8,
        records: Vec<BidRecord>,
    },
}

/// A declared bid of 1 is illegal in Smear and becomes a pass; anything
/// above the maximum is capped. Never an error.
pub const fn clamp_bid(declared: u8) -> u8 {
    if declared == 1 {
        0
    } else if declared > MAX_BID {
        MAX_BID
    } else {
        declared
    }
}

/// Drives one auction: seat after the dealer through the dealer, dealer
/// last. The leader advances on strictly greater bids only, so the earliest
/// seat keeps a tied high bid.
pub fn run_auction(
    dealer: Seat,
    seat_count: usize,
    hands: &[Hand],
    players: &mut [Box<dyn Player>],
    sink: &mut dyn EventSink,
) -> BidOutcome {
    let mut records: Vec<BidRecord> = Vec::with_capacity(seat_count);
    let mut high_bid = 0u8;
    let mut high_seat = dealer;

    let mut seat = dealer;
    for _ in 0..seat_count {
        seat = seat.next(seat_count);
        let force_two = seat == dealer && high_bid == 0;
        let view = BidView {
            dealer,
            high_bid,
            bids: &records,
        };
        let declared = players[seat.index()].declare_bid(&view, &hands[seat.index()], force_two);
        let bid = clamp_bid(declared);
        if bid != declared {
            sink.on_event(&GameEvent::BidAdjusted {
                seat,
                declared,
                recorded: bid,
            });
        }
        records.push(BidRecord { seat, bid });
        sink.on_event(&GameEvent::BidPlaced { seat, bid });
        if bid > high_bid {
            high_bid = bid;
            high_seat = seat;
        }
    }

    if high_bid == 0 {
        sink.on_event(&GameEvent::ForcedTwoSet { dealer });
        BidOutcome::ForcedTwoSet { dealer, records }
    } else {
        BidOutcome::Auction {
            bidder: high_seat,
            bid: high_bid,
            records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BidOutcome, clamp_bid, run_auction};
    use crate::game::events::{GameEvent, RecordingSink};
    use crate::game::player::{BidView, Player, TrickView};
    use crate::model::card::Card;
    use crate::model::hand::Hand;
    use crate::model::seat::Seat;
    use crate::model::suit::Suit;

    struct FixedBidder {
        bid: u8,
    }

    impl Player for FixedBidder {
        fn declare_bid(&mut self, _view: &BidView<'_>, _hand: &Hand, _force_two: bool) -> u8 {
            self.bid
        }

        fn name_trump(&mut self, _hand: &Hand) -> Suit {
            Suit::Spades
        }

        fn play_card(&mut self, _view: &TrickView<'_>, _hand: &Hand) -> Option<Card> {
            None
        }
    }

    fn players(bids: &[u8]) -> Vec<Box<dyn Player>> {
        bids.iter()
            .map(|&bid| Box::new(FixedBidder { bid }) as Box<dyn Player>)
            .collect()
    }

    fn empty_hands(n: usize) -> Vec<Hand> {
        (0..n).map(|_| Hand::new()).collect()
    }

    #[test]
    fn declared_one_becomes_zero_and_seven_becomes_five() {
        assert_eq!(clamp_bid(1), 0);
        assert_eq!(clamp_bid(7), 5);
        assert_eq!(clamp_bid(0), 0);
        assert_eq!(clamp_bid(3), 3);
    }

    #[test]
    fn highest_bidder_wins_the_auction() {
        let mut sink = RecordingSink::new();
        let mut players = players(&[0, 3, 2]);
        let outcome = run_auction(
            Seat::new(0),
            3,
            &empty_hands(3),
            &mut players,
            &mut sink,
        );
        match outcome {
            BidOutcome::Auction { bidder, bid, records } => {
                assert_eq!(bidder, Seat::new(1));
                assert_eq!(bid, 3);
                assert_eq!(records.len(), 3);
            }
            other => panic!("expected auction, got {other:?}"),
        }
    }

    #[test]
    fn earliest_seat_keeps_a_tied_high_bid() {
        // Dealer is seat 2, so seat 0 acts first and seat 1 ties it.
        let mut sink = RecordingSink::new();
        let mut players = players(&[3, 3, 0]);
        let outcome = run_auction(
            Seat::new(2),
            3,
            &empty_hands(3),
            &mut players,
            &mut sink,
        );
        match outcome {
            BidOutcome::Auction { bidder, bid, .. } => {
                assert_eq!(bidder, Seat::new(0));
                assert_eq!(bid, 3);
            }
            other => panic!("expected auction, got {other:?}"),
        }
    }

    #[test]
    fn all_passes_force_a_two_set_on_the_dealer() {
        let mut sink = RecordingSink::new();
        let mut players = players(&[0, 0, 0]);
        let outcome = run_auction(
            Seat::new(1),
            3,
            &empty_hands(3),
            &mut players,
            &mut sink,
        );
        match outcome {
            BidOutcome::ForcedTwoSet { dealer, records } => {
                assert_eq!(dealer, Seat::new(1));
                assert_eq!(records.len(), 3);
            }
            other => panic!("expected forced two-set, got {other:?}"),
        }
        assert!(
            sink.events()
                .iter()
                .any(|e| matches!(e, GameEvent::ForcedTwoSet { .. }))
        );
    }

    #[test]
    fn out_of_range_bids_are_coerced_and_reported() {
        let mut sink = RecordingSink::new();
        let mut players = players(&[1, 7, 0]);
        let outcome = run_auction(
            Seat::new(2),
            3,
            &empty_hands(3),
            &mut players,
            &mut sink,
        );
        match outcome {
            BidOutcome::Auction { bidder, bid, records } => {
                // Seat 0's declared 1 became a pass; seat 1's 7 is capped.
                assert_eq!(bidder, Seat::new(1));
                assert_eq!(bid, 5);
                assert_eq!(records[0].bid, 0);
                assert_eq!(records[1].bid, 5);
            }
            other => panic!("expected auction, got {other:?}"),
        }
        let adjusted: Vec<_> = sink
            .events()
            .iter()
            .filter(|e| matches!(e, GameEvent::BidAdjusted { .. }))
            .collect();
        assert_eq!(adjusted.len(), 2);
    }

    #[test]
    fn dealer_bids_last_and_sees_force_two_only_when_nobody_bid() {
        struct Probe {
            saw_force_two: std::rc::Rc<std::cell::Cell<bool>>,
            bid: u8,
        }
        impl Player for Probe {
            fn declare_bid(&mut self, _v: &BidView<'_>, _h: &Hand, force_two: bool) -> u8 {
                if force_two {
                    self.saw_force_two.set(true);
                }
                self.bid
            }
            fn name_trump(&mut self, _hand: &Hand) -> Suit {
                Suit::Clubs
            }
            fn play_card(&mut self, _v: &TrickView<'_>, _h: &Hand) -> Option<Card> {
                None
            }
        }

        let flag = std::rc::Rc::new(std::cell::Cell::new(false));
        let mut players: Vec<Box<dyn Player>> = vec![
            Box::new(Probe { saw_force_two: flag.clone(), bid: 0 }),
            Box::new(FixedBidder { bid: 3 }),
            Box::new(FixedBidder { bid: 0 }),
        ];
        let mut sink = RecordingSink::new();
        let _ = run_auction(Seat::new(0), 3, &empty_hands(3), &mut players, &mut sink);
        // Seat 1 bid 3 before the dealer acted, so the dealer is not forced.
        assert!(!flag.get());
    }
}
