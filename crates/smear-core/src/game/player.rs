use crate::game::bidding::BidRecord;
use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use crate::model::trick::Play;

/// Read-only view of the auction handed to a seat deciding its bid.
#[derive(Debug, Clone, Copy)]
pub struct BidView<'a> {
    pub dealer: Seat,
    pub high_bid: u8,
    pub bids: &'a [BidRecord],
}

/// Read-only view of the hand and in-progress trick handed to a seat
/// choosing a card.
#[derive(Debug, Clone, Copy)]
pub struct TrickView<'a> {
    pub trump: Suit,
    pub bid: u8,
    pub bidder: Seat,
    pub lead_suit: Option<Suit>,
    pub plays: &'a [Play],
    pub winning_card: Option<Card>,
}

/// Decision source for one seat. The engine validates and applies what a
/// player returns; it never decides for them. Calls are synchronous and
/// blocking: implementations backed by a slow source must resolve or fail
/// before returning.
pub trait Player {
    /// Declare a bid for this hand. `force_two` is set when this seat deals
    /// and nobody before it has bid; returning 0 anyway concedes a two-set.
    fn declare_bid(&mut self, view: &BidView<'_>, hand: &Hand, force_two: bool) -> u8;

    /// Called on the winning bidder, exactly once per hand, before play.
    fn name_trump(&mut self, hand: &Hand) -> Suit;

    /// Choose a card to play. `None` is only legal from an empty hand.
    fn play_card(&mut self, view: &TrickView<'_>, hand: &Hand) -> Option<Card>;

    fn receive_cards(&mut self, _cards: &[Card]) {}

    fn receive_trick_result(&mut self, _winner: Seat, _plays: &[Play]) {}
}
