use crate::game::bidding::{BidOutcome, run_auction};
use crate::game::events::{EventSink, GameEvent};
use crate::game::hand_state::HandState;
use crate::game::player::{Player, TrickView};
use crate::game::scoring::{HandScores, score_hand, two_set_scores};
use crate::model::card::Card;
use crate::model::deck::{DECK_SIZE, Deck};
use crate::model::hand::Hand;
use crate::model::pile::Pile;
use crate::model::score::ScoreBoard;
use crate::model::seat::Seat;
use crate::model::trick::{Trick, TrickError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub seats: usize,
    pub cards_to_deal: usize,
    pub target_score: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seats: 3,
            cards_to_deal: 6,
            target_score: 11,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidPlay {
    /// The seat returned no card while still holding cards.
    MissingCard,
    CardNotHeld(Card),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Deal size exceeds the deck, or the table is too small. Raised at
    /// construction, never per hand.
    Configuration {
        seats: usize,
        cards_to_deal: usize,
    },
    PlayerCount {
        expected: usize,
        found: usize,
    },
    InvalidPlay {
        seat: Seat,
        reason: InvalidPlay,
    },
    Trick(TrickError),
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Configuration {
                seats,
                cards_to_deal,
            } => write!(
                f,
                "cannot deal {cards_to_deal} cards to {seats} seats from a {DECK_SIZE}-card deck"
            ),
            GameError::PlayerCount { expected, found } => {
                write!(f, "expected {expected} players but got {found}")
            }
            GameError::InvalidPlay { seat, reason } => match reason {
                InvalidPlay::MissingCard => {
                    write!(f, "{seat} returned no card while holding cards")
                }
                InvalidPlay::CardNotHeld(card) => {
                    write!(f, "{seat} tried to play {card} which is not in hand")
                }
            },
            GameError::Trick(err) => write!(f, "{err}"),
            GameError::GameOver => write!(f, "game is already over"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<TrickError> for GameError {
    fn from(err: TrickError) -> Self {
        GameError::Trick(err)
    }
}

/// One game of Smear: dealer rotation, hand lifecycle, cumulative scores,
/// and termination against the target. Owns every piece of mutable state;
/// concurrent games each construct their own instance.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    scores: ScoreBoard,
    hands: Vec<Hand>,
    piles: Vec<Pile>,
    dealer: Seat,
    hand_number: u32,
    game_over: bool,
    rng: StdRng,
    seed: u64,
}

impl GameState {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_seed(config, rand::random())
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        if config.seats < 2 || config.seats * config.cards_to_deal > DECK_SIZE {
            return Err(GameError::Configuration {
                seats: config.seats,
                cards_to_deal: config.cards_to_deal,
            });
        }
        Ok(Self {
            scores: ScoreBoard::new(config.seats),
            hands: (0..config.seats).map(|_| Hand::new()).collect(),
            piles: (0..config.seats).map(|_| Pile::new()).collect(),
            // First advance lands the first deal on seat 0.
            dealer: Seat::new(config.seats as u8 - 1),
            hand_number: 0,
            game_over: false,
            rng: StdRng::seed_from_u64(seed),
            seed,
            config,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    pub fn hand_number(&self) -> u32 {
        self.hand_number
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn cumulative_scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    pub fn pile(&self, seat: Seat) -> &Pile {
        &self.piles[seat.index()]
    }

    /// Every seat at the maximum total. Meaningful once the game is over;
    /// ties are preserved, not broken.
    pub fn winners(&self) -> Vec<Seat> {
        self.scores.leaders()
    }

    /// Deal, bid, play out and score one hand, folding the result into the
    /// cumulative totals.
    pub fn play_hand(
        &mut self,
        players: &mut [Box<dyn Player>],
        sink: &mut dyn EventSink,
    ) -> Result<HandScores, GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }
        if players.len() != self.config.seats {
            return Err(GameError::PlayerCount {
                expected: self.config.seats,
                found: players.len(),
            });
        }

        self.dealer = self.dealer.next(self.config.seats);
        self.hand_number += 1;
        self.deal(players);
        sink.on_event(&GameEvent::HandDealt {
            hand_number: self.hand_number,
            dealer: self.dealer,
        });

        let mut hand_state = HandState::new(self.hand_number, self.config.seats, self.dealer);
        let outcome = run_auction(self.dealer, self.config.seats, &self.hands, players, sink);

        let scores = match outcome {
            BidOutcome::ForcedTwoSet { dealer, .. } => {
                two_set_scores(dealer, self.config.seats)
            }
            BidOutcome::Auction { bidder, bid, .. } => {
                hand_state.close_auction(bidder, bid);
                let trump = players[bidder.index()].name_trump(&self.hands[bidder.index()]);
                hand_state.reveal_trump(trump);
                sink.on_event(&GameEvent::TrumpRevealed { bidder, trump });

                while !self.hands_exhausted() {
                    self.play_trick(&mut hand_state, players, sink)?;
                }
                score_hand(&self.piles, trump, bid, bidder)
            }
        };

        sink.on_event(&GameEvent::HandScored {
            scores: scores.totals.clone(),
            bidder_set: scores.bidder_set,
        });
        self.scores.apply_hand(&scores.totals);

        if self.scores.reached(self.config.target_score) {
            self.game_over = true;
            sink.on_event(&GameEvent::GameOver {
                winners: self.winners(),
                standings: self.scores.standings().to_vec(),
            });
        }
        Ok(scores)
    }

    fn deal(&mut self, players: &mut [Box<dyn Player>]) {
        for hand in &mut self.hands {
            hand.clear();
        }
        for pile in &mut self.piles {
            pile.clear();
        }

        let mut deck = Deck::shuffled(&mut self.rng);
        // One card at a time around the table, the way the deal goes in
        // person.
        for _ in 0..self.config.cards_to_deal {
            for seat in Seat::all(self.config.seats) {
                let card = deck.deal(1)[0];
                self.hands[seat.index()].add(card);
            }
        }
        for seat in Seat::all(self.config.seats) {
            players[seat.index()].receive_cards(self.hands[seat.index()].cards());
        }
    }

    fn hands_exhausted(&self) -> bool {
        self.hands.iter().all(|hand| hand.is_empty())
    }

    fn play_trick(
        &mut self,
        hand_state: &mut HandState,
        players: &mut [Box<dyn Player>],
        sink: &mut dyn EventSink,
    ) -> Result<(), GameError> {
        let trump = hand_state.trump().expect("trump revealed before play");
        let mut trick = Trick::new(trump, self.config.seats);

        let mut seat = hand_state.first_player();
        for _ in 0..self.config.seats {
            let view = TrickView {
                trump,
                bid: hand_state.bid(),
                bidder: hand_state.bidder(),
                lead_suit: trick.lead_suit(),
                plays: trick.plays(),
                winning_card: trick.winning_card(),
            };
            let hand = &self.hands[seat.index()];
            let card = players[seat.index()]
                .play_card(&view, hand)
                .ok_or(GameError::InvalidPlay {
                    seat,
                    reason: InvalidPlay::MissingCard,
                })?;
            if !self.hands[seat.index()].remove(card) {
                return Err(GameError::InvalidPlay {
                    seat,
                    reason: InvalidPlay::CardNotHeld(card),
                });
            }
            trick.add_card(seat, card)?;
            seat = seat.next(self.config.seats);
        }

        let winner = trick.winner()?;
        let plays = trick.plays().to_vec();
        let cards = trick.collect();
        sink.on_event(&GameEvent::TrickResolved {
            winner,
            cards: cards.clone(),
        });
        self.piles[winner.index()].take_in(cards);
        for player in players.iter_mut() {
            player.receive_trick_result(winner, &plays);
        }
        hand_state.set_first_player(winner);
        Ok(())
    }
}
