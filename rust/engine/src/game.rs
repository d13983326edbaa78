use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::hand::HandEvaluation;
use crate::logger::ActionLog;
use crate::player::Player;
use crate::pot::Pot;
use crate::rules::Blinds;

/// Seats at a heads-up table.
pub const SEATS: usize = 2;

/// Betting stage of a hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Hole cards dealt, no board
    Preflop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
    /// Hands revealed and compared
    Showdown,
}

impl Stage {
    pub fn next(self) -> Stage {
        match self {
            Stage::Preflop => Stage::Flop,
            Stage::Flop => Stage::Turn,
            Stage::Turn => Stage::River,
            Stage::River | Stage::Showdown => Stage::Showdown,
        }
    }

    /// Community cards dealt when entering this stage.
    pub fn cards_dealt(self) -> usize {
        match self {
            Stage::Flop => 3,
            Stage::Turn | Stage::River => 1,
            Stage::Preflop | Stage::Showdown => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::Preflop => "preflop",
            Stage::Flop => "flop",
            Stage::Turn => "turn",
            Stage::River => "river",
            Stage::Showdown => "showdown",
        }
    }
}

/// A share of the pot paid out at the end of a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Winner {
    pub seat: usize,
    pub amount: u32,
    /// Present when the pot was decided at showdown
    pub hand: Option<HandEvaluation>,
}

impl Winner {
    pub fn description(&self) -> &str {
        self.hand
            .as_ref()
            .map_or("opponent folded", |h| h.description.as_str())
    }
}

/// Everything the engine owns about the table. Mutated only through
/// [`crate::engine::Engine`]; stacks persist across hands.
#[derive(Debug)]
pub struct GameState {
    pub(crate) deck: Deck,
    pub(crate) players: [Player; SEATS],
    pub(crate) board: Vec<Card>,
    pub(crate) stage: Stage,
    pub(crate) to_act: Option<usize>,
    pub(crate) button: usize,
    pub(crate) current_bet: u32,
    pub(crate) min_raise: u32,
    pub(crate) pot: Pot,
    pub(crate) blinds: Blinds,
    pub(crate) winners: Vec<Winner>,
    pub(crate) in_progress: bool,
    pub(crate) round_over: bool,
    pub(crate) hand_number: u64,
    pub(crate) log: ActionLog,
}

impl GameState {
    pub fn new(players: [Player; SEATS], blinds: Blinds, deck: Deck) -> Self {
        Self {
            deck,
            players,
            board: Vec::with_capacity(5),
            stage: Stage::Preflop,
            to_act: None,
            // the first rotation puts the button on seat 0
            button: SEATS - 1,
            current_bet: 0,
            min_raise: blinds.big,
            pot: Pot::new(),
            blinds,
            winners: Vec::new(),
            in_progress: false,
            round_over: false,
            hand_number: 0,
            log: ActionLog::new(),
        }
    }

    pub fn players(&self) -> &[Player; SEATS] {
        &self.players
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn to_act(&self) -> Option<usize> {
        self.to_act
    }
    pub fn button_index(&self) -> usize {
        self.button
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn min_raise(&self) -> u32 {
        self.min_raise
    }
    pub fn pot(&self) -> &Pot {
        &self.pot
    }
    pub fn blinds(&self) -> Blinds {
        self.blinds
    }
    pub fn winners(&self) -> &[Winner] {
        &self.winners
    }
    pub fn is_hand_in_progress(&self) -> bool {
        self.in_progress
    }
    pub fn is_round_over(&self) -> bool {
        self.round_over
    }
    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }
    pub fn log(&self) -> &ActionLog {
        &self.log
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Seat after `seat` in clockwise order.
    pub fn next_seat(&self, seat: usize) -> usize {
        (seat + 1) % SEATS
    }

    pub fn rotate_button(&mut self) {
        self.button = self.next_seat(self.button);
    }

    /// Heads-up: the button posts the small blind.
    pub fn small_blind_seat(&self) -> usize {
        self.button
    }

    pub fn big_blind_seat(&self) -> usize {
        self.next_seat(self.button)
    }

    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// Sum of every chip on the table, in stacks or in the pot.
    pub fn chips_in_play(&self) -> u64 {
        self.players
            .iter()
            .map(|p| u64::from(p.stack()))
            .sum::<u64>()
            + u64::from(self.pot.total())
    }
}
