//! Read-only view of a table handed to callers (terminal UI, HTTP layers).
//!
//! A snapshot never leaks a hidden card: a hidden [`CardView`] carries no
//! card at all.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::{GameState, Stage};
use crate::player::{Player, PlayerKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub card: Option<Card>,
    pub hidden: bool,
}

impl CardView {
    fn shown(card: Card) -> Self {
        Self {
            card: Some(card),
            hidden: false,
        }
    }

    fn hidden() -> Self {
        Self {
            card: None,
            hidden: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSnapshot {
    pub seat: usize,
    pub name: String,
    pub kind: PlayerKind,
    pub stack: u32,
    pub bet: u32,
    pub committed: u32,
    pub folded: bool,
    pub all_in: bool,
    pub hole_cards: Vec<CardView>,
    /// Best-hand description once revealed at showdown
    pub hand: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerSnapshot {
    pub seat: usize,
    pub amount: u32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub hand_number: u64,
    pub stage: Stage,
    pub board: Vec<Card>,
    pub pot: u32,
    pub current_bet: u32,
    pub min_raise: u32,
    pub button: usize,
    pub to_act: Option<usize>,
    pub in_progress: bool,
    pub round_over: bool,
    pub seats: Vec<SeatSnapshot>,
    pub winners: Vec<WinnerSnapshot>,
    pub log: Vec<String>,
}

impl TableSnapshot {
    /// `viewer` sees its own hole cards. With no viewer, only AI seats are
    /// hidden. Revealed hands are visible to everyone.
    pub fn capture(state: &GameState, viewer: Option<usize>) -> Self {
        let seats = state
            .players()
            .iter()
            .map(|p| seat_view(p, viewer))
            .collect();
        let winners = state
            .winners()
            .iter()
            .map(|w| WinnerSnapshot {
                seat: w.seat,
                amount: w.amount,
                description: w.description().to_string(),
            })
            .collect();
        Self {
            hand_number: state.hand_number(),
            stage: state.stage(),
            board: state.board().to_vec(),
            pot: state.pot().total(),
            current_bet: state.current_bet(),
            min_raise: state.min_raise(),
            button: state.button_index(),
            to_act: state.to_act(),
            in_progress: state.is_hand_in_progress(),
            round_over: state.is_round_over(),
            seats,
            winners,
            log: state.log().lines().to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn seat_view(p: &Player, viewer: Option<usize>) -> SeatSnapshot {
    let hidden = !p.is_revealed()
        && match viewer {
            Some(v) => v != p.id(),
            None => p.kind() == PlayerKind::Ai,
        };
    let hole_cards = p
        .hole_cards()
        .iter()
        .map(|&c| if hidden { CardView::hidden() } else { CardView::shown(c) })
        .collect();
    SeatSnapshot {
        seat: p.id(),
        name: p.name().to_string(),
        kind: p.kind(),
        stack: p.stack(),
        bet: p.bet(),
        committed: p.committed(),
        folded: p.is_folded(),
        all_in: p.is_all_in(),
        hole_cards,
        hand: p.evaluation().map(|e| e.description.clone()),
    }
}
