use crate::cards::Card;
use crate::hand::HandEvaluation;
use serde::{Deserialize, Serialize};

/// Who is making decisions for a seat.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Ai,
}

/// Represents a player action during a betting round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid when nothing is owed)
    Check,
    /// Match the current bet
    Call,
    /// Raise by the given increment over the current bet
    Raise(u32),
    /// Commit every remaining chip
    AllIn,
}

/// A seat at the table: chip stack, per-hand betting state and hole cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    id: usize,
    name: String,
    kind: PlayerKind,
    stack: u32,
    /// Chips put in during the current betting stage
    bet: u32,
    /// Chips put in during the whole hand
    committed: u32,
    folded: bool,
    acted: bool,
    revealed: bool,
    hole: Vec<Card>,
    evaluation: Option<HandEvaluation>,
}

impl Player {
    pub fn new(id: usize, name: impl Into<String>, kind: PlayerKind, stack: u32) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            stack,
            bet: 0,
            committed: 0,
            folded: false,
            acted: false,
            revealed: false,
            hole: Vec::with_capacity(2),
            evaluation: None,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn bet(&self) -> u32 {
        self.bet
    }
    pub fn committed(&self) -> u32 {
        self.committed
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn has_acted(&self) -> bool {
        self.acted
    }
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }
    pub fn evaluation(&self) -> Option<&HandEvaluation> {
        self.evaluation.as_ref()
    }

    /// Still contesting the pot.
    pub fn is_active(&self) -> bool {
        !self.folded
    }

    /// In the hand with nothing left to bet.
    pub fn is_all_in(&self) -> bool {
        !self.folded && self.stack == 0 && self.committed > 0
    }

    /// Active and still holding chips, so it may be asked to act.
    pub fn can_act(&self) -> bool {
        !self.folded && self.stack > 0
    }

    /// Amount still owed to match `current_bet`.
    pub fn to_call(&self, current_bet: u32) -> u32 {
        current_bet.saturating_sub(self.bet)
    }

    /// Clears everything tied to the previous hand; the stack is kept.
    pub fn reset_for_hand(&mut self) {
        self.bet = 0;
        self.committed = 0;
        self.folded = false;
        self.acted = false;
        self.revealed = false;
        self.hole.clear();
        self.evaluation = None;
    }

    pub fn reset_for_stage(&mut self) {
        self.bet = 0;
        self.acted = false;
    }

    pub fn give_card(&mut self, c: Card) {
        self.hole.push(c);
    }

    /// Moves up to `amount` chips from the stack into the current bet and
    /// returns what was actually moved.
    pub fn commit(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        self.bet += paid;
        self.committed += paid;
        paid
    }

    /// Takes back part of the current bet that nobody matched.
    pub fn refund(&mut self, amount: u32) {
        let amount = amount.min(self.bet);
        self.bet -= amount;
        self.committed -= amount;
        self.stack += amount;
    }

    /// Table totals are bounded by `u32::MAX` at construction, so a payout
    /// always fits.
    pub fn add_chips(&mut self, amount: u32) {
        self.stack += amount;
    }

    pub fn fold(&mut self) {
        self.folded = true;
        self.acted = true;
    }

    pub fn mark_acted(&mut self) {
        self.acted = true;
    }

    /// Another player raised; this player must respond again.
    pub fn reopen_action(&mut self) {
        self.acted = false;
    }

    pub fn reveal(&mut self, evaluation: Option<HandEvaluation>) {
        self.revealed = true;
        self.evaluation = evaluation;
    }
}
