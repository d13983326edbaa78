use serde::{Deserialize, Serialize};

use crate::game::Stage;
use crate::player::PlayerAction;

/// Records a single player action during a hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat index (0 or 1)
    pub seat: usize,
    /// The betting stage when this action occurred
    pub stage: Stage,
    /// The action as submitted by the player
    pub action: PlayerAction,
}

/// Append-only, human-readable account of the session plus structured
/// records of the actions taken in the current hand.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionLog {
    lines: Vec<String>,
    actions: Vec<ActionRecord>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn record(&mut self, record: ActionRecord) {
        self.actions.push(record);
    }

    /// Drops the structured records of the previous hand; lines are kept.
    pub fn start_hand(&mut self) {
        self.actions.clear();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }
}
