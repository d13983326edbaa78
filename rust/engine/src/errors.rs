use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Illegal action: {reason}")]
    IllegalAction { reason: String },
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotYourTurn { expected: usize, actual: usize },
    #[error("No hand in progress")]
    HandNotInProgress,
    #[error("A hand is already in progress")]
    HandInProgress,
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Player {seat} has no chips left")]
    PlayerBusted { seat: usize },
    #[error("Invalid hand: {reason}")]
    InvalidHand { reason: String },
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    #[error("Invalid deck: {0}")]
    InvalidDeck(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    pub(crate) fn illegal(reason: impl Into<String>) -> Self {
        GameError::IllegalAction {
            reason: reason.into(),
        }
    }
}
