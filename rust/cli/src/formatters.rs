//! Card, board and action text for terminal display.
//!
//! Suits render as ♥ ♦ ♣ ♠ where the terminal is assumed to handle Unicode,
//! and as `h d c s` otherwise.
//!
//! ## Example
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use holdem_engine::cards::Card;
use holdem_engine::player::PlayerAction;
use holdem_engine::snapshot::CardView;

/// On Windows only modern terminals (Windows Terminal, VS Code and
/// friends) get symbols; elsewhere Unicode is assumed.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_card(card: &Card) -> String {
    let suit = if supports_unicode() {
        card.suit.symbol()
    } else {
        card.suit.letter()
    };
    format!("{}{}", card.rank.letter(), suit)
}

/// A hidden card renders as `??`.
pub fn format_card_view(view: &CardView) -> String {
    match view.card {
        Some(card) if !view.hidden => format_card(&card),
        _ => "??".to_string(),
    }
}

/// Cards in bracket notation, `[]` when empty.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

pub fn format_hole(cards: &[CardView]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card_view).collect();
    format!("[{}]", formatted.join(" "))
}

/// The action as the player would type it.
///
/// ```rust
/// use holdem_engine::player::PlayerAction;
/// use holdem_cli::formatters::format_action;
///
/// assert_eq!(format_action(&PlayerAction::Fold), "fold");
/// assert_eq!(format_action(&PlayerAction::Raise(40)), "raise 40");
/// assert_eq!(format_action(&PlayerAction::AllIn), "allin");
/// ```
pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Check => "check".to_string(),
        PlayerAction::Call => "call".to_string(),
        PlayerAction::Raise(amount) => format!("raise {}", amount),
        PlayerAction::AllIn => "allin".to_string(),
    }
}
