//! Parsing of user input: actions typed during `play` and card lists
//! passed to `eval`.

use holdem_engine::cards::{Card, parse_cards};
use holdem_engine::player::PlayerAction;

/// Outcome of parsing one line typed at the action prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(PlayerAction),
    /// `q` or `quit`
    Quit,
    /// Unusable input, with a message for the player
    Invalid(String),
}

/// Parses an action typed at the prompt (case-insensitive).
///
/// Accepted forms: `fold`/`f`, `check`/`x`, `call`/`c`, `raise N`/`r N`,
/// `allin`/`all-in`, `q`/`quit`. `N` is the raise increment over the
/// current bet.
///
/// ```rust
/// use holdem_cli::validation::{parse_player_action, ParseResult};
/// use holdem_engine::player::PlayerAction;
///
/// assert_eq!(parse_player_action("fold"), ParseResult::Action(PlayerAction::Fold));
/// assert_eq!(parse_player_action("raise 40"), ParseResult::Action(PlayerAction::Raise(40)));
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
/// assert!(matches!(parse_player_action("bet"), ParseResult::Invalid(_)));
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&head) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match head {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "x" => ParseResult::Action(PlayerAction::Check),
        "call" | "c" => ParseResult::Action(PlayerAction::Call),
        "allin" | "all-in" => ParseResult::Action(PlayerAction::AllIn),
        "raise" | "r" => match parts.get(1).map(|n| n.parse::<u32>()) {
            None => ParseResult::Invalid("Raise requires an amount (e.g., 'raise 40')".to_string()),
            Some(Ok(amount)) if amount > 0 => ParseResult::Action(PlayerAction::Raise(amount)),
            Some(Ok(_)) => ParseResult::Invalid("Raise amount must be positive".to_string()),
            Some(Err(_)) => ParseResult::Invalid("Invalid raise amount".to_string()),
        },
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, raise <amount>, allin, q",
            head
        )),
    }
}

/// Joins `eval` arguments and parses them as cards. Accepts one card per
/// argument or several space-separated cards per argument.
pub fn parse_card_args(args: &[String]) -> Result<Vec<Card>, String> {
    let joined = args.join(" ");
    let cards = parse_cards(&joined).map_err(|e| e.to_string())?;
    if !(5..=7).contains(&cards.len()) {
        return Err(format!("expected 5 to 7 cards, got {}", cards.len()));
    }
    Ok(cards)
}
