//! # holdem-ai: computer opponents for the heads-up engine
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Decision interface the CLI drives
//! - [`rule_based`] - Strength estimate plus bluff noise mapped to an action
//! - [`strength`] - Preflop heuristic and postflop category bands
//! - [`policy`] - Thresholds and the strength-to-action mapping
//! - [`create_ai`] / [`create_ai_with`] - Factory by name
//! - [`play_ai_turns`] - Applies AI actions until another seat must act
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::{create_ai, play_ai_turns};
//! use holdem_engine::engine::Engine;
//!
//! let mut engine = Engine::new_game(1000, 1000).unwrap();
//! engine.start_hand().unwrap();
//!
//! let mut ai = create_ai("rule-based").unwrap();
//! let acted = play_ai_turns(&mut engine, ai.as_mut(), 0).unwrap();
//! // Seat 0 holds the button on the first hand and acts first
//! assert!(acted >= 1);
//! ```

use holdem_engine::engine::Engine;
use holdem_engine::errors::GameError;
use holdem_engine::player::PlayerAction;

pub mod policy;
pub mod rule_based;
pub mod strength;

/// A computer player. Implementations only read the engine; the caller
/// applies the returned action.
pub trait AIOpponent: Send {
    /// Next action for `seat`. Called only when `seat` is to act.
    fn get_action(&mut self, engine: &Engine, seat: usize) -> PlayerAction;

    fn name(&self) -> &str;
}

/// Opponent by name, or `None` for an unknown name.
///
/// ```rust
/// use holdem_ai::create_ai;
///
/// assert_eq!(create_ai("rule-based").unwrap().name(), "RuleBasedAI");
/// assert!(create_ai("oracle").is_none());
/// ```
pub fn create_ai(kind: &str) -> Option<Box<dyn AIOpponent>> {
    create_ai_with(kind, policy::PolicyConfig::default(), None)
}

/// Like [`create_ai`] with explicit tuning. A seed makes bluff noise
/// reproducible; without one it comes from the OS.
pub fn create_ai_with(
    kind: &str,
    config: policy::PolicyConfig,
    seed: Option<u64>,
) -> Option<Box<dyn AIOpponent>> {
    match kind {
        "rule-based" => Some(Box::new(rule_based::RuleBasedAI::with_config(config, seed))),
        _ => None,
    }
}

/// Names accepted by [`create_ai`].
pub fn available_ais() -> &'static [&'static str] {
    &["rule-based"]
}

/// Lets `ai` act for `seat` for as long as the engine waits on that seat.
/// Returns how many actions were applied.
pub fn play_ai_turns(
    engine: &mut Engine,
    ai: &mut dyn AIOpponent,
    seat: usize,
) -> Result<usize, GameError> {
    let mut applied = 0;
    while engine.is_hand_in_progress() && engine.current_player() == Some(seat) {
        let action = ai.get_action(engine, seat);
        tracing::debug!(seat, ?action, ai = ai.name(), "ai acts");
        engine.apply_action(seat, action)?;
        applied += 1;
    }
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::deck::Deck;
    use holdem_engine::engine::TableConfig;

    struct AlwaysCall;

    impl AIOpponent for AlwaysCall {
        fn get_action(&mut self, engine: &Engine, seat: usize) -> PlayerAction {
            if engine.to_call(seat) == 0 {
                PlayerAction::Check
            } else {
                PlayerAction::Call
            }
        }

        fn name(&self) -> &str {
            "AlwaysCall"
        }
    }

    fn seeded(seed: u64) -> Engine {
        Engine::with_config(TableConfig::default(), [1000, 1000], Deck::new_with_seed(seed))
            .unwrap()
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(create_ai("").is_none());
        for name in available_ais() {
            assert!(create_ai(name).is_some());
        }
    }

    #[test]
    fn driver_stops_when_the_other_seat_must_act() {
        let mut engine = seeded(9);
        engine.start_hand().unwrap();
        let mut ai = AlwaysCall;
        // the button completes the small blind, then the big blind has its option
        assert_eq!(play_ai_turns(&mut engine, &mut ai, 0).unwrap(), 1);
        assert_eq!(engine.current_player(), Some(1));
        assert_eq!(play_ai_turns(&mut engine, &mut ai, 0).unwrap(), 0);
    }

    #[test]
    fn two_passive_players_reach_showdown() {
        let mut engine = seeded(21);
        engine.start_hand().unwrap();
        let mut a = AlwaysCall;
        let mut b = AlwaysCall;
        while engine.is_hand_in_progress() {
            play_ai_turns(&mut engine, &mut a, 0).unwrap();
            play_ai_turns(&mut engine, &mut b, 1).unwrap();
        }
        assert_eq!(engine.board().len(), 5);
        let paid: u32 = engine.winners().iter().map(|w| w.amount).sum();
        assert_eq!(paid, 20);
    }

    #[test]
    fn rule_based_hands_conserve_chips() {
        let mut engine = seeded(4);
        let mut a = rule_based::RuleBasedAI::with_seed(1);
        let mut b = rule_based::RuleBasedAI::with_seed(2);
        for _ in 0..50 {
            if engine.players().iter().any(|p| p.stack() == 0) {
                break;
            }
            engine.start_hand().unwrap();
            while engine.is_hand_in_progress() {
                play_ai_turns(&mut engine, &mut a, 0).unwrap();
                play_ai_turns(&mut engine, &mut b, 1).unwrap();
            }
            let total: u32 = engine.players().iter().map(|p| p.stack()).sum();
            assert_eq!(total + engine.pot(), 2000);
        }
    }
}
