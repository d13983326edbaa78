//! Rule-based opponent: estimate strength, add a little bluff noise, map
//! the result through [`crate::policy::choose_action`].

use holdem_engine::engine::Engine;
use holdem_engine::game::Stage;
use holdem_engine::player::PlayerAction;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::AIOpponent;
use crate::policy::{DecisionContext, PolicyConfig, choose_action};
use crate::strength::estimate;

/// Default opponent.
///
/// ```rust
/// use holdem_ai::AIOpponent;
/// use holdem_ai::rule_based::RuleBasedAI;
/// use holdem_engine::engine::Engine;
///
/// let mut engine = Engine::new_game(1000, 1000).unwrap();
/// engine.start_hand().unwrap();
///
/// let mut ai = RuleBasedAI::with_seed(7);
/// let seat = engine.current_player().unwrap();
/// let action = ai.get_action(&engine, seat);
/// assert!(engine.legal_actions(seat).iter().any(|a| {
///     std::mem::discriminant(a) == std::mem::discriminant(&action)
/// }));
/// ```
#[derive(Debug, Clone)]
pub struct RuleBasedAI {
    config: PolicyConfig,
    rng: ChaCha20Rng,
}

impl RuleBasedAI {
    /// Bluff noise drawn from an OS-seeded generator.
    pub fn new() -> Self {
        Self::with_config(PolicyConfig::default(), None)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(PolicyConfig::default(), Some(seed))
    }

    pub fn with_config(config: PolicyConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha20Rng::seed_from_u64(s),
            None => ChaCha20Rng::from_os_rng(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Strength of `seat`'s holding at the current stage, before bluff
    /// noise. `None` when the seat has no hole cards.
    pub fn estimate_strength(&self, engine: &Engine, seat: usize) -> Option<f64> {
        let player = engine.players().get(seat)?;
        let hole: [_; 2] = player.hole_cards().try_into().ok()?;
        estimate(hole, engine.board(), engine.stage(), &self.config).ok()
    }

    /// Noise in `(0, bluff_max]`.
    fn bluff(&mut self) -> f64 {
        self.config.bluff_max * (1.0 - self.rng.random::<f64>())
    }
}

impl Default for RuleBasedAI {
    fn default() -> Self {
        Self::new()
    }
}

impl AIOpponent for RuleBasedAI {
    fn get_action(&mut self, engine: &Engine, seat: usize) -> PlayerAction {
        let to_call = engine.to_call(seat);
        let Some(base) = self.estimate_strength(engine, seat) else {
            return if to_call == 0 {
                PlayerAction::Check
            } else {
                PlayerAction::Fold
            };
        };
        let bluff = self.bluff();
        let strength = (base + bluff).min(1.0);

        let ctx = DecisionContext {
            to_call,
            pot: engine.pot(),
            min_raise: engine.min_raise(),
            stack: engine.players().get(seat).map_or(0, |p| p.stack()),
            preflop: engine.stage() == Stage::Preflop,
        };
        let action = choose_action(&self.config, strength, &ctx);
        tracing::trace!(seat, base, bluff, ?ctx, ?action, "ai decision");
        action
    }

    fn name(&self) -> &str {
        "RuleBasedAI"
    }
}
