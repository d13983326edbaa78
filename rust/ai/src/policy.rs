//! Tunable constants of the rule-based opponent and the mapping from an
//! effective strength to an action.

use holdem_engine::player::PlayerAction;

/// Weights for the preflop heuristic. Scores are summed and capped at
/// `cap`, which leaves the very top of `[0, 1]` unreachable preflop.
#[derive(Debug, Clone, PartialEq)]
pub struct PreflopWeights {
    pub base: f64,
    /// Pair of deuces
    pub pair_floor: f64,
    /// Extra for a pair of aces over a pair of deuces, linear in rank
    pub pair_span: f64,
    pub ace: f64,
    pub king: f64,
    pub queen: f64,
    pub jack: f64,
    pub suited: f64,
    pub connected: f64,
    /// One gap, e.g. J9
    pub one_gap: f64,
    /// Suited, at most one gap, ace or king high
    pub premium: f64,
    pub cap: f64,
}

impl Default for PreflopWeights {
    fn default() -> Self {
        Self {
            base: 0.1,
            pair_floor: 0.45,
            pair_span: 0.35,
            ace: 0.15,
            king: 0.1,
            queen: 0.07,
            jack: 0.05,
            suited: 0.06,
            connected: 0.06,
            one_gap: 0.03,
            premium: 0.1,
            cap: 0.95,
        }
    }
}

/// Full policy configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyConfig {
    pub preflop: PreflopWeights,
    /// Postflop band edges: category `k` (1-based) owns
    /// `[band_edges[k - 1], band_edges[k])`
    pub band_edges: [f64; 11],
    /// How far the top card moves a hand within its category band,
    /// as a fraction of the band
    pub kicker_spread: f64,
    pub flop_confidence: f64,
    pub turn_confidence: f64,
    pub river_confidence: f64,
    /// Bluff noise is drawn from `(0, bluff_max]`
    pub bluff_max: f64,

    // nothing owed
    pub open_pot_raise: f64,
    pub open_min_raise: f64,
    /// Fraction of the pot used per unit of strength for proportional raises
    pub pot_raise_factor: f64,

    // facing a bet
    pub big_raise: f64,
    pub small_raise: f64,
    pub call: f64,
    pub preflop_call: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            preflop: PreflopWeights::default(),
            band_edges: [
                0.0, 0.2, 0.45, 0.6, 0.7, 0.78, 0.85, 0.92, 0.97, 0.99, 1.0,
            ],
            kicker_spread: 0.9,
            flop_confidence: 0.85,
            turn_confidence: 0.9,
            river_confidence: 1.0,
            bluff_max: 0.08,
            open_pot_raise: 0.75,
            open_min_raise: 0.55,
            pot_raise_factor: 1.0,
            big_raise: 0.85,
            small_raise: 0.7,
            call: 0.45,
            preflop_call: 0.35,
        }
    }
}

impl PolicyConfig {
    /// Checks that stronger hands can only map to more aggressive actions.
    pub fn validate(&self) -> Result<(), String> {
        let in_unit = |name: &str, v: f64| {
            if (0.0..=1.0).contains(&v) {
                Ok(())
            } else {
                Err(format!("{name} must be within [0, 1], got {v}"))
            }
        };
        in_unit("bluff_max", self.bluff_max)?;
        in_unit("preflop cap", self.preflop.cap)?;
        in_unit("kicker_spread", self.kicker_spread)?;
        let bands_rise = self.band_edges.windows(2).all(|w| w[0] < w[1]);
        if !bands_rise || self.band_edges[0] < 0.0 || self.band_edges[10] > 1.0 {
            return Err("band edges must rise strictly within [0, 1]".to_string());
        }
        if self.bluff_max <= 0.0 {
            return Err("bluff_max must be positive".to_string());
        }
        if self.open_min_raise >= self.open_pot_raise {
            return Err("open_min_raise must be below open_pot_raise".to_string());
        }
        let ordered = self.preflop_call <= self.call
            && self.call < self.small_raise
            && self.small_raise < self.big_raise;
        if !ordered {
            return Err(
                "thresholds must satisfy preflop_call <= call < small_raise < big_raise"
                    .to_string(),
            );
        }
        let rising = self.flop_confidence <= self.turn_confidence
            && self.turn_confidence <= self.river_confidence;
        if !rising {
            return Err("confidence must not drop on later streets".to_string());
        }
        Ok(())
    }
}

/// Table facts a decision depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionContext {
    pub to_call: u32,
    pub pot: u32,
    pub min_raise: u32,
    pub stack: u32,
    pub preflop: bool,
}

/// Maps an effective strength to an action.
///
/// Raise amounts are increments over the current bet, as the engine expects.
pub fn choose_action(config: &PolicyConfig, strength: f64, ctx: &DecisionContext) -> PlayerAction {
    if ctx.stack == 0 {
        return PlayerAction::Check;
    }
    let min_raise = ctx.min_raise.max(1);

    if ctx.to_call == 0 {
        return if strength >= config.open_pot_raise {
            let sized = (f64::from(ctx.pot) * config.pot_raise_factor * strength).round() as u32;
            PlayerAction::Raise(sized.max(min_raise))
        } else if strength >= config.open_min_raise {
            PlayerAction::Raise(min_raise)
        } else {
            PlayerAction::Check
        };
    }

    let call_threshold = if ctx.preflop {
        config.preflop_call
    } else {
        config.call
    };
    if strength >= config.big_raise {
        PlayerAction::Raise(ctx.pot.max(min_raise))
    } else if strength >= config.small_raise {
        PlayerAction::Raise((ctx.pot / 2).max(min_raise))
    } else if strength >= call_threshold {
        PlayerAction::Call
    } else {
        PlayerAction::Fold
    }
}

/// Orders actions by how much pressure they apply: folding, then passive
/// play, then raises by size. Used to check the policy is monotone.
pub fn aggression(action: &PlayerAction) -> u64 {
    match action {
        PlayerAction::Fold => 0,
        PlayerAction::Check | PlayerAction::Call => 1,
        PlayerAction::Raise(n) => 2 + u64::from(*n),
        PlayerAction::AllIn => u64::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(to_call: u32, preflop: bool) -> DecisionContext {
        DecisionContext {
            to_call,
            pot: 100,
            min_raise: 10,
            stack: 1000,
            preflop,
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(PolicyConfig::default().validate(), Ok(()));
    }

    #[test]
    fn reordered_thresholds_are_rejected() {
        let cfg = PolicyConfig {
            call: 0.9,
            ..PolicyConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = PolicyConfig {
            flop_confidence: 1.0,
            turn_confidence: 0.5,
            ..PolicyConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn stronger_hands_are_never_less_aggressive() {
        let cfg = PolicyConfig::default();
        for c in [ctx(0, false), ctx(0, true), ctx(40, false), ctx(40, true)] {
            let mut last = 0;
            for step in 0..=110 {
                let strength = f64::from(step) / 100.0;
                let level = aggression(&choose_action(&cfg, strength, &c));
                assert!(level >= last, "strength {strength} in {c:?}");
                last = level;
            }
        }
    }

    #[test]
    fn shape_with_nothing_owed() {
        let cfg = PolicyConfig::default();
        assert_eq!(choose_action(&cfg, 0.2, &ctx(0, false)), PlayerAction::Check);
        assert_eq!(choose_action(&cfg, 0.6, &ctx(0, false)), PlayerAction::Raise(10));
        assert_eq!(choose_action(&cfg, 0.9, &ctx(0, false)), PlayerAction::Raise(90));
    }

    #[test]
    fn shape_facing_a_bet() {
        let cfg = PolicyConfig::default();
        assert_eq!(choose_action(&cfg, 0.2, &ctx(40, false)), PlayerAction::Fold);
        assert_eq!(choose_action(&cfg, 0.5, &ctx(40, false)), PlayerAction::Call);
        assert_eq!(choose_action(&cfg, 0.75, &ctx(40, false)), PlayerAction::Raise(50));
        assert_eq!(choose_action(&cfg, 0.95, &ctx(40, false)), PlayerAction::Raise(100));
    }

    #[test]
    fn preflop_calls_looser() {
        let cfg = PolicyConfig::default();
        assert_eq!(choose_action(&cfg, 0.4, &ctx(40, false)), PlayerAction::Fold);
        assert_eq!(choose_action(&cfg, 0.4, &ctx(40, true)), PlayerAction::Call);
    }

    #[test]
    fn empty_stack_checks() {
        let cfg = PolicyConfig::default();
        let c = DecisionContext {
            stack: 0,
            ..ctx(40, false)
        };
        assert_eq!(choose_action(&cfg, 1.0, &c), PlayerAction::Check);
    }
}
