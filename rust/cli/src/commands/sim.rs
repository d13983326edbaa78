//! AI-versus-AI session.
//!
//! Both seats are driven by the configured AI over one continuous session:
//! stacks carry over and the session ends early once a seat is out of
//! chips. Prints one line per hand, then per-seat totals.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_board;
use holdem_ai::policy::PolicyConfig;
use holdem_ai::{AIOpponent, create_ai_with, play_ai_turns};
use holdem_engine::deck::Deck;
use holdem_engine::engine::{Engine, SeatConfig, TableConfig};
use holdem_engine::game::SEATS;
use holdem_engine::logger::ActionRecord;
use holdem_engine::player::{PlayerAction, PlayerKind};
use std::io::Write;

/// Per-seat tallies over the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SeatStats {
    hands_won: u32,
    folds: u32,
    checks: u32,
    calls: u32,
    raises: u32,
    all_ins: u32,
}

impl SeatStats {
    fn update_from_actions(&mut self, actions: &[ActionRecord], seat: usize) {
        for record in actions.iter().filter(|r| r.seat == seat) {
            match record.action {
                PlayerAction::Fold => self.folds += 1,
                PlayerAction::Check => self.checks += 1,
                PlayerAction::Call => self.calls += 1,
                PlayerAction::Raise(_) => self.raises += 1,
                PlayerAction::AllIn => self.all_ins += 1,
            }
        }
    }
}

/// Runs up to `hands` hands between two AIs.
///
/// With a seed, the deck and both AIs are seeded from it and the whole
/// session replays identically.
pub fn handle_sim_command(
    hands: u32,
    seed: Option<u64>,
    out: &mut dyn Write,
    _err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let resolved = config::load_with_sources()?.with_flags(seed, None)?;
    let cfg = resolved.config;

    let table = TableConfig {
        blinds: cfg.blinds(),
        seats: [
            SeatConfig {
                name: "AI-1".to_string(),
                kind: PlayerKind::Ai,
            },
            SeatConfig {
                name: "AI-2".to_string(),
                kind: PlayerKind::Ai,
            },
        ],
    };
    let deck = cfg.seed.map_or_else(Deck::new, Deck::new_with_seed);
    let mut engine = Engine::with_config(table, [cfg.starting_stack; SEATS], deck)?;

    let mut ais: Vec<Box<dyn AIOpponent>> = Vec::with_capacity(SEATS);
    for seat in 0..SEATS {
        let policy = PolicyConfig {
            bluff_max: cfg.bluff_max,
            ..PolicyConfig::default()
        };
        let ai_seed = cfg.seed.map(|s| s.wrapping_add(seat as u64 + 1));
        let ai = create_ai_with(&cfg.ai, policy, ai_seed)
            .ok_or_else(|| CliError::Config(format!("unknown ai {:?}", cfg.ai)))?;
        ais.push(ai);
    }

    writeln!(
        out,
        "sim: hands={} ai={} stack={} blinds={}/{}{}",
        hands,
        cfg.ai,
        cfg.starting_stack,
        cfg.small_blind,
        cfg.big_blind,
        cfg.seed.map(|s| format!(" seed={}", s)).unwrap_or_default()
    )?;

    let mut stats = vec![SeatStats::default(); SEATS];
    let mut played = 0u32;
    for _ in 0..hands {
        if engine.players().iter().any(|p| p.stack() == 0) {
            break;
        }
        engine.start_hand()?;
        while engine.is_hand_in_progress() {
            let Some(seat) = engine.current_player() else {
                break;
            };
            play_ai_turns(&mut engine, ais[seat].as_mut(), seat)?;
        }
        played += 1;

        for (seat, s) in stats.iter_mut().enumerate() {
            s.update_from_actions(engine.log().actions(), seat);
        }
        let results: Vec<String> = engine
            .winners()
            .iter()
            .map(|w| {
                stats[w.seat].hands_won += 1;
                format!(
                    "{} wins {} ({})",
                    engine.players()[w.seat].name(),
                    w.amount,
                    w.description()
                )
            })
            .collect();
        writeln!(
            out,
            "Hand #{} {}: {}",
            engine.state().hand_number(),
            format_board(engine.board()),
            results.join(", ")
        )?;
    }

    writeln!(out, "Hands played: {}", played)?;
    for (seat, p) in engine.players().iter().enumerate() {
        let s = &stats[seat];
        let delta = i64::from(p.stack()) - i64::from(cfg.starting_stack);
        writeln!(
            out,
            "{}: stack {} ({:+}) won {} | fold {} check {} call {} raise {} allin {}",
            p.name(),
            p.stack(),
            delta,
            s.hands_won,
            s.folds,
            s.checks,
            s.calls,
            s.raises,
            s.all_ins
        )?;
    }
    Ok(())
}
