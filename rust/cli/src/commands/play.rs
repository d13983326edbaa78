//! # Play Command
//!
//! Interactive heads-up poker: the human sits in seat 0 and types actions,
//! the configured AI plays seat 1. Stacks carry over between hands. The
//! session ends after `--hands` hands, when a seat is out of chips, or when
//! the player types `q` (EOF counts as `q`).

use crate::config;
use crate::error::CliError;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};
use holdem_ai::policy::PolicyConfig;
use holdem_ai::{AIOpponent, create_ai_with, play_ai_turns};
use holdem_engine::deck::Deck;
use holdem_engine::engine::{Engine, TableConfig};
use holdem_engine::game::SEATS;
use std::io::{BufRead, Write};

const HUMAN_SEAT: usize = 0;

enum HandOutcome {
    Finished,
    Quit,
}

/// Handle the play command.
///
/// `hands: None` plays until someone busts or the player quits. `seed`
/// and `stack` override the configured values.
pub fn handle_play_command(
    hands: Option<u32>,
    seed: Option<u64>,
    stack: Option<u32>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if hands == Some(0) {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let cfg = config::load_with_sources()?.with_flags(seed, stack)?.config;

    let table = TableConfig {
        blinds: cfg.blinds(),
        ..TableConfig::default()
    };
    let deck = cfg.seed.map_or_else(Deck::new, Deck::new_with_seed);
    let mut engine = Engine::with_config(table, [cfg.starting_stack; SEATS], deck)?;

    let policy = PolicyConfig {
        bluff_max: cfg.bluff_max,
        ..PolicyConfig::default()
    };
    let mut ai = create_ai_with(&cfg.ai, policy, cfg.seed.map(|s| s.wrapping_add(1)))
        .ok_or_else(|| CliError::Config(format!("unknown ai {:?}", cfg.ai)))?;

    writeln!(
        out,
        "play: hands={} stack={} blinds={}/{} ai={}{}",
        hands.map_or_else(|| "unlimited".to_string(), |n| n.to_string()),
        cfg.starting_stack,
        cfg.small_blind,
        cfg.big_blind,
        cfg.ai,
        cfg.seed.map(|s| format!(" seed={}", s)).unwrap_or_default()
    )?;

    let mut printed = 0usize;
    let mut played = 0u32;
    loop {
        if hands.is_some_and(|n| played >= n) {
            break;
        }
        if let Some(busted) = engine.players().iter().find(|p| p.stack() == 0) {
            writeln!(out, "{} is out of chips.", busted.name())?;
            break;
        }

        engine.start_hand()?;
        let outcome = play_hand(&mut engine, ai.as_mut(), &mut printed, out, err, stdin)?;
        flush_log(&engine, &mut printed, out)?;
        if let HandOutcome::Quit = outcome {
            writeln!(out, "Hand abandoned.")?;
            break;
        }

        played += 1;
        let table = engine.snapshot(Some(HUMAN_SEAT));
        ui::render_table(out, &table)?;
        ui::render_result(out, &table)?;
    }

    writeln!(out, "Hands played: {}", played)?;
    let stacks: Vec<String> = engine
        .players()
        .iter()
        .map(|p| format!("{} {}", p.name(), p.stack()))
        .collect();
    writeln!(out, "Final stacks: {}", stacks.join(", "))?;
    Ok(())
}

/// Alternates between the prompt and the AI until the hand is over.
fn play_hand(
    engine: &mut Engine,
    ai: &mut dyn AIOpponent,
    printed: &mut usize,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<HandOutcome, CliError> {
    while engine.is_hand_in_progress() {
        flush_log(engine, printed, out)?;
        match engine.current_player() {
            Some(HUMAN_SEAT) => {
                ui::render_table(out, &engine.snapshot(Some(HUMAN_SEAT)))?;
                writeln!(
                    out,
                    "To call: {}  Min raise: {}",
                    engine.to_call(HUMAN_SEAT),
                    engine.min_raise()
                )?;
                write!(out, "Your action (fold/check/call/raise N/allin/q): ")?;
                out.flush()?;

                let Some(line) = read_stdin_line(stdin) else {
                    writeln!(out)?;
                    return Ok(HandOutcome::Quit);
                };
                match parse_player_action(&line) {
                    ParseResult::Action(action) => {
                        if let Err(e) = engine.apply_action(HUMAN_SEAT, action) {
                            ui::write_error(err, &format!("Invalid action: {}", e))?;
                        }
                    }
                    ParseResult::Quit => return Ok(HandOutcome::Quit),
                    ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
                }
            }
            Some(seat) => {
                play_ai_turns(engine, ai, seat)?;
            }
            None => break,
        }
    }
    Ok(HandOutcome::Finished)
}

/// Writes engine log lines not yet shown.
fn flush_log(engine: &Engine, printed: &mut usize, out: &mut dyn Write) -> Result<(), CliError> {
    let lines = engine.log().lines();
    for line in lines.iter().skip(*printed) {
        writeln!(out, "{}", line)?;
    }
    *printed = lines.len();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Cursor;

    fn play(hands: Option<u32>, seed: Option<u64>, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes());
        let result = handle_play_command(hands, seed, None, &mut out, &mut err, &mut stdin);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn final_total(out: &str) -> u32 {
        let line = out
            .lines()
            .find_map(|l| l.strip_prefix("Final stacks: "))
            .unwrap();
        line.split(", ")
            .map(|s| s.rsplit(' ').next().unwrap().parse::<u32>().unwrap())
            .sum()
    }

    #[test]
    #[serial]
    fn quit_at_the_first_prompt() {
        let (result, out, _) = play(Some(1), Some(42), "q\n");
        assert!(result.is_ok());
        assert!(out.contains("Hand #1: Player has the button"));
        assert!(out.contains("Your action"));
        assert!(out.contains("Hand abandoned."));
        assert!(out.contains("Hands played: 0"));
    }

    #[test]
    #[serial]
    fn eof_ends_the_session() {
        let (result, out, _) = play(None, Some(42), "");
        assert!(result.is_ok());
        assert!(out.contains("Hands played: 0"));
    }

    #[test]
    #[serial]
    fn bad_input_reprompts() {
        let (result, out, err) = play(Some(1), Some(1), "bogus\ncheck\nfold\n");
        assert!(result.is_ok());
        assert!(err.contains("Unrecognized action 'bogus'"));
        assert!(err.contains("Invalid action"));
        assert!(out.contains("Player folds"));
        assert!(out.contains("AI wins 15 (opponent folded)"));
        assert!(out.contains("Hands played: 1"));
        assert_eq!(final_total(&out), 2000);
    }

    #[test]
    #[serial]
    fn folding_every_hand_keeps_chips_balanced() {
        let (result, out, _) = play(Some(3), Some(9), "fold\nfold\nfold\n");
        assert!(result.is_ok());
        assert!(out.contains("Hands played: 3"));
        assert!(out.contains("Hand #3"));
        assert_eq!(final_total(&out), 2000);
    }

    #[test]
    #[serial]
    fn opponent_cards_stay_hidden_while_deciding() {
        let (_, out, _) = play(Some(1), Some(5), "q\n");
        let prompt_table = out.split("Your action").next().unwrap();
        assert!(prompt_table.contains("AI: [?? ??]"));
    }

    #[test]
    fn zero_hands_is_invalid() {
        let (result, _, _) = play(Some(0), None, "");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
