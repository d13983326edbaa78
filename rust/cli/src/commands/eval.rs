//! Hand evaluation command: best five of 5 to 7 cards.

use crate::error::CliError;
use crate::formatters::format_board;
use crate::validation::parse_card_args;
use holdem_engine::hand::evaluate;
use std::io::Write;

/// Prints the category, description, best five cards and comparable value
/// of the cards in `args`, as text or as JSON.
pub fn handle_eval_command(args: &[String], json: bool, out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_card_args(args).map_err(CliError::InvalidInput)?;
    let eval = evaluate(&cards)?;

    if json {
        let display = serde_json::json!({
            "cards": cards.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "category": eval.category().name(),
            "description": eval.description,
            "best_five": eval.best_five.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "value": eval.value(),
        });
        let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
        return Ok(());
    }

    writeln!(out, "Cards: {}", format_board(&cards))?;
    writeln!(out, "Hand: {}", eval.description)?;
    writeln!(out, "Category: {}", eval.category().name())?;
    writeln!(out, "Best five: {}", format_board(&eval.best_five))?;
    writeln!(out, "Value: {:#08x}", eval.value())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn eval_text(text: &str, json: bool) -> Result<String, CliError> {
        let mut out = Vec::new();
        handle_eval_command(&args(text), json, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn royal_flush_text() {
        let text = eval_text("Ah Kh Qh Jh Th 2c 3d", false).unwrap();
        assert!(text.contains("Hand: Royal Flush"));
        assert!(text.contains("Category: Royal Flush"));
        assert!(text.contains("Value: 0xae"));
    }

    #[test]
    fn json_output() {
        let text = eval_text("Kh Kd Ks 4c 4d 9s 2h", true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["category"], "Full House");
        assert_eq!(v["description"], "Full House, Kings over Fours");
        assert_eq!(v["cards"].as_array().unwrap().len(), 7);
        assert_eq!(v["best_five"].as_array().unwrap().len(), 5);
        assert!(v["value"].as_u64().unwrap() > 0);
    }

    #[test]
    fn better_hand_has_larger_value() {
        let value = |text: &str| {
            let out = eval_text(text, true).unwrap();
            let v: serde_json::Value = serde_json::from_str(&out).unwrap();
            v["value"].as_u64().unwrap()
        };
        assert!(value("2c 2d 5h 9s Kd") > value("Ac Qd 9h 7s 3d"));
        assert!(value("Ac Ad Ah Ks Kd 2c") > value("2c 3c 4c 5c 7c"));
    }

    #[test]
    fn wrong_count_is_invalid_input() {
        assert!(matches!(
            eval_text("Ah Kh Qh", false),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn duplicate_cards_are_an_engine_error() {
        assert!(matches!(
            eval_text("Ah Ah Qh Jh Th", false),
            Err(CliError::Engine(_))
        ));
    }
}
