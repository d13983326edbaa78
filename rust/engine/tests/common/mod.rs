#![allow(dead_code)]

use holdem_engine::cards::{full_deck, parse_cards, Card};
use holdem_engine::deck::Deck;
use holdem_engine::engine::{Engine, TableConfig};

pub fn cards(text: &str) -> Vec<Card> {
    parse_cards(text).expect("valid card text")
}

/// Deck for the first hand of a fresh engine (button on seat 0, so seat 1
/// is dealt first). Burn cards come from the unused remainder.
pub fn rigged_deck(hole0: &str, hole1: &str, board: &str) -> Deck {
    let h0 = cards(hole0);
    let h1 = cards(hole1);
    let b = cards(board);
    assert_eq!(b.len(), 5, "board needs five cards");
    let used: Vec<Card> = h0.iter().chain(&h1).chain(&b).copied().collect();
    let mut rest: Vec<Card> = full_deck()
        .into_iter()
        .filter(|c| !used.contains(c))
        .collect();

    let mut order = vec![h1[0], h0[0], h1[1], h0[1]];
    order.push(rest.remove(0));
    order.extend_from_slice(&b[..3]);
    order.push(rest.remove(0));
    order.push(b[3]);
    order.push(rest.remove(0));
    order.push(b[4]);
    order.extend(rest);
    Deck::stacked(order).expect("52 unique cards")
}

pub fn rigged_engine(stacks: [u32; 2], hole0: &str, hole1: &str, board: &str) -> Engine {
    Engine::with_config(TableConfig::default(), stacks, rigged_deck(hole0, hole1, board))
        .expect("default config is valid")
}

pub fn seeded_engine(stacks: [u32; 2], seed: u64) -> Engine {
    Engine::with_config(TableConfig::default(), stacks, Deck::new_with_seed(seed))
        .expect("default config is valid")
}

pub fn total_chips(engine: &Engine) -> u64 {
    engine.state().chips_in_play()
}
