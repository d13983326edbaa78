/// Property-based tests for hand evaluation and shuffling.
use std::collections::HashSet;

use holdem_engine::cards::{full_deck, Card};
use holdem_engine::deck::Deck;
use holdem_engine::hand::{evaluate, evaluate_five, five_card_subsets};
use proptest::prelude::*;

// n distinct cards picked from the canonical deck
fn unique_cards_strategy(n: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(full_deck()).prop_shuffle().prop_map(move |d| d[..n].to_vec())
}

proptest! {
    #[test]
    fn best_five_is_a_subset_and_maximal(cards in unique_cards_strategy(7)) {
        let eval = evaluate(&cards).unwrap();
        for c in &eval.best_five {
            prop_assert!(cards.contains(c), "best five must come from the input");
        }
        let distinct: HashSet<&Card> = eval.best_five.iter().collect();
        prop_assert_eq!(distinct.len(), 5);
        for five in five_card_subsets(&cards) {
            prop_assert!(eval.value() >= evaluate_five(&five).value());
        }
        prop_assert_eq!(evaluate_five(&eval.best_five), eval.strength);
    }

    #[test]
    fn value_order_matches_strength_order(a in unique_cards_strategy(5), b in unique_cards_strategy(5)) {
        let a = evaluate(&a).unwrap();
        let b = evaluate(&b).unwrap();
        prop_assert_eq!(a.value().cmp(&b.value()), a.strength.cmp(&b.strength));
    }

    #[test]
    fn six_card_hands_evaluate(cards in unique_cards_strategy(6)) {
        let eval = evaluate(&cards).unwrap();
        prop_assert!(!eval.description.is_empty());
        prop_assert_eq!(evaluate(&cards).unwrap(), eval);
    }

    #[test]
    fn shuffled_deck_is_a_permutation(seed in any::<u64>()) {
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        let drawn: Vec<Card> = (0..52).map(|_| deck.draw().unwrap()).collect();
        let set: HashSet<Card> = drawn.iter().copied().collect();
        prop_assert_eq!(set.len(), 52);
        prop_assert!(deck.draw().is_err());
    }
}
