mod common;

use common::{seeded_engine, total_chips};
use holdem_engine::deck::Deck;
use holdem_engine::engine::{Engine, TableConfig};
use holdem_engine::errors::GameError;
use holdem_engine::player::PlayerAction as A;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn contributions(engine: &Engine) -> u32 {
    engine.players().iter().map(|p| p.committed()).sum()
}

fn random_action(engine: &Engine, rng: &mut impl Rng) -> A {
    let seat = engine.current_player().unwrap();
    let owed = engine.to_call(seat);
    match rng.random_range(0..10) {
        0 => A::Fold,
        1 => A::AllIn,
        2..=4 => A::Raise(rng.random_range(1..=60)),
        _ if owed == 0 => A::Check,
        _ => A::Call,
    }
}

#[test]
fn pot_always_equals_contributions_and_chips_are_conserved() {
    let mut rng = StdRng::seed_from_u64(2024);
    for seed in 0..40u64 {
        let mut engine = seeded_engine([300, 500], seed);
        for _ in 0..30 {
            if engine.start_hand().is_err() {
                break;
            }
            let stacks_before: Vec<i64> =
                engine.players().iter().map(|p| i64::from(p.stack() + p.committed())).collect();
            while engine.is_hand_in_progress() {
                assert_eq!(engine.pot(), contributions(&engine));
                assert_eq!(engine.state().pot().contribution(0), engine.players()[0].committed());
                assert_eq!(total_chips(&engine), 800);
                let seat = engine.current_player().unwrap();
                let action = random_action(&engine, &mut rng);
                engine.apply_action(seat, action).unwrap();
            }
            assert_eq!(engine.pot(), 0);
            assert_eq!(total_chips(&engine), 800);
            let delta: i64 = engine
                .players()
                .iter()
                .zip(&stacks_before)
                .map(|(p, before)| i64::from(p.stack()) - before)
                .sum();
            assert_eq!(delta, 0, "chip deltas must be zero-sum");
            let paid: u32 = engine.winners().iter().map(|w| w.amount).sum();
            assert!(paid > 0);
        }
    }
}

#[test]
fn pot_grows_by_each_call() {
    let mut engine = seeded_engine([1000, 1000], 17);
    engine.start_hand().unwrap();
    assert_eq!(engine.pot(), 15);
    engine.apply_action(0, A::Call).unwrap();
    assert_eq!(engine.pot(), 20);
    engine.apply_action(1, A::Raise(40)).unwrap();
    assert_eq!(engine.pot(), 60);
    engine.apply_action(0, A::Call).unwrap();
    assert_eq!(engine.pot(), 100);
    assert_eq!(engine.pot(), contributions(&engine));
}

#[test]
fn stacks_that_overflow_the_pot_are_rejected() {
    let result = Engine::with_config(
        TableConfig::default(),
        [3_000_000_000, 3_000_000_000],
        Deck::new_with_seed(1),
    );
    assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    assert!(matches!(
        Engine::new_game(u32::MAX, 1),
        Err(GameError::InvalidConfig(_))
    ));
}

#[test]
fn all_in_at_the_largest_table_settles_without_overflow() {
    let big = u32::MAX / 2;
    let mut engine = seeded_engine([big, big + 1], 5);
    assert_eq!(total_chips(&engine), u64::from(u32::MAX));

    engine.start_hand().unwrap();
    engine.apply_action(0, A::AllIn).unwrap();
    engine.apply_action(1, A::Call).unwrap();

    assert!(!engine.is_hand_in_progress());
    assert_eq!(engine.pot(), 0);
    assert_eq!(total_chips(&engine), u64::from(u32::MAX));
}
