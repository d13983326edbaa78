use holdem_engine::errors::GameError;
use holdem_engine::player::PlayerAction as A;
use holdem_engine::rules::{validate_action, Blinds, ValidatedAction};

#[test]
fn check_while_owing_is_illegal() {
    let err = validate_action(1000, 0, 10, 10, A::Check).unwrap_err();
    assert!(matches!(err, GameError::IllegalAction { .. }));
}

#[test]
fn check_with_matched_bet_is_fine() {
    assert_eq!(
        validate_action(1000, 10, 10, 10, A::Check),
        Ok(ValidatedAction::Check)
    );
}

#[test]
fn call_with_nothing_owed_is_illegal() {
    assert!(validate_action(1000, 10, 10, 10, A::Call).is_err());
}

#[test]
fn call_with_insufficient_stack_is_allin_call() {
    let va = validate_action(60, 0, 100, 100, A::Call).unwrap();
    assert_eq!(va, ValidatedAction::AllIn(60));
}

#[test]
fn small_raise_is_lifted_to_minimum() {
    // facing 10 with 5 in: call 5 plus minimum raise 10
    let va = validate_action(1000, 5, 10, 10, A::Raise(1)).unwrap();
    assert_eq!(va, ValidatedAction::Raise(15));
}

#[test]
fn short_raise_becomes_allin_without_error() {
    let va = validate_action(130, 0, 100, 100, A::Raise(50)).unwrap();
    assert_eq!(va, ValidatedAction::AllIn(130));
}

#[test]
fn all_in_commits_whole_stack() {
    assert_eq!(
        validate_action(321, 0, 0, 10, A::AllIn),
        Ok(ValidatedAction::AllIn(321))
    );
}

#[test]
fn empty_stack_cannot_move_chips() {
    assert!(validate_action(0, 10, 10, 10, A::AllIn).is_err());
    assert!(validate_action(0, 10, 10, 10, A::Raise(10)).is_err());
    assert_eq!(
        validate_action(0, 10, 10, 10, A::Fold),
        Ok(ValidatedAction::Fold)
    );
}

#[test]
fn blinds_must_be_positive_and_ordered() {
    assert!(Blinds::new(5, 10).is_ok());
    assert!(matches!(Blinds::new(0, 10), Err(GameError::InvalidConfig(_))));
    assert!(Blinds::new(20, 10).is_err());
}
