use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// Forced bets posted at the start of every hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blinds {
    pub small: u32,
    pub big: u32,
}

impl Blinds {
    pub fn new(small: u32, big: u32) -> Result<Self, GameError> {
        let blinds = Self { small, big };
        blinds.validate()?;
        Ok(blinds)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.small == 0 {
            return Err(GameError::InvalidConfig(
                "small blind must be positive".to_string(),
            ));
        }
        if self.small > self.big {
            return Err(GameError::InvalidConfig(format!(
                "small blind {} exceeds big blind {}",
                self.small, self.big
            )));
        }
        Ok(())
    }
}

impl Default for Blinds {
    fn default() -> Self {
        Self { small: 5, big: 10 }
    }
}

/// An action resolved against the acting player's stack. Amounts are the
/// chips that leave the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Raise(u32),
    AllIn(u32),
}

/// Resolves a [`crate::player::PlayerAction`] for a player holding `stack`
/// chips who has already put `bet` into the current stage.
///
/// Short stacks never cause an error: a call or raise the player cannot
/// afford becomes `AllIn`. Raises below `min_raise` are lifted to it.
///
/// # Errors
///
/// [`GameError::IllegalAction`] for a check while a call is owed, a call
/// with nothing owed, or any chip-moving action from an empty stack.
///
/// # Examples
///
/// ```
/// use holdem_engine::rules::{validate_action, ValidatedAction};
/// use holdem_engine::player::PlayerAction;
///
/// // 10 already in, facing 40: a call costs 30
/// let result = validate_action(1000, 10, 40, 30, PlayerAction::Call);
/// assert_eq!(result, Ok(ValidatedAction::Call(30)));
///
/// // Raise by 5 is lifted to the 30 minimum: total 70, costing 60
/// let result = validate_action(1000, 10, 40, 30, PlayerAction::Raise(5));
/// assert_eq!(result, Ok(ValidatedAction::Raise(60)));
///
/// // Not enough behind for the raise: all-in instead
/// let result = validate_action(50, 10, 40, 30, PlayerAction::Raise(100));
/// assert_eq!(result, Ok(ValidatedAction::AllIn(50)));
/// ```
pub fn validate_action(
    stack: u32,
    bet: u32,
    current_bet: u32,
    min_raise: u32,
    action: A,
) -> Result<ValidatedAction, GameError> {
    let to_call = current_bet.saturating_sub(bet);
    if stack == 0 && !matches!(action, A::Fold | A::Check) {
        return Err(GameError::illegal("no chips left to bet"));
    }
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::illegal(format!(
                    "cannot check, {} to call",
                    to_call
                )))
            }
        }
        A::Call => {
            if to_call == 0 {
                Err(GameError::illegal("nothing to call"))
            } else if stack <= to_call {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Raise(amount) => {
            let amount = amount.max(min_raise).max(1);
            let cost = to_call.saturating_add(amount);
            if cost >= stack {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Raise(cost))
            }
        }
        A::AllIn => Ok(ValidatedAction::AllIn(stack)),
    }
}
