use serde::{Deserialize, Serialize};

use crate::game::SEATS;

/// The single heads-up pot. Tracks what each seat put in so that
/// `total == contributions.iter().sum()` holds after every operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    total: u32,
    contributions: [u32; SEATS],
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn contribution(&self, seat: usize) -> u32 {
        self.contributions[seat]
    }

    pub fn add(&mut self, seat: usize, amount: u32) {
        self.contributions[seat] += amount;
        self.total += amount;
    }

    /// Removes an uncalled amount previously added by `seat`.
    pub fn refund(&mut self, seat: usize, amount: u32) -> u32 {
        let amount = amount.min(self.contributions[seat]);
        self.contributions[seat] -= amount;
        self.total -= amount;
        amount
    }

    /// Splits the whole pot between `winners` (seat indices). Each gets an
    /// equal share; the odd chips go to the first winner in seat order.
    /// Empties the pot.
    pub fn split(&mut self, winners: &[usize]) -> Vec<(usize, u32)> {
        if winners.is_empty() {
            return Vec::new();
        }
        let mut seats = winners.to_vec();
        seats.sort_unstable();
        seats.dedup();

        let n = seats.len() as u32;
        let share = self.total / n;
        let remainder = self.total % n;
        let payouts = seats
            .iter()
            .enumerate()
            .map(|(i, &seat)| (seat, if i == 0 { share + remainder } else { share }))
            .collect();
        *self = Pot::default();
        payouts
    }
}
