use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::GameError;

/// Hand categories, ordinal 1 (weakest) through 10.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

/// Category plus tie-break ranks. `ranks` lists the ranks that form the
/// category first, then kickers high to low; unused slots are zero.
///
/// The derived ordering compares category, then `ranks` lexicographically,
/// which is exactly the order of [`HandStrength::value`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    pub ranks: [u8; 5],
}

impl HandStrength {
    /// Packs the category and the five tie-break slots into one integer.
    /// Every slot holds a rank below 16, so each gets its own nibble and
    /// distinct hands never collide.
    pub fn value(&self) -> u32 {
        self.ranks
            .iter()
            .fold(u32::from(self.category.ordinal()), |acc, &r| {
                (acc << 4) | u32::from(r)
            })
    }
}

/// Best five-card hand found in a set of 5 to 7 cards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandEvaluation {
    pub strength: HandStrength,
    pub best_five: [Card; 5],
    pub description: String,
}

impl HandEvaluation {
    pub fn category(&self) -> Category {
        self.strength.category
    }

    pub fn value(&self) -> u32 {
        self.strength.value()
    }
}

/// Evaluates 5, 6 or 7 distinct cards by trying every five-card subset.
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::hand::{evaluate, Category};
///
/// let cards = parse_cards("Kh Kd Ks 4c 4d 9s 2h").unwrap();
/// let eval = evaluate(&cards).unwrap();
/// assert_eq!(eval.category(), Category::FullHouse);
/// assert_eq!(eval.description, "Full House, Kings over Fours");
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandEvaluation, GameError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(GameError::InvalidHand {
            reason: format!("expected 5 to 7 cards, got {}", cards.len()),
        });
    }
    let unique: HashSet<&Card> = cards.iter().collect();
    if unique.len() != cards.len() {
        return Err(GameError::InvalidHand {
            reason: "duplicate cards".to_string(),
        });
    }

    let mut best: Option<([Card; 5], HandStrength)> = None;
    for five in five_card_subsets(cards) {
        let strength = evaluate_five(&five);
        if best.as_ref().is_none_or(|(_, b)| strength > *b) {
            best = Some((five, strength));
        }
    }
    let (best_five, strength) = best.ok_or_else(|| GameError::InvalidHand {
        reason: "no five-card subset".to_string(),
    })?;
    Ok(HandEvaluation {
        strength,
        best_five,
        description: describe(&strength),
    })
}

/// All C(n, 5) subsets in lexicographic index order.
pub fn five_card_subsets(cards: &[Card]) -> Vec<[Card; 5]> {
    let n = cards.len();
    let mut out = Vec::new();
    if n < 5 {
        return out;
    }
    let mut idx = [0usize, 1, 2, 3, 4];
    loop {
        out.push(idx.map(|i| cards[i]));
        // advance the rightmost index that still has room
        let Some(pos) = (0..5).rev().find(|&p| idx[p] < n - 5 + p) else {
            break;
        };
        idx[pos] += 1;
        for p in pos + 1..5 {
            idx[p] = idx[p - 1] + 1;
        }
    }
    out
}

/// Classifies exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> HandStrength {
    let mut values: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = straight_high(&values);

    if let Some(high) = straight_high {
        let category = match (flush, high) {
            (true, 14) => Category::RoyalFlush,
            (true, _) => Category::StraightFlush,
            (false, _) => Category::Straight,
        };
        return HandStrength {
            category,
            ranks: [high, 0, 0, 0, 0],
        };
    }

    // (count, rank) groups, largest group first, then higher rank
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for &v in &values {
        match groups.iter_mut().find(|(_, r)| *r == v) {
            Some(g) => g.0 += 1,
            None => groups.push((1, v)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let category = match (groups[0].0, groups.get(1).map(|g| g.0)) {
        (4, _) => Category::FourOfAKind,
        (3, Some(2)) => Category::FullHouse,
        _ if flush => Category::Flush,
        (3, _) => Category::ThreeOfAKind,
        (2, Some(2)) => Category::TwoPair,
        (2, _) => Category::OnePair,
        _ => Category::HighCard,
    };

    let mut ranks = [0u8; 5];
    if category == Category::Flush {
        ranks.copy_from_slice(&values);
    } else {
        for (slot, (_, r)) in ranks.iter_mut().zip(groups.iter()) {
            *slot = *r;
        }
    }
    HandStrength { category, ranks }
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    a.cmp(b)
}

/// Top card of a five-rank straight, 5 for the wheel. Expects ranks sorted
/// high to low.
fn straight_high(desc: &[u8]) -> Option<u8> {
    if desc.len() != 5 {
        return None;
    }
    if desc == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    let consecutive = desc.windows(2).all(|w| w[0] == w[1] + 1);
    consecutive.then_some(desc[0])
}

fn describe(s: &HandStrength) -> String {
    // Slot 0 is filled for every category, slot 1 for two pair and full house.
    let rank = |i: usize| Rank::from_u8(s.ranks[i]);
    match (s.category, rank(0), rank(1)) {
        (Category::HighCard, Some(a), _) => format!("High Card, {}", a.name()),
        (Category::OnePair, Some(a), _) => format!("Pair of {}", a.plural()),
        (Category::TwoPair, Some(a), Some(b)) => {
            format!("Two Pair, {} and {}", a.plural(), b.plural())
        }
        (Category::ThreeOfAKind, Some(a), _) => format!("Three of a Kind, {}", a.plural()),
        (Category::Straight, Some(a), _) => format!("Straight, {} High", a.name()),
        (Category::Flush, Some(a), _) => format!("Flush, {} High", a.name()),
        (Category::FullHouse, Some(a), Some(b)) => {
            format!("Full House, {} over {}", a.plural(), b.plural())
        }
        (Category::FourOfAKind, Some(a), _) => format!("Four of a Kind, {}", a.plural()),
        (Category::StraightFlush, Some(a), _) => format!("Straight Flush, {} High", a.name()),
        (category, ..) => category.name().to_string(),
    }
}
