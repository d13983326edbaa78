//! Hand strength estimates on `[0, 1]`.
//!
//! Preflop strength comes from a lookup-free heuristic over the two hole
//! cards. Postflop strength places the best made hand inside the band its
//! category owns and discounts it by how many cards are still to come.

use holdem_engine::cards::Card;
use holdem_engine::errors::GameError;
use holdem_engine::game::Stage;
use holdem_engine::hand::evaluate;

use crate::policy::{PolicyConfig, PreflopWeights};

fn high_card_bonus(rank: u8, w: &PreflopWeights) -> f64 {
    match rank {
        14 => w.ace,
        13 => w.king,
        12 => w.queen,
        11 => w.jack,
        _ => 0.0,
    }
}

/// Scores two hole cards.
///
/// Pairs score from `base + pair_floor` (deuces) up to
/// `base + pair_floor + pair_span` (aces). Unpaired hands collect bonuses
/// for high cards, suitedness and connectedness. Nothing exceeds `cap`.
///
/// ```rust
/// use holdem_engine::cards::parse_cards;
/// use holdem_ai::policy::PreflopWeights;
/// use holdem_ai::strength::preflop_strength;
///
/// let aces = parse_cards("As Ah").unwrap();
/// let trash = parse_cards("7c 2d").unwrap();
/// let w = PreflopWeights::default();
/// assert!(preflop_strength([aces[0], aces[1]], &w) > 0.85);
/// assert!(preflop_strength([trash[0], trash[1]], &w) < 0.2);
/// ```
pub fn preflop_strength(hole: [Card; 2], w: &PreflopWeights) -> f64 {
    let (a, b) = (hole[0].rank.value(), hole[1].rank.value());
    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };

    let mut score = w.base;
    if hi == lo {
        score += w.pair_floor + w.pair_span * f64::from(hi - 2) / 12.0;
        return score.min(w.cap);
    }

    score += high_card_bonus(hi, w) + high_card_bonus(lo, w);
    let suited = hole[0].suit == hole[1].suit;
    if suited {
        score += w.suited;
    }
    let gap = hi - lo;
    match gap {
        1 => score += w.connected,
        2 => score += w.one_gap,
        _ => {}
    }
    if suited && gap <= 2 && hi >= 13 {
        score += w.premium;
    }
    score.min(w.cap)
}

/// Scores the best hand made from hole cards and a 3 to 5 card board,
/// before any street discount.
pub fn postflop_strength(hole: &[Card], board: &[Card], cfg: &PolicyConfig) -> Result<f64, GameError> {
    if !(3..=5).contains(&board.len()) {
        return Err(GameError::InvalidHand {
            reason: format!("board must hold 3 to 5 cards, got {}", board.len()),
        });
    }
    let mut cards = hole.to_vec();
    cards.extend_from_slice(board);
    let eval = evaluate(&cards)?;

    let k = usize::from(eval.category().ordinal());
    let (low, high) = (cfg.band_edges[k - 1], cfg.band_edges[k]);
    // deuce-high sits at the bottom of the band, ace-high near the top
    let top = f64::from(eval.strength.ranks[0].saturating_sub(2)) / 12.0;
    Ok(low + (high - low) * cfg.kicker_spread * top)
}

/// Discount applied to postflop strength on each street.
pub fn stage_confidence(stage: Stage, cfg: &PolicyConfig) -> f64 {
    match stage {
        Stage::Preflop => 1.0,
        Stage::Flop => cfg.flop_confidence,
        Stage::Turn => cfg.turn_confidence,
        Stage::River | Stage::Showdown => cfg.river_confidence,
    }
}

/// Strength of `hole` against `board` at `stage`, without bluff noise.
pub fn estimate(hole: [Card; 2], board: &[Card], stage: Stage, cfg: &PolicyConfig) -> Result<f64, GameError> {
    if board.is_empty() {
        return Ok(preflop_strength(hole, &cfg.preflop));
    }
    Ok(postflop_strength(&hole, board, cfg)? * stage_confidence(stage, cfg))
}
