use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

#[derive(Debug)]
enum Order {
    Shuffled(ChaCha20Rng),
    /// Preset order restored on every shuffle; used for replays and tests.
    Stacked(Vec<Card>),
}

/// A 52-card deck. Drawn cards leave the deck until the next `shuffle`.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    order: Order,
}

impl Deck {
    /// Deck backed by a ChaCha20 stream seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(ChaCha20Rng::from_os_rng())
    }

    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha20Rng) -> Self {
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            order: Order::Shuffled(rng),
        }
    }

    /// Deck that deals `cards` top to bottom after every shuffle.
    pub fn stacked(cards: Vec<Card>) -> Result<Self, GameError> {
        if cards.len() != 52 {
            return Err(GameError::InvalidDeck(format!(
                "expected 52 cards, got {}",
                cards.len()
            )));
        }
        let unique: HashSet<&Card> = cards.iter().collect();
        if unique.len() != 52 {
            return Err(GameError::InvalidDeck("duplicate cards".to_string()));
        }
        Ok(Self {
            cards: cards.clone(),
            position: 0,
            order: Order::Stacked(cards),
        })
    }

    /// Rebuilds all 52 cards and permutes them with Fisher-Yates.
    pub fn shuffle(&mut self) {
        match &mut self.order {
            Order::Shuffled(rng) => {
                self.cards = full_deck();
                self.cards.shuffle(rng);
            }
            Order::Stacked(preset) => self.cards.clone_from(preset),
        }
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.deal_card().ok_or_else(|| {
            tracing::error!(position = self.position, "deck exhausted mid-hand");
            GameError::DeckExhausted
        })
    }

    pub fn burn(&mut self) -> Result<(), GameError> {
        self.draw().map(|_| ())
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
