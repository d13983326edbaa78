//! # holdem-engine: heads-up Texas Hold'em core
//!
//! Deals, runs betting rounds and settles pots for one human against one
//! AI seat. Stacks persist across hands; each [`engine::Engine`] is one
//! isolated game.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text parsing
//! - [`deck`] - ChaCha20-backed shuffling and drawing
//! - [`hand`] - Best-of-21 hand evaluation and comparable hand values
//! - [`engine`] - Betting state machine: blinds, actions, streets, showdown
//! - [`game`] - Table state, stages and seat rotation
//! - [`player`] - Seat state, actions and chip movement
//! - [`pot`] - Single-pot accounting and split payouts
//! - [`rules`] - Blinds and action validation
//! - [`logger`] - Human-readable action log
//! - [`snapshot`] - Serializable view for callers
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::{evaluate, Category};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let best = evaluate(&cards).unwrap();
//! assert_eq!(best.category(), Category::RoyalFlush);
//! ```
//!
//! ## Playing a hand
//!
//! ```rust
//! use holdem_engine::engine::Engine;
//! use holdem_engine::errors::GameError;
//! use holdem_engine::player::PlayerAction;
//!
//! let mut engine = Engine::new_game(1000, 1000).unwrap();
//! engine.start_hand().unwrap();
//!
//! // Seat 1 is the big blind and is not first to act preflop
//! let err = engine.apply_action(1, PlayerAction::Check).unwrap_err();
//! assert!(matches!(err, GameError::NotYourTurn { expected: 0, actual: 1 }));
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
pub mod snapshot;
