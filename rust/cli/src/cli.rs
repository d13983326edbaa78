//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Heads-up Texas Hold'em against a computer opponent.
#[derive(Parser, Debug)]
#[command(name = "holdem", version, about = "Heads-up Texas Hold'em in the terminal")]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play against the AI; you sit in seat 0
    Play {
        /// Stop after this many hands (default: until someone busts or you quit)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        hands: Option<u32>,
        /// Seed for the deck and the AI's bluff noise
        #[arg(long)]
        seed: Option<u64>,
        /// Starting stack for both seats
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        stack: Option<u32>,
    },
    /// Let two AIs play each other
    Sim {
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
        hands: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Evaluate 5 to 7 cards, e.g. `holdem eval As Kd Qh Jc Ts`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
