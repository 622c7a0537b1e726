pub mod deck;
pub mod engine;
pub mod mulligan;
pub mod stats;
pub mod strategy;

pub use deck::{builtin_deck, parse_deck_file, DeckError};
pub use engine::{estimate_turns, run_game, GameResult, SimulationConfig};
pub use mulligan::{vancouver_scry, ScryDecision};
pub use stats::TrialSummary;
pub use strategy::Strategy;
