pub mod cards;
pub mod mana;
pub mod state;
pub mod turns;
pub mod zones;

pub use mana::ManaPool;
pub use state::{GameError, GameState};
pub use turns::{resolve_turn, tron_assembled, TurnOutcome};
pub use zones::{Battlefield, Graveyard, Hand, Library, Permanent};
