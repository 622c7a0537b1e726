pub mod database;
pub mod types;

pub use database::{CardDatabase, CardDatabaseError};
pub use types::{
    ActivatedAbility, ArtifactCard, BaseCard, Card, CardId, Effect, LandCard, ManaCost, SpellCard,
    TronPiece,
};
