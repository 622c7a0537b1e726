//! The Tron deck's play pattern: which card names fill which role, and the
//! fixed order in which the turn resolver tries actions.

use crate::card::{Card, CardDatabase, CardDatabaseError, CardId};

/// How a card is used by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Activate the ability of the card on the battlefield
    Ability,
    /// Cast the card from hand
    Cast,
    /// Play the card from hand as the turn's land
    Play,
}

/// One entry of the priority list, resolved to a card id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityEntry {
    pub card: CardId,
    pub kind: ActionKind,
}

/// Hand-authored action order, first entry wins
pub const PRIORITY: &[(&str, ActionKind)] = &[
    ("Expedition Map", ActionKind::Ability),
    ("Sylvan Scrying", ActionKind::Cast),
    ("Expedition Map", ActionKind::Cast),
    ("Ancient Stirrings", ActionKind::Cast),
    ("Once Upon a Time", ActionKind::Cast),
    ("Chromatic Star", ActionKind::Ability),
    ("Chromatic Sphere", ActionKind::Ability),
    ("Chromatic Star", ActionKind::Cast),
    ("Chromatic Sphere", ActionKind::Cast),
    ("Relic of Progenitus", ActionKind::Ability),
    ("Relic of Progenitus", ActionKind::Cast),
    ("Forest", ActionKind::Play),
    ("Ghost Quarter", ActionKind::Play),
    ("Sanctum of Ugin", ActionKind::Play),
    ("Urza's Tower", ActionKind::Play),
    ("Urza's Mine", ActionKind::Play),
    ("Urza's Power Plant", ActionKind::Play),
];

/// Cards the scry heuristic reasons about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckRoles {
    pub map: CardId,
    pub first_tutor: CardId,
    pub second_tutor: CardId,
    pub filters: [CardId; 2],
}

/// Priority list and roles with every name resolved against a card database
#[derive(Debug, Clone)]
pub struct Strategy {
    pub priority: Vec<PriorityEntry>,
    /// Cast for free on the first turn of the game
    pub free_spell: CardId,
    pub roles: DeckRoles,
}

impl Strategy {
    /// Look up every name and check each card's type fits how it is used
    pub fn resolve(db: &CardDatabase) -> Result<Self, CardDatabaseError> {
        let priority = PRIORITY
            .iter()
            .map(|(name, kind)| {
                let card = db.get_card(name)?;
                check_kind(&card, *kind)?;
                Ok(PriorityEntry {
                    card: card.id(),
                    kind: *kind,
                })
            })
            .collect::<Result<Vec<_>, CardDatabaseError>>()?;

        let free_spell = db.get_card("Once Upon a Time")?;
        check_kind(&free_spell, ActionKind::Cast)?;

        Ok(Strategy {
            priority,
            free_spell: free_spell.id(),
            roles: DeckRoles {
                map: db.id_of("Expedition Map")?,
                first_tutor: db.id_of("Sylvan Scrying")?,
                second_tutor: db.id_of("Ancient Stirrings")?,
                filters: [db.id_of("Chromatic Star")?, db.id_of("Chromatic Sphere")?],
            },
        })
    }
}

fn check_kind(card: &Card, kind: ActionKind) -> Result<(), CardDatabaseError> {
    let fits = match kind {
        ActionKind::Ability => card.ability().is_some(),
        ActionKind::Cast => !card.is_land(),
        ActionKind::Play => card.is_land(),
    };
    if fits {
        Ok(())
    } else {
        Err(CardDatabaseError::InvalidCard(format!(
            "{} cannot be used as {:?}",
            card.name(),
            kind
        )))
    }
}
