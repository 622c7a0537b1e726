use serde::{Deserialize, Serialize};

/// Interned card identity, assigned by the card database at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct CardId(pub u16);

/// The three Urza lands that make up Tron
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TronPiece {
    Tower,
    Mine,
    PowerPlant,
}

impl TronPiece {
    /// All pieces, in the order missing lands are fetched and played
    pub const ALL: [TronPiece; 3] = [TronPiece::Tower, TronPiece::Mine, TronPiece::PowerPlant];

    pub fn card_name(&self) -> &'static str {
        match self {
            TronPiece::Tower => "Urza's Tower",
            TronPiece::Mine => "Urza's Mine",
            TronPiece::PowerPlant => "Urza's Power Plant",
        }
    }
}

/// Mana cost for a card. Green is paid from green sources only, generic from anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaCost {
    #[serde(default)]
    pub generic: u32,
    #[serde(default)]
    pub green: u32,
}

impl ManaCost {
    pub const FREE: ManaCost = ManaCost { generic: 0, green: 0 };

    pub fn generic(amount: u32) -> Self {
        ManaCost { generic: amount, green: 0 }
    }

    pub fn total_value(&self) -> u32 {
        self.generic + self.green
    }
}

/// What a card does when it resolves or when its ability is activated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    #[default]
    None,
    /// Search the library for a Tron land not yet on the battlefield and put it in hand
    TutorTronLand,
    /// Look at the top `depth` cards, take one land (or colorless card) and bottom the rest
    DigForLand {
        depth: usize,
        #[serde(default)]
        colorless_only: bool,
    },
    /// Draw cards
    Draw { count: u32 },
}

/// An activated ability of an artifact. Activating sacrifices the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivatedAbility {
    pub cost: u32,
    #[serde(default)]
    pub effect: Effect,
    /// Adds one floating mana of the green class
    #[serde(default)]
    pub adds_green: bool,
}

/// Base card properties
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseCard {
    pub name: String,
    #[serde(default)]
    pub mana_cost: ManaCost,
    #[serde(skip)]
    pub id: CardId,
}

/// Land card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandCard {
    #[serde(flatten)]
    pub base: BaseCard,
    #[serde(default)]
    pub produces_green: bool,
    #[serde(default)]
    pub tron: Option<TronPiece>,
}

/// Sorcery or planeswalker; resolves once and goes to the graveyard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellCard {
    #[serde(flatten)]
    pub base: BaseCard,
    #[serde(default)]
    pub colorless: bool,
    #[serde(default)]
    pub on_cast: Effect,
}

/// Artifact; stays on the battlefield until its ability sacrifices it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactCard {
    #[serde(flatten)]
    pub base: BaseCard,
    #[serde(default)]
    pub ability: Option<ActivatedAbility>,
}

/// Unified card enum
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "card_type", rename_all = "lowercase")]
pub enum Card {
    Land(LandCard),
    Spell(SpellCard),
    Artifact(ArtifactCard),
}

impl Card {
    pub fn base(&self) -> &BaseCard {
        match self {
            Card::Land(c) => &c.base,
            Card::Spell(c) => &c.base,
            Card::Artifact(c) => &c.base,
        }
    }

    pub(crate) fn base_mut(&mut self) -> &mut BaseCard {
        match self {
            Card::Land(c) => &mut c.base,
            Card::Spell(c) => &mut c.base,
            Card::Artifact(c) => &mut c.base,
        }
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn id(&self) -> CardId {
        self.base().id
    }

    pub fn mana_cost(&self) -> ManaCost {
        self.base().mana_cost
    }

    pub fn is_land(&self) -> bool {
        matches!(self, Card::Land(_))
    }

    pub fn tron_piece(&self) -> Option<TronPiece> {
        match self {
            Card::Land(land) => land.tron,
            _ => None,
        }
    }

    /// Lands and artifacts are colorless, spells only when flagged
    pub fn is_colorless(&self) -> bool {
        match self {
            Card::Land(_) | Card::Artifact(_) => true,
            Card::Spell(spell) => spell.colorless,
        }
    }

    /// Can this card produce green mana once in play
    pub fn is_green_source(&self) -> bool {
        match self {
            Card::Land(land) => land.produces_green,
            Card::Artifact(artifact) => artifact.ability.is_some_and(|a| a.adds_green),
            Card::Spell(_) => false,
        }
    }

    pub fn ability(&self) -> Option<&ActivatedAbility> {
        match self {
            Card::Artifact(artifact) => artifact.ability.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tron_land() {
        let card: Card = serde_json::from_str(
            r#"{"card_type": "land", "name": "Urza's Mine", "tron": "mine"}"#,
        )
        .expect("valid land");
        assert_eq!(card.tron_piece(), Some(TronPiece::Mine));
        assert!(card.is_land());
        assert!(!card.is_green_source());
        assert_eq!(card.mana_cost(), ManaCost::FREE);
    }

    #[test]
    fn test_deserialize_filter_artifact() {
        let card: Card = serde_json::from_str(
            r#"{
                "card_type": "artifact",
                "name": "Chromatic Star",
                "mana_cost": {"generic": 1},
                "ability": {"cost": 1, "adds_green": true, "effect": {"kind": "draw", "count": 1}}
            }"#,
        )
        .expect("valid artifact");
        assert!(card.is_green_source());
        assert!(card.is_colorless());
        let ability = card.ability().expect("has ability");
        assert_eq!(ability.cost, 1);
        assert_eq!(ability.effect, Effect::Draw { count: 1 });
    }

    #[test]
    fn test_spell_effect_defaults_to_none() {
        let card: Card = serde_json::from_str(
            r#"{"card_type": "spell", "name": "Karn Liberated", "mana_cost": {"generic": 7}, "colorless": true}"#,
        )
        .expect("valid spell");
        match card {
            Card::Spell(spell) => assert_eq!(spell.on_cast, Effect::None),
            _ => panic!("expected a spell"),
        }
    }

    #[test]
    fn test_tron_piece_names_are_distinct() {
        let names: Vec<_> = TronPiece::ALL.iter().map(|p| p.card_name()).collect();
        assert_eq!(names, vec!["Urza's Tower", "Urza's Mine", "Urza's Power Plant"]);
    }
}
