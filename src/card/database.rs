use crate::card::types::{Card, CardId};
use std::collections::HashMap;
use thiserror::Error;

/// Catalog shipped with the binary
const BUILTIN_CARDS: &str = include_str!("../../cards.json");

#[derive(Error, Debug)]
pub enum CardDatabaseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Card not found: {0}")]
    CardNotFound(String),
    #[error("Invalid card data: {0}")]
    InvalidCard(String),
}

/// Card database that loads cards from JSON and interns their names
pub struct CardDatabase {
    cards: Vec<Card>,
    by_name: HashMap<String, CardId>,
}

impl CardDatabase {
    /// Load the compiled-in catalog
    pub fn builtin() -> Result<Self, CardDatabaseError> {
        Self::from_json(BUILTIN_CARDS)
    }

    /// Load cards from a JSON file
    pub fn from_file(path: &str) -> Result<Self, CardDatabaseError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, CardDatabaseError> {
        let cards_vec: Vec<Card> = serde_json::from_str(content)?;

        let mut cards = Vec::with_capacity(cards_vec.len());
        let mut by_name = HashMap::new();
        for mut card in cards_vec {
            let id = u16::try_from(cards.len())
                .map(CardId)
                .map_err(|_| CardDatabaseError::InvalidCard("too many cards".to_string()))?;
            if by_name.contains_key(card.name()) {
                return Err(CardDatabaseError::InvalidCard(format!(
                    "duplicate card name: {}",
                    card.name()
                )));
            }
            card.base_mut().id = id;
            by_name.insert(card.name().to_string(), id);
            cards.push(card);
        }

        let db = CardDatabase { cards, by_name };
        db.validate()?;
        Ok(db)
    }

    /// Get a card by name
    pub fn get_card(&self, name: &str) -> Result<Card, CardDatabaseError> {
        self.id_of(name).map(|id| self.cards[id.0 as usize].clone())
    }

    /// Look up the interned id of a card name
    pub fn id_of(&self, name: &str) -> Result<CardId, CardDatabaseError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| CardDatabaseError::CardNotFound(name.to_string()))
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.0 as usize)
    }

    /// Get all card names
    pub fn card_names(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.name()).collect()
    }

    /// Get total number of cards
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Every Tron piece needs exactly one land in the catalog
    pub fn validate(&self) -> Result<(), CardDatabaseError> {
        if self.cards.is_empty() {
            return Err(CardDatabaseError::InvalidCard(
                "No cards loaded".to_string(),
            ));
        }
        for piece in crate::card::TronPiece::ALL {
            let count = self
                .cards
                .iter()
                .filter(|c| c.tron_piece() == Some(piece))
                .count();
            if count != 1 {
                return Err(CardDatabaseError::InvalidCard(format!(
                    "expected one land for {}, found {}",
                    piece.card_name(),
                    count
                )));
            }
        }
        Ok(())
    }
}
