use crate::card::{Card, CardDatabase, CardDatabaseError};
use thiserror::Error;

/// Decklist shipped with the binary
const BUILTIN_DECK: &str = include_str!("../../deck.txt");

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid deck format at line {line}: {reason}")]
    InvalidFormat { line: usize, reason: String },
    #[error("Card database error: {0}")]
    DatabaseError(#[from] CardDatabaseError),
}

/// The built-in Mono-Green Tron list
pub fn builtin_deck(database: &CardDatabase) -> Result<Vec<Card>, DeckError> {
    parse_deck(BUILTIN_DECK, database)
}

/// Parse a deck file and return expanded list of cards
pub fn parse_deck_file(path: &str, database: &CardDatabase) -> Result<Vec<Card>, DeckError> {
    let content = std::fs::read_to_string(path)?;
    parse_deck(&content, database)
}

/// Format: "4 Card Name" per line, supports comments with # or //
pub fn parse_deck(content: &str, database: &CardDatabase) -> Result<Vec<Card>, DeckError> {
    let mut deck = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }

        let (count_str, card_name) = trimmed.split_once(' ').ok_or_else(|| DeckError::InvalidFormat {
            line: line_num + 1,
            reason: "Expected format: 'COUNT CARD_NAME'".to_string(),
        })?;

        let count: usize = count_str.parse().map_err(|_| DeckError::InvalidFormat {
            line: line_num + 1,
            reason: format!("'{}' is not a valid number", count_str),
        })?;

        let card = database.get_card(card_name.trim())?;
        deck.extend(std::iter::repeat(card).take(count));
    }

    Ok(deck)
}
