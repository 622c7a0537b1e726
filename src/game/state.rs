use crate::card::{Card, TronPiece};
use crate::game::mana::ManaPool;
use crate::game::zones::{Battlefield, Graveyard, Hand, Library, Permanent};
use crate::rng::GameRng;
use thiserror::Error;

/// Smallest and largest opening hand the simulator deals
pub const MIN_HAND_SIZE: usize = 3;
pub const MAX_HAND_SIZE: usize = 7;

/// Errors that abort a simulated game
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("library is empty, cannot draw on turn {turn}")]
    DeckExhausted { turn: u32 },
    #[error("hand size {0} is outside 3..=7")]
    InvalidHandSize(usize),
}

/// Complete game state
#[derive(Debug, Clone, Default)]
pub struct GameState {
    // Zones
    pub library: Library,
    pub hand: Hand,
    pub battlefield: Battlefield,
    pub graveyard: Graveyard,

    // Game info
    pub turn: u32,
    pub on_the_draw: bool,
    pub land_played_this_turn: bool,

    // Mana
    pub mana_pool: ManaPool,
}

impl GameState {
    pub fn new() -> Self {
        GameState::default()
    }

    /// Shuffle the deck into a library and draw an opening hand of `hand_size`
    pub fn new_game(
        deck: &[Card],
        hand_size: usize,
        on_the_draw: bool,
        rng: &mut GameRng,
    ) -> Result<Self, GameError> {
        if !(MIN_HAND_SIZE..=MAX_HAND_SIZE).contains(&hand_size) {
            return Err(GameError::InvalidHandSize(hand_size));
        }

        let mut library = Library::from_cards(deck.to_vec());
        library.shuffle(rng);
        Self::with_library(library, hand_size, on_the_draw)
    }

    /// Deal an opening hand from a library whose order is already fixed
    pub fn with_library(
        mut library: Library,
        hand_size: usize,
        on_the_draw: bool,
    ) -> Result<Self, GameError> {
        let opener = library
            .draw_opener(hand_size)
            .ok_or(GameError::DeckExhausted { turn: 0 })?;

        Ok(GameState {
            library,
            hand: Hand::from_cards(opener),
            on_the_draw,
            ..GameState::default()
        })
    }

    /// Draw a card from the library to hand
    pub fn draw_card(&mut self) -> Result<(), GameError> {
        let card = self
            .library
            .draw()
            .ok_or(GameError::DeckExhausted { turn: self.turn })?;
        self.hand.add_card(card);
        Ok(())
    }

    /// The turn's draw is skipped only on the first turn when on the play
    pub fn draws_this_turn(&self) -> bool {
        self.on_the_draw || self.turn != 0
    }

    /// Reset per-turn state and refill the mana pool from lands in play
    pub fn begin_turn(&mut self) {
        self.land_played_this_turn = false;
        self.mana_pool = ManaPool::from_battlefield(&self.battlefield);
    }

    /// Move a land from hand to battlefield and add its mana to the pool.
    /// None if there is no land at `card_index`.
    pub fn play_land(&mut self, card_index: usize) -> Option<&Card> {
        if !self.hand.cards().get(card_index)?.is_land() {
            return None;
        }
        let card = self.hand.remove_card(card_index)?;
        self.mana_pool.add_land(card.is_green_source());
        self.land_played_this_turn = true;
        self.battlefield.add_permanent(Permanent::new(card));
        self.battlefield.permanents().last().map(|p| &p.card)
    }

    /// Tron pieces not yet on the battlefield, in fetch order
    pub fn missing_tron(&self) -> impl Iterator<Item = TronPiece> + '_ {
        TronPiece::ALL
            .into_iter()
            .filter(|piece| !self.battlefield.contains_piece(*piece))
    }

    /// Tron pieces missing from both battlefield and hand
    pub fn unseen_tron(&self) -> impl Iterator<Item = TronPiece> + '_ {
        self.missing_tron()
            .filter(|piece| self.hand.position_of_piece(*piece).is_none())
    }

    pub fn land_count(&self) -> u32 {
        self.battlefield.land_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardDatabase;

    fn named(db: &CardDatabase, names: &[&str]) -> Vec<Card> {
        names.iter().map(|n| db.get_card(n).unwrap()).collect()
    }

    #[test]
    fn test_game_state_creation() {
        let state = GameState::new();
        assert_eq!(state.turn, 0);
        assert!(!state.land_played_this_turn);
        assert_eq!(state.mana_pool, ManaPool::new());
    }

    #[test]
    fn test_new_game_deals_opener() {
        let db = CardDatabase::builtin().unwrap();
        let deck: Vec<Card> = std::iter::repeat(db.get_card("Forest").unwrap())
            .take(20)
            .collect();
        let mut rng = GameRng::new(Some(7));

        let state = GameState::new_game(&deck, 5, true, &mut rng).expect("valid game");
        assert_eq!(state.hand.size(), 5);
        assert_eq!(state.library.size(), 15);
        assert!(state.on_the_draw);
    }

    #[test]
    fn test_new_game_rejects_bad_hand_size() {
        let db = CardDatabase::builtin().unwrap();
        let deck = named(&db, &["Forest"; 10]);
        let mut rng = GameRng::new(Some(7));

        assert_eq!(
            GameState::new_game(&deck, 2, false, &mut rng).unwrap_err(),
            GameError::InvalidHandSize(2)
        );
        assert_eq!(
            GameState::new_game(&deck, 8, false, &mut rng).unwrap_err(),
            GameError::InvalidHandSize(8)
        );
    }

    #[test]
    fn test_draw_card() {
        let db = CardDatabase::builtin().unwrap();
        let library = Library::from_cards(named(&db, &["Forest", "Urza's Mine"]));
        let mut state = GameState::with_library(library, 1, false).unwrap();

        assert!(state.draw_card().is_ok());
        assert_eq!(state.hand.size(), 2);
        state.turn = 4;
        assert_eq!(
            state.draw_card(),
            Err(GameError::DeckExhausted { turn: 4 })
        );
    }

    #[test]
    fn test_draws_this_turn() {
        let mut state = GameState::new();
        assert!(!state.draws_this_turn());
        state.turn = 1;
        assert!(state.draws_this_turn());
        state.turn = 0;
        state.on_the_draw = true;
        assert!(state.draws_this_turn());
    }

    #[test]
    fn test_play_land_adds_mana() {
        let db = CardDatabase::builtin().unwrap();
        let library = Library::from_cards(named(&db, &["Forest", "Urza's Tower"]));
        let mut state = GameState::with_library(library, 2, false).unwrap();
        state.begin_turn();

        let played = state.play_land(0).map(|c| c.name().to_string());
        assert_eq!(played.as_deref(), Some("Forest"));
        assert!(state.land_played_this_turn);
        assert_eq!(state.mana_pool, ManaPool { total: 1, green: 1 });

        state.begin_turn();
        assert!(!state.land_played_this_turn);
        assert_eq!(state.mana_pool, ManaPool { total: 1, green: 1 });
    }

    #[test]
    fn test_play_land_rejects_nonland() {
        let db = CardDatabase::builtin().unwrap();
        let library = Library::from_cards(named(&db, &["Chromatic Star"]));
        let mut state = GameState::with_library(library, 1, false).unwrap();
        state.begin_turn();

        assert!(state.play_land(0).is_none());
        assert!(state.play_land(3).is_none());
        assert!(!state.land_played_this_turn);
        assert_eq!(state.hand.size(), 1);
        assert_eq!(state.mana_pool, ManaPool::new());
    }

    #[test]
    fn test_missing_and_unseen_tron() {
        let db = CardDatabase::builtin().unwrap();
        let library = Library::from_cards(named(&db, &["Urza's Tower", "Urza's Mine"]));
        let mut state = GameState::with_library(library, 2, false).unwrap();
        state.play_land(0);

        let missing: Vec<_> = state.missing_tron().collect();
        assert_eq!(missing, vec![TronPiece::Mine, TronPiece::PowerPlant]);
        let unseen: Vec<_> = state.unseen_tron().collect();
        assert_eq!(unseen, vec![TronPiece::PowerPlant]);
    }
}
