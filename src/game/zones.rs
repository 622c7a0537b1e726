use crate::card::{Card, CardId, TronPiece};

/// A permanent on the battlefield
#[derive(Debug, Clone)]
pub struct Permanent {
    pub card: Card,
}

impl Permanent {
    pub fn new(card: Card) -> Self {
        Permanent { card }
    }
}

/// Library (deck) - ordered stack of cards, index 0 is the top
#[derive(Debug, Clone, Default)]
pub struct Library {
    cards: Vec<Card>,
}

impl Library {
    pub fn new() -> Self {
        Library { cards: Vec::new() }
    }

    /// Build a library whose order is exactly `cards`, top first
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Library { cards }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Peek at the top card without removing it
    pub fn peek_top(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn draw(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Remove the top `n` cards as an opening hand. None if the library is too small.
    pub fn draw_opener(&mut self, n: usize) -> Option<Vec<Card>> {
        if n > self.cards.len() {
            return None;
        }
        Some(self.cards.drain(0..n).collect())
    }

    /// Move the top card to the bottom
    pub fn scry_bottom(&mut self) {
        if let Some(card) = self.draw() {
            self.cards.push(card);
        }
    }

    /// Remove up to `n` cards from the top, in order
    pub fn take_top(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        self.cards.drain(0..n).collect()
    }

    /// Put cards on the bottom, keeping their relative order
    pub fn put_bottom(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove the first card (from the top) matching `pred`
    pub fn take_first<F>(&mut self, pred: F) -> Option<Card>
    where
        F: Fn(&Card) -> bool,
    {
        let index = self.cards.iter().position(pred)?;
        Some(self.cards.remove(index))
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn shuffle(&mut self, rng: &mut crate::rng::GameRng) {
        rng.shuffle(&mut self.cards);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Hand - cards in hand, in the order they arrived
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Hand { cards }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn remove_card(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    /// Index of the first copy of a card
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.position(id).is_some()
    }

    pub fn position_of_piece(&self, piece: TronPiece) -> Option<usize> {
        self.cards.iter().position(|c| c.tron_piece() == Some(piece))
    }

    pub fn count_lands(&self) -> usize {
        self.cards.iter().filter(|c| c.is_land()).count()
    }

    pub fn has_green_source(&self) -> bool {
        self.cards.iter().any(|c| c.is_green_source())
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Graveyard - resolved spells and sacrificed artifacts
#[derive(Debug, Clone, Default)]
pub struct Graveyard {
    cards: Vec<Card>,
}

impl Graveyard {
    pub fn new() -> Self {
        Graveyard { cards: Vec::new() }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Battlefield - permanents in play
#[derive(Debug, Clone, Default)]
pub struct Battlefield {
    permanents: Vec<Permanent>,
}

impl Battlefield {
    pub fn new() -> Self {
        Battlefield {
            permanents: Vec::new(),
        }
    }

    pub fn add_permanent(&mut self, permanent: Permanent) {
        self.permanents.push(permanent);
    }

    pub fn remove_permanent(&mut self, index: usize) -> Option<Permanent> {
        if index < self.permanents.len() {
            Some(self.permanents.remove(index))
        } else {
            None
        }
    }

    pub fn position(&self, id: CardId) -> Option<usize> {
        self.permanents.iter().position(|p| p.card.id() == id)
    }

    pub fn contains_piece(&self, piece: TronPiece) -> bool {
        self.permanents
            .iter()
            .any(|p| p.card.tron_piece() == Some(piece))
    }

    pub fn land_count(&self) -> u32 {
        self.permanents.iter().filter(|p| p.card.is_land()).count() as u32
    }

    pub fn green_land_count(&self) -> u32 {
        self.permanents
            .iter()
            .filter(|p| matches!(&p.card, Card::Land(land) if land.produces_green))
            .count() as u32
    }

    pub fn size(&self) -> usize {
        self.permanents.len()
    }

    pub fn permanents(&self) -> &[Permanent] {
        &self.permanents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardDatabase;

    fn cards(db: &CardDatabase, names: &[&str]) -> Vec<Card> {
        names
            .iter()
            .map(|n| db.get_card(n).expect("card should exist"))
            .collect()
    }

    #[test]
    fn test_draw_opener_takes_top_cards() {
        let db = CardDatabase::builtin().unwrap();
        let mut library = Library::from_cards(cards(
            &db,
            &["Forest", "Urza's Mine", "Expedition Map", "Karn Liberated"],
        ));

        let opener = library.draw_opener(3).expect("enough cards");
        let names: Vec<_> = opener.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Forest", "Urza's Mine", "Expedition Map"]);
        assert_eq!(library.size(), 1);
        assert!(library.draw_opener(2).is_none());
    }

    #[test]
    fn test_scry_bottom_moves_top_to_bottom() {
        let db = CardDatabase::builtin().unwrap();
        let mut library = Library::from_cards(cards(&db, &["Forest", "Urza's Mine", "Karn Liberated"]));

        library.scry_bottom();
        let names: Vec<_> = library.cards().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Urza's Mine", "Karn Liberated", "Forest"]);
    }

    #[test]
    fn test_take_first_searches_from_top() {
        let db = CardDatabase::builtin().unwrap();
        let mut library = Library::from_cards(cards(&db, &["Karn Liberated", "Forest", "Forest"]));

        let land = library.take_first(|c| c.is_land()).expect("a land");
        assert_eq!(land.name(), "Forest");
        assert_eq!(library.size(), 2);
        assert_eq!(library.peek_top().map(|c| c.name()), Some("Karn Liberated"));
    }

    #[test]
    fn test_draw_from_empty_library() {
        let mut library = Library::new();
        assert!(library.draw().is_none());
        library.scry_bottom();
        assert!(library.is_empty());
    }

    #[test]
    fn test_hand_queries() {
        let db = CardDatabase::builtin().unwrap();
        let hand = Hand::from_cards(cards(&db, &["Karn Liberated", "Chromatic Star", "Urza's Tower"]));

        assert_eq!(hand.count_lands(), 1);
        assert!(hand.has_green_source());
        assert_eq!(hand.position_of_piece(TronPiece::Tower), Some(2));
        assert_eq!(hand.position_of_piece(TronPiece::Mine), None);
        assert!(hand.contains(db.id_of("Karn Liberated").unwrap()));
    }

    #[test]
    fn test_battlefield_land_counts() {
        let db = CardDatabase::builtin().unwrap();
        let mut battlefield = Battlefield::new();
        for card in cards(&db, &["Forest", "Urza's Mine", "Expedition Map"]) {
            battlefield.add_permanent(Permanent::new(card));
        }

        assert_eq!(battlefield.land_count(), 2);
        assert_eq!(battlefield.green_land_count(), 1);
        assert!(battlefield.contains_piece(TronPiece::Mine));
        assert!(!battlefield.contains_piece(TronPiece::Tower));
    }
}
