//! Ordered, id-indexed card list for one deck.
//!
//! `CardList` keeps the cards in the order the provider returned them and
//! offers O(1) lookup by `CardId`. Duplicate ids are rejected at construction.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardId};
use crate::core::{CategoryId, LevelId};
use crate::error::SetupError;

/// Immutable card list with id lookup.
///
/// ## Example
///
/// ```
/// use lovegame_deck::cards::{Card, CardId, CardList};
/// use lovegame_deck::core::{CategoryId, LevelId};
///
/// let level = LevelId::new(1).unwrap();
/// let list = CardList::new(vec![
///     Card::new(CardId::new(10), CategoryId::new(1), level, "A"),
///     Card::new(CardId::new(20), CategoryId::new(2), level, "B"),
/// ]).unwrap();
///
/// assert_eq!(list.get(CardId::new(20)).unwrap().description, "B");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardList {
    cards: Vec<Card>,
    index: FxHashMap<CardId, usize>,
}

impl CardList {
    /// Build a list, rejecting duplicate ids.
    pub fn new(cards: Vec<Card>) -> Result<Self, SetupError> {
        let mut index = FxHashMap::default();
        index.reserve(cards.len());
        for (i, card) in cards.iter().enumerate() {
            if index.insert(card.id, i).is_some() {
                return Err(SetupError::DuplicateCard(card.id));
            }
        }
        Ok(Self { cards, index })
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.index.get(&id).map(|&i| &self.cards[i])
    }

    /// Check if a card ID is in the list.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in provider order.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over cards in provider order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Card ids in provider order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().map(|c| c.id)
    }

    /// Find cards in a category.
    pub fn find_by_category(&self, category: CategoryId) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.category == category)
    }

    /// Find cards at a level.
    pub fn find_by_level(&self, level: LevelId) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.level == level)
    }
}
