//! Card data as the engine sees it.
//!
//! A `Card` is immutable once received from the provider. Sessions only track
//! which card ids are still in play; they never edit card content.

use serde::{Deserialize, Serialize};

use crate::core::{CategoryId, LevelId};

/// Provider-assigned card identifier, unique within a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u64);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A prompt card.
///
/// ## Example
///
/// ```
/// use lovegame_deck::cards::{Card, CardId};
/// use lovegame_deck::core::{CategoryId, LevelId};
///
/// let card = Card::new(CardId::new(1), CategoryId::new(2), LevelId::new(1).unwrap(), "Sing a song");
/// assert_eq!(card.outcome().category, CategoryId::new(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub category: CategoryId,
    pub level: LevelId,
    pub description: String,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(
        id: CardId,
        category: CategoryId,
        level: LevelId,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            category,
            level,
            description: description.into(),
        }
    }

    /// The (category, level) pair recorded when this card is resolved.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome {
            category: self.category,
            level: self.level,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}/{}] {}",
            self.category.raw(),
            self.level.raw(),
            self.description
        )
    }
}

/// (category, level) of a resolved card. Display only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    pub category: CategoryId,
    pub level: LevelId,
}
